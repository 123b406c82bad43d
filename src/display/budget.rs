//! Budget and cycle display formatting

use chrono::Datelike;

use crate::config::Settings;
use crate::models::{Budget, CycleBounds};
use crate::services::CycleReport;

use super::report::format_money;

/// Format the active budget
pub fn format_budget_details(budget: &Budget, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget:      {}\n", budget.id));
    output.push_str(&format!("Amount:      {}\n", format_money(budget.amount, settings)));
    output.push_str(&format!("Start day:   {}\n", budget.start_day));
    output.push_str(&format!(
        "Cycle start: {}\n",
        settings.format_date(budget.start_date)
    ));
    output.push_str(&format!(
        "Created:     {}\n",
        budget.created_at.format("%Y-%m-%d %H:%M")
    ));

    output
}

/// Format the cycle a start day resolves to
pub fn format_cycle_preview(bounds: &CycleBounds, start_day: u32, settings: &Settings) -> String {
    let mut output = format!(
        "Start day {}: {} to {} ({} days)\n",
        start_day,
        settings.format_date(bounds.start),
        settings.format_date(bounds.end),
        bounds.days()
    );

    if bounds.start.day() != start_day {
        output.push_str(&format!(
            "  (adjusted from day {} to the nearest earlier business day)\n",
            start_day
        ));
    }
    output
}

/// Cycle totals and the current week
pub fn format_stats_summary(report: &CycleReport, settings: &Settings) -> String {
    let stats = &report.stats;
    let mut output = String::new();

    output.push_str(&format!(
        "Cycle: {} to {} ({})\n",
        settings.format_date(report.cycle.start),
        settings.format_date(report.cycle.end),
        report.week_policy
    ));
    output.push_str(&"=".repeat(50));
    output.push('\n');
    output.push_str(&format!(
        "{:<20} {:>20}\n",
        "Budget",
        format_money(stats.total_budget, settings)
    ));
    output.push_str(&format!(
        "{:<20} {:>20}\n",
        "Spent",
        format_money(stats.total_spent, settings)
    ));
    output.push_str(&format!(
        "{:<20} {:>20}\n",
        "Remaining",
        format_money(stats.total_remaining, settings)
    ));
    output.push('\n');

    match stats.current() {
        Some(week) => {
            output.push_str(&format!(
                "This week (week {}, {} to {})\n",
                week.week_number,
                settings.format_date(week.start_date),
                settings.format_date(week.end_date)
            ));
            output.push_str(&format!(
                "  {:<18} {:>20}\n",
                "Budget",
                format_money(stats.current_week_budget, settings)
            ));
            output.push_str(&format!(
                "  {:<18} {:>20}\n",
                "Spent",
                format_money(stats.current_week_spent, settings)
            ));
            output.push_str(&format!(
                "  {:<18} {:>20}\n",
                "Remaining",
                format_money(stats.current_week_remaining, settings)
            ));
        }
        None => output.push_str("Today is outside this cycle.\n"),
    }

    output
}
