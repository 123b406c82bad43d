//! Weekly breakdown report
//!
//! One row per window of a cycle with allocation, spend and what is left.
//! The window containing "today" is marked.

use crate::config::Settings;
use crate::display::{format_bar, format_money};
use crate::models::WeeklyBudget;
use crate::services::CycleReport;

/// Per-window view of a cycle
#[derive(Debug, Clone)]
pub struct WeeklyReport<'r> {
    report: &'r CycleReport,
}

impl<'r> WeeklyReport<'r> {
    /// Wrap a computed cycle report
    pub fn new(report: &'r CycleReport) -> Self {
        Self { report }
    }

    /// Windows where spend exceeded the allocation
    pub fn overspent_weeks(&self) -> Vec<&'r WeeklyBudget> {
        self.report
            .stats
            .weekly_budgets
            .iter()
            .filter(|w| w.is_overspent())
            .collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let stats = &self.report.stats;
        let mut output = String::new();

        output.push_str(&format!(
            "{:<3} {:<5} {:<23} {:>14} {:>14} {:>14}  {}\n",
            "",
            "Week",
            "Dates",
            "Budget",
            "Spent",
            "Remaining",
            "Used"
        ));
        output.push_str(&"-".repeat(92));
        output.push('\n');

        for week in &stats.weekly_budgets {
            let marker = if stats.current_week == Some(week.week_number) {
                "▶"
            } else {
                ""
            };
            let flag = if week.is_overspent() { " !" } else { "" };

            output.push_str(&format!(
                "{:<3} {:<5} {:<23} {:>14} {:>14} {:>14}  {}{}\n",
                marker,
                week.week_number,
                format!(
                    "{} - {}",
                    settings.format_date(week.start_date),
                    settings.format_date(week.end_date)
                ),
                format_money(week.budget, settings),
                format_money(week.spent, settings),
                format_money(week.remaining, settings),
                format_bar(week.spent.units(), week.budget.units(), 10),
                flag
            ));
        }

        output.push_str(&"-".repeat(92));
        output.push('\n');
        output.push_str(&format!(
            "{:<3} {:<5} {:<23} {:>14} {:>14} {:>14}\n",
            "",
            "",
            "Total",
            format_money(stats.total_budget, settings),
            format_money(stats.total_spent, settings),
            format_money(stats.total_remaining, settings)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{build_stats, partition, WeekPolicy};
    use crate::models::{Budget, CycleBounds, Expense, Money};
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn cycle_report() -> CycleReport {
        let cycle = CycleBounds::new(date(4, 5), date(5, 4));
        let windows = partition(cycle.start, cycle.end, WeekPolicy::AnchorDay).unwrap();
        let expenses = vec![
            Expense::new("Rent share", Money::new(250_000), "Other", date(4, 6)),
            Expense::new("Lunch", Money::new(9_000), "Food", date(4, 13)),
        ];
        let budget = Budget::new(Money::new(1_000_000), 5, cycle.start);
        let stats = build_stats(budget.amount, cycle, &windows, &expenses, date(4, 13));

        CycleReport {
            budget,
            cycle,
            week_policy: WeekPolicy::AnchorDay,
            stats,
        }
    }

    #[test]
    fn test_overspent_weeks() {
        let report = cycle_report();
        let weekly = WeeklyReport::new(&report);

        let over = weekly.overspent_weeks();
        assert_eq!(over.len(), 1);
        assert_eq!(over[0].week_number, 1);
        assert_eq!(over[0].remaining, Money::new(-50_000));
    }

    #[test]
    fn test_format_marks_current_week() {
        let report = cycle_report();
        let output = WeeklyReport::new(&report).format_terminal(&Settings::default());

        let current: Vec<_> = output.lines().filter(|l| l.starts_with('▶')).collect();
        assert_eq!(current.len(), 1);
        assert!(current[0].contains("2024-04-12 - 2024-04-18"));
        assert!(output.contains("-₩50,000"));
    }
}
