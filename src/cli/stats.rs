//! Stats CLI command
//!
//! Shows the cycle totals, the current week and the weekly breakdown.

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_stats_summary;
use crate::error::PaycycleResult;
use crate::reports::WeeklyReport;
use crate::services::StatsService;
use crate::storage::BudgetStore;

use super::{parse_date, parse_month};

/// Arguments for `paycycle stats`
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Show the cycle covering this date (YYYY-MM-DD) instead of today
    #[arg(short, long, conflicts_with = "month")]
    pub date: Option<String>,

    /// Show the cycle that begins in this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Skip the weekly breakdown
    #[arg(long)]
    pub summary: bool,
}

/// Handle the stats command
pub fn handle_stats_command(
    store: &dyn BudgetStore,
    settings: &Settings,
    today: NaiveDate,
    args: StatsArgs,
) -> PaycycleResult<()> {
    let service = StatsService::new(store, settings);

    let report = match (args.date, args.month) {
        (_, Some(month)) => {
            let (year, month) = parse_month(&month)?;
            service.stats_for_cycle(year, month, today)?
        }
        (Some(date), None) => service.stats_for(parse_date(&date)?)?,
        (None, None) => service.stats_for(today)?,
    };

    let Some(report) = report else {
        println!("No budget set.");
        println!("Run 'paycycle budget set <amount> --start-day <day>' to create one.");
        return Ok(());
    };

    print!("{}", format_stats_summary(&report, settings));
    if !args.summary {
        println!();
        print!("{}", WeeklyReport::new(&report).format_terminal(settings));
    }

    Ok(())
}
