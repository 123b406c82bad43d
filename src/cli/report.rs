//! Report CLI commands

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::engine::cycle::last_day_of_month;
use crate::error::{PaycycleError, PaycycleResult};
use crate::reports::{SpendingReport, TrendReport, DEFAULT_TREND_MONTHS};
use crate::services::StatsService;
use crate::storage::BudgetStore;

use super::parse_date;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending by category (defaults to the current cycle)
    Categories {
        /// Start date (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Write the report as CSV instead of a table
        #[arg(long)]
        csv: bool,
    },

    /// Month-by-month spending trend
    Trend {
        /// Number of months to include
        #[arg(short, long, default_value_t = DEFAULT_TREND_MONTHS)]
        months: u32,
    },
}

/// Handle a report command
pub fn handle_report_command(
    store: &dyn BudgetStore,
    settings: &Settings,
    today: NaiveDate,
    cmd: ReportCommands,
) -> PaycycleResult<()> {
    match cmd {
        ReportCommands::Categories { from, to, csv } => {
            let (start, end) = match (from, to) {
                (Some(from), Some(to)) => (parse_date(&from)?, parse_date(&to)?),
                _ => default_range(store, settings, today)?,
            };

            let report = SpendingReport::generate(store, start, end)?;
            if csv {
                report.export_csv(std::io::stdout().lock())?;
            } else {
                print!("{}", report.format_terminal(settings));
            }
        }

        ReportCommands::Trend { months } => {
            let report = TrendReport::generate(store, today, months)?;
            print!("{}", report.format_terminal(settings));
        }
    }

    Ok(())
}

/// The current cycle, or the current calendar month when no budget is set
fn default_range(
    store: &dyn BudgetStore,
    settings: &Settings,
    today: NaiveDate,
) -> PaycycleResult<(NaiveDate, NaiveDate)> {
    if let Some(report) = StatsService::new(store, settings).stats_for(today)? {
        return Ok((report.cycle.start, report.cycle.end));
    }

    let first = today
        .with_day(1)
        .ok_or_else(|| PaycycleError::Validation(format!("Invalid date: {}", today)))?;
    Ok((first, last_day_of_month(today.year(), today.month())?))
}
