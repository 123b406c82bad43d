//! Budget CLI commands
//!
//! Setting, showing and removing the single active budget, and previewing
//! where a start day would put the cycle.

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_details, format_cycle_preview, format_money};
use crate::engine::cycle::shift_month;
use crate::error::PaycycleResult;
use crate::services::BudgetService;
use crate::storage::BudgetStore;

use super::{parse_amount, parse_month};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget, replacing any existing one
    Set {
        /// Amount per cycle (e.g., "1000000" or "1,000,000")
        amount: String,
        /// Day of the month the cycle starts on (1-31)
        #[arg(short = 's', long, default_value = "1")]
        start_day: u32,
    },

    /// Show the active budget
    Show,

    /// Remove the active budget (expenses are kept)
    Delete,

    /// Show the cycle a start day resolves to
    Preview {
        /// Day of the month the cycle starts on (1-31)
        #[arg(short = 's', long)]
        start_day: u32,
        /// First month to preview (YYYY-MM, defaults to this month)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of consecutive months to preview
        #[arg(short, long, default_value = "1")]
        count: u32,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &dyn BudgetStore,
    settings: &Settings,
    today: NaiveDate,
    cmd: BudgetCommands,
) -> PaycycleResult<()> {
    let service = BudgetService::new(store, settings);

    match cmd {
        BudgetCommands::Set { amount, start_day } => {
            let amount = parse_amount(&amount)?;
            let budget = service.set_budget(amount, start_day, today)?;

            println!(
                "Budget set: {} per cycle, starting on day {}",
                format_money(budget.amount, settings),
                budget.start_day
            );
            println!(
                "Current cycle starts {}",
                settings.format_date(budget.start_date)
            );
        }

        BudgetCommands::Show => match service.get()? {
            Some(budget) => print!("{}", format_budget_details(&budget, settings)),
            None => {
                println!("No budget set.");
                println!("Run 'paycycle budget set <amount> --start-day <day>' to create one.");
            }
        },

        BudgetCommands::Delete => {
            if service.delete()? {
                println!("Budget deleted. Expenses were kept.");
            } else {
                println!("No budget to delete.");
            }
        }

        BudgetCommands::Preview {
            start_day,
            month,
            count,
        } => {
            let (year, month) = match month {
                Some(m) => parse_month(&m)?,
                None => (today.year(), today.month()),
            };

            for offset in 0..count.max(1) {
                let (y, m) = shift_month(year, month, offset as i32);
                let bounds = service.preview_start(y, m, start_day)?;
                print!("{}", format_cycle_preview(&bounds, start_day, settings));
            }
        }
    }

    Ok(())
}
