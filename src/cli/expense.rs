//! Expense CLI commands
//!
//! Recording, listing and deleting expenses.

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table, format_summary_line};
use crate::error::PaycycleResult;
use crate::services::{ExpenseFilter, ExpenseService, ExpenseSort, NewExpense, StatsService};
use crate::storage::BudgetStore;

use super::{parse_amount, parse_date};

/// Sort field for expense listings
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortField {
    /// Order by expense date
    Date,
    /// Order by amount
    Amount,
}

impl From<SortField> for ExpenseSort {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Date => ExpenseSort::Date,
            SortField::Amount => ExpenseSort::Amount,
        }
    }
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// What the money was spent on
        title: String,
        /// Amount spent (e.g., "12000" or "12,000")
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Sort field
        #[arg(short, long, value_enum, default_value = "date")]
        sort: SortField,
        /// Sort ascending instead of newest/largest first
        #[arg(long)]
        asc: bool,
        /// Only show expenses in the current budget cycle
        #[arg(long)]
        cycle: bool,
    },

    /// Show one expense
    Show {
        /// Expense ID (short form accepted)
        id: String,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (short form accepted)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &dyn BudgetStore,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> PaycycleResult<()> {
    let service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            category,
            date,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today,
            };
            let expense = service.add(NewExpense {
                title,
                amount: parse_amount(&amount)?,
                category,
                date,
            })?;

            println!("Recorded expense {}", expense.id);
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::List {
            category,
            sort,
            asc,
            cycle,
        } => {
            let mut filter = ExpenseFilter::new().sorted(sort.into(), asc);
            if let Some(name) = category {
                filter = filter.category(name);
            }
            if cycle {
                match StatsService::new(store, settings).stats_for(today)? {
                    Some(report) => {
                        filter = filter.date_range(report.cycle.start, report.cycle.end);
                    }
                    None => {
                        println!("No budget set, so there is no current cycle.");
                        return Ok(());
                    }
                }
            }

            let expenses = service.list(&filter)?;
            print!("{}", format_expense_table(&expenses, settings));
            if !expenses.is_empty() {
                let summary = service.summary(&filter)?;
                println!("{}", format_summary_line(&summary, settings));
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = service.find(&id)?;
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!("Deleted expense {} ({})", expense.id, expense.title);
        }
    }

    Ok(())
}
