//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod expense;
pub mod export;
pub mod import;
pub mod report;
pub mod stats;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use import::handle_import_command;
pub use report::{handle_report_command, ReportCommands};
pub use stats::{handle_stats_command, StatsArgs};

use chrono::NaiveDate;

use crate::error::{PaycycleError, PaycycleResult};
use crate::models::Money;

/// Parse an amount argument such as "1,000,000" or "₩25000"
pub fn parse_amount(s: &str) -> PaycycleResult<Money> {
    Money::parse(s).map_err(|e| PaycycleError::Validation(format!("Invalid amount '{}': {}", s, e)))
}

/// Parse a `YYYY-MM` month argument
pub fn parse_month(s: &str) -> PaycycleResult<(i32, u32)> {
    let invalid = || PaycycleError::Validation(format!("Invalid month '{}' (expected YYYY-MM)", s));

    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> PaycycleResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| PaycycleError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-03").unwrap(), (2024, 3));
        assert_eq!(parse_month(" 2025-12 ").unwrap(), (2025, 12));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("2024/03").is_err());
        assert!(parse_month("march").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("2023-02-29").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,000,000").unwrap(), Money::new(1_000_000));
        assert!(parse_amount("12.50").unwrap_err().is_validation());
    }
}
