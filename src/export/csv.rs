//! CSV Export functionality
//!
//! Expenses and weekly breakdowns as spreadsheet-friendly CSV. Amounts are
//! written in whole units without separators.

use std::io::Write;

use crate::error::{PaycycleError, PaycycleResult};
use crate::models::Expense;
use crate::services::CycleReport;

/// Export expenses to CSV in the order given
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> PaycycleResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Title", "Category", "Amount", "Created At"])?;

    for expense in expenses {
        csv.write_record([
            expense.id.as_uuid().to_string(),
            expense.date.to_string(),
            expense.title.clone(),
            expense.category.clone(),
            expense.amount.units().to_string(),
            expense.created_at.to_rfc3339(),
        ])?;
    }

    csv.flush().map_err(|e| PaycycleError::Export(e.to_string()))
}

/// Export the weekly breakdown of a cycle to CSV
pub fn export_weekly_csv<W: Write>(report: &CycleReport, writer: W) -> PaycycleResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record([
        "Week",
        "Start Date",
        "End Date",
        "Budget",
        "Spent",
        "Remaining",
        "Current",
    ])?;

    for week in &report.stats.weekly_budgets {
        let current = report.stats.current_week == Some(week.week_number);
        csv.write_record([
            week.week_number.to_string(),
            week.start_date.to_string(),
            week.end_date.to_string(),
            week.budget.units().to_string(),
            week.spent.units().to_string(),
            week.remaining.units().to_string(),
            current.to_string(),
        ])?;
    }

    csv.flush().map_err(|e| PaycycleError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_expenses_csv_quotes_commas() {
        let expense = Expense::new(
            "Coffee, large",
            Money::new(5_500),
            "Food",
            NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
        );

        let mut buf = Vec::new();
        export_expenses_csv(std::slice::from_ref(&expense), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Date,Title,Category,Amount,Created At")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with(&expense.id.as_uuid().to_string()));
        assert!(row.contains(",2024-03-06,\"Coffee, large\",Food,5500,"));
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut buf = Vec::new();
        export_expenses_csv(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}
