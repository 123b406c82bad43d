//! Spending Report
//!
//! Spending by category for a date range, with each category's share of the
//! total and its display hints.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::display::{format_bar, format_money, format_percentage};
use crate::engine::{by_category, expenses_between};
use crate::error::{PaycycleError, PaycycleResult};
use crate::models::category::{DEFAULT_COLOR, DEFAULT_ICON};
use crate::models::Money;
use crate::storage::BudgetStore;

/// Spending under one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    /// Category name as stored on the expenses
    pub category: String,
    pub color: String,
    pub icon: String,
    pub amount: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of total spending, 0-100
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, Serialize)]
pub struct SpendingReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Categories in order of first appearance
    pub categories: Vec<CategoryShare>,
    pub total: Money,
    pub expense_count: usize,
}

impl SpendingReport {
    /// Generate a spending report for `[start_date, end_date]`
    pub fn generate(
        store: &dyn BudgetStore,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> PaycycleResult<Self> {
        if end_date < start_date {
            return Err(PaycycleError::Validation(format!(
                "Report end {} is before start {}",
                end_date, start_date
            )));
        }

        let expenses = store.read_expenses()?;
        let known = store.read_categories()?;
        let in_range = expenses_between(&expenses, start_date, end_date);
        let expense_count = in_range.len();

        let totals = by_category(in_range);
        let total: Money = totals.iter().map(|t| t.amount).sum();

        let categories = totals
            .into_iter()
            .map(|t| {
                // Expenses keep the name of categories that were later removed
                let hint = known.iter().find(|c| c.name == t.category);
                CategoryShare {
                    color: hint.map_or(DEFAULT_COLOR, |c| c.color.as_str()).to_string(),
                    icon: hint.map_or(DEFAULT_ICON, |c| c.icon.as_str()).to_string(),
                    percentage: share(t.amount, total),
                    category: t.category,
                    amount: t.amount,
                    count: t.count,
                }
            })
            .collect();

        Ok(Self {
            start_date,
            end_date,
            categories,
            total,
            expense_count,
        })
    }

    /// Categories ordered by amount, largest first
    pub fn top_categories(&self, limit: usize) -> Vec<&CategoryShare> {
        let mut sorted: Vec<_> = self.categories.iter().collect();
        sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
        sorted.into_iter().take(limit).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Spending by Category: {} to {}\n",
            settings.format_date(self.start_date),
            settings.format_date(self.end_date)
        ));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No expenses in this period.\n");
            return output;
        }

        let max = self
            .categories
            .iter()
            .map(|c| c.amount.units())
            .max()
            .unwrap_or(0);

        for row in &self.categories {
            output.push_str(&format!(
                "{} {:<14} {:>14} {:>4} {:>7}  {}\n",
                row.icon,
                row.category,
                format_money(row.amount, settings),
                row.count,
                format_percentage(row.percentage),
                format_bar(row.amount.units(), max, 20)
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "   {:<14} {:>14} {:>4}\n",
            "Total",
            format_money(self.total, settings),
            self.expense_count
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> PaycycleResult<()> {
        let mut csv = ::csv::Writer::from_writer(writer);
        csv.write_record([
            "Start Date",
            "End Date",
            "Category",
            "Amount",
            "Count",
            "Percentage",
        ])?;

        for row in &self.categories {
            csv.write_record([
                self.start_date.to_string(),
                self.end_date.to_string(),
                row.category.clone(),
                row.amount.units().to_string(),
                row.count.to_string(),
                format!("{:.2}", row.percentage),
            ])?;
        }

        csv.flush()
            .map_err(|e| PaycycleError::Export(e.to_string()))?;
        Ok(())
    }
}

fn share(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.units() as f64 / whole.units() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use crate::storage::MemoryStorage;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn seeded() -> MemoryStorage {
        let store = MemoryStorage::new();
        for (category, amount, day) in [
            ("Transport", 10_000, 5),
            ("Food", 30_000, 6),
            ("Pets", 10_000, 7),
            ("Food", 50_000, 8),
            ("Food", 99_000, 20),
        ] {
            store
                .write_expense(Expense::new("x", Money::new(amount), category, date(day)))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_generate_spending_report() {
        let store = seeded();
        let report = SpendingReport::generate(&store, date(1), date(10)).unwrap();

        assert_eq!(report.total, Money::new(100_000));
        assert_eq!(report.expense_count, 4);

        let names: Vec<_> = report.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Transport", "Food", "Pets"]);
        assert_eq!(report.categories[1].amount, Money::new(80_000));
        assert_eq!(report.categories[1].count, 2);
        assert!((report.categories[1].percentage - 80.0).abs() < 1e-9);

        // Known categories carry their hints; unknown ones fall back
        assert_eq!(report.categories[1].color, "#ef4444");
        assert_eq!(report.categories[2].icon, DEFAULT_ICON);
    }

    #[test]
    fn test_top_categories() {
        let store = seeded();
        let report = SpendingReport::generate(&store, date(1), date(10)).unwrap();

        let top = report.top_categories(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, "Food");
    }

    #[test]
    fn test_empty_range() {
        let store = seeded();
        let report = SpendingReport::generate(&store, date(21), date(31)).unwrap();
        assert!(report.categories.is_empty());
        assert!(report
            .format_terminal(&Settings::default())
            .contains("No expenses in this period."));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let store = seeded();
        let err = SpendingReport::generate(&store, date(10), date(1)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_export_csv() {
        let store = seeded();
        let report = SpendingReport::generate(&store, date(1), date(10)).unwrap();

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Start Date,End Date,Category,Amount,Count,Percentage")
        );
        assert_eq!(lines.next(), Some("2024-03-01,2024-03-10,Transport,10000,1,10.00"));
        assert_eq!(text.lines().count(), 4);
    }
}
