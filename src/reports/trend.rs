//! Monthly trend report
//!
//! Calendar-month spending for the last few months, oldest first.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::config::Settings;
use crate::display::{format_bar, format_money};
use crate::engine::{monthly_totals, MonthTotal};
use crate::error::{PaycycleError, PaycycleResult};
use crate::models::Money;
use crate::storage::BudgetStore;

/// Default number of months shown
pub const DEFAULT_TREND_MONTHS: u32 = 6;

/// Longest supported trend
pub const MAX_TREND_MONTHS: u32 = 120;

/// Spending trend over consecutive calendar months
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub months: Vec<MonthTotal>,
    pub total: Money,
    /// Mean monthly spend, floored
    pub average: Money,
}

impl TrendReport {
    /// Generate the trend for `months` months ending with the month of `today`
    pub fn generate(store: &dyn BudgetStore, today: NaiveDate, months: u32) -> PaycycleResult<Self> {
        if months == 0 || months > MAX_TREND_MONTHS {
            return Err(PaycycleError::Validation(format!(
                "Months must be between 1 and {}",
                MAX_TREND_MONTHS
            )));
        }

        let expenses = store.read_expenses()?;
        let months = monthly_totals(&expenses, today.year(), today.month(), months);
        let total: Money = months.iter().map(|m| m.amount).sum();
        let average = Money::new(total.units().div_euclid(months.len() as i64));

        Ok(Self {
            months,
            total,
            average,
        })
    }

    /// The month with the highest spend, earliest on ties
    pub fn peak(&self) -> Option<&MonthTotal> {
        self.months
            .iter()
            .reduce(|best, m| if m.amount > best.amount { m } else { best })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();
        output.push_str("Monthly Spending Trend\n");
        output.push_str(&"=".repeat(56));
        output.push('\n');

        let max = self.peak().map(|m| m.amount.units()).unwrap_or(0);
        for month in &self.months {
            output.push_str(&format!(
                "{}-{:02}  {:>14}  {}\n",
                month.year,
                month.month,
                format_money(month.amount, settings),
                format_bar(month.amount.units(), max, 30)
            ));
        }

        output.push_str(&"-".repeat(56));
        output.push('\n');
        output.push_str(&format!(
            "Total    {:>14}\nAverage  {:>14}\n",
            format_money(self.total, settings),
            format_money(self.average, settings)
        ));
        output
    }
}
