//! Derived period types
//!
//! Nothing here is stored. Cycles, windows and stats are recomputed from the
//! budget and the expense list every time they are needed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Inclusive date range `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range; callers guarantee `start <= end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls in the range, both ends inclusive
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// A budget cycle: one month starting on a resolved business day
pub type CycleBounds = DateRange;

/// A weekly sub-period of a cycle
pub type Window = DateRange;

/// Allocation and spend for one window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBudget {
    /// 1-based position of the window in the cycle
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Share of the cycle budget allocated to this window
    pub budget: Money,
    /// Sum of expenses dated inside the window
    pub spent: Money,
    /// `budget - spent`; negative when overspent
    pub remaining: Money,
}

impl WeeklyBudget {
    /// The window this entry covers
    pub fn window(&self) -> Window {
        Window::new(self.start_date, self.end_date)
    }

    /// Whether more was spent than allocated
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Cycle-level totals plus the per-window breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetStats {
    pub total_budget: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
    pub current_week_budget: Money,
    pub current_week_spent: Money,
    pub current_week_remaining: Money,
    /// Week number of the window containing "today", if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_week: Option<u32>,
    pub weekly_budgets: Vec<WeeklyBudget>,
}

impl BudgetStats {
    /// The entry for the current window, if "today" falls in the cycle
    pub fn current(&self) -> Option<&WeeklyBudget> {
        let number = self.current_week?;
        self.weekly_budgets.iter().find(|w| w.week_number == number)
    }
}
