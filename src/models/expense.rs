//! Expense model
//!
//! An expense is a dated, positive amount filed under a category name. The
//! category is copied by name when the expense is created, so renaming a
//! category later does not relabel old expenses.
//!
//! Each expense also records the budget that was active when it was added.
//! Stats only count expenses of the active budget, so a budget that is
//! deleted and set again starts from zero.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, ExpenseId};
use super::money::Money;

/// Maximum title length accepted
pub const MAX_TITLE_LEN: usize = 100;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub title: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Category name at the time the expense was recorded
    pub category: String,

    /// Budget that was active when the expense was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_id: Option<BudgetId>,

    /// Day the money was spent
    pub date: NaiveDate,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,

    /// When the expense was last written
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            title: title.into().trim().to_string(),
            amount,
            category: category.into(),
            budget_id: None,
            date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the expense to a budget
    pub fn for_budget(mut self, budget_id: BudgetId) -> Self {
        self.budget_id = Some(budget_id);
        self
    }

    /// Whether the expense was recorded against `budget_id`
    pub fn belongs_to(&self, budget_id: BudgetId) -> bool {
        self.budget_id == Some(budget_id)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(ExpenseValidationError::TitleTooLong(self.title.chars().count()));
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount.units()));
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }

        Ok(())
    }

    /// Whether the expense falls in `[start, end]`, both ends inclusive
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date >= start && self.date <= end
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.date, self.title, self.amount, self.category
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    TitleTooLong(usize),
    NonPositiveAmount(i64),
    MissingCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Expense title cannot be empty"),
            Self::TitleTooLong(len) => write!(
                f,
                "Expense title too long ({} chars, max {})",
                len, MAX_TITLE_LEN
            ),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be greater than zero (got {})", amount)
            }
            Self::MissingCategory => write!(f, "Expense must have a category"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
