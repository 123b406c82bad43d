//! Budget model
//!
//! A single monthly budget is active at a time. It carries the user's chosen
//! pay-day (`start_day`) and the business-day-adjusted date the cycle it was
//! created for actually starts on.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// Highest accepted start day
pub const MAX_START_DAY: u32 = 31;

/// The active monthly budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Amount available for the whole cycle
    pub amount: Money,

    /// Day of month the cycle starts on before business-day adjustment (1-31)
    pub start_day: u32,

    /// Resolved start of the cycle the budget was created in
    pub start_date: NaiveDate,

    /// When the budget was first created
    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(amount: Money, start_day: u32, start_date: NaiveDate) -> Self {
        Self {
            id: BudgetId::new(),
            amount,
            start_day,
            start_date,
            created_at: Utc::now(),
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        validate_amount(self.amount)?;
        validate_start_day(self.start_day)
    }
}

/// Check that a budget amount is usable
pub fn validate_amount(amount: Money) -> Result<(), BudgetValidationError> {
    if !amount.is_positive() {
        return Err(BudgetValidationError::NonPositiveAmount(amount.units()));
    }
    Ok(())
}

/// Check that a start day lies in 1-31
pub fn validate_start_day(start_day: u32) -> Result<(), BudgetValidationError> {
    if !(1..=MAX_START_DAY).contains(&start_day) {
        return Err(BudgetValidationError::StartDayOutOfRange(start_day));
    }
    Ok(())
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from day {} (cycle start {})",
            self.amount, self.start_day, self.start_date
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount(i64),
    StartDayOutOfRange(u32),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Budget amount must be greater than zero (got {})", amount)
            }
            Self::StartDayOutOfRange(day) => {
                write!(f, "Start day must be between 1 and 31 (got {})", day)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
