//! Service layer for paycycle
//!
//! Services validate input at the boundary, read from a [`BudgetStore`] and
//! hand fully-loaded data to the engine. Nothing invalid reaches the engine.
//!
//! [`BudgetStore`]: crate::storage::BudgetStore

pub mod budget;
pub mod category;
pub mod expense;
pub mod stats;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use expense::{ExpenseFilter, ExpenseService, ExpenseSort, ExpenseSummary, NewExpense};
pub use stats::{CycleReport, StatsService};

use crate::calendar::{calendar_from_settings, BusinessDayResolver};
use crate::config::Settings;
use crate::error::PaycycleResult;

/// Run `f` with a business-day resolver built from the user's settings
pub(crate) fn with_resolver<T>(
    settings: &Settings,
    f: impl FnOnce(&BusinessDayResolver<'_>) -> PaycycleResult<T>,
) -> PaycycleResult<T> {
    let calendar = calendar_from_settings(settings)?;
    let resolver = BusinessDayResolver::with_max_lookback(&calendar, settings.max_lookback_days);
    f(&resolver)
}
