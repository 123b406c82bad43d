//! Budget service
//!
//! The budget is a singleton: setting a new one replaces the old record but
//! keeps its ID and creation time.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::engine::{cycle_bounds, cycle_containing};
use crate::error::{PaycycleError, PaycycleResult};
use crate::models::budget::{validate_amount, validate_start_day};
use crate::models::{Budget, CycleBounds, Money};
use crate::storage::BudgetStore;

use super::with_resolver;

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a dyn BudgetStore,
    settings: &'a Settings,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a dyn BudgetStore, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Set the active budget
    ///
    /// `start_date` is the resolved start of the cycle covering `today`.
    pub fn set_budget(&self, amount: Money, start_day: u32, today: NaiveDate) -> PaycycleResult<Budget> {
        validate_amount(amount).map_err(|e| PaycycleError::Validation(e.to_string()))?;
        validate_start_day(start_day).map_err(|e| PaycycleError::Validation(e.to_string()))?;

        let cycle = with_resolver(self.settings, |resolver| {
            cycle_containing(resolver, today, start_day)
        })?;

        let budget = match self.store.read_budget()? {
            Some(existing) => Budget {
                amount,
                start_day,
                start_date: cycle.start,
                ..existing
            },
            None => Budget::new(amount, start_day, cycle.start),
        };

        self.store.write_budget(budget.clone())?;
        tracing::info!(
            amount = amount.units(),
            start_day,
            start_date = %budget.start_date,
            "budget set"
        );

        Ok(budget)
    }

    /// The active budget, if any
    pub fn get(&self) -> PaycycleResult<Option<Budget>> {
        self.store.read_budget()
    }

    /// Remove the active budget
    ///
    /// Its expenses stay in storage but no later budget counts them.
    pub fn delete(&self) -> PaycycleResult<bool> {
        let existed = self.store.delete_budget()?;
        if existed {
            tracing::info!("budget deleted");
        }
        Ok(existed)
    }

    /// Cycle bounds a given start day would produce for `year`-`month`
    pub fn preview_start(&self, year: i32, month: u32, start_day: u32) -> PaycycleResult<CycleBounds> {
        validate_start_day(start_day).map_err(|e| PaycycleError::Validation(e.to_string()))?;
        with_resolver(self.settings, |resolver| {
            cycle_bounds(resolver, year, month, start_day)
        })
    }
}
