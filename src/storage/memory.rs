//! In-memory [`BudgetStore`]
//!
//! Same semantics as the JSON storage without touching the filesystem.

use std::sync::RwLock;

use crate::error::PaycycleError;
use crate::models::{Budget, Category, CategoryId, DefaultCategory, Expense, ExpenseId};

use super::BudgetStore;

#[derive(Default)]
struct State {
    budget: Option<Budget>,
    expenses: Vec<Expense>,
    categories: Vec<Category>,
}

/// Storage that lives only as long as the value
pub struct MemoryStorage {
    state: RwLock<State>,
}

impl MemoryStorage {
    /// Empty storage with the default categories
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                categories: DefaultCategory::seed(),
                ..State::default()
            }),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, State>, PaycycleError> {
        self.state
            .read()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, State>, PaycycleError> {
        self.state
            .write()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetStore for MemoryStorage {
    fn read_budget(&self) -> Result<Option<Budget>, PaycycleError> {
        Ok(self.read()?.budget.clone())
    }

    fn write_budget(&self, budget: Budget) -> Result<(), PaycycleError> {
        self.write()?.budget = Some(budget);
        Ok(())
    }

    fn delete_budget(&self) -> Result<bool, PaycycleError> {
        Ok(self.write()?.budget.take().is_some())
    }

    fn read_expenses(&self) -> Result<Vec<Expense>, PaycycleError> {
        Ok(self.read()?.expenses.clone())
    }

    fn write_expense(&self, expense: Expense) -> Result<(), PaycycleError> {
        let mut state = self.write()?;
        match state.expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => *existing = expense,
            None => state.expenses.push(expense),
        }
        Ok(())
    }

    fn delete_expense(&self, id: ExpenseId) -> Result<bool, PaycycleError> {
        let mut state = self.write()?;
        let before = state.expenses.len();
        state.expenses.retain(|e| e.id != id);
        Ok(state.expenses.len() != before)
    }

    fn read_categories(&self) -> Result<Vec<Category>, PaycycleError> {
        Ok(self.read()?.categories.clone())
    }

    fn write_category(&self, category: Category) -> Result<(), PaycycleError> {
        let mut state = self.write()?;
        match state.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => state.categories.push(category),
        }
        Ok(())
    }

    fn delete_category(&self, id: CategoryId) -> Result<bool, PaycycleError> {
        let mut state = self.write()?;
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        Ok(state.categories.len() != before)
    }

    fn clear_all(&self) -> Result<(), PaycycleError> {
        let mut state = self.write()?;
        state.budget = None;
        state.expenses.clear();
        state.categories = DefaultCategory::seed();
        Ok(())
    }
}
