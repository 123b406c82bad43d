//! Storage layer for paycycle
//!
//! The engine and services only see the [`BudgetStore`] trait. [`JsonStorage`]
//! keeps one JSON file per collection with atomic writes; [`MemoryStorage`]
//! backs tests and dry runs.

pub mod budget;
pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod init;
pub mod memory;

pub use budget::BudgetRepository;
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use memory::MemoryStorage;

use crate::config::paths::PaycyclePaths;
use crate::error::PaycycleError;
use crate::models::{Budget, Category, CategoryId, Expense, ExpenseId};

/// Persistence collaborator for budgets, expenses and categories
///
/// Every write is durable once the call returns. Reads return snapshots.
pub trait BudgetStore {
    /// The active budget, if one has been set
    fn read_budget(&self) -> Result<Option<Budget>, PaycycleError>;

    /// Replace the active budget
    fn write_budget(&self, budget: Budget) -> Result<(), PaycycleError>;

    /// Remove the active budget; returns whether one existed
    fn delete_budget(&self) -> Result<bool, PaycycleError>;

    /// All expenses in insertion order
    fn read_expenses(&self) -> Result<Vec<Expense>, PaycycleError>;

    /// Insert an expense, or replace the one with the same ID in place
    fn write_expense(&self, expense: Expense) -> Result<(), PaycycleError>;

    /// Remove an expense; returns whether it existed
    fn delete_expense(&self, id: ExpenseId) -> Result<bool, PaycycleError>;

    /// All categories, seeded with the defaults on first use
    fn read_categories(&self) -> Result<Vec<Category>, PaycycleError>;

    /// Insert a category, or replace the one with the same ID in place
    fn write_category(&self, category: Category) -> Result<(), PaycycleError>;

    /// Remove a category; returns whether it existed
    fn delete_category(&self, id: CategoryId) -> Result<bool, PaycycleError>;

    /// Drop the budget and every expense, and restore the default categories
    fn clear_all(&self) -> Result<(), PaycycleError>;
}

/// JSON-file storage rooted at a [`PaycyclePaths`] data directory
pub struct JsonStorage {
    paths: PaycyclePaths,
    pub budget: BudgetRepository,
    pub expenses: ExpenseRepository,
    pub categories: CategoryRepository,
}

impl JsonStorage {
    /// Create a new storage instance; nothing is read until [`load_all`](Self::load_all)
    pub fn new(paths: PaycyclePaths) -> Result<Self, PaycycleError> {
        paths.ensure_directories()?;

        Ok(Self {
            budget: BudgetRepository::new(paths.budget_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    /// Create and load in one step
    pub fn open(paths: PaycyclePaths) -> Result<Self, PaycycleError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PaycyclePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), PaycycleError> {
        self.budget.load()?;
        self.expenses.load()?;
        self.categories.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), PaycycleError> {
        self.budget.save()?;
        self.expenses.save()?;
        self.categories.save()?;
        Ok(())
    }
}

impl BudgetStore for JsonStorage {
    fn read_budget(&self) -> Result<Option<Budget>, PaycycleError> {
        self.budget.get()
    }

    fn write_budget(&self, budget: Budget) -> Result<(), PaycycleError> {
        self.budget.set(budget)?;
        self.budget.save()
    }

    fn delete_budget(&self) -> Result<bool, PaycycleError> {
        let existed = self.budget.clear()?;
        self.budget.save()?;
        Ok(existed)
    }

    fn read_expenses(&self) -> Result<Vec<Expense>, PaycycleError> {
        self.expenses.get_all()
    }

    fn write_expense(&self, expense: Expense) -> Result<(), PaycycleError> {
        self.expenses.upsert(expense)?;
        self.expenses.save()
    }

    fn delete_expense(&self, id: ExpenseId) -> Result<bool, PaycycleError> {
        let existed = self.expenses.delete(id)?;
        if existed {
            self.expenses.save()?;
        }
        Ok(existed)
    }

    fn read_categories(&self) -> Result<Vec<Category>, PaycycleError> {
        self.categories.get_all()
    }

    fn write_category(&self, category: Category) -> Result<(), PaycycleError> {
        self.categories.upsert(category)?;
        self.categories.save()
    }

    fn delete_category(&self, id: CategoryId) -> Result<bool, PaycycleError> {
        let existed = self.categories.delete(id)?;
        if existed {
            self.categories.save()?;
        }
        Ok(existed)
    }

    fn clear_all(&self) -> Result<(), PaycycleError> {
        self.budget.clear()?;
        self.expenses.clear()?;
        self.categories.reset_to_defaults()?;
        self.save_all()?;
        tracing::info!(dir = %self.paths.data_dir().display(), "cleared all data");
        Ok(())
    }
}
