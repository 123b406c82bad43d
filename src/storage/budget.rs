//! Budget repository for JSON storage
//!
//! Holds the single active budget in budget.json. Deleting the budget removes
//! the file.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PaycycleError;
use crate::models::Budget;

use super::file_io::{read_json_opt, remove_file_if_exists, write_json_atomic};

/// Repository for the singleton budget record
pub struct BudgetRepository {
    path: PathBuf,
    budget: RwLock<Option<Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budget: RwLock::new(None),
        }
    }

    /// Load the budget from disk
    pub fn load(&self) -> Result<(), PaycycleError> {
        let stored: Option<Budget> = read_json_opt(&self.path)?;

        let mut budget = self
            .budget
            .write()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *budget = stored;

        Ok(())
    }

    /// Save the budget to disk, removing the file when there is none
    pub fn save(&self) -> Result<(), PaycycleError> {
        let budget = self
            .budget
            .read()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        match budget.as_ref() {
            Some(b) => write_json_atomic(&self.path, b),
            None => remove_file_if_exists(&self.path).map(|_| ()),
        }
    }

    /// Get the active budget
    pub fn get(&self) -> Result<Option<Budget>, PaycycleError> {
        let budget = self
            .budget
            .read()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budget.clone())
    }

    /// Replace the active budget
    pub fn set(&self, new_budget: Budget) -> Result<(), PaycycleError> {
        let mut budget = self
            .budget
            .write()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *budget = Some(new_budget);
        Ok(())
    }

    /// Drop the active budget; returns whether one existed
    pub fn clear(&self) -> Result<bool, PaycycleError> {
        let mut budget = self
            .budget
            .write()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budget.take().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        let repo = BudgetRepository::new(path);
        (temp_dir, repo)
    }

    fn sample() -> Budget {
        Budget::new(
            Money::new(1_000_000),
            5,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        )
    }

    #[test]
    fn test_empty_by_default() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.get().unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let budget = sample();
        repo.set(budget.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = BudgetRepository::new(temp_dir.path().join("budget.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get().unwrap(), Some(budget));
    }

    #[test]
    fn test_clear_removes_file() {
        let (temp_dir, repo) = create_test_repo();
        repo.set(sample()).unwrap();
        repo.save().unwrap();
        assert!(temp_dir.path().join("budget.json").exists());

        assert!(repo.clear().unwrap());
        repo.save().unwrap();
        assert!(!temp_dir.path().join("budget.json").exists());
        assert!(!repo.clear().unwrap());
    }
}
