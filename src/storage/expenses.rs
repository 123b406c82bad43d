//! Expense repository for JSON storage
//!
//! Expenses are kept in the order they were first written; an upsert of an
//! existing ID replaces it in place.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PaycycleError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), PaycycleError> {
        let stored: Vec<Expense> = read_json(&self.path)?;

        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *expenses = stored;

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), PaycycleError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, expenses.as_slice())
    }

    /// Snapshot of all expenses
    pub fn get_all(&self) -> Result<Vec<Expense>, PaycycleError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(expenses.clone())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, PaycycleError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(expenses.iter().find(|e| e.id == id).cloned())
    }

    /// Insert or replace an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), PaycycleError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => *existing = expense,
            None => expenses.push(expense),
        }
        Ok(())
    }

    /// Delete an expense; returns whether it existed
    pub fn delete(&self, id: ExpenseId) -> Result<bool, PaycycleError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        Ok(expenses.len() != before)
    }

    /// Remove every expense
    pub fn clear(&self) -> Result<(), PaycycleError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        expenses.clear();
        Ok(())
    }

    /// Number of stored expenses
    pub fn count(&self) -> Result<usize, PaycycleError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(expenses.len())
    }
}
