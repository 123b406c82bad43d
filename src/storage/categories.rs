//! Category repository for JSON storage
//!
//! When categories.json does not exist yet, the default seed is loaded and
//! written out so category IDs stay stable between runs.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PaycycleError;
use crate::models::{Category, CategoryId, DefaultCategory};

use super::file_io::{read_json_opt, write_json_atomic};

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk, seeding defaults on first use
    pub fn load(&self) -> Result<(), PaycycleError> {
        let stored: Option<Vec<Category>> = read_json_opt(&self.path)?;
        let seeded = stored.is_none();

        {
            let mut categories = self.categories.write().map_err(|e| {
                PaycycleError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            *categories = stored.unwrap_or_else(DefaultCategory::seed);
        }

        if seeded {
            tracing::debug!(path = %self.path.display(), "seeding default categories");
            self.save()?;
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), PaycycleError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, categories.as_slice())
    }

    /// All categories in display order
    pub fn get_all(&self) -> Result<Vec<Category>, PaycycleError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.clone())
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, PaycycleError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name = name.trim();
        Ok(categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name) || c.name == name)
            .cloned())
    }

    /// Insert or replace a category
    pub fn upsert(&self, category: Category) -> Result<(), PaycycleError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => categories.push(category),
        }
        Ok(())
    }

    /// Delete a category; returns whether it existed
    pub fn delete(&self, id: CategoryId) -> Result<bool, PaycycleError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = categories.len();
        categories.retain(|c| c.id != id);
        Ok(categories.len() != before)
    }

    /// Put the default seed back
    pub fn reset_to_defaults(&self) -> Result<(), PaycycleError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| PaycycleError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *categories = DefaultCategory::seed();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_first_load_seeds_defaults() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 6);
        assert!(temp_dir.path().join("categories.json").exists());

        // A second load reads the same IDs back
        let repo2 = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get_all().unwrap(), all);
    }

    #[test]
    fn test_empty_list_is_not_reseeded() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        for category in repo.get_all().unwrap() {
            repo.delete(category.id).unwrap();
        }
        repo.save().unwrap();

        let repo2 = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo2.load().unwrap();
        assert!(repo2.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_get_by_name_is_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert!(repo.get_by_name("food").unwrap().is_some());
        assert!(repo.get_by_name("  Transport ").unwrap().is_some());
        assert!(repo.get_by_name("Pets").unwrap().is_none());
    }

    #[test]
    fn test_upsert_and_reset() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.upsert(Category::new("Pets")).unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 7);

        repo.reset_to_defaults().unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 6);
    }
}
