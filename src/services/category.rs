//! Category service
//!
//! Categories are free labels: removing one leaves existing expenses with
//! the old name untouched.

use crate::error::{PaycycleError, PaycycleResult};
use crate::models::Category;
use crate::storage::BudgetStore;

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a dyn BudgetStore,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a dyn BudgetStore) -> Self {
        Self { store }
    }

    /// All categories in display order
    pub fn list(&self) -> PaycycleResult<Vec<Category>> {
        self.store.read_categories()
    }

    /// Find a category by name (case-insensitive) or ID
    pub fn find(&self, identifier: &str) -> PaycycleResult<Option<Category>> {
        let identifier = identifier.trim();
        let categories = self.store.read_categories()?;

        Ok(categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(identifier) || c.name == identifier)
            .or_else(|| categories.iter().find(|c| c.id.matches(identifier)))
            .cloned())
    }

    /// Add a category with optional display hints
    pub fn add(&self, name: &str, color: Option<&str>, icon: Option<&str>) -> PaycycleResult<Category> {
        let mut category = Category::new(name);
        if let Some(color) = color {
            category.color = color.trim().to_string();
        }
        if let Some(icon) = icon {
            category.icon = icon.trim().to_string();
        }

        category
            .validate()
            .map_err(|e| PaycycleError::Validation(e.to_string()))?;

        let taken = self
            .store
            .read_categories()?
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(&category.name));
        if taken {
            return Err(PaycycleError::Duplicate {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        self.store.write_category(category.clone())?;
        tracing::info!(id = %category.id, name = %category.name, "category added");
        Ok(category)
    }

    /// Remove a category by name or ID
    pub fn remove(&self, identifier: &str) -> PaycycleResult<Category> {
        let category = self
            .find(identifier)?
            .ok_or_else(|| PaycycleError::category_not_found(identifier))?;

        self.store.delete_category(category.id)?;
        tracing::info!(id = %category.id, name = %category.name, "category removed");
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_list_defaults() {
        let store = MemoryStorage::new();
        let service = CategoryService::new(&store);
        assert_eq!(service.list().unwrap().len(), 6);
    }

    #[test]
    fn test_add_category() {
        let store = MemoryStorage::new();
        let service = CategoryService::new(&store);

        let pets = service.add("Pets", Some("#22c55e"), Some("🐶")).unwrap();
        assert_eq!(pets.color, "#22c55e");
        assert_eq!(service.list().unwrap().len(), 7);
        assert_eq!(service.find("pets").unwrap(), Some(pets));
    }

    #[test]
    fn test_add_rejects_duplicates_and_bad_input() {
        let store = MemoryStorage::new();
        let service = CategoryService::new(&store);

        let err = service.add("food", None, None).unwrap_err();
        assert!(matches!(err, PaycycleError::Duplicate { .. }));
        assert!(service.add("   ", None, None).unwrap_err().is_validation());
        assert!(service.add("Pets", Some("green"), None).unwrap_err().is_validation());
    }

    #[test]
    fn test_remove_by_name_and_id() {
        let store = MemoryStorage::new();
        let service = CategoryService::new(&store);

        let removed = service.remove("Shopping").unwrap();
        assert_eq!(removed.name, "Shopping");
        assert!(service.find("Shopping").unwrap().is_none());

        let other = service.find("Other").unwrap().unwrap();
        service.remove(&other.id.to_string()).unwrap();
        assert_eq!(service.list().unwrap().len(), 4);

        assert!(service.remove("Shopping").unwrap_err().is_not_found());
    }
}
