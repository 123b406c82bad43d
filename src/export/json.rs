//! JSON Export functionality
//!
//! Exports every stored record, or a computed cycle report, as JSON. The
//! full export carries a schema version so it can be checked on the way back
//! in, and [`FullExport::restore_into`] writes it back to a store.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PaycycleError, PaycycleResult};
use crate::models::{Budget, Category, Expense};
use crate::services::CycleReport;
use crate::storage::BudgetStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything in storage at the time of export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The active budget, if any
    pub budget: Option<Budget>,

    pub categories: Vec<Category>,

    /// Expenses in insertion order
    pub expenses: Vec<Expense>,
}

impl FullExport {
    /// Snapshot the store
    pub fn from_store(store: &dyn BudgetStore) -> PaycycleResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            budget: store.read_budget()?,
            categories: store.read_categories()?,
            expenses: store.read_expenses()?,
        })
    }

    /// Check the schema version and that every record passes validation
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if let Some(ref budget) = self.budget {
            budget
                .validate()
                .map_err(|e| format!("Budget {}: {}", budget.id, e))?;
        }

        for category in &self.categories {
            category
                .validate()
                .map_err(|e| format!("Category {}: {}", category.id, e))?;
        }

        for expense in &self.expenses {
            expense
                .validate()
                .map_err(|e| format!("Expense {}: {}", expense.id, e))?;
        }

        Ok(())
    }

    /// Replace everything in `store` with the exported records
    pub fn restore_into(&self, store: &dyn BudgetStore) -> PaycycleResult<()> {
        store.clear_all()?;
        for category in store.read_categories()? {
            store.delete_category(category.id)?;
        }

        for category in &self.categories {
            store.write_category(category.clone())?;
        }
        if let Some(budget) = &self.budget {
            store.write_budget(budget.clone())?;
        }
        for expense in &self.expenses {
            store.write_expense(expense.clone())?;
        }

        tracing::info!(
            categories = self.categories.len(),
            expenses = self.expenses.len(),
            budget = self.budget.is_some(),
            "restored export"
        );
        Ok(())
    }
}

/// Export every stored record to JSON
pub fn export_full_json<W: Write>(
    store: &dyn BudgetStore,
    writer: W,
    pretty: bool,
) -> PaycycleResult<()> {
    let export = FullExport::from_store(store)?;
    write_json(writer, &export, pretty)
}

/// Export a computed cycle report to JSON
pub fn export_stats_json<W: Write>(report: &CycleReport, writer: W, pretty: bool) -> PaycycleResult<()> {
    write_json(writer, report, pretty)
}

/// Parse and validate a full export
pub fn import_from_json(json_str: &str) -> PaycycleResult<FullExport> {
    let export: FullExport = serde_json::from_str(json_str)
        .map_err(|e| PaycycleError::Json(format!("Failed to parse export: {}", e)))?;

    export
        .validate()
        .map_err(|e| PaycycleError::Validation(format!("Invalid export: {}", e)))?;

    Ok(export)
}

fn write_json<W: Write, T: Serialize>(writer: W, value: &T, pretty: bool) -> PaycycleResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)
    } else {
        serde_json::to_writer(writer, value)
    }
    .map_err(|e| PaycycleError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::MemoryStorage;
    use chrono::NaiveDate;

    fn seeded() -> MemoryStorage {
        let store = MemoryStorage::new();
        let on = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        store
            .write_budget(Budget::new(Money::new(1_000_000), 5, on))
            .unwrap();
        store
            .write_expense(Expense::new("Lunch", Money::new(9_000), "Food", on))
            .unwrap();
        store
    }

    #[test]
    fn test_full_export_and_import() {
        let store = seeded();
        let mut buf = Vec::new();
        export_full_json(&store, &mut buf, true).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let imported = import_from_json(&text).unwrap();
        assert_eq!(imported.expenses, store.read_expenses().unwrap());
        assert_eq!(imported.budget, store.read_budget().unwrap());
        assert_eq!(imported.categories.len(), 6);
    }

    #[test]
    fn test_import_rejects_other_schema() {
        let store = seeded();
        let mut export = FullExport::from_store(&store).unwrap();
        export.schema_version = "0.1.0".into();
        let text = serde_json::to_string(&export).unwrap();

        assert!(import_from_json(&text).unwrap_err().is_validation());
        assert!(matches!(
            import_from_json("not json").unwrap_err(),
            PaycycleError::Json(_)
        ));
    }

    #[test]
    fn test_restore_replaces_store_contents() {
        let source = seeded();
        source.write_category(Category::new("Pets")).unwrap();
        let mut buf = Vec::new();
        export_full_json(&source, &mut buf, false).unwrap();
        let export = import_from_json(&String::from_utf8(buf).unwrap()).unwrap();

        let target = MemoryStorage::new();
        let on = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        target
            .write_expense(Expense::new("Stale", Money::new(1_000), "Other", on))
            .unwrap();

        export.restore_into(&target).unwrap();
        assert_eq!(target.read_budget().unwrap(), source.read_budget().unwrap());
        assert_eq!(target.read_expenses().unwrap(), source.read_expenses().unwrap());

        let mut names: Vec<String> = target.read_categories().unwrap().into_iter().map(|c| c.name).collect();
        let mut expected: Vec<String> = source.read_categories().unwrap().into_iter().map(|c| c.name).collect();
        names.sort();
        expected.sort();
        assert_eq!(names, expected);
        assert_eq!(names.len(), 7);
    }
}
