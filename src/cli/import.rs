//! CLI command handler for restoring a JSON export
//!
//! The file is parsed and validated in full before anything in storage is
//! touched.

use std::path::Path;

use crate::error::{PaycycleError, PaycycleResult};
use crate::export::import_from_json;
use crate::storage::BudgetStore;

/// Handle the import command
pub fn handle_import_command(store: &dyn BudgetStore, file: &Path, yes: bool) -> PaycycleResult<()> {
    if !file.exists() {
        return Err(PaycycleError::Validation(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let content = std::fs::read_to_string(file)
        .map_err(|e| PaycycleError::Io(format!("Failed to read {}: {}", file.display(), e)))?;
    let export = import_from_json(&content)?;

    println!("Import Preview for '{}'", file.display());
    println!("{}", "=".repeat(40));
    println!(
        "  Budget:      {}",
        if export.budget.is_some() { "yes" } else { "none" }
    );
    println!("  Categories:  {}", export.categories.len());
    println!("  Expenses:    {}", export.expenses.len());
    println!("  Exported at: {}", export.exported_at.format("%Y-%m-%d %H:%M"));
    println!();

    if !yes {
        println!("Importing replaces all current data.");
        println!("Run again with --yes to confirm.");
        return Ok(());
    }

    export.restore_into(store)?;
    println!("Import complete.");
    Ok(())
}
