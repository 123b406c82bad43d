//! YAML Export functionality
//!
//! Same content as the JSON export in a format that reads well by hand.

use std::io::Write;

use crate::error::{PaycycleError, PaycycleResult};
use crate::export::json::FullExport;
use crate::services::CycleReport;
use crate::storage::BudgetStore;

/// Export every stored record to YAML
pub fn export_full_yaml<W: Write>(store: &dyn BudgetStore, mut writer: W) -> PaycycleResult<()> {
    let export = FullExport::from_store(store)?;

    writeln!(writer, "# paycycle data export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| PaycycleError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}

/// Export a computed cycle report to YAML
pub fn export_stats_yaml<W: Write>(report: &CycleReport, writer: W) -> PaycycleResult<()> {
    serde_yaml::to_writer(writer, report)?;
    Ok(())
}
