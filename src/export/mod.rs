//! Export module for paycycle
//!
//! - CSV: expenses and weekly breakdowns (spreadsheet-compatible)
//! - JSON: full data export and cycle stats (machine-readable)
//! - YAML: the same, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, export_weekly_csv};
pub use json::{export_full_json, export_stats_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, export_stats_yaml};
