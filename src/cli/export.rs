//! CLI commands for data export
//!
//! Output goes to a file when `--output` is given, otherwise to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{PaycycleError, PaycycleResult};
use crate::export::{csv, json, yaml};
use crate::services::StatsService;
use crate::storage::BudgetStore;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV (expense rows or weekly rows)
    Csv,
    /// JSON (machine-readable)
    Json,
    /// YAML (human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export expenses (CSV) or all stored data (JSON/YAML)
    Expenses {
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the current cycle's stats
    Stats {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(
    store: &dyn BudgetStore,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExportCommands,
) -> PaycycleResult<()> {
    match cmd {
        ExportCommands::Expenses { format, output } => {
            let mut writer = open_output(output.as_ref())?;
            match format {
                ExportFormat::Csv => csv::export_expenses_csv(&store.read_expenses()?, &mut writer)?,
                ExportFormat::Json => json::export_full_json(store, &mut writer, true)?,
                ExportFormat::Yaml => yaml::export_full_yaml(store, &mut writer)?,
            }
            finish(writer, output.as_ref())
        }

        ExportCommands::Stats { format, output } => {
            let Some(report) = StatsService::new(store, settings).stats_for(today)? else {
                return Err(PaycycleError::Validation(
                    "No budget set; there are no stats to export".into(),
                ));
            };

            let mut writer = open_output(output.as_ref())?;
            match format {
                ExportFormat::Csv => csv::export_weekly_csv(&report, &mut writer)?,
                ExportFormat::Json => json::export_stats_json(&report, &mut writer, true)?,
                ExportFormat::Yaml => yaml::export_stats_yaml(&report, &mut writer)?,
            }
            finish(writer, output.as_ref())
        }
    }
}

fn open_output(output: Option<&PathBuf>) -> PaycycleResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                PaycycleError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn finish(mut writer: Box<dyn Write>, output: Option<&PathBuf>) -> PaycycleResult<()> {
    writer
        .flush()
        .map_err(|e| PaycycleError::Export(e.to_string()))?;

    if let Some(path) = output {
        println!("Exported to: {}", path.display());
    } else {
        // JSON writers leave the last line open
        println!();
    }
    Ok(())
}
