//! User settings for paycycle
//!
//! Holds the holiday region, the week alignment policy, the business-day
//! lookback bound and display preferences.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::PaycyclePaths;
use crate::engine::partition::WeekPolicy;
use crate::error::PaycycleError;

/// User settings for paycycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Region code used to look up public holidays
    #[serde(default = "default_region")]
    pub region: String,

    /// Additional non-business days (substitute or lunar holidays, closures)
    #[serde(default)]
    pub extra_holidays: Vec<NaiveDate>,

    /// How a cycle is divided into weekly windows
    #[serde(default)]
    pub week_policy: WeekPolicy,

    /// How many days the business-day search may step back before giving up
    #[serde(default = "default_max_lookback_days")]
    pub max_lookback_days: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Print the symbol after the amount ("1,000₩") instead of before
    #[serde(default)]
    pub currency_suffix: bool,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_region() -> String {
    "KR".to_string()
}

fn default_max_lookback_days() -> u32 {
    10
}

fn default_currency() -> String {
    "₩".to_string()
}

/// Date format used when none is configured or the configured one is unusable
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Format `date` with `format`, or `None` if the format string is unusable
fn try_format(date: NaiveDate, format: &str) -> Option<String> {
    use std::fmt::Write;

    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            region: default_region(),
            extra_holidays: Vec::new(),
            week_policy: WeekPolicy::default(),
            max_lookback_days: default_max_lookback_days(),
            currency_symbol: default_currency(),
            currency_suffix: false,
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PaycyclePaths) -> Result<Self, PaycycleError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PaycycleError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PaycycleError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<(), PaycycleError> {
        // Formatting a fixed date exercises every specifier, including ones
        // that need a time of day.
        let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        if self.date_format.is_empty() || try_format(sample, &self.date_format).is_none() {
            return Err(PaycycleError::Config(format!(
                "Invalid date_format '{}' in settings",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PaycyclePaths) -> Result<(), PaycycleError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PaycycleError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PaycycleError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format a date using the configured format
    ///
    /// Falls back to [`DEFAULT_DATE_FORMAT`] when the configured format fails.
    pub fn format_date(&self, date: NaiveDate) -> String {
        try_format(date, &self.date_format)
            .unwrap_or_else(|| date.format(DEFAULT_DATE_FORMAT).to_string())
    }
}
