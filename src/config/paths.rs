//! Path management for paycycle
//!
//! ## Path Resolution Order
//!
//! 1. `PAYCYCLE_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory: `$XDG_CONFIG_HOME/paycycle` or
//!    `~/.config/paycycle` on Unix, `%APPDATA%\paycycle` on Windows

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::PaycycleError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PAYCYCLE_DATA_DIR";

/// Manages all paths used by paycycle
#[derive(Debug, Clone)]
pub struct PaycyclePaths {
    /// Base directory for all paycycle data
    base_dir: PathBuf,
}

impl PaycyclePaths {
    /// Create a new PaycyclePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/configuration directory can be determined.
    pub fn new() -> Result<Self, PaycycleError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PaycyclePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to budget.json (the singleton budget record)
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PaycycleError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PaycycleError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PaycycleError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if paycycle has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PaycycleError> {
    let dirs = BaseDirs::new().ok_or_else(|| {
        PaycycleError::Config("Could not determine the home directory".into())
    })?;
    Ok(dirs.config_dir().join("paycycle"))
}
