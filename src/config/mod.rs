//! Configuration module for paycycle
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (holiday region, week policy, display)

pub mod paths;
pub mod settings;

pub use paths::PaycyclePaths;
pub use settings::Settings;
