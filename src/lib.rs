//! paycycle - payday-aligned monthly budgeting
//!
//! A monthly budget runs from a chosen start day (moved back to the previous
//! business day when it lands on a weekend or public holiday) until the day
//! before the next cycle's start. The cycle is split into weekly windows, the
//! budget is divided across them and expenses are totalled per window and per
//! category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `calendar`: Holiday calendars and the business-day resolver
//! - `engine`: Cycle bounds, weekly partitioning, allocation and aggregation
//! - `models`: Budget, expense, category and stats types
//! - `storage`: The `BudgetStore` trait with JSON file and in-memory backends
//! - `services`: Business logic on top of a store
//! - `config`: Paths and user settings
//! - `display`, `reports`, `export`, `cli`: Output surfaces
//!
//! # Example
//!
//! ```rust,ignore
//! use paycycle::config::{paths::PaycyclePaths, settings::Settings};
//! use paycycle::services::StatsService;
//! use paycycle::storage::JsonStorage;
//!
//! let paths = PaycyclePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = JsonStorage::open(paths)?;
//! let report = StatsService::new(&storage, &settings).stats_for(today)?;
//! ```

pub mod calendar;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PaycycleError, PaycycleResult};
