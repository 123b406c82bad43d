//! Reports module for paycycle
//!
//! Spending by category, month-over-month trend and the weekly breakdown
//! of a cycle.

pub mod spending;
pub mod trend;
pub mod weekly;

pub use spending::{CategoryShare, SpendingReport};
pub use trend::{TrendReport, DEFAULT_TREND_MONTHS};
pub use weekly::WeeklyReport;
