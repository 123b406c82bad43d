//! Display formatting for terminal output
//!
//! Everything here returns a `String`; printing is left to the CLI.

pub mod budget;
pub mod category;
pub mod expense;
pub mod report;

pub use budget::{format_budget_details, format_cycle_preview, format_stats_summary};
pub use category::format_category_list;
pub use expense::{format_expense_details, format_expense_table, format_summary_line};
pub use report::{format_bar, format_money, format_percentage};
