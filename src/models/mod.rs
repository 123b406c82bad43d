//! Core data models for paycycle
//!
//! Stored records (budget, expenses, categories) and the derived structures
//! computed from them (cycles, weekly windows, stats).

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod window;

pub use budget::Budget;
pub use category::{Category, DefaultCategory};
pub use expense::Expense;
pub use ids::{BudgetId, CategoryId, ExpenseId};
pub use money::Money;
pub use window::{BudgetStats, CycleBounds, DateRange, WeeklyBudget, Window};
