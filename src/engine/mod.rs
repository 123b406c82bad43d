//! Budget-period engine
//!
//! Pure functions over already-loaded data: resolve the cycle, split it into
//! weekly windows, allocate the budget and total the spending. Nothing in
//! here touches storage or the wall clock.

pub mod aggregate;
pub mod allocation;
pub mod clock;
pub mod cycle;
pub mod partition;

pub use aggregate::{by_category, expenses_between, monthly_totals, CategoryTotal, MonthTotal};
pub use allocation::{allocate, build_stats, split_amount};
pub use clock::{Clock, FixedClock, SystemClock};
pub use cycle::{cycle_bounds, cycle_containing, cycle_end, resolve_cycle_start};
pub use partition::{partition, WeekPolicy};
