//! Calendar module for paycycle
//!
//! Holiday calendars and the business-day resolver built on top of them.

pub mod business_day;
pub mod holidays;

pub use business_day::{is_weekend, BusinessDayResolver};
pub use holidays::{
    calendar_from_settings, FixedHolidays, HolidayCalendar, NoHolidays, RegionalCalendar,
};
