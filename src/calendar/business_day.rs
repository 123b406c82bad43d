//! Business-day resolution
//!
//! A business day is a weekday that the holiday calendar does not list. Day
//! searches are bounded so a calendar that marks everything as a holiday
//! yields a configuration error instead of an endless loop.

use chrono::{Datelike, NaiveDate, Weekday};

use super::holidays::HolidayCalendar;
use crate::error::{PaycycleError, PaycycleResult};

/// Default number of days a search may step before giving up
pub const DEFAULT_MAX_LOOKBACK: u32 = 10;

/// Whether `date` is a Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Answers business-day questions against a holiday calendar
pub struct BusinessDayResolver<'a> {
    calendar: &'a dyn HolidayCalendar,
    max_lookback: u32,
}

impl<'a> BusinessDayResolver<'a> {
    /// Create a resolver with the default search bound
    pub fn new(calendar: &'a dyn HolidayCalendar) -> Self {
        Self::with_max_lookback(calendar, DEFAULT_MAX_LOOKBACK)
    }

    /// Create a resolver with a custom search bound
    pub fn with_max_lookback(calendar: &'a dyn HolidayCalendar, max_lookback: u32) -> Self {
        Self {
            calendar,
            max_lookback,
        }
    }

    pub fn max_lookback(&self) -> u32 {
        self.max_lookback
    }

    /// Whether `date` is a weekday that is not a holiday
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.calendar.is_holiday(date)
    }

    /// The latest business day at or before `date`
    ///
    /// # Errors
    ///
    /// `Config` if no business day exists within `max_lookback` days.
    pub fn previous_business_day(&self, date: NaiveDate) -> PaycycleResult<NaiveDate> {
        let mut candidate = date;
        for _ in 0..=self.max_lookback {
            if self.is_business_day(candidate) {
                if candidate != date {
                    tracing::debug!(from = %date, to = %candidate, "moved to business day");
                }
                return Ok(candidate);
            }
            candidate = match candidate.pred_opt() {
                Some(prev) => prev,
                None => break,
            };
        }

        tracing::warn!(
            %date,
            max_lookback = self.max_lookback,
            region = self.calendar.region(),
            "no business day found"
        );
        Err(PaycycleError::Config(format!(
            "No business day within {} days before {} (check the holiday calendar)",
            self.max_lookback, date
        )))
    }
}
