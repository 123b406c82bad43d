//! Injectable "today"
//!
//! The engine never reads the wall clock itself. Callers pass a date, and the
//! service layer gets it from a `Clock` so tests can pin it.

use chrono::{Local, NaiveDate};

/// Source of the current date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
