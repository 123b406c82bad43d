//! Budget cycle bounds
//!
//! A cycle starts on the user's pay-day, moved back to the nearest business
//! day, and nominally runs for one calendar month minus a day.
//!
//! Consecutive cycles tile the calendar: a cycle ends the day before the next
//! month's resolved start. That differs from the nominal `cycle_end` only
//! when the two starts were moved back by different amounts, which would
//! otherwise leave a gap day in no cycle or a day in two.
//!
//! When `start_day` is past the end of the target month (31 in April, 30 in
//! February) it is clamped to that month's last day before the business-day
//! adjustment. `cycle_end` follows chrono's month arithmetic, which also
//! clamps: a cycle starting on 2024-01-31 ends on 2024-02-28.

use chrono::{Datelike, Months, NaiveDate};

use crate::calendar::BusinessDayResolver;
use crate::error::{PaycycleError, PaycycleResult};
use crate::models::budget::validate_start_day;
use crate::models::CycleBounds;

/// Last calendar day of `year`-`month`
pub fn last_day_of_month(year: i32, month: u32) -> PaycycleResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| PaycycleError::Validation(format!("Invalid month: {}-{:02}", year, month)))
}

/// The naive start date for a month, with `start_day` clamped to the month
pub fn naive_cycle_start(year: i32, month: u32, start_day: u32) -> PaycycleResult<NaiveDate> {
    validate_start_day(start_day).map_err(|e| PaycycleError::Validation(e.to_string()))?;

    let last = last_day_of_month(year, month)?;
    let day = start_day.min(last.day());
    if day != start_day {
        tracing::debug!(year, month, start_day, clamped = day, "start day clamped to month end");
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| PaycycleError::Validation(format!("Invalid date: {}-{:02}-{:02}", year, month, day)))
}

/// Resolve the first day of the cycle that begins in `year`-`month`
///
/// Returns the naive date unchanged when it is a business day, otherwise the
/// closest earlier business day.
pub fn resolve_cycle_start(
    resolver: &BusinessDayResolver<'_>,
    year: i32,
    month: u32,
    start_day: u32,
) -> PaycycleResult<NaiveDate> {
    let naive = naive_cycle_start(year, month, start_day)?;
    if resolver.is_business_day(naive) {
        return Ok(naive);
    }
    resolver.previous_business_day(naive)
}

/// Last day of a cycle: `start + 1 month - 1 day`
pub fn cycle_end(start: NaiveDate) -> PaycycleResult<NaiveDate> {
    start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| PaycycleError::Validation(format!("Date out of range: {}", start)))
}

/// Bounds of the cycle that begins in `year`-`month`
///
/// The end is the day before the following month's resolved start.
pub fn cycle_bounds(
    resolver: &BusinessDayResolver<'_>,
    year: i32,
    month: u32,
    start_day: u32,
) -> PaycycleResult<CycleBounds> {
    let start = resolve_cycle_start(resolver, year, month, start_day)?;
    let (next_year, next_month) = shift_month(year, month, 1);
    let next_start = resolve_cycle_start(resolver, next_year, next_month, start_day)?;
    let end = next_start
        .pred_opt()
        .ok_or_else(|| PaycycleError::Validation(format!("Date out of range: {}", next_start)))?;

    let nominal = cycle_end(start)?;
    if end != nominal {
        tracing::debug!(%start, %nominal, %end, "cycle end aligned to next start");
    }
    tracing::debug!(%start, %end, "resolved cycle");
    Ok(CycleBounds::new(start, end))
}

/// The cycle covering `date`
///
/// Cycles tile the calendar, so this is the one with the latest start on or
/// before `date`. The next month's cycle is checked first, since moving its
/// start back to a business day can pull it into `date`'s month.
pub fn cycle_containing(
    resolver: &BusinessDayResolver<'_>,
    date: NaiveDate,
    start_day: u32,
) -> PaycycleResult<CycleBounds> {
    let (year, month) = (date.year(), date.month());

    for delta in [1, 0, -1, -2] {
        let (y, m) = shift_month(year, month, delta);
        let bounds = cycle_bounds(resolver, y, m, start_day)?;
        if bounds.contains(date) {
            return Ok(bounds);
        }
    }

    Err(PaycycleError::Config(format!(
        "No cycle with start day {} covers {}",
        start_day, date
    )))
}

/// Add `delta` months to a (year, month) pair
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}
