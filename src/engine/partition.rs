//! Week partitioning
//!
//! Splits a cycle into consecutive weekly windows. Two alignments exist and
//! the choice is an explicit setting:
//!
//! - [`WeekPolicy::AnchorDay`] (default): windows start on the cycle start and
//!   every 7 days after; the last window is clipped to the cycle end. Windows
//!   never extend past the cycle, so their count is the "N weeks" the budget
//!   is split across.
//! - [`WeekPolicy::CalendarWeek`]: windows are Monday-Sunday weeks. The first
//!   window may begin before the cycle start and the last may end after the
//!   cycle end.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PaycycleError, PaycycleResult};
use crate::models::Window;

/// Number of days in a full window
pub const WINDOW_DAYS: u64 = 7;

/// How windows are aligned inside a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeekPolicy {
    /// Windows start on the cycle start day
    #[default]
    AnchorDay,
    /// Windows snap to Monday-Sunday weeks
    CalendarWeek,
}

impl fmt::Display for WeekPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnchorDay => write!(f, "anchor-day"),
            Self::CalendarWeek => write!(f, "calendar-week"),
        }
    }
}

impl FromStr for WeekPolicy {
    type Err = PaycycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "anchor-day" | "anchor" => Ok(Self::AnchorDay),
            "calendar-week" | "calendar" | "iso" => Ok(Self::CalendarWeek),
            other => Err(PaycycleError::Validation(format!(
                "Unknown week policy '{}' (expected anchor-day or calendar-week)",
                other
            ))),
        }
    }
}

/// Divide `[start, end]` into windows under `policy`
///
/// Always returns at least one window. Windows are in date order, contiguous
/// and non-overlapping.
///
/// # Errors
///
/// `Validation` if `end` is before `start`.
pub fn partition(start: NaiveDate, end: NaiveDate, policy: WeekPolicy) -> PaycycleResult<Vec<Window>> {
    if end < start {
        return Err(PaycycleError::Validation(format!(
            "Range end {} is before start {}",
            end, start
        )));
    }

    let windows = match policy {
        WeekPolicy::AnchorDay => anchor_windows(start, end),
        WeekPolicy::CalendarWeek => calendar_windows(start, end),
    };

    tracing::debug!(%start, %end, %policy, count = windows.len(), "partitioned cycle");
    Ok(windows)
}

fn anchor_windows(start: NaiveDate, end: NaiveDate) -> Vec<Window> {
    let mut windows = Vec::with_capacity(6);
    let mut cursor = start;

    loop {
        let full_end = cursor
            .checked_add_days(Days::new(WINDOW_DAYS - 1))
            .unwrap_or(NaiveDate::MAX);
        let window_end = full_end.min(end);
        windows.push(Window::new(cursor, window_end));

        match window_end.succ_opt() {
            Some(next) if next <= end => cursor = next,
            _ => break,
        }
    }

    windows
}

fn calendar_windows(start: NaiveDate, end: NaiveDate) -> Vec<Window> {
    let mut windows = Vec::with_capacity(6);
    let offset = u64::from(start.weekday().num_days_from_monday());
    let mut monday = start.checked_sub_days(Days::new(offset)).unwrap_or(start);

    while monday <= end {
        let sunday = monday
            .checked_add_days(Days::new(WINDOW_DAYS - 1))
            .unwrap_or(NaiveDate::MAX);
        windows.push(Window::new(monday, sunday));

        monday = match sunday.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_contiguous(windows: &[Window]) {
        for pair in windows.windows(2) {
            assert_eq!(pair[0].end.succ_opt().unwrap(), pair[1].start);
        }
    }

    #[test]
    fn test_anchor_day_thirty_day_cycle() {
        // 2024-04-05..2024-05-04 is 30 days: 7/7/7/7/2
        let windows = partition(date(2024, 4, 5), date(2024, 5, 4), WeekPolicy::AnchorDay).unwrap();

        assert_eq!(windows.len(), 5);
        assert_eq!(windows[0], Window::new(date(2024, 4, 5), date(2024, 4, 11)));
        assert_eq!(windows[4], Window::new(date(2024, 5, 3), date(2024, 5, 4)));
        let lengths: Vec<_> = windows.iter().map(|w| w.days()).collect();
        assert_eq!(lengths, vec![7, 7, 7, 7, 2]);
        assert_contiguous(&windows);
    }

    #[test]
    fn test_anchor_day_exact_four_weeks() {
        // February 2023 from the 1st: 28 days, no remainder window
        let windows = partition(date(2023, 2, 1), date(2023, 2, 28), WeekPolicy::AnchorDay).unwrap();
        assert_eq!(windows.len(), 4);
        assert_eq!(windows.last().unwrap().end, date(2023, 2, 28));
        assert!(windows.iter().all(|w| w.days() == 7));
    }

    #[test]
    fn test_anchor_day_covers_cycle_exactly() {
        let start = date(2024, 1, 31);
        let end = date(2024, 3, 1);
        let windows = partition(start, end, WeekPolicy::AnchorDay).unwrap();

        assert_eq!(windows[0].start, start);
        assert_eq!(windows.last().unwrap().end, end);
        let covered: i64 = windows.iter().map(|w| w.days()).sum();
        assert_eq!(covered, (end - start).num_days() + 1);
        assert_contiguous(&windows);
    }

    #[test]
    fn test_short_range_yields_single_window() {
        let windows = partition(date(2024, 3, 5), date(2024, 3, 7), WeekPolicy::AnchorDay).unwrap();
        assert_eq!(windows, vec![Window::new(date(2024, 3, 5), date(2024, 3, 7))]);

        let single_day = partition(date(2024, 3, 5), date(2024, 3, 5), WeekPolicy::AnchorDay).unwrap();
        assert_eq!(single_day.len(), 1);
    }

    #[test]
    fn test_calendar_week_snaps_to_mondays() {
        // 2024-03-05 is a Tuesday, 2024-04-04 is a Thursday
        let windows =
            partition(date(2024, 3, 5), date(2024, 4, 4), WeekPolicy::CalendarWeek).unwrap();

        assert_eq!(windows[0].start, date(2024, 3, 4));
        assert_eq!(windows.last().unwrap().end, date(2024, 4, 7));
        assert_eq!(windows.len(), 5);
        assert!(windows.iter().all(|w| w.start.weekday() == Weekday::Mon));
        assert!(windows.iter().all(|w| w.days() == 7));
        assert_contiguous(&windows);
    }

    #[test]
    fn test_calendar_week_starting_on_monday() {
        let windows =
            partition(date(2024, 3, 4), date(2024, 3, 10), WeekPolicy::CalendarWeek).unwrap();
        assert_eq!(windows, vec![Window::new(date(2024, 3, 4), date(2024, 3, 10))]);
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = partition(date(2024, 3, 5), date(2024, 3, 4), WeekPolicy::AnchorDay).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_policy_parse_and_serde() {
        assert_eq!("anchor-day".parse::<WeekPolicy>().unwrap(), WeekPolicy::AnchorDay);
        assert_eq!("calendar_week".parse::<WeekPolicy>().unwrap(), WeekPolicy::CalendarWeek);
        assert!("fortnight".parse::<WeekPolicy>().is_err());

        let json = serde_json::to_string(&WeekPolicy::CalendarWeek).unwrap();
        assert_eq!(json, "\"calendar_week\"");
    }
}
