//! Holiday calendars
//!
//! A calendar answers one question: is this date a public holiday in the
//! configured region? Weekends are handled by the business-day resolver, not
//! here.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::config::Settings;
use crate::error::{PaycycleError, PaycycleResult};

/// Source of public holidays for a single region
pub trait HolidayCalendar {
    /// Whether `date` is a public holiday
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// Region code this calendar answers for
    fn region(&self) -> &str {
        ""
    }
}

impl<F> HolidayCalendar for F
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// Weekends only, no holidays at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// An explicit list of holiday dates
#[derive(Debug, Clone, Default)]
pub struct FixedHolidays {
    dates: BTreeSet<NaiveDate>,
}

impl FixedHolidays {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl HolidayCalendar for FixedHolidays {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// Fixed-date public holidays as (month, day)
const KR_FIXED: &[(u32, u32)] = &[
    (1, 1),   // New Year's Day
    (3, 1),   // Independence Movement Day
    (5, 5),   // Children's Day
    (6, 6),   // Memorial Day
    (8, 15),  // Liberation Day
    (10, 3),  // National Foundation Day
    (10, 9),  // Hangul Day
    (12, 25), // Christmas
];

const US_FIXED: &[(u32, u32)] = &[
    (1, 1),   // New Year's Day
    (6, 19),  // Juneteenth
    (7, 4),   // Independence Day
    (11, 11), // Veterans Day
    (12, 25), // Christmas
];

/// Region codes with a built-in holiday table
pub const SUPPORTED_REGIONS: &[&str] = &["KR", "US", "NONE"];

/// Fixed-date holidays for a region plus user-supplied extra dates
///
/// Lunar and other movable holidays differ year to year; they are expected
/// in `extra` (the `extra_holidays` setting).
#[derive(Debug, Clone)]
pub struct RegionalCalendar {
    region: String,
    fixed: &'static [(u32, u32)],
    extra: FixedHolidays,
}

impl RegionalCalendar {
    /// Build the calendar for a region code (case-insensitive)
    pub fn for_region(
        region: &str,
        extra: impl IntoIterator<Item = NaiveDate>,
    ) -> PaycycleResult<Self> {
        let code = region.trim().to_ascii_uppercase();
        let fixed: &'static [(u32, u32)] = match code.as_str() {
            "KR" => KR_FIXED,
            "US" => US_FIXED,
            "NONE" => &[],
            _ => {
                return Err(PaycycleError::Config(format!(
                    "Unsupported holiday region '{}' (supported: {})",
                    region,
                    SUPPORTED_REGIONS.join(", ")
                )))
            }
        };

        Ok(Self {
            region: code,
            fixed,
            extra: FixedHolidays::new(extra),
        })
    }
}

impl HolidayCalendar for RegionalCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.fixed
            .iter()
            .any(|&(m, d)| date.month() == m && date.day() == d)
            || self.extra.is_holiday(date)
    }

    fn region(&self) -> &str {
        &self.region
    }
}

/// Build the calendar described by the user's settings
pub fn calendar_from_settings(settings: &Settings) -> PaycycleResult<RegionalCalendar> {
    RegionalCalendar::for_region(&settings.region, settings.extra_holidays.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_korean_fixed_holidays() {
        let cal = RegionalCalendar::for_region("kr", []).unwrap();
        assert_eq!(cal.region(), "KR");
        assert!(cal.is_holiday(date(2024, 3, 1)));
        assert!(cal.is_holiday(date(2025, 10, 9)));
        assert!(!cal.is_holiday(date(2024, 3, 4)));
    }

    #[test]
    fn test_us_fixed_holidays() {
        let cal = RegionalCalendar::for_region("US", []).unwrap();
        assert!(cal.is_holiday(date(2024, 1, 1)));
        assert!(cal.is_holiday(date(2024, 6, 19)));
        assert!(cal.is_holiday(date(2024, 12, 25)));
        assert!(!cal.is_holiday(date(2024, 6, 18)));
    }

    #[test]
    fn test_extra_holidays() {
        let chuseok = date(2024, 9, 17);
        let cal = RegionalCalendar::for_region("KR", [chuseok]).unwrap();
        assert!(cal.is_holiday(chuseok));
    }

    #[test]
    fn test_unknown_region_is_config_error() {
        let err = RegionalCalendar::for_region("XX", []).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_closure_calendar() {
        let always = |_: NaiveDate| true;
        assert!(always.is_holiday(date(2024, 1, 2)));
        assert!(!NoHolidays.is_holiday(date(2024, 1, 1)));
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        settings.region = "US".into();
        settings.extra_holidays = vec![date(2024, 11, 28)];

        let cal = calendar_from_settings(&settings).unwrap();
        assert!(cal.is_holiday(date(2024, 7, 4)));
        assert!(cal.is_holiday(date(2024, 11, 28)));
    }
}
