use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDateError {
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },

    #[error("invalid day: {day} for {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    #[error("no such month-day: {month:02}-{day:02}")]
    InvalidMonthDay { month: u32, day: u32 },

    #[error("year {year} is outside the supported chrono range")]
    OutOfRange { year: i32 },

    #[error("cannot parse '{input}' as YYYY-MM-DD")]
    Parse { input: String },
}

/// A Gregorian calendar date backed by `chrono::NaiveDate`, so it is always
/// normalized.
///
/// Ordering, equality and hashing all follow the (year, month, day) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

fn shift_days(d: NaiveDate, n: i64) -> Option<NaiveDate> {
    if n >= 0 {
        d.checked_add_days(Days::new(n.unsigned_abs()))
    } else {
        d.checked_sub_days(Days::new(n.unsigned_abs()))
    }
}

fn shift_months(d: NaiveDate, n: i64) -> Option<NaiveDate> {
    let months = Months::new(u32::try_from(n.unsigned_abs()).ok()?);
    if n >= 0 {
        d.checked_add_months(months)
    } else {
        d.checked_sub_months(months)
    }
}

impl CalendarDate {
    /// Builds a date, rolling any month or day overflow (or underflow) into
    /// the neighbouring months and years.
    ///
    /// `CalendarDate::new(2024, 1, 32)` is 2024-02-01 and
    /// `CalendarDate::new(2024, 3, 0)` is 2024-02-29. Returns `None` when the
    /// result leaves chrono's representable range.
    pub fn new(year: i32, month: i64, day: i64) -> Option<CalendarDate> {
        let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let first_of_month = shift_months(jan_first, month.checked_sub(1)?)?;
        shift_days(first_of_month, day.checked_sub(1)?).map(CalendarDate)
    }

    /// Builds a date only if the triple is already a valid Gregorian date.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<CalendarDate, InvalidDateError> {
        if !(1..=12).contains(&month) {
            return Err(InvalidDateError::InvalidMonth { month });
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(InvalidDateError::OutOfRange { year });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or(InvalidDateError::InvalidDay { year, month, day })
    }

    /// Only for static tables; an invalid entry fails const evaluation.
    pub(crate) const fn from_ymd_const(year: i32, month: u32, day: u32) -> CalendarDate {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(d) => CalendarDate(d),
            None => panic!("invalid date in a static holiday table"),
        }
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn naive_date(&self) -> NaiveDate {
        self.0
    }

    /// `None` once the result leaves chrono's representable range.
    pub fn checked_add_days(&self, n: i64) -> Option<CalendarDate> {
        shift_days(self.0, n).map(CalendarDate)
    }

    /// Signed day count from `self` to `other`.
    pub fn days_until(&self, other: &CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub fn day_of_week(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn ordinal0(&self) -> u32 {
        self.0.ordinal0()
    }

    /// "MM-DD" key used for year-independent comparisons.
    pub fn format_month_day(&self) -> String {
        format!("{:02}-{:02}", self.month(), self.day())
    }

    pub fn same_month_day(&self, other: &CalendarDate) -> bool {
        self.month() == other.month() && self.day() == other.day()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for CalendarDate {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(CalendarDate)
            .map_err(|_| InvalidDateError::Parse { input: s.to_owned() })
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        CalendarDate(d)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(d: CalendarDate) -> Self {
        d.0
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::try_new(y, m, d).unwrap()
    }

    fn norm(y: i32, m: i64, d: i64) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn day_overflow_rolls_into_next_month() {
        assert_eq!(norm(2024, 1, 32), ymd(2024, 2, 1));
        assert_eq!(norm(2024, 2, 30), ymd(2024, 3, 1));
        assert_eq!(norm(2023, 2, 29), ymd(2023, 3, 1));
        assert_eq!(norm(2024, 12, 32), ymd(2025, 1, 1));
    }

    #[test]
    fn day_underflow_rolls_into_previous_month() {
        assert_eq!(norm(2024, 3, 0), ymd(2024, 2, 29));
        assert_eq!(norm(2024, 1, 0), ymd(2023, 12, 31));
        assert_eq!(norm(2024, 1, -364), ymd(2023, 1, 1));
    }

    #[test]
    fn month_overflow_rolls_years() {
        assert_eq!(norm(2024, 13, 1), ymd(2025, 1, 1));
        assert_eq!(norm(2024, 0, 15), ymd(2023, 12, 15));
        assert_eq!(norm(2024, -11, 1), ymd(2023, 1, 1));
        assert_eq!(norm(2024, 14, 31), ymd(2025, 3, 3));
    }

    #[test]
    fn add_days_crosses_year_boundaries() {
        assert_eq!(ymd(2024, 4, 10).checked_add_days(354), Some(ymd(2025, 3, 30)));
        assert_eq!(ymd(2024, 4, 10).checked_add_days(-354), Some(ymd(2023, 4, 22)));
        assert_eq!(ymd(2024, 12, 31).checked_add_days(1), Some(ymd(2025, 1, 1)));
        assert_eq!(ymd(2024, 12, 30).days_until(&ymd(2025, 1, 2)), 3);
    }

    #[test]
    fn extreme_years_do_not_wrap() {
        assert_eq!(CalendarDate::new(i32::MAX, 12, 31), None);
        assert_eq!(CalendarDate::new(i32::MIN, 1, 2), None);
        assert_eq!(CalendarDate::new(2024, i64::MAX, 1), None);
        assert_eq!(CalendarDate::new(2024, 1, i64::MIN), None);

        let last = CalendarDate::from(NaiveDate::MAX);
        assert_eq!(last.checked_add_days(1), None);
        let first = CalendarDate::from(NaiveDate::MIN);
        assert_eq!(first.checked_add_days(-1), None);
        assert_eq!(ymd(2024, 1, 1).checked_add_days(i64::MIN), None);
    }

    #[test]
    fn day_of_week_sunday_is_zero() {
        assert_eq!(ymd(2024, 4, 28).day_of_week(), 0);
        assert_eq!(ymd(2024, 4, 27).day_of_week(), 6);
        assert_eq!(ymd(2024, 1, 2).day_of_week(), 2);
        assert_eq!(ymd(2000, 1, 1).weekday(), Weekday::Sat);
    }

    #[test]
    fn try_new_rejects_malformed() {
        assert_eq!(
            CalendarDate::try_new(2024, 13, 1),
            Err(InvalidDateError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            CalendarDate::try_new(2023, 2, 29),
            Err(InvalidDateError::InvalidDay { year: 2023, month: 2, day: 29 })
        );
        assert_eq!(
            CalendarDate::try_new(i32::MAX, 1, 1),
            Err(InvalidDateError::OutOfRange { year: i32::MAX })
        );
        assert!(CalendarDate::try_new(2024, 1, 0).is_err());
    }

    #[test]
    fn ordinal_counts_from_zero() {
        assert_eq!(ymd(2024, 1, 1).ordinal0(), 0);
        assert_eq!(ymd(2024, 3, 1).ordinal0(), 60);
        assert_eq!(ymd(2023, 3, 1).ordinal0(), 59);
        assert_eq!(ymd(2024, 12, 31).ordinal0(), 365);
    }

    #[test]
    fn month_day_key_is_zero_padded() {
        assert_eq!(ymd(2024, 4, 3).format_month_day(), "04-03");
        assert!(ymd(2024, 12, 25).same_month_day(&ymd(1999, 12, 25)));
    }

    #[test]
    fn parse_and_display() {
        let d: CalendarDate = "2024-09-15".parse().unwrap();
        assert_eq!(d, ymd(2024, 9, 15));
        assert_eq!(d.to_string(), "2024-09-15");
        assert!("2024-02-30".parse::<CalendarDate>().is_err());
        assert!("not a date".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn serde_uses_iso_strings() {
        let d = ymd(2024, 8, 1);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-08-01\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn ordering_follows_triple() {
        assert!(ymd(2024, 1, 31) < ymd(2024, 2, 1));
        assert!(ymd(2023, 12, 31) < ymd(2024, 1, 1));
    }
}
