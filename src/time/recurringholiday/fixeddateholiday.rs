use std::borrow::Cow;
use std::collections::HashSet;

use crate::time::calendardate::{CalendarDate, InvalidDateError};

use super::recurringholiday::RecurringHoliday;

/// A holiday observed on the same month-day every year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    name: Cow<'static, str>
}

impl FixedDateHoliday {
    /// Fails when the month-day never occurs (Feb 29 is accepted).
    pub fn new(month: u32, day: u32, name: impl Into<Cow<'static, str>>) -> Result<FixedDateHoliday, InvalidDateError> {
        // 2000 is a leap year, so every month-day that can occur exists in it.
        match CalendarDate::try_new(2000, month, day) {
            Ok(_) => Ok(FixedDateHoliday { month, day, name: name.into() }),
            Err(InvalidDateError::InvalidMonth { month }) => Err(InvalidDateError::InvalidMonth { month }),
            Err(_) => Err(InvalidDateError::InvalidMonthDay { month, day }),
        }
    }

    pub(crate) const fn from_static(month: u32, day: u32, name: &'static str) -> FixedDateHoliday {
        FixedDateHoliday { month, day, name: Cow::Borrowed(name) }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Same "MM-DD" form as [`CalendarDate::format_month_day`].
    pub fn month_day_key(&self) -> String {
        format!("{:02}-{:02}", self.month, self.day)
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<CalendarDate> {
        CalendarDate::try_new(year, self.month, self.day)
            .into_iter()
            .collect()
    }

    fn is_holiday(&self, d: &CalendarDate) -> bool {
        d.month() == self.month && d.day() == self.day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::try_new(y, m, d).unwrap()
    }

    #[test]
    fn rejects_impossible_month_days() {
        assert_eq!(
            FixedDateHoliday::new(13, 1, "x"),
            Err(InvalidDateError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            FixedDateHoliday::new(4, 31, "x"),
            Err(InvalidDateError::InvalidMonthDay { month: 4, day: 31 })
        );
        assert!(FixedDateHoliday::new(2, 0, "x").is_err());
        assert!(FixedDateHoliday::new(2, 29, "leap day").is_ok());
    }

    #[test]
    fn recurs_every_year() {
        let holiday = FixedDateHoliday::new(10, 29, "Cumhuriyet Bayramı").unwrap();
        assert_eq!(holiday.month_day_key(), "10-29");
        for year in [1990, 2024, 2077] {
            let set = holiday.get_holiday(year);
            assert_eq!(set.len(), 1);
            assert!(holiday.is_holiday(&ymd(year, 10, 29)));
        }
        assert!(!holiday.is_holiday(&ymd(2024, 10, 28)));
    }

    #[test]
    fn leap_day_only_in_leap_years() {
        let holiday = FixedDateHoliday::new(2, 29, "leap day").unwrap();
        assert_eq!(holiday.get_holiday(2024).len(), 1);
        assert!(holiday.get_holiday(2023).is_empty());
    }
}
