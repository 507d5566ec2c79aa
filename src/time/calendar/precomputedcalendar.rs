use std::collections::HashSet;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendardate::CalendarDate;
use crate::time::rangeofdates::RangeOfDates;

/// Freezes another calendar over an inclusive range of years.
///
/// Each year is stored as a 366-bit set (3 × u128) of day-of-year flags, so a
/// lookup inside the range is a single bit test. Dates outside the range are
/// delegated to the wrapped calendar.
pub struct PrecomputedCalendar<C: HolidayCalendar> {
    raw_calendar: C,
    start_year: i32,
    precomputed_bits: Vec<YearBitset>,
}

#[derive(Clone)]
struct YearBitset {
    bits: [u128; 3],
}

impl YearBitset {
    fn new() -> Self {
        YearBitset { bits: [0; 3] }
    }

    #[inline]
    fn set(&mut self, day_of_year: u32) {
        let block = (day_of_year / 128) as usize;
        let bit = day_of_year % 128;
        if block < 3 {
            self.bits[block] |= 1u128 << bit;
        }
    }

    #[inline]
    fn is_set(&self, day_of_year: u32) -> bool {
        let block = (day_of_year / 128) as usize;
        let bit = day_of_year % 128;
        block < 3 && (self.bits[block] & (1u128 << bit)) != 0
    }

    fn from_calendar<C: HolidayCalendar>(calendar: &C, year: i32) -> Self {
        let mut bitset = YearBitset::new();
        for date in calendar.get_holiday_set(year) {
            if date.year() == year {
                bitset.set(date.ordinal0());
            }
        }
        bitset
    }

    fn count_holidays(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }
}

impl<C: HolidayCalendar> PrecomputedCalendar<C> {
    /// Precomputes `[start_year, end_year]`; an inverted range precomputes
    /// nothing and every query falls through to `raw_calendar`.
    pub fn new(raw_calendar: C, start_year: i32, end_year: i32) -> PrecomputedCalendar<C> {
        let n_years = (end_year - start_year + 1).max(0) as usize;
        let mut precomputed_bits = Vec::with_capacity(n_years);

        for year in start_year..=end_year {
            precomputed_bits.push(YearBitset::from_calendar(&raw_calendar, year));
        }

        PrecomputedCalendar {
            raw_calendar,
            start_year,
            precomputed_bits,
        }
    }

    pub fn raw_calendar(&self) -> &C {
        &self.raw_calendar
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + (self.len() as i32) - 1
    }

    pub fn len(&self) -> usize {
        self.precomputed_bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.precomputed_bits.is_empty()
    }

    pub fn in_precomputation_range(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year()
    }

    /// Holidays stored for `year`, or `None` outside the range.
    pub fn holiday_count(&self, year: i32) -> Option<u32> {
        self.in_precomputation_range(year)
            .then(|| self.precomputed_bits[(year - self.start_year) as usize].count_holidays())
    }
}

impl<C: HolidayCalendar> HolidayCalendar for PrecomputedCalendar<C> {
    #[inline]
    fn is_holiday(&self, d: CalendarDate) -> bool {
        if self.in_precomputation_range(d.year()) {
            let index = (d.year() - self.start_year) as usize;
            self.precomputed_bits[index].is_set(d.ordinal0())
        } else {
            self.raw_calendar.is_holiday(d)
        }
    }

    fn get_holiday_set(&self, year: i32) -> HashSet<CalendarDate> {
        if self.in_precomputation_range(year) {
            let bitset = &self.precomputed_bits[(year - self.start_year) as usize];
            RangeOfDates::of_year(year)
                .map(|days| days.iter().filter(|d| bitset.is_set(d.ordinal0())).collect())
                .unwrap_or_default()
        } else {
            self.raw_calendar.get_holiday_set(year)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::validator::holidayvalidator::HolidayValidator;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::try_new(y, m, d).unwrap()
    }

    #[test]
    fn agrees_with_wrapped_validator() {
        let mut validator = HolidayValidator::trnc(false);
        validator.add_custom_holiday(ymd(2025, 12, 25), true, false);
        let precomputed = PrecomputedCalendar::new(validator.clone(), 2024, 2026);

        assert_eq!(precomputed.len(), 3);
        assert_eq!(precomputed.end_year(), 2026);
        for d in RangeOfDates::new(ymd(2023, 12, 1), ymd(2027, 1, 31)).iter() {
            assert_eq!(precomputed.is_holiday(d), validator.is_holiday(d), "{d}");
        }
        assert_eq!(precomputed.get_holiday_set(2025), validator.get_holiday_set(2025));
        assert_eq!(
            precomputed.holiday_count(2025),
            Some(validator.get_holiday_set(2025).len() as u32)
        );
        assert_eq!(precomputed.holiday_count(2030), None);
    }

    #[test]
    fn inverted_range_is_empty() {
        let precomputed = PrecomputedCalendar::new(HolidayValidator::default(), 2030, 2020);
        assert!(precomputed.is_empty());
        assert!(!precomputed.in_precomputation_range(2025));
        assert!(precomputed.is_holiday(ymd(2025, 1, 1)));
    }
}
