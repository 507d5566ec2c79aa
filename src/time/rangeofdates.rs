use chrono::{
    Days,
    NaiveDate
};

use crate::time::calendardate::CalendarDate;

/// Inclusive run of consecutive dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: CalendarDate,
    end_date: CalendarDate
}

impl RangeOfDates {
    pub fn new(d1: CalendarDate, d2: CalendarDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates {start_date: d2, end_date: d1}
        } else {
            RangeOfDates {start_date: d1, end_date: d2}
        }
    }

    /// `len` consecutive days beginning at `start_date`; a zero length is
    /// clamped to the single start day. `None` if the last day is not
    /// representable.
    pub fn starting_at(start_date: CalendarDate, len: u32) -> Option<RangeOfDates> {
        let end_date = start_date.checked_add_days(i64::from(len.max(1)) - 1)?;
        Some(RangeOfDates { start_date, end_date })
    }

    /// January 1st to December 31st of `year`.
    pub fn of_year(year: i32) -> Option<RangeOfDates> {
        let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let dec_last = NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(RangeOfDates::new(jan_first.into(), dec_last.into()))
    }

    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    pub fn end_date(&self) -> CalendarDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        (self.start_date.days_until(&self.end_date) + 1) as usize
    }

    pub fn contain(&self, d: CalendarDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0,
        }
    }

    pub fn to_vec(&self) -> Vec<CalendarDate> {
        self.iter().collect()
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize,
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let start = self.range_of_dates.start_date().naive_date();
            let result = start.checked_add_days(Days::new(self.index as u64)).map(CalendarDate::from);
            self.index += 1;
            result
        } else {
            None
        }
    }
}
