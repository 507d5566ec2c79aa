use std::collections::HashSet;

use chrono::{Days, Months, NaiveDate};

use crate::time::calendardate::CalendarDate;

const ONE_DAY: Days = Days::new(1);

/// Navigation methods return `None` once a walk leaves chrono's
/// representable date range.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: CalendarDate) -> bool;

    /// Every date of `year` classified as a holiday, weekends included.
    fn get_holiday_set(&self, year: i32) -> HashSet<CalendarDate>;

    fn is_business_day(&self, d: CalendarDate) -> bool {
        !self.is_holiday(d)
    }

    /// Moves `n` business days away from `horizon`; `horizon` itself is not
    /// counted. Loops forever on a calendar with no business days.
    fn shift_n_business_day(&self, horizon: CalendarDate, n: i32) -> Option<CalendarDate> {
        let shift_one_day = if n >= 0 {
            |d: NaiveDate| d.checked_add_days(ONE_DAY)
        } else {
            |d: NaiveDate| d.checked_sub_days(ONE_DAY)
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d.naive_date())?.into();
            m -= self.is_business_day(d) as u32;
        }
        Some(d)
    }

    fn next_business_day(&self, d: CalendarDate) -> Option<CalendarDate> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: CalendarDate) -> Option<CalendarDate> {
        self.shift_n_business_day(d, -1)
    }

    fn last_business_day_of_month(&self, year: i32, month: u32) -> Option<CalendarDate> {
        let fom = NaiveDate::from_ymd_opt(year, month, 1)?;
        let mut eom: CalendarDate = fom
            .checked_add_months(Months::new(1))?
            .checked_sub_days(ONE_DAY)?
            .into();
        while self.is_holiday(eom) {
            eom = eom.naive_date().checked_sub_days(ONE_DAY)?.into();
        }
        Some(eom)
    }

    fn first_business_day_of_month(&self, year: i32, month: u32) -> Option<CalendarDate> {
        let mut fom: CalendarDate = NaiveDate::from_ymd_opt(year, month, 1)?.into();
        while self.is_holiday(fom) {
            fom = fom.naive_date().checked_add_days(ONE_DAY)?.into();
        }
        Some(fom)
    }
}
