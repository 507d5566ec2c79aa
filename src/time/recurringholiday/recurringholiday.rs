use std::collections::HashSet;

use crate::time::calendardate::CalendarDate;


pub trait RecurringHoliday: Send + Sync {

    fn get_holiday(&self, year: i32) -> HashSet<CalendarDate>;

    fn is_holiday(&self, d: &CalendarDate) -> bool {
        let holiday_set = self.get_holiday(d.year());
        holiday_set.contains(d)
    }
}
