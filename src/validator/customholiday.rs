use serde::{Deserialize, Serialize};

use crate::time::calendardate::CalendarDate;

/// A caller-registered holiday.
///
/// Equality and hashing cover all three fields, so registering the same
/// triple twice leaves a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomHoliday {
    pub date: CalendarDate,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub lunar_linked: bool
}

impl CustomHoliday {
    pub fn new(date: CalendarDate, recurring: bool, lunar_linked: bool) -> CustomHoliday {
        CustomHoliday { date, recurring, lunar_linked }
    }

    /// Month-day match for recurring holidays, exact match otherwise.
    pub fn matches_date(&self, d: &CalendarDate) -> bool {
        if self.recurring {
            self.date.same_month_day(d)
        } else {
            self.date == *d
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::try_new(y, m, d).unwrap()
    }

    #[test]
    fn recurring_ignores_year() {
        let holiday = CustomHoliday::new(ymd(2024, 12, 25), true, false);
        assert!(holiday.matches_date(&ymd(2031, 12, 25)));
        assert!(!holiday.matches_date(&ymd(2031, 12, 26)));
    }

    #[test]
    fn single_occurrence_needs_exact_date() {
        let holiday = CustomHoliday::new(ymd(2024, 12, 25), false, false);
        assert!(holiday.matches_date(&ymd(2024, 12, 25)));
        assert!(!holiday.matches_date(&ymd(2025, 12, 25)));
    }

    #[test]
    fn flags_default_to_false() {
        let holiday: CustomHoliday = serde_json::from_str(r#"{ "date": "2024-05-05" }"#).unwrap();
        assert_eq!(holiday, CustomHoliday::new(ymd(2024, 5, 5), false, false));
    }
}
