use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::jurisdiction::jurisdiction::Jurisdiction;
use crate::jurisdiction::ruleset::RuleSet;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendardate::CalendarDate;
use crate::time::rangeofdates::RangeOfDates;

use super::customholiday::CustomHoliday;

/// The rule that made a date a holiday, in evaluation order.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HolidayKind {
    Weekend,
    Fixed,
    Lunar,
    Custom
}

/// Decides whether a date is a holiday for one jurisdiction.
///
/// A date is a holiday when any of four independent rules matches: the
/// weekly rest day(s), the jurisdiction's fixed month-day holidays, its
/// lunar observances, or a custom holiday registered on this instance.
///
/// Custom holidays are registered through `&mut self`; once a validator is
/// shared (for example behind an `Arc`) it can only be queried.
#[derive(Debug, Clone)]
pub struct HolidayValidator {
    include_saturday_as_weekend: bool,
    rules: Arc<RuleSet>,
    custom_holidays: HashSet<CustomHoliday>
}

impl HolidayValidator {
    /// Validator over the Turkish rules.
    pub fn new(include_saturday_as_weekend: bool) -> HolidayValidator {
        HolidayValidator::turkey(include_saturday_as_weekend)
    }

    pub fn turkey(include_saturday_as_weekend: bool) -> HolidayValidator {
        Jurisdiction::Turkey.validator(include_saturday_as_weekend)
    }

    pub fn trnc(include_saturday_as_weekend: bool) -> HolidayValidator {
        Jurisdiction::Trnc.validator(include_saturday_as_weekend)
    }

    pub fn with_rules(rules: Arc<RuleSet>, include_saturday_as_weekend: bool) -> HolidayValidator {
        HolidayValidator {
            include_saturday_as_weekend,
            rules,
            custom_holidays: HashSet::new()
        }
    }

    pub fn include_saturday_as_weekend(&self) -> bool {
        self.include_saturday_as_weekend
    }

    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    pub fn custom_holidays(&self) -> &HashSet<CustomHoliday> {
        &self.custom_holidays
    }

    /// Registers a custom holiday. Returns `false` if the identical triple
    /// was already registered, in which case nothing changes.
    pub fn add_custom_holiday(&mut self, date: CalendarDate, recurring: bool, lunar_linked: bool) -> bool {
        let inserted = self.custom_holidays.insert(CustomHoliday::new(date, recurring, lunar_linked));
        debug!(
            jurisdiction = self.rules.name(),
            %date,
            recurring,
            lunar_linked,
            duplicate = !inserted,
            "custom holiday registered"
        );
        inserted
    }

    pub fn is_holiday(&self, d: CalendarDate) -> bool {
        self.classify(d).is_some()
    }

    /// First matching rule, cheapest check first.
    pub fn classify(&self, d: CalendarDate) -> Option<HolidayKind> {
        if self.is_weekend(d) {
            Some(HolidayKind::Weekend)
        } else if self.is_fixed_holiday(d) {
            Some(HolidayKind::Fixed)
        } else if self.is_lunar_holiday(d) {
            Some(HolidayKind::Lunar)
        } else if self.is_custom_holiday(d) {
            Some(HolidayKind::Custom)
        } else {
            None
        }
    }

    pub fn is_weekend(&self, d: CalendarDate) -> bool {
        let day_of_week = d.day_of_week();
        day_of_week == 0 || (self.include_saturday_as_weekend && day_of_week == 6)
    }

    pub fn is_fixed_holiday(&self, d: CalendarDate) -> bool {
        self.rules.is_fixed_holiday(&d)
    }

    pub fn is_lunar_holiday(&self, d: CalendarDate) -> bool {
        self.rules.is_lunar_holiday(&d)
    }

    pub fn lunar_observances(&self, year: i32) -> HashSet<CalendarDate> {
        self.rules.lunar_observances(year)
    }

    /// A custom holiday matches on its own date (month-day only when
    /// recurring). A lunar-linked one additionally matches when its stored
    /// date lies in the lunar observances of that date's year. That second
    /// condition ignores `d`, so such an entry then matches every date.
    pub fn is_custom_holiday(&self, d: CalendarDate) -> bool {
        self.custom_holidays.iter().any(|holiday| {
            holiday.matches_date(&d)
                || (holiday.lunar_linked && self.is_lunar_holiday(holiday.date))
        })
    }
}

impl Default for HolidayValidator {
    fn default() -> Self {
        HolidayValidator::new(false)
    }
}

impl HolidayCalendar for HolidayValidator {
    fn is_holiday(&self, d: CalendarDate) -> bool {
        HolidayValidator::is_holiday(self, d)
    }

    fn get_holiday_set(&self, year: i32) -> HashSet<CalendarDate> {
        RangeOfDates::of_year(year)
            .map(|days| days.iter().filter(|d| HolidayValidator::is_holiday(self, *d)).collect())
            .unwrap_or_default()
    }
}
