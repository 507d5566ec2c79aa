use std::collections::HashSet;

use crate::time::calendardate::CalendarDate;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::lunarholiday::{compute_observances, LunarAnchor};

/// Resolved holiday data of one jurisdiction: its own entries plus
/// everything inherited from the jurisdiction it extends.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    fixed_holidays: Vec<FixedDateHoliday>,
    fixed_keys: HashSet<String>,
    lunar_anchors: Vec<LunarAnchor>
}

impl RuleSet {
    pub fn new(
        name: impl Into<String>,
        fixed_holidays: Vec<FixedDateHoliday>,
        lunar_anchors: Vec<LunarAnchor>
    ) -> RuleSet {
        let fixed_keys = fixed_holidays.iter().map(|h| h.month_day_key()).collect();
        RuleSet {
            name: name.into(),
            fixed_holidays,
            fixed_keys,
            lunar_anchors
        }
    }

    /// Builds a new rule set holding this one's entries followed by the
    /// additions. `self` is left untouched; duplicates are kept.
    pub fn extend(
        &self,
        name: impl Into<String>,
        fixed_additions: impl IntoIterator<Item = FixedDateHoliday>,
        lunar_additions: impl IntoIterator<Item = LunarAnchor>
    ) -> RuleSet {
        let fixed_holidays = self.fixed_holidays.iter().cloned().chain(fixed_additions).collect();
        let lunar_anchors = self.lunar_anchors.iter().cloned().chain(lunar_additions).collect();
        RuleSet::new(name, fixed_holidays, lunar_anchors)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fixed_holidays(&self) -> &[FixedDateHoliday] {
        &self.fixed_holidays
    }

    pub fn lunar_anchors(&self) -> &[LunarAnchor] {
        &self.lunar_anchors
    }

    pub fn is_fixed_holiday(&self, d: &CalendarDate) -> bool {
        self.fixed_keys.contains(&d.format_month_day())
    }

    pub fn lunar_observances(&self, year: i32) -> HashSet<CalendarDate> {
        compute_observances(&self.lunar_anchors, year)
    }

    /// Looks `d` up among the observances computed for `d`'s own year only.
    pub fn is_lunar_holiday(&self, d: &CalendarDate) -> bool {
        self.lunar_observances(d.year()).contains(d)
    }
}
