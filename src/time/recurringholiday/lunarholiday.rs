use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::time::calendardate::CalendarDate;
use crate::time::rangeofdates::RangeOfDates;

use super::recurringholiday::RecurringHoliday;

/// Mean length of a lunar year in solar days.
pub const LUNAR_YEAR_DAYS: f64 = 354.36667;

/// Days to shift an anchor by when moving `year_delta` years away from its
/// reference year. Rounds half away from zero, so past and future years are
/// shifted symmetrically.
pub fn drift_days(year_delta: i64) -> i64 {
    (year_delta as f64 * LUNAR_YEAR_DAYS).round() as i64
}

/// One lunar observance as seen in a known reference year.
///
/// The reference year is the year of `anchor_date`. Other years are
/// approximated by a linear drift of [`LUNAR_YEAR_DAYS`] per year, which
/// loses accuracy the further the target year is from the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LunarAnchorJsonProp")]
pub struct LunarAnchor {
    name: Cow<'static, str>,
    #[serde(rename = "date")]
    anchor_date: CalendarDate,
    span_days: u32
}

#[derive(Deserialize)]
struct LunarAnchorJsonProp {
    name: String,
    date: CalendarDate,
    span_days: u32
}

impl TryFrom<LunarAnchorJsonProp> for LunarAnchor {
    type Error = String;

    fn try_from(json_prop: LunarAnchorJsonProp) -> Result<Self, Self::Error> {
        let name = json_prop.name.clone();
        LunarAnchor::new(json_prop.name, json_prop.date, json_prop.span_days)
            .ok_or_else(|| format!("lunar anchor '{}' must span at least one day", name))
    }
}

impl LunarAnchor {
    /// Returns `None` for an empty observance (`span_days == 0`).
    pub fn new(name: impl Into<Cow<'static, str>>, anchor_date: CalendarDate, span_days: u32) -> Option<LunarAnchor> {
        if span_days == 0 {
            None
        } else {
            Some(LunarAnchor { name: name.into(), anchor_date, span_days })
        }
    }

    pub(crate) const fn from_static(name: &'static str, anchor_date: CalendarDate, span_days: u32) -> LunarAnchor {
        LunarAnchor { name: Cow::Borrowed(name), anchor_date, span_days }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn anchor_date(&self) -> CalendarDate {
        self.anchor_date
    }

    pub fn span_days(&self) -> u32 {
        self.span_days
    }

    pub fn reference_year(&self) -> i32 {
        self.anchor_date.year()
    }

    /// Drift-adjusted first day of the observance computed for `year`, or
    /// `None` when the drift leaves the representable date range.
    pub fn start_in(&self, year: i32) -> Option<CalendarDate> {
        let year_delta = i64::from(year) - i64::from(self.reference_year());
        self.anchor_date.checked_add_days(drift_days(year_delta))
    }

    pub fn window(&self, year: i32) -> Option<RangeOfDates> {
        RangeOfDates::starting_at(self.start_in(year)?, self.span_days)
    }
}

impl RecurringHoliday for LunarAnchor {
    fn get_holiday(&self, year: i32) -> HashSet<CalendarDate> {
        self.window(year)
            .map(|window| window.iter().collect())
            .unwrap_or_default()
    }

    fn is_holiday(&self, d: &CalendarDate) -> bool {
        self.window(d.year()).is_some_and(|window| window.contain(*d))
    }
}

/// Every observed date produced by `anchors` when computed for `target_year`.
///
/// A window may spill past the end of `target_year`; those dates are kept.
/// Anchors whose drifted window is not representable contribute nothing.
pub fn compute_observances(anchors: &[LunarAnchor], target_year: i32) -> HashSet<CalendarDate> {
    let mut observances = HashSet::new();
    for anchor in anchors {
        let Some(window) = anchor.window(target_year) else {
            trace!(anchor = anchor.name(), year = target_year, "lunar window out of range");
            continue;
        };
        trace!(
            anchor = anchor.name(),
            year = target_year,
            start = %window.start_date(),
            span = anchor.span_days,
            "lunar observance window"
        );
        observances.extend(window.iter());
    }
    observances
}
