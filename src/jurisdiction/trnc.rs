//! Additions for the Turkish Republic of Northern Cyprus on top of the
//! Turkish calendar.

use crate::time::calendardate::CalendarDate;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::lunarholiday::LunarAnchor;

pub const NAME: &str = "TRNC";

pub static FIXED_HOLIDAYS: [FixedDateHoliday; 2] = [
    FixedDateHoliday::from_static(8, 1, "TMT Günü"),
    FixedDateHoliday::from_static(11, 15, "KKTC'nin İlanı"),
];

pub static LUNAR_ANCHORS: [LunarAnchor; 1] = [
    LunarAnchor::from_static("Mevlid Kandili", CalendarDate::from_ymd_const(2024, 9, 15), 1),
];
