//! Public holidays of the Republic of Türkiye.

use crate::time::calendardate::CalendarDate;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::lunarholiday::LunarAnchor;

pub const NAME: &str = "Turkey";

pub static FIXED_HOLIDAYS: [FixedDateHoliday; 7] = [
    FixedDateHoliday::from_static(1, 1, "Yeni Yıl"),
    FixedDateHoliday::from_static(4, 23, "Ulusal Egemenlik ve Çocuk Bayramı"),
    FixedDateHoliday::from_static(5, 1, "Emek ve Dayanışma Günü"),
    FixedDateHoliday::from_static(5, 19, "Atatürk'ü Anma, Gençlik ve Spor Bayramı"),
    FixedDateHoliday::from_static(7, 20, "Barış ve Özgürlük Bayramı"),
    FixedDateHoliday::from_static(8, 30, "Zafer Bayramı"),
    FixedDateHoliday::from_static(10, 29, "Cumhuriyet Bayramı"),
];

/// Anchored on the 2024 observances.
pub static LUNAR_ANCHORS: [LunarAnchor; 2] = [
    LunarAnchor::from_static("Ramazan Bayramı", CalendarDate::from_ymd_const(2024, 4, 10), 3),
    LunarAnchor::from_static("Kurban Bayramı", CalendarDate::from_ymd_const(2024, 6, 28), 4),
];
