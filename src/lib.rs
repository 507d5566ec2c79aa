pub mod configuration;

pub mod jurisdiction {
    pub mod ruleset;
    pub mod turkey;
    pub mod trnc;
    pub mod jurisdiction;
    pub mod jurisdictionmanager;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod calendardate;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod lunarholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod precomputedcalendar;
    }
}

pub mod validator {
    pub mod customholiday;
    pub mod holidayvalidator;
}

pub use jurisdiction::jurisdiction::Jurisdiction;
pub use time::calendardate::{CalendarDate, InvalidDateError};
pub use validator::holidayvalidator::{HolidayKind, HolidayValidator};
