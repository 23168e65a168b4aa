use crate::{CivilDateTime, ImperialDate};
use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike};

impl From<NaiveDateTime> for CivilDateTime {
    fn from(value: NaiveDateTime) -> Self {
        // Leap seconds show up in nanosecond(), never in second().
        CivilDateTime::from_valid(
            value.year(),
            value.ordinal() as u16,
            value.hour() as u8,
            value.minute() as u8,
            value.second() as u8,
        )
    }
}

/// Uses the wall-clock time of the value's own offset.
impl<Tz: TimeZone> From<DateTime<Tz>> for CivilDateTime {
    fn from(value: DateTime<Tz>) -> Self {
        value.naive_local().into()
    }
}

impl From<NaiveDateTime> for ImperialDate {
    fn from(value: NaiveDateTime) -> Self {
        ImperialDate::from_civil(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ImperialDate {
    fn from(value: DateTime<Tz>) -> Self {
        ImperialDate::from_civil(value)
    }
}
