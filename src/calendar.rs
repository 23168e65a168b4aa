use crate::consts::{DAYS_TO_MONTH_365, DAYS_TO_MONTH_366};
use crate::error::{invalid, Result};
use core::fmt::{self, Display, Formatter};

/// Gregorian leap year rule, also applied to years before 1.
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[inline]
pub(crate) const fn days_to_month(year: i64) -> &'static [u16; 13] {
    if is_leap_year(year) {
        &DAYS_TO_MONTH_366
    } else {
        &DAYS_TO_MONTH_365
    }
}

/// A wall-clock date and time in the proleptic Gregorian calendar, at whole
/// second resolution and without a time zone.
///
/// This is the "real timestamp" side of every conversion. The `chrono`, `time`
/// and `jiff` features add `From` impls for their civil date/time types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDateTime {
    // Field order makes the derived Ord chronological.
    year: i32,
    ordinal: u16,
    hour: u8,
    minute: u8,
    second: u8,
}

impl CivilDateTime {
    /// 0001-01-01T00:00:00. Maps to [`ImperialDate::MIN`](crate::ImperialDate::MIN).
    pub const FLOOR: Self = Self {
        year: 1,
        ordinal: 1,
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// `ordinal` is the 1-based day of the year.
    pub fn from_ordinal(year: i32, ordinal: u16, hour: u8, minute: u8, second: u8) -> Result<Self> {
        let days = days_to_month(year.into())[12];
        if ordinal == 0 || ordinal > days {
            return invalid("ordinal", "day of year out of range");
        }
        if hour >= 24 {
            return invalid("hour", "hour must be less than 24");
        }
        if minute >= 60 {
            return invalid("minute", "minute must be less than 60");
        }
        if second >= 60 {
            return invalid("second", "second must be less than 60");
        }
        Ok(Self {
            year,
            ordinal,
            hour,
            minute,
            second,
        })
    }

    /// For fields read back from another calendar type that already enforces
    /// the same ranges.
    #[cfg_attr(
        not(any(feature = "chrono", feature = "time", feature = "jiff")),
        allow(dead_code)
    )]
    pub(crate) fn from_valid(year: i32, ordinal: u16, hour: u8, minute: u8, second: u8) -> Self {
        debug_assert!(Self::from_ordinal(year, ordinal, hour, minute, second).is_ok());
        Self {
            year,
            ordinal,
            hour,
            minute,
            second,
        }
    }

    pub fn from_ymd_hms(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        let table = days_to_month(year.into());
        if !(1..=12).contains(&month) {
            return invalid("month", "month must be between 1 and 12");
        }
        let start = table[month as usize - 1];
        let month_len = table[month as usize] - start;
        if day == 0 || u16::from(day) > month_len {
            return invalid("day", "day out of range for month");
        }
        Self::from_ordinal(year, start + u16::from(day), hour, minute, second)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn ordinal(&self) -> u16 {
        self.ordinal
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }
}

/// Approximate wall-clock projection of an [`ImperialDate`](crate::ImperialDate).
///
/// Only meant for display: a year fraction is roughly 8.8 hours wide, so
/// this never round-trips. Renders as `hh:mm dd/MM/yyyy`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StandardDateTime {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl Display for StandardDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} {:02}/{:02}/{}",
            self.hour, self.minute, self.day, self.month, self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2021));
        assert!(is_leap_year(0));
        assert!(!is_leap_year(-999));
    }

    #[test]
    fn ymd_to_ordinal() {
        let d = CivilDateTime::from_ymd_hms(2024, 7, 2, 0, 0, 0).unwrap();
        assert_eq!(d.ordinal(), 184);
        let d = CivilDateTime::from_ymd_hms(2021, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(d.ordinal(), 365);
        let d = CivilDateTime::from_ymd_hms(2020, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(d.ordinal(), 366);
    }

    #[test]
    fn rejects_bad_fields() {
        let field = |r: Result<CivilDateTime>| {
            let e = r.unwrap_err();
            assert_eq!(e.kind(), ErrorKind::InvalidArgument);
            e.field().unwrap()
        };
        assert_eq!(field(CivilDateTime::from_ymd_hms(2021, 2, 29, 0, 0, 0)), "day");
        assert_eq!(field(CivilDateTime::from_ymd_hms(2021, 13, 1, 0, 0, 0)), "month");
        assert_eq!(field(CivilDateTime::from_ymd_hms(2021, 0, 1, 0, 0, 0)), "month");
        assert_eq!(field(CivilDateTime::from_ordinal(2021, 366, 0, 0, 0)), "ordinal");
        assert_eq!(field(CivilDateTime::from_ordinal(2021, 0, 0, 0, 0)), "ordinal");
        assert_eq!(field(CivilDateTime::from_ordinal(2021, 1, 24, 0, 0)), "hour");
        assert_eq!(field(CivilDateTime::from_ordinal(2021, 1, 0, 60, 0)), "minute");
        assert_eq!(field(CivilDateTime::from_ordinal(2021, 1, 0, 0, 60)), "second");
    }

    #[test]
    fn chronological_order() {
        let a = CivilDateTime::from_ymd_hms(2021, 2, 13, 10, 26, 0).unwrap();
        let b = CivilDateTime::from_ymd_hms(2021, 2, 13, 10, 26, 1).unwrap();
        let c = CivilDateTime::from_ymd_hms(2022, 1, 1, 0, 0, 0).unwrap();
        assert!(CivilDateTime::FLOOR < a && a < b && b < c);
    }

    #[test]
    fn standard_display() {
        let s = StandardDateTime {
            year: 2021,
            month: 2,
            day: 13,
            hour: 10,
            minute: 6,
        };
        assert_eq!(s.to_string(), "10:06 13/02/2021");
    }
}
