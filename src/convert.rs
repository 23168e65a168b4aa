//! Conversions between civil date/times, packed ticks and imperial fields.

use crate::calendar::{days_to_month, is_leap_year, CivilDateTime, StandardDateTime};
use crate::check::Check;
use crate::consts::*;
use crate::date::ImperialDate;
use crate::error::{invalid, Result};

pub(crate) fn from_civil(civil: CivilDateTime) -> ImperialDate {
    // Earth calendars only ever describe Terra.
    let check = Check::Terra;

    if civil <= CivilDateTime::FLOOR {
        return ImperialDate::MIN;
    }

    let calendar_year = i64::from(civil.year());
    let elapsed = (i64::from(civil.ordinal()) - 1) * SECONDS_IN_DAY
        + i64::from(civil.hour()) * SECONDS_IN_HOUR
        + i64::from(civil.minute()) * SECONDS_IN_MINUTE
        + i64::from(civil.second());
    let seconds_in_year = if is_leap_year(calendar_year) {
        SECONDS_IN_LEAP_YEAR
    } else {
        SECONDS_IN_YEAR
    };

    let year_fraction = elapsed * FRACTION_SCALE / seconds_in_year;
    let year = calendar_year % 1000;
    // calendar_year >= 1 past the floor, so this is a ceiling division.
    let millennium = (calendar_year + 999) / 1000;

    if year == 0 {
        // Year 1000 of its millennium can't be written; saturate to the end.
        tracing::debug!(calendar_year, "millennium year saturated to 999.999");
        return ImperialDate::saturating(
            check,
            MAX_YEAR_FRACTION.into(),
            MAX_YEAR.into(),
            millennium,
        );
    }
    if year_fraction < MIN_YEAR_FRACTION.into() {
        tracing::debug!(calendar_year, elapsed, "year fraction saturated to 1");
    }
    ImperialDate::saturating(check, year_fraction, year, millennium)
}

pub(crate) const fn to_ticks(date: &ImperialDate) -> i64 {
    date.millennium() as i64 * MILLENNIUM_WEIGHT
        + date.year() as i64 * YEAR_WEIGHT
        + date.year_fraction() as i64 * YEAR_FRACTION_WEIGHT
        + date.check().code() as i64
}

pub(crate) fn from_ticks(ticks: i64) -> Result<ImperialDate> {
    let millennium = ticks / MILLENNIUM_WEIGHT;
    let year = ticks / YEAR_WEIGHT % 1000;
    let year_fraction = ticks / YEAR_FRACTION_WEIGHT % 1000;
    let check = ticks % 1000;

    // Unlike direct construction, year 1 and year fraction 1 are rejected here.
    let rejected = if millennium < MIN_MILLENNIUM.into() {
        Some(("millennium", "millennium must be greater than or equal to 0"))
    } else if millennium > u32::MAX.into() {
        Some(("millennium", "millennium out of range"))
    } else if year <= MIN_YEAR.into() {
        Some(("year", "invalid ticks format"))
    } else if year_fraction <= MIN_YEAR_FRACTION.into() {
        Some(("year_fraction", "invalid ticks format"))
    } else {
        None
    };
    if let Some((field, msg)) = rejected {
        tracing::trace!(ticks, field, "rejected packed ticks");
        return invalid(field, msg);
    }
    ImperialDate::from_raw(check, year_fraction, year, millennium).map_err(|e| {
        tracing::trace!(ticks, field = e.field(), "rejected packed ticks");
        e
    })
}

pub(crate) fn to_standard(date: &ImperialDate) -> StandardDateTime {
    const MS_IN_DAY: i64 = SECONDS_IN_DAY * 1000;
    const MS_IN_HOUR: i64 = SECONDS_IN_HOUR * 1000;
    const MS_IN_MINUTE: i64 = SECONDS_IN_MINUTE * 1000;

    let standard_year = (i64::from(date.millennium()) - 1) * 1000 + i64::from(date.year());
    let days_in_year = if is_leap_year(standard_year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_YEAR
    };

    // year_fraction / 1000 of the year, kept exact by counting milliseconds.
    let current_ms = i64::from(date.year_fraction()) * days_in_year * SECONDS_IN_DAY;
    let day_offset = current_ms / MS_IN_DAY;
    let ms_remaining = current_ms % MS_IN_DAY;
    let hour = ms_remaining / MS_IN_HOUR;
    let minute = ms_remaining % MS_IN_HOUR / MS_IN_MINUTE;

    let table = days_to_month(standard_year);
    // day_offset < days_in_year, so some boundary always exceeds it.
    let month = (1..=12)
        .find(|&m| day_offset < i64::from(table[m]))
        .unwrap_or(12);
    let day = day_offset - i64::from(table[month - 1]) + 1;

    StandardDateTime {
        year: standard_year,
        month: month as u8,
        day: day as u8,
        hour: hour as u8,
        minute: minute as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn civil(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: u8) -> CivilDateTime {
        CivilDateTime::from_ymd_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn fields(date: ImperialDate) -> (Check, u16, u16, u32) {
        (
            date.check(),
            date.year_fraction(),
            date.year(),
            date.millennium(),
        )
    }

    #[test]
    fn floor_is_min() {
        assert_eq!(fields(from_civil(CivilDateTime::FLOOR)), (Check::Terra, 1, 1, 0));
        assert_eq!(from_civil(civil(0, 6, 1, 0, 0, 0)), ImperialDate::MIN);
        assert_eq!(from_civil(civil(-44, 3, 15, 12, 0, 0)), ImperialDate::MIN);
    }

    #[test]
    fn civil_midyear() {
        // 183 whole days into a leap year is exactly half of it.
        let date = from_civil(civil(2024, 7, 2, 0, 0, 0));
        assert_eq!(fields(date), (Check::Terra, 500, 24, 3));
    }

    #[test]
    fn civil_end_of_year() {
        let date = from_civil(civil(1999, 12, 31, 23, 59, 59));
        assert_eq!(fields(date), (Check::Terra, 999, 999, 2));
    }

    #[test]
    fn civil_start_of_year_saturates_fraction() {
        let date = from_civil(civil(2021, 1, 1, 0, 0, 0));
        assert_eq!(fields(date), (Check::Terra, 1, 21, 3));
        let date = from_civil(CivilDateTime::from_ordinal(1, 1, 0, 0, 1).unwrap());
        assert_eq!(fields(date), (Check::Terra, 1, 1, 1));
    }

    #[test]
    fn civil_millennium_year_saturates() {
        let end = from_civil(civil(2000, 6, 15, 0, 0, 0));
        assert_eq!(fields(end), (Check::Terra, 999, 999, 2));
        assert!(from_civil(civil(1999, 6, 15, 0, 0, 0)) < end);
        assert!(end < from_civil(civil(2001, 1, 2, 0, 0, 0)));
    }

    #[test]
    fn civil_is_monotone() {
        let mut previous = ImperialDate::MIN;
        for year in [1, 2, 999, 1000, 1001, 1999, 2000, 2001, 2024, 9999] {
            for ordinal in (1..=365).step_by(7) {
                for hour in [0, 9, 23] {
                    let c = CivilDateTime::from_ordinal(year, ordinal, hour, 30, 30).unwrap();
                    let date = from_civil(c);
                    assert!(previous <= date, "{c:?} went backwards");
                    previous = date;
                }
            }
        }
    }

    #[test]
    fn ticks_layout() {
        let date = ImperialDate::new(Check::Sol, 510, 20, 3).unwrap();
        assert_eq!(to_ticks(&date), 3_020_510_001);
        assert_eq!(to_ticks(&ImperialDate::MIN), 1_001_000);
        assert_eq!(to_ticks(&ImperialDate::MAX), 999_999_999_999_009);
    }

    #[test]
    fn ticks_decode() {
        let date = from_ticks(3_020_510_001).unwrap();
        assert_eq!(fields(date), (Check::Sol, 510, 20, 3));
        let date = from_ticks(3_021_119_000).unwrap();
        assert_eq!(fields(date), (Check::Terra, 119, 21, 3));
    }

    #[test]
    fn ticks_decode_rejects() {
        let field = |ticks: i64| {
            let e = from_ticks(ticks).unwrap_err();
            assert_eq!(e.kind(), ErrorKind::InvalidArgument);
            e.field().unwrap()
        };
        assert_eq!(field(-1), "year");
        assert_eq!(field(0), "year");
        assert_eq!(field(1_000), "year");
        assert_eq!(field(1_000_000_000), "year");
        assert_eq!(field(-5_020_510_001), "millennium");
        assert_eq!(field(i64::MAX), "millennium");
        assert_eq!(field(3_001_510_001), "year");
        assert_eq!(field(3_020_001_001), "year_fraction");
        assert_eq!(field(3_020_510_010), "check");
        assert_eq!(field(3_020_510_999), "check");
    }

    #[test]
    fn ticks_decode_is_stricter_than_new() {
        assert!(from_ticks(to_ticks(&ImperialDate::MIN)).is_err());
        let date = ImperialDate::new(Check::Terra, 2, 2, 0).unwrap();
        assert_eq!(from_ticks(to_ticks(&date)), Ok(date));
    }

    #[test]
    fn standard_projection() {
        let date = ImperialDate::new(Check::Terra, 119, 21, 3).unwrap();
        let s = to_standard(&date);
        assert_eq!((s.year, s.month, s.day, s.hour, s.minute), (2021, 2, 13, 10, 26));

        let date = ImperialDate::new(Check::Terra, 500, 24, 3).unwrap();
        let s = to_standard(&date);
        assert_eq!((s.year, s.month, s.day, s.hour, s.minute), (2024, 7, 2, 0, 0));

        let s = to_standard(&ImperialDate::MAX);
        assert_eq!((s.year, s.month, s.day), (999_998_999, 12, 31));

        let s = to_standard(&ImperialDate::MIN);
        assert_eq!((s.year, s.month, s.day), (-999, 1, 1));
    }
}
