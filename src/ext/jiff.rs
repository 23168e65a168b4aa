use crate::{CivilDateTime, ImperialDate};
use jiff::civil::DateTime;

impl From<DateTime> for CivilDateTime {
    fn from(value: DateTime) -> Self {
        CivilDateTime::from_valid(
            value.year().into(),
            value.day_of_year() as u16,
            value.hour() as u8,
            value.minute() as u8,
            value.second() as u8,
        )
    }
}

impl From<DateTime> for ImperialDate {
    fn from(value: DateTime) -> Self {
        ImperialDate::from_civil(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Check, ImperialDate};
    use jiff::civil::{date, DateTime};

    #[test]
    fn test_jiff_civil_date_time() {
        let dt = date(2024, 7, 2).at(0, 0, 0, 0);
        assert_eq!(
            ImperialDate::from(dt),
            ImperialDate::new(Check::Terra, 500, 24, 3).unwrap()
        );
        let dt = date(2021, 2, 13).at(10, 26, 59, 999_999_999);
        assert_eq!(ImperialDate::from(dt).to_string(), "0 119 021.M3");
    }

    #[test]
    fn test_jiff_extremes() {
        assert_eq!(ImperialDate::from(DateTime::MIN), ImperialDate::MIN);
        let max = ImperialDate::from(DateTime::MAX);
        assert_eq!((max.year(), max.millennium()), (999, 10));
    }
}
