use crate::{CivilDateTime, ImperialDate};
use time::{OffsetDateTime, PrimitiveDateTime};

impl From<PrimitiveDateTime> for CivilDateTime {
    fn from(value: PrimitiveDateTime) -> Self {
        CivilDateTime::from_valid(
            value.year(),
            value.ordinal(),
            value.hour(),
            value.minute(),
            value.second(),
        )
    }
}

/// Uses the wall-clock time of the value's own offset.
impl From<OffsetDateTime> for CivilDateTime {
    fn from(value: OffsetDateTime) -> Self {
        CivilDateTime::from_valid(
            value.year(),
            value.ordinal(),
            value.hour(),
            value.minute(),
            value.second(),
        )
    }
}

impl From<PrimitiveDateTime> for ImperialDate {
    fn from(value: PrimitiveDateTime) -> Self {
        ImperialDate::from_civil(value)
    }
}

impl From<OffsetDateTime> for ImperialDate {
    fn from(value: OffsetDateTime) -> Self {
        ImperialDate::from_civil(value)
    }
}
