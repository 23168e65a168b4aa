//! Imperial dates travel as their packed `i64` ticks.

use crate::{Check, ImperialDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for ImperialDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.ticks())
    }
}

/// Validates through [`ImperialDate::from_ticks`], so values with year 1 or
/// year fraction 1 (including [`ImperialDate::MIN`]) don't deserialize.
impl<'de> Deserialize<'de> for ImperialDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ticks = i64::deserialize(deserializer)?;
        ImperialDate::from_ticks(ticks).map_err(D::Error::custom)
    }
}

impl Serialize for Check {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Check {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Check::try_from(code).map_err(D::Error::custom)
    }
}
