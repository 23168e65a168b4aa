use crate::calendar::{CivilDateTime, StandardDateTime};
use crate::check::Check;
use crate::consts::*;
use crate::convert;
use crate::error::{invalid, Result};
use core::any::Any;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// An imperial date: a [`Check`] code, a year fraction (thousandths of a
/// year), a year within the millennium and a millennium.
///
/// Every constructor validates `1 <= year_fraction <= 999`,
/// `1 <= year <= 999` and a defined check code. Values are ordered, compared
/// and persisted through their [`ticks`](Self::ticks).
///
/// ```
/// use imperial_date::{Check, ImperialDate};
///
/// let date = ImperialDate::new(Check::Terra, 119, 21, 3).unwrap();
/// assert_eq!(date.to_string(), "0 119 021.M3");
/// assert_eq!(date.ticks(), 3_021_119_000);
/// assert_eq!(ImperialDate::from_ticks(3_021_119_000), Ok(date));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ImperialDate {
    check: Check,
    year_fraction: u16,
    year: u16,
    millennium: u32,
}

impl ImperialDate {
    pub const MIN: Self = Self {
        check: Check::Terra,
        year_fraction: MIN_YEAR_FRACTION,
        year: MIN_YEAR,
        millennium: MIN_MILLENNIUM,
    };

    pub const MAX: Self = Self {
        check: Check::Warp,
        year_fraction: MAX_YEAR_FRACTION,
        year: MAX_YEAR,
        millennium: MAX_MILLENNIUM,
    };

    pub fn new(check: Check, year_fraction: u16, year: u16, millennium: u32) -> Result<Self> {
        if !(MIN_YEAR_FRACTION..=MAX_YEAR_FRACTION).contains(&year_fraction) {
            return invalid("year_fraction", "year fraction must be between 1 and 999");
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return invalid("year", "year must be between 1 and 999");
        }
        Ok(Self {
            check,
            year_fraction,
            year,
            millennium,
        })
    }

    /// Validates untyped fields in order: check, year fraction, year, millennium.
    pub fn from_raw(check: i64, year_fraction: i64, year: i64, millennium: i64) -> Result<Self> {
        let check = Check::from_code(check)?;
        let Ok(year_fraction) = u16::try_from(year_fraction) else {
            return invalid("year_fraction", "year fraction must be between 1 and 999");
        };
        let Ok(year) = u16::try_from(year) else {
            return invalid("year", "year must be between 1 and 999");
        };
        // Range checks on year and year fraction come before the millennium.
        let checked = Self::new(check, year_fraction, year, MIN_MILLENNIUM)?;
        if millennium < 0 {
            return invalid("millennium", "millennium must be greater than or equal to 0");
        }
        let Ok(millennium) = u32::try_from(millennium) else {
            return invalid("millennium", "millennium out of range");
        };
        Ok(Self {
            millennium,
            ..checked
        })
    }

    /// Converts a wall-clock date and time. Always [`Check::Terra`].
    ///
    /// Instants at or before [`CivilDateTime::FLOOR`] give [`ImperialDate::MIN`].
    /// The first hours of a year (year fraction 0) give year fraction 1, and
    /// years divisible by 1000 give `999 999` of their millennium.
    pub fn from_civil(civil: impl Into<CivilDateTime>) -> Self {
        convert::from_civil(civil.into())
    }

    /// Decodes a packed value produced by [`ImperialDate::ticks`].
    ///
    /// This is stricter than [`ImperialDate::new`]: a year or year fraction of
    /// exactly 1 is rejected, so [`ImperialDate::MIN`] can't be decoded.
    pub fn from_ticks(ticks: i64) -> Result<Self> {
        convert::from_ticks(ticks)
    }

    /// The current local wall-clock time.
    #[cfg(feature = "clock")]
    pub fn now() -> Self {
        Self::from_civil(chrono::Local::now().naive_local())
    }

    /// Clamps every field into range. Only for values that are already
    /// known to be close to legal, e.g. from calendar arithmetic.
    pub(crate) fn saturating(check: Check, year_fraction: i64, year: i64, millennium: i64) -> Self {
        let clamp = |v: i64, min: u16, max: u16| v.clamp(min.into(), max.into()) as u16;
        Self {
            check,
            year_fraction: clamp(year_fraction, MIN_YEAR_FRACTION, MAX_YEAR_FRACTION),
            year: clamp(year, MIN_YEAR, MAX_YEAR),
            millennium: millennium.clamp(MIN_MILLENNIUM.into(), u32::MAX.into()) as u32,
        }
    }

    #[inline]
    pub const fn check(&self) -> Check {
        self.check
    }

    #[inline]
    pub const fn year_fraction(&self) -> u16 {
        self.year_fraction
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn millennium(&self) -> u32 {
        self.millennium
    }

    /// `millennium * 10^9 + year * 10^6 + year_fraction * 10^3 + check`.
    #[inline]
    pub const fn ticks(&self) -> i64 {
        convert::to_ticks(self)
    }

    /// Approximate wall-clock date and time. Lossy, for display only.
    pub fn to_standard(&self) -> StandardDateTime {
        convert::to_standard(self)
    }

    /// Orders against an untyped operand.
    ///
    /// `None` sorts before every date, and anything that isn't an
    /// `ImperialDate` is an [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument).
    pub fn compare_any(&self, other: Option<&dyn Any>) -> Result<Ordering> {
        let Some(other) = other else {
            return Ok(Ordering::Greater);
        };
        match other.downcast_ref::<Self>() {
            Some(other) => Ok(self.cmp(other)),
            None => invalid("other", "argument must be an ImperialDate"),
        }
    }

    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .map_or(false, |other| self == other)
    }
}

impl Default for ImperialDate {
    fn default() -> Self {
        Self::MIN
    }
}

impl PartialEq for ImperialDate {
    fn eq(&self, other: &Self) -> bool {
        self.ticks() == other.ticks()
    }
}

impl Eq for ImperialDate {}

impl PartialOrd for ImperialDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ImperialDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ticks().cmp(&other.ticks())
    }
}

// Ticks are injective over legal fields, so hashing the fields agrees with Eq.
impl Hash for ImperialDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.check.hash(state);
        self.year_fraction.hash(state);
        self.year.hash(state);
        self.millennium.hash(state);
    }
}

impl TryFrom<i64> for ImperialDate {
    type Error = crate::Error;

    fn try_from(ticks: i64) -> Result<Self> {
        Self::from_ticks(ticks)
    }
}

impl From<ImperialDate> for i64 {
    fn from(date: ImperialDate) -> Self {
        date.ticks()
    }
}

impl From<CivilDateTime> for ImperialDate {
    fn from(civil: CivilDateTime) -> Self {
        Self::from_civil(civil)
    }
}
