use crate::error::{invalid, Result};
use bytemuck::CheckedBitPattern;

/// How reliably the date fields of an [`ImperialDate`](crate::ImperialDate) are known.
///
/// Codes 0 and 1 are location based, 2 to 6 contact based and 7 to 9
/// estimation based, see [`Check::provenance`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Check {
    /// The event occurred on Terra.
    #[default]
    Terra = 0,
    /// The event occurred within the Sol system.
    Sol = 1,
    /// Someone present was in direct psychic contact with Terra or the Sol system.
    Secondary = 2,
    /// Someone present was in psychic contact with a [`Check::Secondary`] source.
    Tertiary = 3,
    /// Someone present was in contact with a [`Check::Tertiary`] or [`Check::Secondary`] source.
    Quaternary = 4,
    /// Someone present was in contact with a [`Check::Quaternary`] source.
    Quinary = 5,
    /// Someone present was in contact with a [`Check::Quinary`] source.
    Senary = 6,
    /// The event occurred within 10 years of the recorded date.
    WithinTenYears = 7,
    /// The event occurred within 20 years of the recorded date.
    WithinTwentyYears = 8,
    /// An approximated date, usually recorded during warp travel or on a
    /// world that does not keep the imperial calendar.
    Warp = 9,
}

// Safety: Check is #[repr(u8)] with discriminants 0..=9 and no fields, so
// every u8 in that range is a valid Check.
unsafe impl CheckedBitPattern for Check {
    type Bits = u8;
    #[inline(always)]
    fn is_valid_bit_pattern(bits: &Self::Bits) -> bool {
        *bits <= Check::Warp as u8
    }
}

// Safety: Check is #[repr(u8)], Copy and has no padding.
unsafe impl bytemuck::NoUninit for Check {}

/// Coarse grouping of [`Check`] codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Provenance {
    Location,
    Contact,
    Estimation,
}

impl Check {
    pub const ALL: [Check; 10] = [
        Check::Terra,
        Check::Sol,
        Check::Secondary,
        Check::Tertiary,
        Check::Quaternary,
        Check::Quinary,
        Check::Senary,
        Check::WithinTenYears,
        Check::WithinTwentyYears,
        Check::Warp,
    ];

    /// Validates a raw check code.
    pub fn from_code(code: i64) -> Result<Self> {
        let Ok(bits) = u8::try_from(code) else {
            return invalid("check", "invalid value for check");
        };
        match bytemuck::checked::try_cast::<u8, Check>(bits) {
            Ok(check) => Ok(check),
            Err(_) => invalid("check", "invalid value for check"),
        }
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn provenance(self) -> Provenance {
        match self {
            Check::Terra | Check::Sol => Provenance::Location,
            Check::Secondary
            | Check::Tertiary
            | Check::Quaternary
            | Check::Quinary
            | Check::Senary => Provenance::Contact,
            Check::WithinTenYears | Check::WithinTwentyYears | Check::Warp => {
                Provenance::Estimation
            }
        }
    }
}

impl TryFrom<u8> for Check {
    type Error = crate::Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code.into())
    }
}

impl From<Check> for u8 {
    fn from(check: Check) -> Self {
        bytemuck::must_cast(check)
    }
}
