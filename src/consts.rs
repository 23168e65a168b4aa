//! Field bounds and calendar tables.

pub const MIN_YEAR_FRACTION: u16 = 1;
pub const MAX_YEAR_FRACTION: u16 = 999;
pub const MIN_YEAR: u16 = 1;
pub const MAX_YEAR: u16 = 999;
pub const MIN_MILLENNIUM: u32 = 0;
pub const MAX_MILLENNIUM: u32 = 999_999;

// Decimal weights of the packed ticks layout.
pub const MILLENNIUM_WEIGHT: i64 = 1_000_000_000;
pub const YEAR_WEIGHT: i64 = 1_000_000;
pub const YEAR_FRACTION_WEIGHT: i64 = 1_000;

/// Parts per year of `year_fraction`.
pub const FRACTION_SCALE: i64 = 1_000;

pub const SECONDS_IN_MINUTE: i64 = 60;
pub const SECONDS_IN_HOUR: i64 = 3_600;
pub const SECONDS_IN_DAY: i64 = 86_400;
pub const DAYS_IN_YEAR: i64 = 365;
pub const DAYS_IN_LEAP_YEAR: i64 = 366;
pub const SECONDS_IN_YEAR: i64 = DAYS_IN_YEAR * SECONDS_IN_DAY;
pub const SECONDS_IN_LEAP_YEAR: i64 = DAYS_IN_LEAP_YEAR * SECONDS_IN_DAY;

/// Days elapsed before the start of each month, plus the year length.
pub const DAYS_TO_MONTH_365: [u16; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];
pub const DAYS_TO_MONTH_366: [u16; 13] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];
