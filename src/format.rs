use crate::date::ImperialDate;
use crate::error::{format_not_supported, Error, Result};
use alloc::string::{String, ToString};
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

/// Text layout of an [`ImperialDate`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// `"I"`: `<check> <year fraction> <year>.M<millennium>`, e.g. `0 119 021.M3`.
    #[default]
    Imperial,
    /// `"S"`: approximate wall-clock `hh:mm dd/MM/yyyy`.
    Standard,
}

impl Format {
    /// Absent and empty selectors mean [`Format::Imperial`].
    pub fn parse(selector: Option<&str>) -> Result<Self> {
        selector.unwrap_or_default().parse()
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s.eq_ignore_ascii_case("I") {
            Ok(Format::Imperial)
        } else if s.eq_ignore_ascii_case("S") {
            Ok(Format::Standard)
        } else {
            Err(format_not_supported(s))
        }
    }
}

/// [`Display`] adapter returned by [`ImperialDate::display`].
#[derive(Copy, Clone, Debug)]
pub struct Formatted<'a> {
    date: &'a ImperialDate,
    format: Format,
}

impl Display for Formatted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Imperial => write!(
                f,
                "{} {:03} {:03}.M{}",
                self.date.check().code(),
                self.date.year_fraction(),
                self.date.year(),
                self.date.millennium()
            ),
            Format::Standard => Display::fmt(&self.date.to_standard(), f),
        }
    }
}

impl ImperialDate {
    pub fn display(&self, format: Format) -> Formatted<'_> {
        Formatted { date: self, format }
    }

    /// Renders with a format selector: `None`, `""` or `"I"` for imperial,
    /// `"S"` for standard, case-insensitive.
    pub fn format(&self, selector: Option<&str>) -> Result<String> {
        let format = Format::parse(selector)?;
        Ok(self.display(format).to_string())
    }
}

impl Display for ImperialDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display(Format::Imperial), f)
    }
}
