use alloc::borrow::Cow;
use alloc::format;
use core::fmt::{Debug, Display, Formatter};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Short version of `Err(invalid_argument(..))`.
pub(crate) fn invalid<T>(field: &'static str, msg: &'static str) -> Result<T> {
    Err(invalid_argument(field, msg))
}

/// Creates an [`ErrorKind::InvalidArgument`] error blaming `field`.
pub(crate) fn invalid_argument(field: &'static str, msg: &'static str) -> Error {
    Error {
        kind: ErrorKind::InvalidArgument,
        field: Some(field),
        message: Cow::Borrowed(msg),
    }
}

/// Creates an [`ErrorKind::FormatNotSupported`] error naming the rejected selector.
pub(crate) fn format_not_supported(selector: &str) -> Error {
    Error {
        kind: ErrorKind::FormatNotSupported,
        field: None,
        message: Cow::Owned(format!("the {selector:?} format string is not supported")),
    }
}

/// What went wrong.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field, packed integer or comparison operand was outside what an
    /// [`ImperialDate`](crate::ImperialDate) can represent.
    InvalidArgument,
    /// A format selector other than `""`, `"I"` or `"S"` was requested.
    FormatNotSupported,
}

/// Construction, decoding and formatting errors.
///
/// Errors are raised synchronously and never retried. The first violated
/// field, if any, is available through [`Error::field`].
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    field: Option<&'static str>,
    message: Cow<'static, str>,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the offending field, e.g. `"year_fraction"`.
    pub fn field(&self) -> Option<&'static str> {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.field {
            Some(field) => write!(f, "Error({:?}, {field}: {:?})", self.kind, self.message),
            None => write!(f, "Error({:?}, {:?})", self.kind, self.message),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[cfg(feature = "std")]
// TODO expose to no_std once the crate's MSRV reaches 1.81 (core::error::Error).
impl std::error::Error for Error {}
