//! Error types for ethiocal.
//!
//! The calendar engine is mostly total: conversions never fail for valid
//! inputs. Errors appear only at construction boundaries (building a date
//! from raw fields) and when parsing externally supplied configuration.

use thiserror::Error;

/// The top-level error type used throughout ethiocal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A date was built from fields that do not name a real day.
    #[error("invalid date {year}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        /// Year as supplied.
        year: i32,
        /// Month as supplied.
        month: u8,
        /// Day as supplied.
        day: u8,
        /// Which rule was broken.
        reason: String,
    },

    /// Date arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration entry could not be interpreted.
    #[error("invalid configuration value for `{key}`: {value}")]
    Config {
        /// The configuration key.
        key: String,
        /// The offending value, rendered as text.
        value: String,
    },
}

impl Error {
    /// Shorthand for building an [`Error::InvalidDate`].
    pub fn invalid_date(year: i32, month: u8, day: u8, reason: impl Into<String>) -> Self {
        Error::InvalidDate {
            year,
            month,
            day,
            reason: reason.into(),
        }
    }
}

/// Shorthand `Result` type used throughout ethiocal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ethio_core::{ensure, errors::Error};
/// fn positive(x: i32) -> ethio_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ethio_core::{fail, errors::Error};
/// fn always_err() -> ethio_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
