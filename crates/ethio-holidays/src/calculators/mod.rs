//! Concrete holiday sources.

/// Islamic holidays.
pub mod muslim;

/// Orthodox movable feasts.
pub mod orthodox;

/// Fixed public holidays.
pub mod public;

pub use muslim::MuslimHolidays;
pub use orthodox::{BahireHasab, OrthodoxHolidays};
pub use public::PublicHolidays;
