//! # ethio-holidays
//!
//! Holiday calculation for the Ethiopian calendar: the fixed public table,
//! the Orthodox movable feasts, the Islamic holidays, and an aggregating
//! [`HolidayRepository`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalculator` trait.
pub mod calculator;

/// Concrete holiday sources.
pub mod calculators;

/// `Holiday`, `HolidayOccurrence` and their classifiers.
pub mod holiday;

/// Display colours.
pub mod presentation;

/// Holiday queries by year, month and day.
pub mod repository;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::HolidayCalculator;
pub use calculators::{BahireHasab, MuslimHolidays, OrthodoxHolidays, PublicHolidays};
pub use holiday::{Holiday, HolidayKey, HolidayOccurrence, HolidayType};
pub use presentation::{holiday_color, Argb};
pub use repository::HolidayRepository;
