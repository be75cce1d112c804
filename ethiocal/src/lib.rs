//! # ethiocal
//!
//! Ethiopian calendar toolkit: Gregorian, Ethiopic and Hijri dates, and the
//! Ethiopian public, Orthodox and Muslim holidays.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ethio-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! ethiocal = "0.1"
//! ```
//!
//! ```rust
//! use ethiocal::prelude::*;
//!
//! let sunday = EthiopicDate::from_gregorian(Date::from_ymd(2024, 3, 31)?);
//! assert_eq!(sunday.format(), "Megabit 22, 2016");
//!
//! let repo = HolidayRepository::default();
//! let keys: Vec<_> = repo
//!     .holidays_for_date(sunday)?
//!     .into_iter()
//!     .map(|o| o.holiday.key)
//!     .collect();
//! assert!(keys.contains(&HolidayKey::Easter));
//! # Ok::<(), ethiocal::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions and settings.
pub use ethio_core as core;

/// Gregorian, Ethiopic and Hijri dates and conversions.
pub use ethio_time as time;

/// Holiday calculators and the holiday repository.
pub use ethio_holidays as holidays;

/// The types most applications need, in one import.
pub mod prelude {
    pub use ethio_core::{DayOffsets, Error, HolidaySettings, Result};
    pub use ethio_holidays::{
        BahireHasab, Holiday, HolidayCalculator, HolidayKey, HolidayOccurrence,
        HolidayRepository, HolidayType,
    };
    pub use ethio_time::{
        Clock, Date, EthiopicDate, EthiopicMonth, FixedClock, HijriDate, HijriMonth, TimeUnit,
        Weekday,
    };
    #[cfg(feature = "chrono")]
    pub use ethio_time::SystemClock;
}
