//! # ethio-time
//!
//! Date types for the Gregorian, Ethiopic and Hijri calendars and the
//! conversions between them.
//!
//! Every cross-calendar conversion goes through the Gregorian [`Date`],
//! which is itself stored as a Julian Day Number:
//!
//! ```text
//! EthiopicDate ──┐                 ┌── HijriDate
//!                ├── Date (JDN) ───┤
//! (y, m, d) ─────┘                 └── Weekday
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Injected "today" providers.
pub mod clock;

/// Gregorian `Date` type.
pub mod date;

/// `EthiopicDate` and Ethiopic calendar rules.
pub mod ethiopic;

/// `HijriDate` and the tabular (Kuwaiti) Hijri calendar.
pub mod hijri;

/// Gregorian ⇄ Julian Day Number bridge.
pub mod julian_day;

/// `EthiopicMonth`: the thirteen Ethiopic months.
pub mod month;

/// `TimeUnit`: step sizes for date arithmetic.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock};
#[cfg(feature = "chrono")]
pub use clock::SystemClock;
pub use date::Date;
pub use ethiopic::EthiopicDate;
pub use hijri::{HijriDate, HijriMonth};
pub use julian_day::{gregorian_to_julian_day, julian_day_to_gregorian};
pub use month::EthiopicMonth;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
