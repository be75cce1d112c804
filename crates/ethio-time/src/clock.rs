//! "Today" providers.
//!
//! Conversions and holiday calculations never read the system clock. Code
//! that needs the current date takes a [`Clock`] and asks it; tests pass a
//! [`FixedClock`], applications pass a [`SystemClock`] (behind the `chrono`
//! feature).

use ethio_core::errors::Result;

use crate::date::Date;
use crate::ethiopic::EthiopicDate;
use crate::hijri::HijriDate;

/// Source of the current date.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Today's Gregorian date.
    fn today(&self) -> Result<Date>;

    /// Today's Ethiopic date.
    fn ethiopic_today(&self) -> Result<EthiopicDate> {
        self.today().map(EthiopicDate::from_gregorian)
    }

    /// Today's Hijri date.
    fn hijri_today(&self) -> Result<HijriDate> {
        self.today().map(HijriDate::from_gregorian)
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Date);

impl FixedClock {
    /// Create a clock that always reports `date`.
    pub fn new(date: Date) -> Self {
        FixedClock(date)
    }

    /// Move the clock to a different date.
    pub fn set(&mut self, date: Date) {
        self.0 = date;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Result<Date> {
        Ok(self.0)
    }
}

/// The local wall clock.
#[cfg(feature = "chrono")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "chrono")]
impl Clock for SystemClock {
    fn today(&self) -> Result<Date> {
        Date::try_from(chrono::Local::now().date_naive())
    }
}
