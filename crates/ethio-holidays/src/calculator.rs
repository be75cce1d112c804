//! The `HolidayCalculator` trait.

use ethio_core::errors::Result;

use crate::holiday::{Holiday, HolidayOccurrence};

/// A source of holidays for an Ethiopic year.
pub trait HolidayCalculator: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Orthodox"`).
    fn name(&self) -> &str;

    /// Every holiday this source observes in Ethiopic year `year`.
    fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>>;

    /// The holidays of `year` wrapped as unadjusted occurrences.
    fn occurrences_for_year(&self, year: i32) -> Result<Vec<HolidayOccurrence>> {
        self.holidays_for_year(year)?
            .into_iter()
            .map(|h| HolidayOccurrence::new(h, year))
            .collect()
    }
}
