//! Islamic holidays placed on the Ethiopic calendar.
//!
//! An Ethiopic year overlaps two or three Hijri years. Each anchor (Hijri
//! month and day) is evaluated in every overlapping Hijri year and kept when
//! its converted date falls inside the Ethiopic year, so a holiday can occur
//! twice in one Ethiopic year.

use std::ops::RangeInclusive;

use ethio_core::errors::Result;
use ethio_core::JulianDay;
use ethio_time::ethiopic::new_year_julian_day;
use ethio_time::HijriDate;
use log::{debug, trace};

use crate::calculator::HolidayCalculator;
use crate::holiday::{Holiday, HolidayKey};

/// Public-holiday anchors: (holiday, Hijri month, Hijri day).
const PUBLIC_ANCHORS: [(HolidayKey, u8, u8); 3] = [
    (HolidayKey::EidAlFitr, 10, 1),
    (HolidayKey::EidAlAdha, 12, 10),
    (HolidayKey::Mawlid, 3, 12),
];

/// Observances that are working days.
const WORKING_ANCHORS: [(HolidayKey, u8, u8); 4] = [
    (HolidayKey::IslamicNewYear, 1, 1),
    (HolidayKey::Ashura, 1, 10),
    (HolidayKey::RamadanStart, 9, 1),
    (HolidayKey::MidShaban, 8, 15),
];

/// Islamic holiday calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuslimHolidays {
    include_public: bool,
    include_working_days: bool,
}

impl MuslimHolidays {
    /// Calculator emitting the selected groups.
    pub fn new(include_public: bool, include_working_days: bool) -> Self {
        MuslimHolidays {
            include_public,
            include_working_days,
        }
    }

    /// Whether Eid al-Fitr, Eid al-Adha and Mawlid are emitted.
    pub fn includes_public(&self) -> bool {
        self.include_public
    }

    /// Whether the working-day observances are emitted.
    pub fn includes_working_days(&self) -> bool {
        self.include_working_days
    }

    fn anchors(&self) -> impl Iterator<Item = &'static (HolidayKey, u8, u8)> {
        let public: &'static [_] = if self.include_public {
            &PUBLIC_ANCHORS
        } else {
            &[]
        };
        let working: &'static [_] = if self.include_working_days {
            &WORKING_ANCHORS
        } else {
            &[]
        };
        public.iter().chain(working)
    }
}

impl Default for MuslimHolidays {
    fn default() -> Self {
        MuslimHolidays::new(true, false)
    }
}

/// Julian Day span `[first, last]` of Ethiopic year `year`.
fn year_span(year: i32) -> RangeInclusive<JulianDay> {
    new_year_julian_day(year)..=new_year_julian_day(year + 1) - 1
}

/// The Hijri years that overlap Ethiopic year `year`.
pub fn hijri_years(year: i32) -> RangeInclusive<i32> {
    let span = year_span(year);
    let first = HijriDate::from_julian_day(*span.start()).year();
    let last = HijriDate::from_julian_day(*span.end()).year();
    first..=last
}

impl HolidayCalculator for MuslimHolidays {
    fn name(&self) -> &str {
        "Muslim"
    }

    fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>> {
        let span = year_span(year);
        let hijri_years = hijri_years(year);
        debug!("ethiopic year {year} overlaps hijri years {hijri_years:?}");

        let mut holidays = Vec::new();
        for hijri_year in hijri_years {
            for &(key, month, day) in self.anchors() {
                let date = HijriDate::of(hijri_year, month, day);
                if !span.contains(&date.julian_day()) {
                    continue;
                }
                let ethiopic = date.to_ethiopic()?;
                trace!("{} {hijri_year} falls on {ethiopic}", key.name());
                holidays.push(Holiday::on(key, hijri_year, ethiopic));
            }
        }
        holidays.sort();
        Ok(holidays)
    }
}
