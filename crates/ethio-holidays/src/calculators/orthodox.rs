//! Ethiopian Orthodox movable feasts.
//!
//! The feasts hang off the fast of Nineveh, whose date comes from the
//! traditional Bahire Hasab reckoning:
//!
//! 1. `medeb = (5500 + year) mod 19`
//! 2. `wenber = (medeb - 1) mod 19`
//! 3. `abekte = (wenber * 11) mod 30`
//! 4. `metqi = 30 - abekte`, falling in Tikimt when at most
//!    [`METQI_TIKIMT_LIMIT`] and in Meskerem otherwise
//! 5. `tewusak` is derived from the weekday of the metqi date
//! 6. `mebaja hamer = metqi + tewusak`, which lands Nineveh in Tir or
//!    Yekatit.
//!
//! Siklet, Fasika, Erget and Peraklitos follow at fixed offsets.

use ethio_core::errors::Result;
use ethio_core::{ensure, Days};
use ethio_time::{EthiopicDate, EthiopicMonth};
use log::{debug, trace};

use crate::calculator::HolidayCalculator;
use crate::holiday::{Holiday, HolidayKey};

/// Years between creation and the Incarnation in the Ethiopian reckoning.
pub const AMETE_ALEM: i32 = 5500;

/// Largest metqi still placed in Tikimt.
pub const METQI_TIKIMT_LIMIT: u8 = 8;

/// Tikimt limit under which Fasika coincides with the Julian Easter
/// computus. Opt in through [`BahireHasab::with_tikimt_limit`].
pub const COMPUTUS_TIKIMT_LIMIT: u8 = 14;

/// Days from Nineveh to Siklet.
pub const GOOD_FRIDAY_OFFSET: Days = 67;
/// Days from Nineveh to Fasika.
pub const EASTER_OFFSET: Days = 69;
/// Days from Nineveh to Erget.
pub const ASCENSION_OFFSET: Days = 108;
/// Days from Nineveh to Peraklitos.
pub const PENTECOST_OFFSET: Days = 118;

/// The Bahire Hasab quantities for one Ethiopic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BahireHasab {
    year: i32,
    medeb: u8,
    wenber: u8,
    abekte: u8,
    metqi: u8,
    metqi_month: EthiopicMonth,
    tewusak: u8,
    nineveh: EthiopicDate,
}

impl BahireHasab {
    /// Run the reckoning for Ethiopic year `year`.
    ///
    /// # Errors
    /// Returns an error if `year` is outside the supported range.
    pub fn new(year: i32) -> Result<Self> {
        Self::with_tikimt_limit(year, METQI_TIKIMT_LIMIT)
    }

    /// Run the reckoning with a custom largest metqi placed in Tikimt.
    ///
    /// # Errors
    /// Returns an error if `year` is outside the supported range or
    /// `tikimt_limit` is not a day of the month.
    pub fn with_tikimt_limit(year: i32, tikimt_limit: u8) -> Result<Self> {
        ensure!(
            (1..=30).contains(&tikimt_limit),
            "tikimt limit {tikimt_limit} is not a day of the month"
        );
        let medeb = (i64::from(AMETE_ALEM) + i64::from(year)).rem_euclid(19) as u8;
        let wenber = (medeb + 18) % 19;
        let abekte = ((u16::from(wenber) * 11) % 30) as u8;
        let metqi = 30 - abekte;
        let metqi_month = if metqi <= tikimt_limit {
            EthiopicMonth::Tikimt
        } else {
            EthiopicMonth::Meskerem
        };

        let metqi_date = EthiopicDate::new(year, metqi_month.number(), metqi)?;
        let weekday = metqi_date.weekday().ordinal();
        let mut tewusak = (128 - weekday - 2) % 7;
        if tewusak <= 1 {
            tewusak += 7;
        }

        let mebaja_hamer = metqi + tewusak;
        let nineveh_month = if mebaja_hamer > 30 || metqi_month == EthiopicMonth::Tikimt {
            EthiopicMonth::Yekatit
        } else {
            EthiopicMonth::Tir
        };
        let nineveh_day = match mebaja_hamer % 30 {
            0 => 30,
            d => d,
        };
        let nineveh = EthiopicDate::new(year, nineveh_month.number(), nineveh_day)?;

        trace!(
            "bahire hasab {year}: medeb={medeb} wenber={wenber} abekte={abekte} \
             metqi={metqi_month} {metqi} tewusak={tewusak}"
        );
        debug!("nineveh {year} falls on {nineveh}");

        Ok(BahireHasab {
            year,
            medeb,
            wenber,
            abekte,
            metqi,
            metqi_month,
            tewusak,
            nineveh,
        })
    }

    /// The Ethiopic year reckoned.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Remainder of the world year in the 19-year lunar cycle.
    pub fn medeb(&self) -> u8 {
        self.medeb
    }

    /// Evangelist-cycle counter, one behind `medeb`.
    pub fn wenber(&self) -> u8 {
        self.wenber
    }

    /// Epact: age of the moon at the start of the year.
    pub fn abekte(&self) -> u8 {
        self.abekte
    }

    /// Day of the metqi.
    pub fn metqi(&self) -> u8 {
        self.metqi
    }

    /// Month of the metqi (Meskerem or Tikimt).
    pub fn metqi_month(&self) -> EthiopicMonth {
        self.metqi_month
    }

    /// Weekday offset added to the metqi.
    pub fn tewusak(&self) -> u8 {
        self.tewusak
    }

    /// Start of the fast of Nineveh.
    pub fn nineveh(&self) -> EthiopicDate {
        self.nineveh
    }

    /// Siklet (Good Friday).
    pub fn good_friday(&self) -> Result<EthiopicDate> {
        self.nineveh.add_days(GOOD_FRIDAY_OFFSET)
    }

    /// Fasika (Easter Sunday).
    pub fn easter(&self) -> Result<EthiopicDate> {
        self.nineveh.add_days(EASTER_OFFSET)
    }

    /// Erget (Ascension).
    pub fn ascension(&self) -> Result<EthiopicDate> {
        self.nineveh.add_days(ASCENSION_OFFSET)
    }

    /// Peraklitos (Pentecost).
    pub fn pentecost(&self) -> Result<EthiopicDate> {
        self.nineveh.add_days(PENTECOST_OFFSET)
    }
}

/// Orthodox movable-feast calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrthodoxHolidays;

impl OrthodoxHolidays {
    /// Fasika in Ethiopic year `year`.
    pub fn easter(year: i32) -> Result<EthiopicDate> {
        BahireHasab::new(year)?.easter()
    }
}

impl HolidayCalculator for OrthodoxHolidays {
    fn name(&self) -> &str {
        "Orthodox"
    }

    fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>> {
        let hasab = BahireHasab::new(year)?;
        let easter = hasab.easter()?;
        Ok(vec![
            Holiday::on(HolidayKey::GoodFriday, year, hasab.good_friday()?),
            Holiday::on(HolidayKey::Easter, year, easter),
            Holiday::on(HolidayKey::Resurrection, year, easter),
            Holiday::on(HolidayKey::Ascension, year, hasab.ascension()?),
            Holiday::on(HolidayKey::Pentecost, year, hasab.pentecost()?),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethio_time::Weekday;

    fn eth(y: i32, m: u8, d: u8) -> EthiopicDate {
        EthiopicDate::new(y, m, d).unwrap()
    }

    #[test]
    fn reckoning_2016() {
        let h = BahireHasab::new(2016).unwrap();
        assert_eq!(h.medeb(), 11);
        assert_eq!(h.wenber(), 10);
        assert_eq!(h.abekte(), 20);
        assert_eq!(h.metqi(), 10);
        assert_eq!(h.metqi_month(), EthiopicMonth::Meskerem);
        assert_eq!(h.tewusak(), 3);
        assert_eq!(h.nineveh(), eth(2016, 5, 13));
    }

    #[test]
    fn reckoning_2015() {
        let h = BahireHasab::new(2015).unwrap();
        assert_eq!(h.metqi(), 21);
        assert_eq!(h.metqi_month(), EthiopicMonth::Meskerem);
        assert_eq!(h.tewusak(), 8);
        assert_eq!(h.nineveh(), eth(2015, 5, 29));
    }

    #[test]
    fn small_metqi_falls_in_tikimt() {
        // 2011: abekte 25, metqi 5.
        let h = BahireHasab::new(2011).unwrap();
        assert_eq!(h.metqi(), 5);
        assert_eq!(h.metqi_month(), EthiopicMonth::Tikimt);
        assert_eq!(h.tewusak(), 6);
        assert_eq!(h.nineveh(), eth(2011, 6, 11));
    }

    #[test]
    fn metqi_month_follows_limit() {
        for year in 1893..=2092 {
            let h = BahireHasab::new(year).unwrap();
            let expected = if h.metqi() <= 8 {
                EthiopicMonth::Tikimt
            } else {
                EthiopicMonth::Meskerem
            };
            assert_eq!(h.metqi_month(), expected, "metqi {year}");
        }
    }

    #[test]
    fn computus_limit_moves_mid_metqi() {
        let h = BahireHasab::with_tikimt_limit(2016, COMPUTUS_TIKIMT_LIMIT).unwrap();
        assert_eq!(h.metqi_month(), EthiopicMonth::Tikimt);
        assert_eq!(h.tewusak(), 8);
        assert_eq!(h.nineveh(), eth(2016, 6, 18));
        assert_eq!(h.easter().unwrap(), eth(2016, 8, 27));

        // Metqi 21 is Meskerem under either limit.
        assert_eq!(
            BahireHasab::with_tikimt_limit(2015, COMPUTUS_TIKIMT_LIMIT).unwrap(),
            BahireHasab::new(2015).unwrap()
        );
        assert!(BahireHasab::with_tikimt_limit(2016, 0).is_err());
        assert!(BahireHasab::with_tikimt_limit(2016, 31).is_err());
    }

    #[test]
    fn fasika_2015_and_2016() {
        assert_eq!(OrthodoxHolidays::easter(2015).unwrap(), eth(2015, 8, 8));
        assert_eq!(OrthodoxHolidays::easter(2016).unwrap(), eth(2016, 7, 22));
    }

    #[test]
    fn feast_weekdays() {
        for year in 1900..=2100 {
            let h = BahireHasab::new(year).unwrap();
            assert_eq!(h.nineveh().weekday(), Weekday::Monday, "nineveh {year}");
            assert_eq!(h.good_friday().unwrap().weekday(), Weekday::Friday);
            assert_eq!(h.easter().unwrap().weekday(), Weekday::Sunday);
            assert_eq!(h.ascension().unwrap().weekday(), Weekday::Thursday);
            assert_eq!(h.pentecost().unwrap().weekday(), Weekday::Sunday);
            assert!((2..=8).contains(&h.tewusak()));
        }
    }

    #[test]
    fn five_feasts() {
        let list = OrthodoxHolidays.holidays_for_year(2016).unwrap();
        let keys: Vec<_> = list.iter().map(|h| h.key).collect();
        assert_eq!(
            keys,
            [
                HolidayKey::GoodFriday,
                HolidayKey::Easter,
                HolidayKey::Resurrection,
                HolidayKey::Ascension,
                HolidayKey::Pentecost,
            ]
        );
        assert_eq!(list[1].id, "orthodox_fasika_2016");
        assert_eq!(list[1].ethiopian_month, list[2].ethiopian_month);
        assert_eq!(list[1].ethiopian_day, list[2].ethiopian_day);
        assert!(list[0].is_day_off && list[1].is_day_off);
        assert!(!list[3].is_day_off && !list[4].is_day_off);
    }
}
