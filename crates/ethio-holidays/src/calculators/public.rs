//! Fixed public holidays.

use ethio_core::errors::Result;
use ethio_time::ethiopic;

use crate::calculator::HolidayCalculator;
use crate::holiday::{Holiday, HolidayKey};

/// The fixed national and religious public holidays.
///
/// Every entry has a fixed Ethiopic month and day except Genna, which
/// moves between Tahsas 28 and 29 with the leap cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicHolidays;

const FIXED: [(HolidayKey, u8, u8); 7] = [
    (HolidayKey::NewYear, 1, 1),
    (HolidayKey::Meskel, 1, 17),
    (HolidayKey::Epiphany, 5, 11),
    (HolidayKey::AdwaVictory, 6, 23),
    (HolidayKey::LabourDay, 8, 23),
    (HolidayKey::PatriotsDay, 8, 27),
    (HolidayKey::DergDownfall, 9, 20),
];

/// Day of Tahsas on which Genna falls in `year`.
pub fn christmas_day(year: i32) -> u8 {
    if ethiopic::is_leap_year(year) {
        28
    } else {
        29
    }
}

impl HolidayCalculator for PublicHolidays {
    fn name(&self) -> &str {
        "Public"
    }

    fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>> {
        let mut holidays: Vec<Holiday> = FIXED
            .iter()
            .map(|&(key, month, day)| Holiday::new(key, year, month, day))
            .collect();
        holidays.push(Holiday::new(
            HolidayKey::Christmas,
            year,
            4,
            christmas_day(year),
        ));
        holidays.sort();
        Ok(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayType;

    #[test]
    fn eight_holidays_every_year() {
        for year in [1, 2015, 2016, 2017, 2018, 9991] {
            let list = PublicHolidays.holidays_for_year(year).unwrap();
            assert_eq!(list.len(), 8);
            assert!(list.iter().all(|h| h.is_day_off));
            assert!(list.iter().all(|h| h.id.starts_with("public_")));
            assert!(list.iter().all(|h| h.id.ends_with(&format!("_{year}"))));
        }
    }

    #[test]
    fn christmas_rule() {
        assert_eq!(christmas_day(2015), 28);
        assert_eq!(christmas_day(2016), 29);
        assert_eq!(christmas_day(2017), 29);
        assert_eq!(christmas_day(2018), 29);
        assert_eq!(christmas_day(2019), 28);
    }

    #[test]
    fn table_contents() {
        let list = PublicHolidays.holidays_for_year(2016).unwrap();
        let find = |key| list.iter().find(|h| h.key == key).unwrap();

        let meskel = find(HolidayKey::Meskel);
        assert_eq!((meskel.ethiopian_month, meskel.ethiopian_day), (1, 17));
        assert_eq!(meskel.holiday_type, HolidayType::OrthodoxChristian);

        let adwa = find(HolidayKey::AdwaVictory);
        assert_eq!(adwa.id, "public_adwa_2016");
        assert_eq!(adwa.holiday_type, HolidayType::National);

        let genna = find(HolidayKey::Christmas);
        assert_eq!((genna.ethiopian_month, genna.ethiopian_day), (4, 29));

        // Sorted by date.
        assert_eq!(list[0].key, HolidayKey::NewYear);
        assert_eq!(list[7].key, HolidayKey::DergDownfall);
    }
}
