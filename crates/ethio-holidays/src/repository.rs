//! Holiday aggregation across the public, Orthodox and Muslim sources.

use ethio_core::errors::Result;
use ethio_core::settings::{DayOffsets, HolidaySettings};
use ethio_core::{ensure, Days};
use ethio_time::ethiopic::MONTHS_PER_YEAR;
use ethio_time::EthiopicDate;
use log::debug;

use crate::calculator::HolidayCalculator;
use crate::calculators::{MuslimHolidays, OrthodoxHolidays, PublicHolidays};
use crate::holiday::{HolidayKey, HolidayOccurrence};

/// Answers holiday queries for a year, a month or a single day.
///
/// The fixed public table is always included. The Orthodox and Muslim
/// sources are switched by the [`HolidaySettings`], which also carry the
/// remote-config day offsets applied to the lunar Muslim holidays.
#[derive(Debug, Clone, Default)]
pub struct HolidayRepository {
    settings: HolidaySettings,
}

impl HolidayRepository {
    /// Repository using `settings`.
    pub fn new(settings: HolidaySettings) -> Self {
        HolidayRepository { settings }
    }

    /// Current settings.
    pub fn settings(&self) -> &HolidaySettings {
        &self.settings
    }

    /// Replace the settings.
    pub fn set_settings(&mut self, settings: HolidaySettings) {
        self.settings = settings;
    }

    /// Every holiday in Ethiopic year `year`.
    ///
    /// The public table comes first, then the Orthodox feasts, then the
    /// Muslim holidays. Muslim public holidays carry the configured day
    /// offset as their adjustment when the offsets target `year`.
    ///
    /// # Errors
    /// Returns an error if `year` is outside the supported range.
    pub fn holidays_for_year(&self, year: i32) -> Result<Vec<HolidayOccurrence>> {
        let mut occurrences = PublicHolidays.occurrences_for_year(year)?;

        if self.settings.include_orthodox {
            occurrences.extend(OrthodoxHolidays.occurrences_for_year(year)?);
        }

        if self.settings.include_muslim {
            let muslim = MuslimHolidays::new(true, self.settings.include_muslim_working_days);
            let offsets = self.settings.day_offsets.for_year(year);
            if !offsets.is_zero() {
                debug!("applying day offsets {offsets:?} to {year}");
            }
            occurrences.extend(
                muslim
                    .occurrences_for_year(year)?
                    .into_iter()
                    .map(|occ| {
                        let adjustment = offset_for(&offsets, occ.holiday.key);
                        occ.with_adjustment(adjustment)
                    }),
            );
        }

        debug!("{} holidays in {year}", occurrences.len());
        Ok(occurrences)
    }

    /// Holidays observed in `month` of Ethiopic year `year`.
    ///
    /// Membership follows the observed date, so an adjusted holiday moves
    /// with its adjustment, including across a year boundary.
    ///
    /// # Errors
    /// Returns an error if `month` is not in 1–13 or `year` is outside the
    /// supported range.
    pub fn holidays_for_month(&self, year: i32, month: u8) -> Result<Vec<HolidayOccurrence>> {
        ensure!(
            (1..=MONTHS_PER_YEAR).contains(&month),
            "Ethiopic month must be in 1..=13, got {month}"
        );

        let mut years = vec![year];
        let offset_year = self.settings.day_offsets.ethiopian_year;
        if offset_year != year
            && (offset_year == year - 1 || offset_year == year + 1)
            && !self.settings.day_offsets.is_zero()
            && offset_year >= 1
        {
            years.push(offset_year);
        }

        let mut result = Vec::new();
        for y in years {
            for occ in self.holidays_for_year(y)? {
                let actual = occ.actual_ethiopic_date()?;
                if actual.year() == year && actual.month() == month {
                    result.push(occ);
                }
            }
        }
        Ok(result)
    }

    /// Holidays observed on `date`.
    ///
    /// # Errors
    /// Returns an error if the surrounding year cannot be computed.
    pub fn holidays_for_date(&self, date: EthiopicDate) -> Result<Vec<HolidayOccurrence>> {
        let mut result = Vec::new();
        for occ in self.holidays_for_month(date.year(), date.month())? {
            if occ.actual_ethiopic_date()? == date {
                result.push(occ);
            }
        }
        Ok(result)
    }

    /// Whether `date` is a public day off.
    ///
    /// # Errors
    /// Returns an error if the surrounding year cannot be computed.
    pub fn is_day_off(&self, date: EthiopicDate) -> Result<bool> {
        Ok(self
            .holidays_for_date(date)?
            .iter()
            .any(|occ| occ.holiday.is_day_off))
    }

    /// The next `count` holidays observed on or after `from`, in date order.
    ///
    /// # Errors
    /// Returns an error if the search runs past the supported range.
    pub fn upcoming_holidays(
        &self,
        from: EthiopicDate,
        count: usize,
    ) -> Result<Vec<HolidayOccurrence>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        // Start a year early and finish a year late so that adjusted dates
        // crossing a year boundary are not missed.
        let mut year = (from.year() - 1).max(1);
        let mut spare_years = 1;
        let mut found: Vec<(EthiopicDate, HolidayOccurrence)> = Vec::new();
        loop {
            for occ in self.holidays_for_year(year)? {
                let actual = occ.actual_ethiopic_date()?;
                if actual >= from {
                    found.push((actual, occ));
                }
            }
            if year >= from.year() && found.len() >= count {
                if spare_years == 0 {
                    break;
                }
                spare_years -= 1;
            }
            year += 1;
        }

        found.sort_by_key(|(actual, _)| *actual);
        Ok(found
            .into_iter()
            .take(count)
            .map(|(_, occ)| occ)
            .collect())
    }
}

/// Adjustment a Muslim holiday receives from the configured offsets.
fn offset_for(offsets: &DayOffsets, key: HolidayKey) -> Days {
    match key {
        HolidayKey::EidAlFitr => offsets.eid_al_fitr,
        HolidayKey::EidAlAdha => offsets.eid_al_adha,
        HolidayKey::Mawlid => offsets.mawlid,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayType;

    fn eth(y: i32, m: u8, d: u8) -> EthiopicDate {
        EthiopicDate::new(y, m, d).unwrap()
    }

    fn ids(list: &[HolidayOccurrence]) -> Vec<&str> {
        list.iter().map(|o| o.holiday.id.as_str()).collect()
    }

    #[test]
    fn default_settings_mix_sources() {
        let repo = HolidayRepository::default();
        let list = repo.holidays_for_year(2016).unwrap();
        // 8 public + 5 orthodox + 3 muslim public.
        assert_eq!(list.len(), 16);
        assert!(list.iter().all(|o| o.adjustment == 0));
        assert!(list.iter().all(|o| o.ethiopic_date.year() == 2016));
        assert!(ids(&list).contains(&"orthodox_fasika_2016"));
        assert!(ids(&list).contains(&"muslim_eid_fitr_1445"));
        assert!(!ids(&list).contains(&"muslim_ashura_1446"));
    }

    #[test]
    fn public_only() {
        let repo = HolidayRepository::new(HolidaySettings::public_only());
        let list = repo.holidays_for_year(2017).unwrap();
        assert_eq!(list.len(), 8);
        assert!(list.iter().all(|o| o.holiday.id.starts_with("public_")));
        assert!(list
            .iter()
            .all(|o| o.holiday.holiday_type != HolidayType::Muslim));
    }

    #[test]
    fn working_days_flag() {
        let settings = HolidaySettings {
            include_muslim_working_days: true,
            ..HolidaySettings::default()
        };
        let list = HolidayRepository::new(settings).holidays_for_year(2016).unwrap();
        assert_eq!(list.len(), 20);
        assert!(ids(&list).contains(&"muslim_ashura_1446"));
    }

    #[test]
    fn offsets_apply_only_to_their_year() {
        let offsets = DayOffsets {
            eid_al_fitr: 1,
            eid_al_adha: -1,
            mawlid: 0,
            ethiopian_year: 2016,
        };
        let repo = HolidayRepository::new(HolidaySettings::default().with_day_offsets(offsets));

        let list = repo.holidays_for_year(2016).unwrap();
        let fitr = list
            .iter()
            .find(|o| o.holiday.key == HolidayKey::EidAlFitr)
            .unwrap();
        assert_eq!(fitr.adjustment, 1);
        assert_eq!(fitr.actual_ethiopic_date().unwrap(), eth(2016, 8, 3));
        let adha = list
            .iter()
            .find(|o| o.holiday.key == HolidayKey::EidAlAdha)
            .unwrap();
        assert_eq!(adha.actual_ethiopic_date().unwrap(), eth(2016, 10, 9));

        let other = repo.holidays_for_year(2017).unwrap();
        assert!(other.iter().all(|o| o.adjustment == 0));
    }

    #[test]
    fn month_and_date_queries() {
        let repo = HolidayRepository::default();
        let miazia = repo.holidays_for_month(2016, 8).unwrap();
        let mut got = ids(&miazia);
        got.sort_unstable();
        assert_eq!(
            got,
            [
                "muslim_eid_fitr_1445",
                "public_mayday_2016",
                "public_patriot_day_2016",
            ]
        );
        let megabit = repo.holidays_for_month(2016, 7).unwrap();
        assert_eq!(
            ids(&megabit),
            [
                "orthodox_siklet_2016",
                "orthodox_fasika_2016",
                "orthodox_tensae_2016",
            ]
        );

        // Fasika and Tensae.
        let day = repo.holidays_for_date(eth(2016, 7, 22)).unwrap();
        assert_eq!(day.len(), 2);
        assert!(repo.is_day_off(eth(2016, 7, 22)).unwrap());
        assert_eq!(repo.holidays_for_date(eth(2016, 8, 27)).unwrap().len(), 1);
        assert!(!repo.is_day_off(eth(2016, 8, 28)).unwrap());
        assert!(repo.holidays_for_date(eth(2016, 3, 3)).unwrap().is_empty());
    }

    #[test]
    fn month_out_of_range() {
        let repo = HolidayRepository::default();
        assert!(repo.holidays_for_month(2016, 0).is_err());
        assert!(repo.holidays_for_month(2016, 14).is_err());
    }

    #[test]
    fn adjusted_holiday_changes_month() {
        // Mawlid 1447 is Nehasse 30, 2017; one day later is Pagume 1.
        let offsets = DayOffsets {
            mawlid: 1,
            ethiopian_year: 2017,
            ..DayOffsets::default()
        };
        let repo = HolidayRepository::new(HolidaySettings::default().with_day_offsets(offsets));
        let nehase = repo.holidays_for_month(2017, 12).unwrap();
        assert!(!ids(&nehase).contains(&"muslim_mawlid_1447"));
        let pagume = repo.holidays_for_month(2017, 13).unwrap();
        assert!(ids(&pagume).contains(&"muslim_mawlid_1447"));
        assert_eq!(repo.holidays_for_date(eth(2017, 13, 1)).unwrap().len(), 1);
    }

    #[test]
    fn upcoming() {
        let repo = HolidayRepository::default();
        let next = repo.upcoming_holidays(eth(2016, 13, 1), 3).unwrap();
        assert_eq!(
            ids(&next),
            ["public_new_year_2017", "muslim_mawlid_1446", "public_meskel_2017"]
        );
        assert!(repo.upcoming_holidays(eth(2016, 13, 1), 0).unwrap().is_empty());

        let many = repo.upcoming_holidays(eth(2016, 1, 1), 40).unwrap();
        assert_eq!(many.len(), 40);
        let dates: Vec<_> = many
            .iter()
            .map(|o| o.actual_ethiopic_date().unwrap())
            .collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(dates[0], eth(2016, 1, 1));
    }
}
