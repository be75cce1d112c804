//! Holiday query settings.
//!
//! [`HolidaySettings`] carries the switches a caller passes to the holiday
//! repository, together with the [`DayOffsets`] published through remote
//! configuration to reconcile tabular Hijri dates with local moon sighting.
//!
//! Settings are plain values. Nothing in the library holds them globally;
//! callers load them from wherever they keep configuration and hand them in.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Remote-config key for the Eid al-Adha offset.
pub const KEY_DAY_OFFSET_EID_AL_ADHA: &str = "config_day_offset_eid_al_adha";
/// Remote-config key for the Eid al-Fitr offset.
pub const KEY_DAY_OFFSET_EID_AL_FITR: &str = "config_day_offset_eid_al_fitir";
/// Remote-config key for the Mawlid offset.
pub const KEY_DAY_OFFSET_MAWLID: &str = "config_day_offset_mewlid";
/// Remote-config key naming the Ethiopian year the offsets belong to.
pub const KEY_DAY_OFFSET_ETHIO_YEAR: &str = "config_day_offset_ethio_year";

/// Day offsets for the Muslim public holidays.
///
/// The offsets are only meaningful for the single Ethiopian year named by
/// `ethiopian_year`; for any other year every offset reads as zero (see
/// [`DayOffsets::for_year`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayOffsets {
    /// Days added to Eid al-Adha (Dhu al-Hijjah 10).
    pub eid_al_adha: i32,
    /// Days added to Eid al-Fitr (Shawwal 1).
    pub eid_al_fitr: i32,
    /// Days added to Mawlid (Rabi' al-Awwal 12).
    pub mawlid: i32,
    /// Ethiopian year the offsets were published for.
    pub ethiopian_year: i32,
}

impl DayOffsets {
    /// Build offsets from remote-config key/value pairs.
    ///
    /// Unknown keys are ignored; missing keys default to zero.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if a recognised value does not fit in an
    /// `i32`.
    pub fn from_remote_config<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut offsets = DayOffsets::default();
        for (key, value) in pairs {
            let slot = match key {
                KEY_DAY_OFFSET_EID_AL_ADHA => &mut offsets.eid_al_adha,
                KEY_DAY_OFFSET_EID_AL_FITR => &mut offsets.eid_al_fitr,
                KEY_DAY_OFFSET_MAWLID => &mut offsets.mawlid,
                KEY_DAY_OFFSET_ETHIO_YEAR => &mut offsets.ethiopian_year,
                _ => continue,
            };
            *slot = i32::try_from(value).map_err(|_| Error::Config {
                key: key.to_owned(),
                value: value.to_string(),
            })?;
        }
        Ok(offsets)
    }

    /// Return the offsets that apply to `ethiopian_year`.
    ///
    /// All zero unless the year matches the configured one.
    pub fn for_year(&self, ethiopian_year: i32) -> DayOffsets {
        if self.ethiopian_year == ethiopian_year {
            *self
        } else {
            DayOffsets {
                ethiopian_year,
                ..DayOffsets::default()
            }
        }
    }

    /// Return `true` if no offset is non-zero.
    pub fn is_zero(&self) -> bool {
        self.eid_al_adha == 0 && self.eid_al_fitr == 0 && self.mawlid == 0
    }
}

/// Switches controlling which holiday sources a query includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidaySettings {
    /// Include the Orthodox movable feasts.
    pub include_orthodox: bool,
    /// Include the Muslim public holidays.
    pub include_muslim: bool,
    /// Also include Muslim observances that are working days.
    pub include_muslim_working_days: bool,
    /// Remote-config offsets for the Muslim public holidays.
    pub day_offsets: DayOffsets,
}

impl Default for HolidaySettings {
    fn default() -> Self {
        Self {
            include_orthodox: true,
            include_muslim: true,
            include_muslim_working_days: false,
            day_offsets: DayOffsets::default(),
        }
    }
}

impl HolidaySettings {
    /// Settings that include only the fixed national table.
    pub fn public_only() -> Self {
        Self {
            include_orthodox: false,
            include_muslim: false,
            include_muslim_working_days: false,
            day_offsets: DayOffsets::default(),
        }
    }

    /// Return a copy with the given offsets.
    pub fn with_day_offsets(self, day_offsets: DayOffsets) -> Self {
        Self {
            day_offsets,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_remote_config() {
        let offsets = DayOffsets::from_remote_config([
            (KEY_DAY_OFFSET_EID_AL_ADHA, 1),
            (KEY_DAY_OFFSET_EID_AL_FITR, -1),
            (KEY_DAY_OFFSET_MAWLID, 2),
            (KEY_DAY_OFFSET_ETHIO_YEAR, 2017),
            ("config_unrelated_flag", 42),
        ])
        .unwrap();
        assert_eq!(
            offsets,
            DayOffsets {
                eid_al_adha: 1,
                eid_al_fitr: -1,
                mawlid: 2,
                ethiopian_year: 2017,
            }
        );
    }

    #[test]
    fn parse_remote_config_overflow() {
        let err = DayOffsets::from_remote_config([(KEY_DAY_OFFSET_MAWLID, i64::MAX)]).unwrap_err();
        assert!(matches!(err, Error::Config { ref key, .. } if key == KEY_DAY_OFFSET_MAWLID));
    }

    #[test]
    fn offsets_only_for_configured_year() {
        let offsets = DayOffsets {
            eid_al_adha: 1,
            eid_al_fitr: 1,
            mawlid: 1,
            ethiopian_year: 2017,
        };
        assert_eq!(offsets.for_year(2017), offsets);
        assert!(offsets.for_year(2018).is_zero());
    }

    #[test]
    fn default_settings() {
        let s = HolidaySettings::default();
        assert!(s.include_orthodox);
        assert!(s.include_muslim);
        assert!(!s.include_muslim_working_days);
        assert!(s.day_offsets.is_zero());
    }

    #[test]
    fn deserialize_partial_settings() {
        let s: HolidaySettings =
            serde_json::from_str(r#"{"include_muslim": false, "day_offsets": {"mawlid": 1}}"#)
                .unwrap();
        assert!(s.include_orthodox);
        assert!(!s.include_muslim);
        assert_eq!(s.day_offsets.mawlid, 1);
        assert_eq!(s.day_offsets.eid_al_fitr, 0);
    }
}
