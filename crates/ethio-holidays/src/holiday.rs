//! Holiday definitions and their dated occurrences.
//!
//! A [`Holiday`] names a feast and the Ethiopic month/day it falls on in one
//! particular year; the year itself is supplied when the holiday is turned
//! into a [`HolidayOccurrence`].

use ethio_core::errors::Result;
use ethio_core::Days;
use ethio_time::{Date, EthiopicDate};
use serde::{Deserialize, Serialize};

/// Broad category of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayType {
    /// Civil national holiday.
    National,
    /// Ethiopian Orthodox Tewahedo feast.
    OrthodoxChristian,
    /// Islamic holiday or observance.
    Muslim,
    /// Cultural celebration.
    Cultural,
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HolidayType::National => "National",
            HolidayType::OrthodoxChristian => "Orthodox Christian",
            HolidayType::Muslim => "Muslim",
            HolidayType::Cultural => "Cultural",
        };
        write!(f, "{s}")
    }
}

/// Every holiday the calculators know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKey {
    // ── Fixed public table ──
    /// Enkutatash, Meskerem 1.
    NewYear,
    /// Meskel, Meskerem 17.
    Meskel,
    /// Genna, Tahsas 28/29.
    Christmas,
    /// Timket, Tir 11.
    Epiphany,
    /// Adwa Victory Day, Yekatit 23.
    AdwaVictory,
    /// International Workers' Day, Miazia 23.
    LabourDay,
    /// Patriots' Victory Day, Miazia 27.
    PatriotsDay,
    /// Downfall of the Derg, Ginbot 20.
    DergDownfall,

    // ── Orthodox movable feasts ──
    /// Siklet, Good Friday.
    GoodFriday,
    /// Fasika, Easter.
    Easter,
    /// Tensae, the Resurrection (same day as Fasika).
    Resurrection,
    /// Erget, the Ascension.
    Ascension,
    /// Peraklitos, Pentecost.
    Pentecost,

    // ── Islamic calendar ──
    /// Eid al-Fitr, Shawwal 1.
    EidAlFitr,
    /// Eid al-Adha, Dhu al-Hijjah 10.
    EidAlAdha,
    /// Mawlid al-Nabi, Rabi' al-Awwal 12.
    Mawlid,
    /// Islamic New Year, Muharram 1.
    IslamicNewYear,
    /// Ashura, Muharram 10.
    Ashura,
    /// Start of Ramadan, Ramadan 1.
    RamadanStart,
    /// Mid-Sha'ban, Sha'ban 15.
    MidShaban,
}

impl HolidayKey {
    /// Stable identifier prefix, e.g. `"public_meskel"`.
    pub fn slug(&self) -> &'static str {
        match self {
            HolidayKey::NewYear => "public_new_year",
            HolidayKey::Meskel => "public_meskel",
            HolidayKey::Christmas => "public_christmas",
            HolidayKey::Epiphany => "public_epiphany",
            HolidayKey::AdwaVictory => "public_adwa",
            HolidayKey::LabourDay => "public_mayday",
            HolidayKey::PatriotsDay => "public_patriot_day",
            HolidayKey::DergDownfall => "public_ginbot_20",
            HolidayKey::GoodFriday => "orthodox_siklet",
            HolidayKey::Easter => "orthodox_fasika",
            HolidayKey::Resurrection => "orthodox_tensae",
            HolidayKey::Ascension => "orthodox_erget",
            HolidayKey::Pentecost => "orthodox_peraklitos",
            HolidayKey::EidAlFitr => "muslim_eid_fitr",
            HolidayKey::EidAlAdha => "muslim_eid_adha",
            HolidayKey::Mawlid => "muslim_mawlid",
            HolidayKey::IslamicNewYear => "muslim_new_year",
            HolidayKey::Ashura => "muslim_ashura",
            HolidayKey::RamadanStart => "muslim_ramadan",
            HolidayKey::MidShaban => "muslim_mid_shaban",
        }
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            HolidayKey::NewYear => "Enkutatash (New Year)",
            HolidayKey::Meskel => "Meskel",
            HolidayKey::Christmas => "Genna (Christmas)",
            HolidayKey::Epiphany => "Timket (Epiphany)",
            HolidayKey::AdwaVictory => "Adwa Victory Day",
            HolidayKey::LabourDay => "Labour Day",
            HolidayKey::PatriotsDay => "Patriots' Day",
            HolidayKey::DergDownfall => "Derg Downfall Day",
            HolidayKey::GoodFriday => "Siklet (Good Friday)",
            HolidayKey::Easter => "Fasika (Easter)",
            HolidayKey::Resurrection => "Tensae (Resurrection)",
            HolidayKey::Ascension => "Erget (Ascension)",
            HolidayKey::Pentecost => "Peraklitos (Pentecost)",
            HolidayKey::EidAlFitr => "Eid al-Fitr",
            HolidayKey::EidAlAdha => "Eid al-Adha",
            HolidayKey::Mawlid => "Mawlid al-Nabi",
            HolidayKey::IslamicNewYear => "Islamic New Year",
            HolidayKey::Ashura => "Ashura",
            HolidayKey::RamadanStart => "Start of Ramadan",
            HolidayKey::MidShaban => "Mid-Sha'ban",
        }
    }

    /// Amharic display name.
    pub fn amharic_name(&self) -> &'static str {
        match self {
            HolidayKey::NewYear => "እንቁጣጣሽ",
            HolidayKey::Meskel => "መስቀል",
            HolidayKey::Christmas => "ገና",
            HolidayKey::Epiphany => "ጥምቀት",
            HolidayKey::AdwaVictory => "የዓድዋ ድል",
            HolidayKey::LabourDay => "የሰራተኞች ቀን",
            HolidayKey::PatriotsDay => "የአርበኞች ቀን",
            HolidayKey::DergDownfall => "የደርግ ውድቀት",
            HolidayKey::GoodFriday => "ስቅለት",
            HolidayKey::Easter => "ፋሲካ",
            HolidayKey::Resurrection => "ትንሣኤ",
            HolidayKey::Ascension => "እርገት",
            HolidayKey::Pentecost => "ጴራቅሊጦስ",
            HolidayKey::EidAlFitr => "ኢድ አል-ፈጥር",
            HolidayKey::EidAlAdha => "ኢድ አል-አድሃ",
            HolidayKey::Mawlid => "መውሊድ",
            HolidayKey::IslamicNewYear => "የሙስሊም አዲስ ዓመት",
            HolidayKey::Ashura => "አሹራ",
            HolidayKey::RamadanStart => "የረመዳን መጀመሪያ",
            HolidayKey::MidShaban => "መካከለኛ ሻዕባን",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            HolidayKey::NewYear => "Ethiopian New Year",
            HolidayKey::Meskel => "Finding of the True Cross",
            HolidayKey::Christmas => "Ethiopian Christmas",
            HolidayKey::Epiphany => "Epiphany / Baptism of Jesus",
            HolidayKey::AdwaVictory => "Victory of Adwa",
            HolidayKey::LabourDay => "International Workers' Day",
            HolidayKey::PatriotsDay => "Patriots Victory Day",
            HolidayKey::DergDownfall => "Downfall of the Derg Regime",
            HolidayKey::GoodFriday => "Crucifixion of Jesus Christ",
            HolidayKey::Easter => "Ethiopian Orthodox Easter",
            HolidayKey::Resurrection => "Resurrection of Jesus Christ",
            HolidayKey::Ascension => "Ascension of Jesus into Heaven",
            HolidayKey::Pentecost => "Descent of the Holy Spirit",
            HolidayKey::EidAlFitr => "Festival of Breaking the Fast after Ramadan",
            HolidayKey::EidAlAdha => "Festival of Sacrifice",
            HolidayKey::Mawlid => "Birthday of Prophet Muhammad",
            HolidayKey::IslamicNewYear => "First day of Muharram",
            HolidayKey::Ashura => "Day of Ashura",
            HolidayKey::RamadanStart => "Beginning of the holy month of fasting",
            HolidayKey::MidShaban => "Night of Mid-Sha'ban",
        }
    }

    /// Category of the holiday.
    pub fn holiday_type(&self) -> HolidayType {
        match self {
            HolidayKey::NewYear
            | HolidayKey::AdwaVictory
            | HolidayKey::LabourDay
            | HolidayKey::PatriotsDay
            | HolidayKey::DergDownfall => HolidayType::National,
            HolidayKey::Meskel
            | HolidayKey::Christmas
            | HolidayKey::Epiphany
            | HolidayKey::GoodFriday
            | HolidayKey::Easter
            | HolidayKey::Resurrection
            | HolidayKey::Ascension
            | HolidayKey::Pentecost => HolidayType::OrthodoxChristian,
            HolidayKey::EidAlFitr
            | HolidayKey::EidAlAdha
            | HolidayKey::Mawlid
            | HolidayKey::IslamicNewYear
            | HolidayKey::Ashura
            | HolidayKey::RamadanStart
            | HolidayKey::MidShaban => HolidayType::Muslim,
        }
    }

    /// Whether the holiday is a public day off.
    pub fn is_day_off(&self) -> bool {
        !matches!(
            self,
            HolidayKey::Resurrection
                | HolidayKey::Ascension
                | HolidayKey::Pentecost
                | HolidayKey::IslamicNewYear
                | HolidayKey::Ashura
                | HolidayKey::RamadanStart
                | HolidayKey::MidShaban
        )
    }
}

/// A holiday pinned to an Ethiopic month and day.
///
/// Holidays sort by month and day; ties fall back to the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// Stable identifier, `"<slug>_<year>"`. Muslim holidays use the Hijri
    /// year, everything else the Ethiopic year.
    pub id: String,
    /// Which holiday this is.
    pub key: HolidayKey,
    /// English name.
    pub name: String,
    /// Amharic name.
    pub localized_name: String,
    /// Category.
    pub holiday_type: HolidayType,
    /// Ethiopic month (1–13).
    pub ethiopian_month: u8,
    /// Ethiopic day of month.
    pub ethiopian_day: u8,
    /// Public day off.
    pub is_day_off: bool,
    /// One-line description.
    pub description: String,
}

impl Holiday {
    /// Build a holiday from its key, filling the descriptive fields.
    ///
    /// `id_year` is the year embedded in the identifier.
    pub fn new(key: HolidayKey, id_year: i32, ethiopian_month: u8, ethiopian_day: u8) -> Self {
        Holiday {
            id: format!("{}_{id_year}", key.slug()),
            key,
            name: key.name().to_owned(),
            localized_name: key.amharic_name().to_owned(),
            holiday_type: key.holiday_type(),
            ethiopian_month,
            ethiopian_day,
            is_day_off: key.is_day_off(),
            description: key.description().to_owned(),
        }
    }

    /// Build a holiday falling on `date`.
    pub fn on(key: HolidayKey, id_year: i32, date: EthiopicDate) -> Self {
        Self::new(key, id_year, date.month(), date.day())
    }

    /// The holiday's date in Ethiopic year `year`.
    ///
    /// # Errors
    /// Returns an error if the month/day does not exist in that year
    /// (Pagume 6 of a common year).
    pub fn date_in(&self, year: i32) -> Result<EthiopicDate> {
        EthiopicDate::new(year, self.ethiopian_month, self.ethiopian_day)
    }
}

impl Ord for Holiday {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.ethiopian_month, self.ethiopian_day, &self.id, self.key)
            .cmp(&(other.ethiopian_month, other.ethiopian_day, &other.id, other.key))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.localized_name.cmp(&other.localized_name))
            .then_with(|| self.holiday_type.cmp(&other.holiday_type))
            .then_with(|| self.is_day_off.cmp(&other.is_day_off))
            .then_with(|| self.description.cmp(&other.description))
    }
}

impl PartialOrd for Holiday {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A holiday observed on a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayOccurrence {
    /// The holiday definition.
    pub holiday: Holiday,
    /// The nominal date.
    pub ethiopic_date: EthiopicDate,
    /// Days between the nominal and the observed date.
    pub adjustment: Days,
}

impl HolidayOccurrence {
    /// An unadjusted occurrence of `holiday` in `year`.
    ///
    /// # Errors
    /// Returns an error if the holiday's month/day does not exist in `year`.
    pub fn new(holiday: Holiday, year: i32) -> Result<Self> {
        let ethiopic_date = holiday.date_in(year)?;
        Ok(HolidayOccurrence {
            holiday,
            ethiopic_date,
            adjustment: 0,
        })
    }

    /// Return a copy shifted by `adjustment` days.
    pub fn with_adjustment(self, adjustment: Days) -> Self {
        HolidayOccurrence { adjustment, ..self }
    }

    /// The observed Ethiopic date.
    ///
    /// Computed through the Gregorian calendar so the shift crosses month
    /// ends and Pagume correctly.
    ///
    /// # Errors
    /// Returns an error if the shifted date leaves the supported range.
    pub fn actual_ethiopic_date(&self) -> Result<EthiopicDate> {
        self.ethiopic_date.add_days(self.adjustment)
    }

    /// The observed Gregorian date.
    ///
    /// # Errors
    /// Returns an error if the shifted date leaves the supported range.
    pub fn actual_gregorian_date(&self) -> Result<Date> {
        self.ethiopic_date.to_gregorian().add_days(self.adjustment)
    }
}
