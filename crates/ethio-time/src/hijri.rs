//! `HijriDate`: the tabular Islamic calendar.
//!
//! Uses the arithmetic "Kuwaiti" scheme: a 30-year cycle with 11 leap
//! years, months alternating 30 and 29 days, and Dhu al-Hijjah taking a
//! 30th day in leap years. It is a civil approximation of the lunar
//! calendar. Holidays derived from it may land one or two days away from
//! the dates fixed by moon sighting; callers reconcile that with day
//! offsets rather than astronomy.

use ethio_core::errors::Result;
use ethio_core::{Days, JulianDay};
use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::ethiopic::EthiopicDate;
use crate::weekday::Weekday;

/// JDN of 1 Muharram 1 AH (16 July 622, Julian).
pub const HIJRI_EPOCH: JulianDay = 1_948_440;

/// Positions of the leap years within the 30-year cycle.
const LEAP_YEARS_IN_CYCLE: [i32; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Month of the Hijri year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HijriMonth {
    /// Muharram (1).
    Muharram = 1,
    /// Safar (2).
    Safar = 2,
    /// Rabi' al-Awwal (3).
    RabiAlAwwal = 3,
    /// Rabi' al-Thani (4).
    RabiAlThani = 4,
    /// Jumada al-Awwal (5).
    JumadaAlAwwal = 5,
    /// Jumada al-Thani (6).
    JumadaAlThani = 6,
    /// Rajab (7).
    Rajab = 7,
    /// Sha'ban (8).
    Shaban = 8,
    /// Ramadan (9).
    Ramadan = 9,
    /// Shawwal (10).
    Shawwal = 10,
    /// Dhu al-Qi'dah (11).
    DhuAlQidah = 11,
    /// Dhu al-Hijjah (12).
    DhuAlHijjah = 12,
}

impl HijriMonth {
    /// Construct from a number (1 = Muharram … 12 = Dhu al-Hijjah).
    pub fn from_number(n: u8) -> Option<Self> {
        use HijriMonth::*;
        let month = match n {
            1 => Muharram,
            2 => Safar,
            3 => RabiAlAwwal,
            4 => RabiAlThani,
            5 => JumadaAlAwwal,
            6 => JumadaAlThani,
            7 => Rajab,
            8 => Shaban,
            9 => Ramadan,
            10 => Shawwal,
            11 => DhuAlQidah,
            12 => DhuAlHijjah,
            _ => return None,
        };
        Some(month)
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the English transliteration.
    pub fn name(&self) -> &'static str {
        match self {
            HijriMonth::Muharram => "Muharram",
            HijriMonth::Safar => "Safar",
            HijriMonth::RabiAlAwwal => "Rabi' al-Awwal",
            HijriMonth::RabiAlThani => "Rabi' al-Thani",
            HijriMonth::JumadaAlAwwal => "Jumada al-Awwal",
            HijriMonth::JumadaAlThani => "Jumada al-Thani",
            HijriMonth::Rajab => "Rajab",
            HijriMonth::Shaban => "Sha'ban",
            HijriMonth::Ramadan => "Ramadan",
            HijriMonth::Shawwal => "Shawwal",
            HijriMonth::DhuAlQidah => "Dhu al-Qi'dah",
            HijriMonth::DhuAlHijjah => "Dhu al-Hijjah",
        }
    }
}

impl std::fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A date in the tabular Hijri calendar.
///
/// Only ever produced by decomposing a Julian Day Number, so the weekday
/// and leap-year fields always agree with the year/month/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "HijriParts", into = "HijriParts")]
pub struct HijriDate {
    year: i32,
    month: u8,
    day: u8,
    weekday: Weekday,
    is_leap_year: bool,
}

impl HijriDate {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Decompose a Julian Day Number.
    pub fn from_julian_day(jdn: JulianDay) -> Self {
        let l = jdn - HIJRI_EPOCH + 10632;
        let n = (l - 1).div_euclid(10631);
        let l = l - 10631 * n + 354;
        let j = (10985 - l).div_euclid(5316) * (50 * l).div_euclid(17719)
            + l.div_euclid(5670) * (43 * l).div_euclid(15238);
        let l = l - (30 - j).div_euclid(15) * (17719 * j).div_euclid(50)
            - j.div_euclid(16) * (15238 * j).div_euclid(43)
            + 29;

        let month = (24 * l).div_euclid(709);
        let day = l - (709 * month).div_euclid(24);
        let year = (30 * n + j - 30) as i32;

        HijriDate {
            year,
            month: month as u8,
            day: day as u8,
            weekday: Weekday::from_julian_day(jdn),
            is_leap_year: is_leap_year(year),
        }
    }

    /// Convert a Gregorian date.
    pub fn from_gregorian(date: Date) -> Self {
        Self::from_julian_day(date.julian_day())
    }

    /// The date named by `(year, month, day)`, normalised through the JDN.
    ///
    /// Fields are not validated: Dhu al-Hijjah 30 of a common year comes
    /// back as 1 Muharram of the next year.
    pub fn of(year: i32, month: u8, day: u8) -> Self {
        Self::from_julian_day(to_julian_day(year, month, day))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year (AH).
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the month as an enum.
    pub fn hijri_month(&self) -> HijriMonth {
        match HijriMonth::from_number(self.month) {
            Some(m) => m,
            None => unreachable!("month derived from a julian day"),
        }
    }

    /// Return the day of the month (1–30).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Return `true` if the year has 355 days.
    pub fn is_leap_year(&self) -> bool {
        self.is_leap_year
    }

    /// Return the Julian Day Number.
    pub fn julian_day(&self) -> JulianDay {
        to_julian_day(self.year, self.month, self.day)
    }

    // ── Conversions ──────────────────────────────────────────────────────────

    /// Convert to the Gregorian calendar.
    ///
    /// # Errors
    /// Returns an error if the day falls outside the `Date` range.
    pub fn to_gregorian(&self) -> Result<Date> {
        Date::from_julian_day(self.julian_day())
    }

    /// Convert to the Ethiopic calendar.
    ///
    /// # Errors
    /// Returns an error if the day falls outside the `Date` range.
    pub fn to_ethiopic(&self) -> Result<EthiopicDate> {
        Ok(EthiopicDate::from_gregorian(self.to_gregorian()?))
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.
    pub fn add_days(self, n: Days) -> Self {
        Self::from_julian_day(self.julian_day() + JulianDay::from(n))
    }

    /// Human-readable form: `"Ramadan 1, 1445 AH"`.
    pub fn format(&self) -> String {
        format!("{} {}, {} AH", self.hijri_month().name(), self.day, self.year)
    }
}

impl From<Date> for HijriDate {
    fn from(date: Date) -> Self {
        HijriDate::from_gregorian(date)
    }
}

impl std::fmt::Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

// ── Serde representation ──────────────────────────────────────────────────────

/// Wire shape of a [`HijriDate`]; derived fields are recomputed on read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct HijriParts {
    year: i32,
    month: u8,
    day: u8,
}

impl From<HijriDate> for HijriParts {
    fn from(d: HijriDate) -> Self {
        HijriParts {
            year: d.year,
            month: d.month,
            day: d.day,
        }
    }
}

impl From<HijriParts> for HijriDate {
    fn from(p: HijriParts) -> Self {
        HijriDate::of(p.year, p.month, p.day)
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// JDN of a Hijri `(year, month, day)`, without validation.
pub fn to_julian_day(year: i32, month: u8, day: u8) -> JulianDay {
    let (y, m, d) = (
        JulianDay::from(year),
        JulianDay::from(month),
        JulianDay::from(day),
    );
    (11 * y + 3).div_euclid(30) + 354 * y + 30 * m - (m - 1).div_euclid(2) + d + HIJRI_EPOCH
        - 385
}

/// Whether a Hijri year has 355 days.
pub fn is_leap_year(year: i32) -> bool {
    LEAP_YEARS_IN_CYCLE.contains(&year.rem_euclid(30))
}

/// Number of days in a Hijri month.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        12 if is_leap_year(year) => 30,
        1..=12 if month % 2 == 1 => 30,
        1..=12 => 29,
        _ => 0,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn epoch() {
        let h = HijriDate::from_julian_day(HIJRI_EPOCH);
        assert_eq!((h.year(), h.month(), h.day()), (1, 1, 1));
        assert_eq!(to_julian_day(1, 1, 1), HIJRI_EPOCH);
    }

    #[test]
    fn known_conversions() {
        let h = HijriDate::from_gregorian(greg(2024, 3, 11));
        assert_eq!((h.year(), h.month(), h.day()), (1445, 9, 1));
        assert_eq!(h.hijri_month(), HijriMonth::Ramadan);
        assert_eq!(h.weekday(), Weekday::Monday);

        let h = HijriDate::from_gregorian(greg(2025, 10, 27));
        assert_eq!((h.year(), h.month(), h.day()), (1447, 5, 5));

        assert_eq!(HijriDate::of(1445, 9, 1).to_gregorian().unwrap(), greg(2024, 3, 11));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(1442)); // 1442 mod 30 = 2
        assert!(!is_leap_year(1444));
        assert!(is_leap_year(1447)); // 1447 mod 30 = 7
        for y in 1400..1460 {
            let len = to_julian_day(y + 1, 1, 1) - to_julian_day(y, 1, 1);
            assert_eq!(len == 355, is_leap_year(y), "year {y} has {len} days");
        }
    }

    #[test]
    fn month_lengths_match_julian_days() {
        for y in [1444, 1447] {
            for m in 1..12u8 {
                let len = to_julian_day(y, m + 1, 1) - to_julian_day(y, m, 1);
                assert_eq!(len, JulianDay::from(days_in_month(y, m)));
            }
            let last = to_julian_day(y + 1, 1, 1) - to_julian_day(y, 12, 1);
            assert_eq!(last, JulianDay::from(days_in_month(y, 12)));
        }
    }

    #[test]
    fn of_normalises() {
        // 1444 is a common year: Dhu al-Hijjah has 29 days.
        let h = HijriDate::of(1444, 12, 30);
        assert_eq!((h.year(), h.month(), h.day()), (1445, 1, 1));
        assert!(!h.is_leap_year());
    }

    #[test]
    fn add_days_and_format() {
        let h = HijriDate::of(1445, 8, 29).add_days(1);
        assert_eq!(h.hijri_month(), HijriMonth::Ramadan);
        assert_eq!(h.format(), "Ramadan 1, 1445 AH");
    }

    #[test]
    fn to_ethiopic() {
        let e = HijriDate::of(1445, 10, 1).to_ethiopic().unwrap();
        assert_eq!(e, EthiopicDate::new(2016, 8, 2).unwrap());
    }
}
