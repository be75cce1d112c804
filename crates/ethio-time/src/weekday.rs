//! `Weekday`: day-of-week enum.

use ethio_core::JulianDay;
use serde::{Deserialize, Serialize};

/// Day of the week, numbered the ISO 8601 way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    /// ሰኞ
    Monday = 1,
    /// ማክሰኞ
    Tuesday,
    /// ረቡዕ
    Wednesday,
    /// ሐሙስ
    Thursday,
    /// ዓርብ
    Friday,
    /// ቅዳሜ
    Saturday,
    /// እሑድ
    Sunday,
}

/// Monday first, indexed by `ordinal - 1`.
const ISO_ORDER: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Weekday with ISO ordinal `n` (Monday = 1, Sunday = 7), if any.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        ISO_ORDER.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Weekday of a Julian Day Number.
    ///
    /// `(jdn + 1) mod 7` counts from Sunday = 0; JDN 0 was a Monday.
    pub fn from_julian_day(jdn: JulianDay) -> Self {
        ISO_ORDER[jdn.rem_euclid(7) as usize]
    }

    /// ISO ordinal (Monday = 1, Sunday = 7).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// English name.
    pub fn name(&self) -> &'static str {
        const NAMES: [&str; 7] = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        NAMES[usize::from(self.ordinal() - 1)]
    }

    /// Amharic name.
    pub fn amharic_name(&self) -> &'static str {
        const NAMES: [&str; 7] = ["ሰኞ", "ማክሰኞ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ", "እሑድ"];
        NAMES[usize::from(self.ordinal() - 1)]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_roundtrip() {
        for n in 1..=7u8 {
            assert_eq!(Weekday::from_ordinal(n).unwrap().ordinal(), n);
        }
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }

    #[test]
    fn julian_day_weekday() {
        // 2000-01-01 (JDN 2451545) was a Saturday.
        assert_eq!(Weekday::from_julian_day(2_451_545), Weekday::Saturday);
        // 2025-10-27 (JDN 2460976) was a Monday.
        assert_eq!(Weekday::from_julian_day(2_460_976), Weekday::Monday);
        assert_eq!(Weekday::from_julian_day(2_460_982), Weekday::Sunday);
        // Sunday = 0 counting.
        for jdn in 2_460_970..2_460_990i64 {
            let sunday_based = (jdn + 1).rem_euclid(7) as u8;
            assert_eq!(Weekday::from_julian_day(jdn).ordinal() % 7, sunday_based);
        }
    }

    #[test]
    fn names() {
        assert_eq!(Weekday::Friday.to_string(), "Friday");
        assert_eq!(Weekday::Sunday.amharic_name(), "እሑድ");
    }
}
