//! Gregorian `Date` type.
//!
//! A `Date` is a day of the proleptic Gregorian calendar stored as its
//! Julian Day Number. The Gregorian calendar is the interchange format of
//! the library: Ethiopic dates convert to and from it directly and Hijri
//! dates reach it through the JDN.
//!
//! # Range
//! * `Date::MIN` is 27 August 8 CE, the day of Meskerem 1, year 1 of the
//!   Ethiopic era, so that every `Date` has an Ethiopic counterpart with a
//!   positive year.
//! * `Date::MAX` is 31 December 9999.

use ethio_core::errors::{Error, Result};
use ethio_core::{Days, JulianDay};
use serde::{Deserialize, Serialize};

use crate::julian_day::{gregorian_to_julian_day, julian_day_to_gregorian};
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;

/// A proleptic Gregorian calendar date represented by its Julian Day Number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "GregorianParts", into = "GregorianParts")]
pub struct Date(JulianDay);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: 8-08-27 (Meskerem 1, 1 EC).
    pub const MIN: Date = Date(1_724_221);

    /// Maximum valid date: 9999-12-31.
    pub const MAX: Date = Date(5_373_484);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a Julian Day Number.
    ///
    /// # Errors
    /// Returns [`Error::Date`] outside `[Date::MIN, Date::MAX]`.
    pub fn from_julian_day(jdn: JulianDay) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&jdn) {
            return Err(Error::Date(format!(
                "julian day {jdn} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(jdn))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the fields do not name a real day,
    /// or [`Error::Date`] if the day lies outside the supported range.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date(
                year,
                month,
                day,
                "month out of range [1, 12]",
            ));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::invalid_date(
                year,
                month,
                day,
                format!("day out of range [1, {days_in}]"),
            ));
        }
        Self::from_julian_day(gregorian_to_julian_day(year, month, day))
    }

    /// Create a date from a JDN already known to be in range.
    pub(crate) fn from_julian_day_unchecked(jdn: JulianDay) -> Self {
        debug_assert!(
            (Self::MIN.0..=Self::MAX.0).contains(&jdn),
            "invalid julian day {jdn}"
        );
        Date(jdn)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the Julian Day Number.
    pub fn julian_day(&self) -> JulianDay {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u8, u8) {
        julian_day_to_gregorian(self.0)
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let y = self.year();
        (self.0 - gregorian_to_julian_day(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_julian_day(self.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: Days) -> Result<Self> {
        Self::from_julian_day(self.0 + JulianDay::from(n))
    }

    /// Advance by a period expressed in the given time unit.
    ///
    /// Month and year steps clamp the day to the end of the target month
    /// (Jan 31 + 1 month = Feb 28/29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(checked_scale(n, 7)?),
            TimeUnit::Months => {
                let (y, m, d) = self.ymd();
                let total = (y * 12 + (i32::from(m) - 1))
                    .checked_add(n)
                    .ok_or_else(|| Error::Date(format!("{self} + {n} months overflows")))?;
                let new_y = total.div_euclid(12);
                let new_m = (total.rem_euclid(12) + 1) as u8;
                let new_d = d.min(days_in_month(new_y, new_m));
                Self::from_ymd(new_y, new_m, new_d)
            }
            TimeUnit::Years => self.advance(checked_scale(n, 12)?, TimeUnit::Months),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> Days {
        (other.0 - self.0) as Days
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = Days;
    fn sub(self, rhs: Date) -> Days {
        rhs.days_between(self)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{d} {} {y}", MONTH_NAMES[m as usize - 1])
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Serde representation ──────────────────────────────────────────────────────

/// Wire shape of a [`Date`]: `{"year": .., "month": .., "day": ..}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct GregorianParts {
    year: i32,
    month: u8,
    day: u8,
}

impl From<Date> for GregorianParts {
    fn from(d: Date) -> Self {
        let (year, month, day) = d.ymd();
        GregorianParts { year, month, day }
    }
}

impl TryFrom<GregorianParts> for Date {
    type Error = Error;
    fn try_from(p: GregorianParts) -> Result<Self> {
        Date::from_ymd(p.year, p.month, p.day)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;
    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_ymd(d.year(), d.month() as u8, d.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        let (y, m, day) = d.ymd();
        // Every `Date` lies inside chrono's supported range.
        chrono::NaiveDate::from_ymd_opt(y, u32::from(m), u32::from(day)).unwrap_or_default()
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// `n * factor`, or [`Error::Date`] when the step count overflows.
pub(crate) fn checked_scale(n: i32, factor: i32) -> Result<i32> {
    n.checked_mul(factor)
        .ok_or_else(|| Error::Date(format!("{n} x {factor} steps overflows")))
}

/// Whether a given Gregorian year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given Gregorian month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Date::MIN.ymd(), (8, 8, 27));
        assert_eq!(Date::MAX.ymd(), (9999, 12, 31));
        assert!(Date::from_julian_day(Date::MIN.julian_day() - 1).is_err());
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2000, 1, 1),
            (2023, 6, 15),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_fields() {
        assert!(matches!(
            Date::from_ymd(2023, 2, 29),
            Err(Error::InvalidDate { .. })
        ));
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 4, 0).is_err());
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        // 2024-01-06 is a Saturday
        assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2023, 1, 1).day_of_year(), 1);
        assert_eq!(date(2023, 12, 31).day_of_year(), 365);
        assert_eq!(date(2024, 12, 31).day_of_year(), 366);
        assert_eq!(date(2015, 9, 12).day_of_year(), 255);
    }

    #[test]
    fn test_advance_months() {
        let d = date(2023, 1, 31);
        // Jan 31 + 1 month = Feb 28 (clamp to end of month)
        assert_eq!(d.advance(1, TimeUnit::Months).unwrap(), date(2023, 2, 28));
        assert_eq!(d.advance(-2, TimeUnit::Months).unwrap(), date(2022, 11, 30));
        assert_eq!(
            date(2024, 2, 29).advance(1, TimeUnit::Years).unwrap(),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn test_advance_overflow() {
        let d = date(2024, 2, 15);
        // 613_566_757 * 7 wraps to 3 in i32.
        assert!(matches!(d.advance(613_566_757, TimeUnit::Weeks), Err(Error::Date(_))));
        assert!(matches!(d.advance(i32::MAX, TimeUnit::Months), Err(Error::Date(_))));
        assert!(matches!(d.advance(i32::MIN, TimeUnit::Years), Err(Error::Date(_))));
        assert!(d.advance(i32::MAX, TimeUnit::Days).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        let d2 = d.add_days(31).unwrap();
        assert_eq!(d2, date(2023, 2, 1));
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_between(d2), 31);
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2025, 10, 27).to_string(), "27 October 2025");
        assert_eq!(format!("{:?}", date(2025, 10, 27)), "Date(2025-10-27)");
    }

    #[test]
    fn test_serde() {
        let d = date(2024, 4, 10);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"year":2024,"month":4,"day":10}"#);
        assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), d);
        assert!(serde_json::from_str::<Date>(r#"{"year":2023,"month":2,"day":30}"#).is_err());
    }
}
