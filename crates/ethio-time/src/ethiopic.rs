//! `EthiopicDate`: a day of the Ethiopic (Amete Mihret) calendar.
//!
//! The Ethiopic year has twelve 30-day months followed by Pagume, which
//! has 5 days, or 6 when `year mod 4 == 3`. The year begins on Meskerem 1,
//! which falls on 11 September in the Gregorian calendar, or 12 September
//! when the preceding Ethiopic year was a leap year.
//!
//! Conversion anchors Meskerem 1 of each year to a Julian Day Number and
//! counts forward; the Gregorian side then follows from the JDN.

use ethio_core::errors::{Error, Result};
use ethio_core::{Days, JulianDay};
use serde::{Deserialize, Serialize};

use crate::date::{checked_scale, Date};
use crate::hijri::HijriDate;
use crate::month::EthiopicMonth;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;

/// JDN of Meskerem 1, 1 EC (27 August 8 CE, proleptic Gregorian).
const ETHIOPIC_EPOCH: JulianDay = 1_724_221;

/// Number of months in the Ethiopic year.
pub const MONTHS_PER_YEAR: u8 = 13;

/// A date in the Ethiopic calendar.
///
/// Ordered by `(year, month, day)`. Construction validates the fields, so
/// every value names a real day inside [`Date::MIN`]..=[`Date::MAX`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "EthiopicParts", into = "EthiopicParts")]
pub struct EthiopicDate {
    year: i32,
    month: u8,
    day: u8,
}

impl EthiopicDate {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create an Ethiopic date.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if `month` is not in 1–13, if `day` is
    /// not valid for the month (1–30, or 1–5/6 for Pagume), or if the year
    /// is before 1 EC. Returns [`Error::Date`] past 9999-12-31 Gregorian.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        if year < 1 {
            return Err(Error::invalid_date(
                year,
                month,
                day,
                "year must be at least 1",
            ));
        }
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(Error::invalid_date(
                year,
                month,
                day,
                "month out of range [1, 13]",
            ));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            let reason = if month == MONTHS_PER_YEAR {
                format!("Pagume has {days_in} days in {year}")
            } else {
                format!("day out of range [1, {days_in}]")
            };
            return Err(Error::invalid_date(year, month, day, reason));
        }
        let date = EthiopicDate { year, month, day };
        Date::from_julian_day(date.julian_day())?;
        Ok(date)
    }

    /// Convert a Gregorian date to the Ethiopic calendar.
    ///
    /// The Ethiopic year is found by comparing the date against the
    /// September new-year threshold of the coming year; month and day then
    /// follow from the day-of-year offset.
    pub fn from_gregorian(date: Date) -> Self {
        Self::from_julian_day(date.julian_day())
    }

    /// Convert a Julian Day Number inside the `Date` range.
    pub(crate) fn from_julian_day(jdn: JulianDay) -> Self {
        // Gregorian year Y holds Ethiopic new year Y - 7 from September on.
        let (gy, _, _) = crate::julian_day::julian_day_to_gregorian(jdn);
        let mut year = gy - 8;
        if jdn >= new_year_julian_day(year + 1) {
            year += 1;
        }
        let day_of_year = jdn - new_year_julian_day(year) + 1;
        let month = ((day_of_year - 1) / 30 + 1).clamp(1, i64::from(MONTHS_PER_YEAR));
        let day = (day_of_year - 1) - (month - 1) * 30 + 1;
        EthiopicDate {
            year,
            month: month as u8,
            day: day as u8,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the month number (1–13).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the month as an enum.
    pub fn ethiopic_month(&self) -> EthiopicMonth {
        match EthiopicMonth::from_number(self.month) {
            Some(m) => m,
            None => unreachable!("month validated at construction"),
        }
    }

    /// Return the day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the Julian Day Number.
    pub fn julian_day(&self) -> JulianDay {
        new_year_julian_day(self.year)
            + JulianDay::from(self.month - 1) * 30
            + JulianDay::from(self.day)
            - 1
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        u16::from(self.month - 1) * 30 + u16::from(self.day)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_julian_day(self.julian_day())
    }

    /// Return `true` if this date's year has a 6-day Pagume.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Number of days in this date's year (365 or 366).
    pub fn days_in_year(&self) -> u16 {
        days_in_year(self.year)
    }

    /// First day of this date's month.
    pub fn first_day_of_month(&self) -> Self {
        EthiopicDate { day: 1, ..*self }
    }

    // ── Conversions ──────────────────────────────────────────────────────────

    /// Convert to the Gregorian calendar.
    ///
    /// Meskerem 1 of the year lands on 11 or 12 September of `year + 7`;
    /// the date is that many days later.
    pub fn to_gregorian(&self) -> Date {
        Date::from_julian_day_unchecked(self.julian_day())
    }

    /// Convert to the tabular Hijri calendar.
    pub fn to_hijri(&self) -> HijriDate {
        HijriDate::from_julian_day(self.julian_day())
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days, crossing month and year boundaries.
    ///
    /// Computed through the Gregorian calendar, so Pagume's 5/6 days are
    /// respected.
    pub fn add_days(self, n: Days) -> Result<Self> {
        let date = self.to_gregorian().add_days(n)?;
        Ok(Self::from_gregorian(date))
    }

    /// Advance by `n` calendar months, carrying into the year.
    ///
    /// The day is clamped to the target month's length, so Meskerem 30 plus
    /// 12 months is Pagume 5 (or 6). This does not commute with
    /// [`add_days`](Self::add_days).
    pub fn add_months(self, n: i32) -> Result<Self> {
        let total = (self.year * i32::from(MONTHS_PER_YEAR) + i32::from(self.month - 1))
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("{self} + {n} months overflows")))?;
        let year = total.div_euclid(i32::from(MONTHS_PER_YEAR));
        let month = (total.rem_euclid(i32::from(MONTHS_PER_YEAR)) + 1) as u8;
        let day = self.day.min(days_in_month(year, month));
        Self::new(year, month, day)
    }

    /// Advance by a period expressed in the given time unit.
    ///
    /// Years are thirteen months.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(checked_scale(n, 7)?),
            TimeUnit::Months => self.add_months(n),
            TimeUnit::Years => self.add_months(checked_scale(n, i32::from(MONTHS_PER_YEAR))?),
        }
    }

    /// Number of days from `self` to `other`.  Positive if `other > self`.
    pub fn days_between(self, other: EthiopicDate) -> Days {
        (other.julian_day() - self.julian_day()) as Days
    }

    // ── Formatting ───────────────────────────────────────────────────────────

    /// Human-readable form: `"Meskerem 1, 2016"`.
    pub fn format(&self) -> String {
        format!("{} {}, {}", self.ethiopic_month().name(), self.day, self.year)
    }

    /// Amharic form: `"መስከረም 1, 2016"`.
    pub fn format_amharic(&self) -> String {
        format!(
            "{} {}, {}",
            self.ethiopic_month().amharic_name(),
            self.day,
            self.year
        )
    }
}

impl From<Date> for EthiopicDate {
    fn from(date: Date) -> Self {
        EthiopicDate::from_gregorian(date)
    }
}

impl From<EthiopicDate> for Date {
    fn from(date: EthiopicDate) -> Self {
        date.to_gregorian()
    }
}

impl std::fmt::Display for EthiopicDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl std::fmt::Debug for EthiopicDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EthiopicDate({:04}-{:02}-{:02})",
            self.year, self.month, self.day
        )
    }
}

// ── Serde representation ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct EthiopicParts {
    year: i32,
    month: u8,
    day: u8,
}

impl From<EthiopicDate> for EthiopicParts {
    fn from(d: EthiopicDate) -> Self {
        EthiopicParts {
            year: d.year,
            month: d.month,
            day: d.day,
        }
    }
}

impl TryFrom<EthiopicParts> for EthiopicDate {
    type Error = Error;
    fn try_from(p: EthiopicParts) -> Result<Self> {
        EthiopicDate::new(p.year, p.month, p.day)
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether an Ethiopic year has a 6-day Pagume.
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Number of days in an Ethiopic month (30, or 5/6 for Pagume).
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1..=12 => 30,
        13 if is_leap_year(year) => 6,
        13 => 5,
        _ => 0,
    }
}

/// Number of days in an Ethiopic year.
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// JDN of Meskerem 1 of `year`.
pub fn new_year_julian_day(year: i32) -> JulianDay {
    let y = JulianDay::from(year);
    ETHIOPIC_EPOCH + 365 * (y - 1) + y.div_euclid(4)
}

/// Gregorian date of Meskerem 1 of `year`.
///
/// # Errors
/// Returns [`Error::Date`] if the day is outside the `Date` range.
pub fn new_year(year: i32) -> Result<Date> {
    Date::from_julian_day(new_year_julian_day(year))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
