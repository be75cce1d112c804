//! Gregorian ⇄ Julian Day Number bridge.
//!
//! Integer Fliegel–Van Flandern style formulas on the proleptic Gregorian
//! calendar. Both directions use floor division so they stay exact for
//! years before the common era as well.

use ethio_core::JulianDay;

/// Convert a proleptic Gregorian `(year, month, day)` to its Julian Day
/// Number.
///
/// The fields are not validated; out-of-range months or days are folded
/// arithmetically.
pub fn gregorian_to_julian_day(year: i32, month: u8, day: u8) -> JulianDay {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let a = (14 - m).div_euclid(12);
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Convert a Julian Day Number to a proleptic Gregorian `(year, month, day)`.
///
/// Exact inverse of [`gregorian_to_julian_day`] for valid dates.
pub fn julian_day_to_gregorian(jdn: JulianDay) -> (i32, u8, u8) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year as i32, month as u8, day as u8)
}
