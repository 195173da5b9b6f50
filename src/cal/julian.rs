//! Julian Day Numbers, the continuous day count that every piece of
//! day-granularity arithmetic goes through.
//!
//! A Julian Day Number (JDN) counts days from a reference point in 4713 BCE,
//! with each day starting at noon. The Modified Julian Day (MJD) shifts
//! that so days start at midnight, with day zero being 1858-11-17.
//!
//! These functions have no error paths: their inputs must already be a
//! valid date between 0001-01-01 and 9999-12-31.

/// Difference between the JDN at noon of a day and the MJD of that day.
const MJD_OFFSET: i64 = 1 + 2_400_000;

/// The MJD of 0001-01-01, the first day that can be represented.
pub(crate) const MIN_MJD: i64 = -678_575;

/// The MJD of 9999-12-31, the last day that can be represented.
pub(crate) const MAX_MJD: i64 = 2_973_483;


/// Returns the Julian Day Number, at noon, of the given day.
pub fn to_julian_day_number_at_noon(year: i32, month: i32, day: i32) -> i64 {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));

    (1461 * (y + 4800 + (m - 14) / 12)) / 4
        + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d - 32075
}

/// Returns the year, month, and day that has the given Julian Day Number
/// at noon.
pub fn from_julian_day_number_at_noon(jdn: i64) -> (i32, i32, i32) {
    let mut l = jdn + 68569;
    let n = (4 * l) / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1_461_001;
    l = l - (1461 * i) / 4 + 31;
    let j = (80 * l) / 2447;
    let d = l - (2447 * j) / 80;
    l = j / 11;
    let m = j + 2 - (12 * l);
    let y = 100 * (n - 49) + i + l;

    (y as i32, m as i32, d as i32)
}

/// Returns the Modified Julian Day of the given day.
pub fn to_modified_julian_day(year: i32, month: i32, day: i32) -> i64 {
    to_julian_day_number_at_noon(year, month, day) - MJD_OFFSET
}

/// Returns the year, month, and day of the given Modified Julian Day.
pub fn from_modified_julian_day(mjd: i64) -> (i32, i32, i32) {
    from_julian_day_number_at_noon(mjd + MJD_OFFSET)
}

/// Returns the day of the week of the given Julian Day Number, from 1 for
/// Sunday to 7 for Saturday.
pub(crate) fn weekday_of(jdn: i64) -> i32 {
    ((jdn + 1) % 7 + 1) as i32
}
