//! Gregorian calendar rules: leap years, month lengths, days of the year,
//! and the named months and weekdays.

use std::ops::Deref;

use crate::error::Error;

use self::Month::*;
use self::Weekday::*;


/// Returns whether the given year is a leap year in the proleptic Gregorian
/// calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month of the given year.
pub fn days_in_month(year: i32, month: Month) -> i32 {
    Year(year).month(month).day_count()
}

/// Returns the day of the year, counting 1 January as day 1.
///
/// The inputs must already form a valid date.
pub fn day_of_year(year: i32, month: i32, day: i32) -> i32 {
    let k = if is_leap_year(year) { 1 } else { 2 };
    (275 * month) / 9 - k * ((month + 9) / 12) + day - 30
}


/// A single year.
///
/// This is just a wrapper around `i32` that performs year-related tests.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Year(pub i32);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.0)
    }

    /// Returns a year-month, pairing this year with the given month.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::{Year, Month};
    ///
    /// let expiry_date = Year(2017).month(Month::February);
    /// assert_eq!(*expiry_date.year, 2017);
    /// assert_eq!(expiry_date.month, Month::February);
    /// ```
    pub fn month(self, month: Month) -> YearMonth {
        YearMonth {
            year: self,
            month,
        }
    }
}

impl Deref for Year {
    type Target = i32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


/// A month-year pair.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct YearMonth {
    pub year: Year,
    pub month: Month,
}

impl YearMonth {

    /// Returns the number of days in this month. This can be definitely
    /// known, as the paired year determines whether it’s a leap year, so
    /// there’s no chance of being caught out by February.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::Year;
    /// use civil_datetime::Month::February;
    ///
    /// assert_eq!(Year(2000).month(February).day_count(), 29);
    /// assert_eq!(Year(1900).month(February).day_count(), 28);
    /// ```
    pub fn day_count(&self) -> i32 {
        self.month.days_in_month(self.year.is_leap_year())
    }
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i32 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use civil_datetime::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i32) -> Result<Self, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::out_of_range("month", month, 1, 12)),
        })
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    ///
    /// ```rust
    /// use civil_datetime::Month;
    /// assert_eq!(Month::from_zero(5), Ok(Month::June));
    /// assert!(Month::from_zero(12).is_err());
    /// ```
    pub fn from_zero(month: i32) -> Result<Self, Error> {
        Self::from_one(month + 1)
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 1 here, as it is in the numbers `DateTime::weekday`
// hands out.

impl Weekday {

    /// Returns how many days this weekday comes after Sunday, so Sunday
    /// is 0 and Saturday is 6.
    pub fn days_from_sunday(self) -> usize {
        match self {
            Sunday   => 0,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 1, Monday as
    /// Day 2, and so on.
    ///
    /// ```rust
    /// use civil_datetime::Weekday;
    /// assert_eq!(Weekday::from_one(5), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_one(0).is_err());
    /// ```
    pub fn from_one(weekday: i32) -> Result<Self, Error> {
        Ok(match weekday {
            1 => Sunday,     2 => Monday,    3 => Tuesday,
            4 => Wednesday,  5 => Thursday,  6 => Friday,
            7 => Saturday,   _ => return Err(Error::out_of_range("weekday", weekday, 1, 7)),
        })
    }
}
