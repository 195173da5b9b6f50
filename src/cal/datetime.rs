//! Date-times whose seven fields are each independently optional.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::cal::julian;
use crate::cal::parse::parse_fields;
use crate::cal::rules::{self, Month};
use crate::error::Error;
use crate::util::check_range;


/// One of the seven fields of a date-time, from the most significant to
/// the least.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    Year, Month, Day, Hour, Minute, Second, Nanosecond,
}

impl Unit {

    /// Every unit, in order of decreasing significance.
    pub const ALL: [Unit; 7] = [
        Unit::Year, Unit::Month, Unit::Day,
        Unit::Hour, Unit::Minute, Unit::Second, Unit::Nanosecond,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Unit::Year       => "year",
            Unit::Month      => "month",
            Unit::Day        => "day",
            Unit::Hour       => "hour",
            Unit::Minute     => "minute",
            Unit::Second     => "second",
            Unit::Nanosecond => "nanosecond",
        }
    }

    /// The values a field of this unit may take, ignoring the extra limit
    /// that the month puts on the day.
    pub fn range(self) -> RangeInclusive<i32> {
        match self {
            Unit::Year       => 1 ..= 9999,
            Unit::Month      => 1 ..= 12,
            Unit::Day        => 1 ..= 31,
            Unit::Hour       => 0 ..= 23,
            Unit::Minute     => 0 ..= 59,
            Unit::Second     => 0 ..= 59,
            Unit::Nanosecond => 0 ..= 999_999_999,
        }
    }
}


/// Where absent fields go when two date-times are compared.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum NullsGo {

    /// An absent field sorts before any present one.
    #[default]
    First,

    /// An absent field sorts after any present one.
    Last,
}


/// The seven fields, indexed by `Unit`.
///
/// Deriving the ordering works out because `None` sorts before `Some`,
/// which is exactly nulls-first, and the array is compared from the year
/// down.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Default)]
pub(crate) struct Fields([Option<i32>; 7]);

impl Fields {
    pub(crate) fn new(values: [Option<i32>; 7]) -> Self {
        Fields(values)
    }

    pub(crate) fn get(&self, unit: Unit) -> Option<i32> {
        self.0[unit.index()]
    }

    pub(crate) fn with(mut self, unit: Unit, value: Option<i32>) -> Self {
        self.0[unit.index()] = value;
        self
    }

    pub(crate) fn all_present(&self, units: &[Unit]) -> bool {
        units.iter().all(|u| self.get(*u).is_some())
    }

    pub(crate) fn all_absent(&self, units: &[Unit]) -> bool {
        units.iter().all(|u| self.get(*u).is_none())
    }

    pub(crate) fn ymd(&self) -> Option<(i32, i32, i32)> {
        Some((self.get(Unit::Year)?, self.get(Unit::Month)?, self.get(Unit::Day)?))
    }

    pub(crate) fn has_hms(&self) -> bool {
        self.all_present(&[Unit::Hour, Unit::Minute, Unit::Second])
    }

    /// The seconds elapsed since midnight, counting absent time fields
    /// as zero.
    pub(crate) fn seconds_into_day(&self) -> i64 {
        let field = |u| i64::from(self.get(u).unwrap_or(0));
        field(Unit::Hour) * 3600 + field(Unit::Minute) * 60 + field(Unit::Second)
    }

    /// Checks every field against its range, and the day against the
    /// length of its month when the year and month are both known.
    pub(crate) fn validate(self) -> Result<Self, Error> {
        for unit in Unit::ALL {
            check_range(unit.name(), self.get(unit), unit.range())?;
        }

        if let Some((year, month, day)) = self.ymd() {
            let last = rules::days_in_month(year, Month::from_one(month)?);
            if day > last {
                return Err(Error::out_of_range("day", day, 1, last));
            }
        }

        Ok(self)
    }

    pub(crate) fn missing(&self, needed: &'static str) -> Error {
        Error::MissingFields { needed, text: self.to_string() }
    }

    /// The year, month, and day, or a `MissingFields` error if any of
    /// them is absent.
    pub(crate) fn require_ymd(&self) -> Result<(i32, i32, i32), Error> {
        self.ymd().ok_or_else(|| self.missing("year-month-day"))
    }

    pub(crate) fn mjd(&self) -> Result<i64, Error> {
        let (y, m, d) = self.require_ymd()?;
        Ok(julian::to_modified_julian_day(y, m, d))
    }
}


/// A **date-time** is a civil date and time as a person would read it off
/// a calendar and a clock, with no time zone attached, where any of its
/// seven fields (year, month, day, hour, minute, second, and nanosecond)
/// may be absent.
///
/// A date-time either holds its fields directly, or holds only the text it
/// was created from. Text is parsed the first time anything needs the
/// fields, and the outcome is kept, so a bad string only surfaces as an
/// error when it is first used.
///
/// Values never change once built; every operation returns a new one.
#[derive(Clone)]
pub struct DateTime {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Structured(Fields),
    Raw {
        text: String,
        parsed: OnceLock<Result<Fields, Error>>,
    },
}

fn promote(text: &str) -> Result<Fields, Error> {
    trace!("parsing raw date-time {:?}", text);
    parse_fields(text).and_then(Fields::validate).map_err(|e| {
        debug!("raw date-time {:?} is unusable: {}", text, e);
        e
    })
}

impl DateTime {

    /// Creates a new date-time out of any combination of present and
    /// absent fields.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::DateTime;
    ///
    /// let lunch = DateTime::new(None, None, None, Some(12), Some(30), None, None).unwrap();
    /// assert_eq!(lunch.to_string(), "12:30");
    ///
    /// assert!(DateTime::new(Some(2001), Some(2), Some(29), None, None, None, None).is_err());
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(year: Option<i32>, month: Option<i32>, day: Option<i32>,
               hour: Option<i32>, minute: Option<i32>, second: Option<i32>,
               nanosecond: Option<i32>) -> Result<Self, Error> {
        let fields = Fields([year, month, day, hour, minute, second, nanosecond]);
        Ok(Self::from_fields(fields.validate()?))
    }

    /// Creates a new date-time with only a year, month, and day.
    pub fn ymd(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        Self::new(Some(year), Some(month), Some(day), None, None, None, None)
    }

    /// Creates a new date-time with only an hour, minute, and second.
    pub fn hms(hour: i32, minute: i32, second: i32) -> Result<Self, Error> {
        Self::new(None, None, None, Some(hour), Some(minute), Some(second), None)
    }

    /// Creates a new date-time with only an hour, minute, second, and
    /// nanosecond.
    pub fn hms_ns(hour: i32, minute: i32, second: i32, nanosecond: i32) -> Result<Self, Error> {
        Self::new(None, None, None, Some(hour), Some(minute), Some(second), Some(nanosecond))
    }

    /// Creates a new date-time with every field but the nanosecond.
    pub fn ymd_hms(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Result<Self, Error> {
        Self::new(Some(year), Some(month), Some(day), Some(hour), Some(minute), Some(second), None)
    }

    /// Creates a new date-time with all seven fields.
    pub fn ymd_hms_ns(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32, nanosecond: i32) -> Result<Self, Error> {
        Self::new(Some(year), Some(month), Some(day), Some(hour), Some(minute), Some(second), Some(nanosecond))
    }

    /// Wraps some text without looking at it. The text is only parsed when
    /// something first needs the fields, and that is where any error shows
    /// up. Its `Display` output is always the text itself.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::DateTime;
    ///
    /// let good = DateTime::raw("2009-01-01 12:00");
    /// assert_eq!(good.hour(), Ok(Some(12)));
    ///
    /// let bad = DateTime::raw("next Tuesday");
    /// assert_eq!(bad.to_string(), "next Tuesday");
    /// assert!(bad.year().is_err());
    /// ```
    pub fn raw<S: Into<String>>(text: S) -> Self {
        DateTime {
            repr: Repr::Raw { text: text.into(), parsed: OnceLock::new() },
        }
    }

    /// Parses some text straight away, failing if it is not a valid
    /// date-time. The text is kept, so `Display` gives it back unchanged.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::DateTime;
    ///
    /// let when = DateTime::parse("2009-12-31T00:00:00.123").unwrap();
    /// assert_eq!(when.nanosecond(), Ok(Some(123_000_000)));
    /// assert!(DateTime::parse("2009-13-01").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, Error> {
        let fields = promote(text)?;
        let parsed = OnceLock::new();
        let _ = parsed.set(Ok(fields));
        Ok(DateTime { repr: Repr::Raw { text: text.to_owned(), parsed } })
    }

    /// Returns whether the text would parse into a valid date-time.
    pub fn is_parseable(text: &str) -> bool {
        promote(text).is_ok()
    }

    pub(crate) fn from_fields(fields: Fields) -> Self {
        DateTime { repr: Repr::Structured(fields) }
    }

    /// The fields, parsing the raw text first if this date-time has not
    /// been used yet.
    pub(crate) fn fields(&self) -> Result<&Fields, Error> {
        match self.repr {
            Repr::Structured(ref fields) => Ok(fields),
            Repr::Raw { ref text, ref parsed } => {
                parsed.get_or_init(|| promote(text)).as_ref().map_err(Clone::clone)
            }
        }
    }

    /// The text this date-time was created from, if it was created from
    /// text at all.
    pub fn raw_text(&self) -> Option<&str> {
        match self.repr {
            Repr::Structured(_)         => None,
            Repr::Raw { ref text, .. }  => Some(text),
        }
    }

    /// The value of the given field.
    pub fn get(&self, unit: Unit) -> Result<Option<i32>, Error> {
        Ok(self.fields()?.get(unit))
    }

    /// The year, from 1 to 9999.
    pub fn year(&self) -> Result<Option<i32>, Error> { self.get(Unit::Year) }

    /// The month, from 1 for January to 12 for December.
    pub fn month(&self) -> Result<Option<i32>, Error> { self.get(Unit::Month) }

    /// The day of the month, from 1 to 31.
    pub fn day(&self) -> Result<Option<i32>, Error> { self.get(Unit::Day) }

    /// The hour, from 0 to 23.
    pub fn hour(&self) -> Result<Option<i32>, Error> { self.get(Unit::Hour) }

    /// The minute, from 0 to 59.
    pub fn minute(&self) -> Result<Option<i32>, Error> { self.get(Unit::Minute) }

    /// The second, from 0 to 59.
    pub fn second(&self) -> Result<Option<i32>, Error> { self.get(Unit::Second) }

    /// The nanosecond of the second, from 0 to 999,999,999.
    pub fn nanosecond(&self) -> Result<Option<i32>, Error> { self.get(Unit::Nanosecond) }

    /// Whether the year, month, and day are all present.
    pub fn has_year_month_day(&self) -> Result<bool, Error> {
        Ok(self.fields()?.ymd().is_some())
    }

    /// Whether the hour, minute, and second are all present.
    pub fn has_hour_minute_second(&self) -> Result<bool, Error> {
        Ok(self.fields()?.has_hms())
    }

    /// Whether every one of the given units is present. Units that are not
    /// named are not looked at.
    pub fn units_all_present(&self, units: &[Unit]) -> Result<bool, Error> {
        Ok(self.fields()?.all_present(units))
    }

    /// Whether every one of the given units is absent. Units that are not
    /// named are not looked at.
    pub fn units_all_absent(&self, units: &[Unit]) -> Result<bool, Error> {
        Ok(self.fields()?.all_absent(units))
    }

    /// The finest unit that is present.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::{DateTime, Unit};
    ///
    /// let month = DateTime::parse("2009-10").unwrap();
    /// assert_eq!(month.precision(), Ok(Unit::Month));
    /// ```
    pub fn precision(&self) -> Result<Unit, Error> {
        let fields = self.fields()?;
        Unit::ALL.iter().rev()
            .find(|u| fields.get(**u).is_some())
            .copied()
            .ok_or(Error::MissingAllFields)
    }

    /// Returns a new date-time that keeps the given unit and every coarser
    /// one, with every finer unit made absent.
    ///
    /// Truncating to the nanosecond would do nothing, so it is an error.
    pub fn truncate(&self, unit: Unit) -> Result<Self, Error> {
        if unit == Unit::Nanosecond {
            return Err(Error::InvalidArgument("cannot truncate to the nanosecond".into()));
        }

        let mut fields = *self.fields()?;
        for finer in Unit::ALL.iter().filter(|u| **u > unit) {
            fields = fields.with(*finer, None);
        }
        Ok(Self::from_fields(fields))
    }

    /// The Modified Julian Day of this date: the number of days since
    /// 1858-11-17.
    pub fn modified_julian_day_number(&self) -> Result<i64, Error> {
        self.fields()?.mjd()
    }

    /// The day of the week, from 1 for Sunday to 7 for Saturday.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::{DateTime, Weekday};
    ///
    /// let date = DateTime::ymd(2009, 10, 28).unwrap();
    /// assert_eq!(date.weekday(), Ok(4));
    /// assert_eq!(Weekday::from_one(4), Ok(Weekday::Wednesday));
    /// ```
    pub fn weekday(&self) -> Result<i32, Error> {
        let (y, m, d) = self.fields()?.require_ymd()?;
        Ok(julian::weekday_of(julian::to_julian_day_number_at_noon(y, m, d)))
    }

    /// The number of days in this date’s month.
    pub fn num_days_in_month(&self) -> Result<i32, Error> {
        let fields = self.fields()?;
        match (fields.get(Unit::Year), fields.get(Unit::Month)) {
            (Some(year), Some(month)) => Ok(rules::days_in_month(year, Month::from_one(month)?)),
            _ => Err(fields.missing("year and month")),
        }
    }

    /// Whether this date’s year is a leap year.
    pub fn is_leap_year(&self) -> Result<bool, Error> {
        let fields = self.fields()?;
        match fields.get(Unit::Year) {
            Some(year) => Ok(rules::is_leap_year(year)),
            None => Err(fields.missing("year")),
        }
    }

    /// The day of the year, from 1 to 366.
    pub fn day_of_year(&self) -> Result<i32, Error> {
        let (y, m, d) = self.fields()?.require_ymd()?;
        Ok(rules::day_of_year(y, m, d))
    }

    /// The week this date falls in, counting from week 1, the seven days
    /// starting on 2000-01-02.
    pub fn week_index(&self) -> Result<i64, Error> {
        self.week_index_from(&DateTime::from_fields(Fields([Some(2000), Some(1), Some(2), None, None, None, None])))
    }

    /// The week this date falls in, counting the seven days that start on
    /// the reference date as week 1. Dates before the reference give week
    /// numbers of 0 and below.
    pub fn week_index_from(&self, reference: &DateTime) -> Result<i64, Error> {
        let diff = self.modified_julian_day_number()? - reference.modified_julian_day_number()?;
        Ok(diff.div_euclid(7) + 1)
    }

    /// Whether this date-time falls on the same day as the other one,
    /// ignoring the time.
    pub fn is_same_day(&self, other: &DateTime) -> Result<bool, Error> {
        Ok(self.fields()?.require_ymd()? == other.fields()?.require_ymd()?)
    }

    /// Compares two date-times field by field, from the year down, with
    /// absent fields sorting first.
    ///
    /// Unlike `Ord`, this reports an error if either value is raw text
    /// that does not parse.
    pub fn compare(&self, other: &DateTime) -> Result<Ordering, Error> {
        Ok(self.fields()?.cmp(other.fields()?))
    }

    /// Compares two date-times field by field, from the year down, with
    /// absent fields going wherever `nulls` says.
    pub fn compare_with(&self, other: &DateTime, nulls: NullsGo) -> Result<Ordering, Error> {
        let (ours, theirs) = (self.fields()?, other.fields()?);

        for unit in Unit::ALL {
            let ordering = match (ours.get(unit), theirs.get(unit), nulls) {
                (Some(a),  Some(b),  _)              => a.cmp(&b),
                (None,     None,     _)              => Ordering::Equal,
                (None,     Some(_),  NullsGo::First) => Ordering::Less,
                (None,     Some(_),  NullsGo::Last)  => Ordering::Greater,
                (Some(_),  None,     NullsGo::First) => Ordering::Greater,
                (Some(_),  None,     NullsGo::Last)  => Ordering::Less,
            };

            if ordering != Ordering::Equal {
                return Ok(ordering);
            }
        }

        Ok(Ordering::Equal)
    }

    /// Whether this date-time comes strictly before the other one.
    pub fn lt(&self, other: &DateTime) -> Result<bool, Error> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Whether this date-time comes before the other one, or equals it.
    pub fn lteq(&self, other: &DateTime) -> Result<bool, Error> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Whether this date-time comes strictly after the other one.
    pub fn gt(&self, other: &DateTime) -> Result<bool, Error> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Whether this date-time comes after the other one, or equals it.
    pub fn gteq(&self, other: &DateTime) -> Result<bool, Error> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    fn with_boundary(&self, day: Option<i32>, time: [i32; 4]) -> Result<Self, Error> {
        let (y, m, d) = self.fields()?.require_ymd()?;
        let [hour, minute, second, nanosecond] = time;
        Ok(Self::from_fields(Fields([
            Some(y), Some(m), Some(day.unwrap_or(d)),
            Some(hour), Some(minute), Some(second), Some(nanosecond),
        ])))
    }

    /// This day at 00:00:00.000000000.
    pub fn start_of_day(&self) -> Result<Self, Error> {
        self.with_boundary(None, [0, 0, 0, 0])
    }

    /// This day at 23:59:59.999999999.
    pub fn end_of_day(&self) -> Result<Self, Error> {
        self.with_boundary(None, [23, 59, 59, 999_999_999])
    }

    /// The first day of this month at 00:00:00.000000000.
    pub fn start_of_month(&self) -> Result<Self, Error> {
        self.with_boundary(Some(1), [0, 0, 0, 0])
    }

    /// The last day of this month at 23:59:59.999999999.
    pub fn end_of_month(&self) -> Result<Self, Error> {
        let last = self.num_days_in_month()?;
        self.with_boundary(Some(last), [23, 59, 59, 999_999_999])
    }

    /// Moves the date by a number of days in either direction, leaving any
    /// time fields as they are.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::DateTime;
    ///
    /// let eve = DateTime::parse("1999-12-31 23:59").unwrap();
    /// assert_eq!(eve.plus_days(1).unwrap().to_string(), "2000-01-01 23:59");
    /// ```
    pub fn plus_days(&self, days: i32) -> Result<Self, Error> {
        let fields = self.fields()?;
        let mjd = fields.mjd()? + i64::from(days);
        if !(julian::MIN_MJD ..= julian::MAX_MJD).contains(&mjd) {
            return Err(Error::out_of_range("modified julian day", mjd, julian::MIN_MJD, julian::MAX_MJD));
        }

        let (y, m, d) = julian::from_modified_julian_day(mjd);
        Ok(Self::from_fields(fields
            .with(Unit::Year, Some(y))
            .with(Unit::Month, Some(m))
            .with(Unit::Day, Some(d))))
    }

    /// Moves the date back by a number of days, leaving any time fields as
    /// they are.
    pub fn minus_days(&self, days: i32) -> Result<Self, Error> {
        let days = days.checked_neg()
            .ok_or_else(|| Error::out_of_range("days", i64::from(days), -i64::from(i32::MAX), i64::from(i32::MAX)))?;
        self.plus_days(days)
    }

    /// The number of days from this date to the other one, which is
    /// negative if the other date comes first.
    pub fn days_between(&self, other: &DateTime) -> Result<i64, Error> {
        Ok(other.modified_julian_day_number()? - self.modified_julian_day_number()?)
    }

    /// The number of seconds from this date-time to the other one.
    ///
    /// The days between the two count only when both have a year, month,
    /// and day; otherwise only the times of day are compared. Absent time
    /// fields count as zero, and nanoseconds are ignored.
    pub fn seconds_between(&self, other: &DateTime) -> Result<i64, Error> {
        let (ours, theirs) = (self.fields()?, other.fields()?);

        let days = match (ours.ymd(), theirs.ymd()) {
            (Some(_), Some(_)) => theirs.mjd()? - ours.mjd()?,
            _                  => 0,
        };

        Ok(days * 86400 - ours.seconds_into_day() + theirs.seconds_into_day())
    }
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}


// The standard traits cannot fail, so raw text that does not parse gets
// ordered after every valid value, and by its text among other bad ones.

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.fields(), other.fields()) {
            (Ok(a),  Ok(b))  => a.cmp(b),
            (Ok(_),  Err(_)) => Ordering::Less,
            (Err(_), Ok(_))  => Ordering::Greater,
            (Err(_), Err(_)) => self.raw_text().cmp(&other.raw_text()),
        }
    }
}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DateTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DateTime {}

impl Hash for DateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.fields() {
            Ok(fields) => fields.hash(state),
            Err(_)     => self.raw_text().hash(state),
        }
    }
}
