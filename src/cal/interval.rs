//! Adding and subtracting spans of years, months, days, and time.
//!
//! Arithmetic works like an odometer: the interval is applied from the year
//! down to the nanosecond, and whatever overflows one unit carries into the
//! next coarser one. Years and months come first, then the day is checked
//! against its new month, then days are added through the Modified Julian
//! Day, and finally the time of day, whose overflow feeds back into the
//! day count.

use crate::cal::datetime::{DateTime, Fields, Unit};
use crate::cal::julian::{self, MAX_MJD, MIN_MJD};
use crate::cal::rules::{self, Month};
use crate::error::Error;
use crate::util::check_range;


/// What to do when adding years or months lands on a day that does not
/// exist in the resulting month, such as adding one month to January 31st.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayOverflow {

    /// Use the last day of the month: 2001-01-31 plus a month is
    /// 2001-02-28.
    LastDay,

    /// Use the first day of the next month: 2001-01-31 plus a month is
    /// 2001-03-01.
    FirstDay,

    /// Let the extra days run on into the next month: 2001-01-31 plus a
    /// month is 2001-03-03.
    Spillover,

    /// Fail with `Error::DayOverflow`.
    Abort,
}


/// A span of time to add to or subtract from a `DateTime`.
///
/// Each part must be between 0 and 9,999, or 999,999,999 for the
/// nanoseconds; the direction comes from calling `plus` or `minus`.
///
/// ### Examples
///
/// ```
/// use civil_datetime::{DateTime, DayOverflow, Interval};
///
/// let start = DateTime::parse("2001-01-01 23:45:19").unwrap();
/// let later = start.plus(&Interval::default().hours(2), DayOverflow::Abort).unwrap();
/// assert_eq!(later.to_string(), "2001-01-02 01:45:19");
/// ```
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct Interval {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
    pub nanoseconds: i32,
}

impl Interval {

    /// Creates an interval out of all seven parts at once.
    pub fn new(years: i32, months: i32, days: i32, hours: i32, minutes: i32, seconds: i32, nanoseconds: i32) -> Self {
        Self { years, months, days, hours, minutes, seconds, nanoseconds }
    }

    pub fn years(self, years: i32) -> Self { Self { years, ..self } }
    pub fn months(self, months: i32) -> Self { Self { months, ..self } }
    pub fn days(self, days: i32) -> Self { Self { days, ..self } }
    pub fn hours(self, hours: i32) -> Self { Self { hours, ..self } }
    pub fn minutes(self, minutes: i32) -> Self { Self { minutes, ..self } }
    pub fn seconds(self, seconds: i32) -> Self { Self { seconds, ..self } }
    pub fn nanoseconds(self, nanoseconds: i32) -> Self { Self { nanoseconds, ..self } }

    fn check(&self) -> Result<(), Error> {
        let parts = [
            ("years", self.years), ("months", self.months), ("days", self.days),
            ("hours", self.hours), ("minutes", self.minutes), ("seconds", self.seconds),
        ];

        for (what, value) in parts {
            check_range(what, Some(value), 0 ..= 9999)?;
        }
        check_range("nanoseconds", Some(self.nanoseconds), 0 ..= 999_999_999)
    }

    fn changes_date(&self) -> bool {
        self.years != 0 || self.months != 0 || self.days != 0
    }

    fn changes_time(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0 || self.nanoseconds != 0
    }
}


const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR:   i64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY:    i64 = 24 * NANOS_PER_HOUR;

const DATE_UNITS: [Unit; 3] = [Unit::Year, Unit::Month, Unit::Day];
const TIME_UNITS: [Unit; 3] = [Unit::Hour, Unit::Minute, Unit::Second];


/// Applies the interval to the fields, adding when `sign` is 1 and
/// subtracting when it is -1.
fn apply(base: &Fields, interval: &Interval, overflow: DayOverflow, sign: i64) -> Result<Fields, Error> {
    interval.check()?;

    let has_date = base.all_present(&DATE_UNITS);
    let has_time = base.all_present(&TIME_UNITS);
    let no_date  = base.all_absent(&DATE_UNITS);
    let no_time  = base.all_absent(&TIME_UNITS) && base.get(Unit::Nanosecond).is_none();

    if !(has_date || no_date) || !(has_time || no_time) || (no_date && no_time) {
        return Err(Error::MissingFields {
            needed: "full year-month-day or hour-minute-second",
            text: base.to_string(),
        });
    }

    let field = |unit, implicit: i32| i64::from(base.get(unit).unwrap_or(implicit));

    // Years, then months carrying into years.
    let months = field(Unit::Year, 1) * 12 + (field(Unit::Month, 1) - 1)
               + sign * (i64::from(interval.years) * 12 + i64::from(interval.months));
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) + 1;

    if !(1 ..= 9999).contains(&year) {
        return Err(Error::out_of_range("year", year, 1, 9999));
    }
    let (year, month) = (year as i32, month as i32);

    // The day may no longer fit in its month.
    let day = field(Unit::Day, 1) as i32;
    let last = rules::days_in_month(year, Month::from_one(month)?);
    let (day, extra_days) = if day <= last {
        (day, 0)
    }
    else {
        match overflow {
            DayOverflow::LastDay   => (last, 0),
            DayOverflow::FirstDay  => (last, 1),
            DayOverflow::Spillover => (last, i64::from(day - last)),
            DayOverflow::Abort     => {
                return Err(Error::DayOverflow { year, month, day, days_in_month: last });
            },
        }
    };

    let mut mjd = julian::to_modified_julian_day(year, month, day)
                + extra_days
                + sign * i64::from(interval.days);

    // Then the time of day, whose overflow carries into the day count.
    let nanos = field(Unit::Hour, 0) * NANOS_PER_HOUR
              + field(Unit::Minute, 0) * NANOS_PER_MINUTE
              + field(Unit::Second, 0) * NANOS_PER_SECOND
              + field(Unit::Nanosecond, 0)
              + sign * (i64::from(interval.hours) * NANOS_PER_HOUR
                      + i64::from(interval.minutes) * NANOS_PER_MINUTE
                      + i64::from(interval.seconds) * NANOS_PER_SECOND
                      + i64::from(interval.nanoseconds));

    let carried_days = nanos.div_euclid(NANOS_PER_DAY);
    let nanos = nanos.rem_euclid(NANOS_PER_DAY);
    mjd += carried_days;

    if !(MIN_MJD ..= MAX_MJD).contains(&mjd) {
        return Err(Error::out_of_range("modified julian day", mjd, MIN_MJD, MAX_MJD));
    }

    let (year, month, day) = julian::from_modified_julian_day(mjd);
    let hour = nanos / NANOS_PER_HOUR;
    let minute = nanos % NANOS_PER_HOUR / NANOS_PER_MINUTE;
    let second = nanos % NANOS_PER_MINUTE / NANOS_PER_SECOND;
    let nanosecond = nanos % NANOS_PER_SECOND;

    // Implicit fields only show up when the arithmetic reached them.
    let keep_date = has_date || interval.changes_date() || carried_days != 0;
    let keep_time = has_time || interval.changes_time();
    let keep_nanos = base.get(Unit::Nanosecond).is_some() || interval.nanoseconds != 0 || (no_time && keep_time);

    let date = |value: i32| if keep_date { Some(value) } else { None };
    let time = |value: i64| if keep_time { Some(value as i32) } else { None };

    Ok(Fields::new([
        date(year), date(month), date(day),
        time(hour), time(minute), time(second),
        if keep_nanos { Some(nanosecond as i32) } else { None },
    ]))
}

impl DateTime {

    /// Adds an interval to this date-time, resolving days past the end of
    /// a month with the given policy.
    ///
    /// The date-time needs a full year, month, and day, or a full hour,
    /// minute, and second, or both. A missing date counts as 0001-01-01
    /// and a missing time as midnight; these only appear in the result
    /// if the interval changes them.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::{DateTime, DayOverflow, Interval};
    ///
    /// let end_of_jan = DateTime::parse("2001-01-31").unwrap();
    /// let month = Interval::default().months(1);
    ///
    /// assert_eq!(end_of_jan.plus(&month, DayOverflow::LastDay).unwrap().to_string(), "2001-02-28");
    /// assert_eq!(end_of_jan.plus(&month, DayOverflow::FirstDay).unwrap().to_string(), "2001-03-01");
    /// assert!(end_of_jan.plus(&month, DayOverflow::Abort).is_err());
    /// ```
    pub fn plus(&self, interval: &Interval, overflow: DayOverflow) -> Result<Self, Error> {
        let fields = apply(self.fields()?, interval, overflow, 1)?;
        Ok(Self::from_fields(fields))
    }

    /// Subtracts an interval from this date-time, resolving days past the
    /// end of a month with the given policy.
    pub fn minus(&self, interval: &Interval, overflow: DayOverflow) -> Result<Self, Error> {
        let fields = apply(self.fields()?, interval, overflow, -1)?;
        Ok(Self::from_fields(fields))
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::*;

    fn dt(text: &str) -> DateTime {
        DateTime::parse(text).unwrap()
    }

    mod overflow {
        use super::*;

        macro_rules! test {
            ($name: ident: $start: expr, $interval: expr, $policy: expr => $result: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(dt($start).plus(&$interval, $policy).map(|d| d.to_string()), Ok($result.to_string()))
                }
            };
        }

        test!(last_day:   "2001-01-31", Interval::default().months(1), DayOverflow::LastDay   => "2001-02-28");
        test!(first_day:  "2001-01-31", Interval::default().months(1), DayOverflow::FirstDay  => "2001-03-01");
        test!(spillover:  "2001-12-31", Interval::default().months(2), DayOverflow::Spillover => "2002-03-03");
        test!(fits:       "2001-01-30", Interval::default().months(2), DayOverflow::Abort     => "2001-03-30");
        test!(leap_year:  "2000-02-29", Interval::default().years(1),  DayOverflow::LastDay   => "2001-02-28");
        test!(first_dec:  "2001-11-30", Interval::default().days(1),   DayOverflow::Abort     => "2001-12-01");

        #[test]
        fn abort() {
            let err = dt("2001-01-31").plus(&Interval::default().months(1), DayOverflow::Abort);
            assert_eq!(err, Err(Error::DayOverflow { year: 2001, month: 2, day: 31, days_in_month: 28 }));
        }
    }

    mod carries {
        use super::*;

        #[test]
        fn hours_into_days() {
            let later = dt("2001-01-01 23:45:19").plus(&Interval::default().hours(2), DayOverflow::Abort).unwrap();
            assert_eq!(later, dt("2001-01-02 01:45:19"));
        }

        #[test]
        fn nanoseconds_exactly() {
            let later = dt("2001-01-01 13:45:56.000000001").plus(&Interval::default().nanoseconds(999_999_999), DayOverflow::Abort).unwrap();
            assert_eq!(later, dt("2001-01-01 13:45:57.000000000"));
        }

        #[test]
        fn everything_at_once() {
            let later = dt("2001-01-01 23:45:19").plus(&Interval::new(10, 13, 29, 28, 30, 41, 0), DayOverflow::Spillover).unwrap();
            assert_eq!(later, dt("2012-03-03 04:16:00"));
        }

        #[test]
        fn minus_everything() {
            let earlier = dt("2001-04-15 23:45:19").minus(&Interval::new(1, 4, 15, 24, 46, 20, 1), DayOverflow::Spillover).unwrap();
            assert_eq!(earlier, dt("1999-11-29 22:58:58.999999999"));
        }

        #[test]
        fn minus_to_shorter_month() {
            let earlier = dt("2001-05-31").minus(&Interval::default().months(3), DayOverflow::LastDay).unwrap();
            assert_eq!(earlier, dt("2001-02-28"));
        }
    }

    mod presence {
        use super::*;

        #[test]
        fn time_only_stays_time_only() {
            let later = dt("10:00:00").plus(&Interval::default().hours(3), DayOverflow::Abort).unwrap();
            assert_eq!(later.to_string(), "13:00:00");
        }

        #[test]
        fn time_carries_into_implicit_date() {
            let later = dt("23:00:00").plus(&Interval::default().hours(2), DayOverflow::Abort).unwrap();
            assert_eq!(later, dt("0001-01-02 01:00:00"));
        }

        #[test]
        fn date_only_gains_time() {
            let later = dt("2001-01-01").plus(&Interval::default().minutes(5), DayOverflow::Abort).unwrap();
            assert_eq!(later, dt("2001-01-01 00:05:00.000000000"));
        }

        #[test]
        fn date_only_stays_date_only() {
            let later = dt("2001-01-01").plus(&Interval::default().days(40), DayOverflow::Abort).unwrap();
            assert_eq!(later.to_string(), "2001-02-10");
        }
    }

    mod failures {
        use super::*;

        #[test]
        fn magnitudes() {
            let start = dt("2001-01-01 10:00:00");
            let parts: [fn(Interval, i32) -> Interval; 6] = [
                Interval::years, Interval::months, Interval::days,
                Interval::hours, Interval::minutes, Interval::seconds,
            ];

            for (index, part) in parts.iter().enumerate() {
                assert!(part(Interval::default(), 9999).check().is_ok(), "part {}", index);

                for bad in [10_000, -1].iter() {
                    let interval = part(Interval::default(), *bad);
                    assert!(start.plus(&interval, DayOverflow::Abort).unwrap_err().is_out_of_range(), "part {} plus {}", index, bad);
                    assert!(start.minus(&interval, DayOverflow::Abort).unwrap_err().is_out_of_range(), "part {} minus {}", index, bad);
                }
            }
        }

        #[test]
        fn nanosecond_magnitudes() {
            let start = dt("2001-01-01 10:00:00");
            assert!(Interval::default().nanoseconds(999_999_999).check().is_ok());

            for bad in [1_000_000_000, -1].iter() {
                let interval = Interval::default().nanoseconds(*bad);
                assert!(start.plus(&interval, DayOverflow::Abort).unwrap_err().is_out_of_range());
                assert!(start.minus(&interval, DayOverflow::Abort).unwrap_err().is_out_of_range());
            }
        }

        #[test]
        fn missing_parts() {
            for text in ["2001-01-01 23:45", "2001-01-01 23", "2001-01", "2001", "00:59"].iter() {
                let result = dt(text).plus(&Interval::default().days(1), DayOverflow::Abort);
                assert!(matches!(result, Err(Error::MissingFields { .. })), "{}", text);
            }
        }

        #[test]
        fn result_bounds() {
            let start = dt("0001-02-28 11:23:56");
            assert!(start.plus(&Interval::default().years(9998), DayOverflow::Abort).is_ok());
            assert!(start.minus(&Interval::default().months(2), DayOverflow::Abort).unwrap_err().is_out_of_range());
            assert!(dt("9999-12-31 23:59:59").plus(&Interval::default().seconds(1), DayOverflow::Abort).unwrap_err().is_out_of_range());
        }
    }
}
