//! Fixed offsets from UTC, and the date-times they connect to instants and
//! the system clock.

use std::cmp::Ordering;
use std::fmt;

use crate::cal::datetime::{DateTime, Fields, Unit};
use crate::cal::julian::{self, MAX_MJD, MIN_MJD};
use crate::error::Error;
use crate::instant::Instant;
use crate::util::RangeExt;


/// A fixed number of seconds ahead of (or behind) UTC, with no rules about
/// daylight saving attached.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Default)]
pub struct Offset {
    offset_seconds: i32,
}

/// Days from 1858-11-17, day zero of the Modified Julian Day count, to the
/// Unix epoch.
const UNIX_EPOCH_MJD: i64 = 40_587;

const SECONDS_PER_DAY: i64 = 86_400;

impl Offset {

    /// UTC itself.
    pub fn utc() -> Self {
        Self { offset_seconds: 0 }
    }

    /// An offset of up to one day either way.
    pub fn of_seconds(seconds: i32) -> Result<Self, Error> {
        if seconds.is_within(-86400 ..= 86400) {
            Ok(Self { offset_seconds: seconds })
        }
        else {
            Err(Error::out_of_range("offset seconds", seconds, -86400, 86400))
        }
    }

    /// An offset of hours and minutes, which must have the same sign.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::Offset;
    ///
    /// assert_eq!(Offset::of_hours_and_minutes(-3, -30).unwrap().seconds(), -12600);
    /// assert!(Offset::of_hours_and_minutes(-3, 30).is_err());
    /// ```
    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        if (hours.is_positive() && minutes.is_negative())
        || (hours.is_negative() && minutes.is_positive()) {
            Err(Error::InvalidArgument(format!("offset of {} hours and {} minutes mixes signs", hours, minutes)))
        }
        else if !hours.is_within(-23 ..= 23) {
            Err(Error::out_of_range("offset hours", hours, -23, 23))
        }
        else if !minutes.is_within(-59 ..= 59) {
            Err(Error::out_of_range("offset minutes", minutes, -59, 59))
        }
        else {
            let hours = i32::from(hours);
            let minutes = i32::from(minutes);
            Self::of_seconds(hours * (60 * 60) + minutes * 60)
        }
    }

    pub fn is_utc(self) -> bool {
        self.offset_seconds == 0
    }

    /// The whole offset, in seconds.
    pub fn seconds(self) -> i32 {
        self.offset_seconds
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_utc() {
            return write!(f, "Offset(Z)");
        }

        let sign = if self.offset_seconds < 0 { '-' } else { '+' };
        let s = self.offset_seconds.abs();
        write!(f, "Offset({}{:02}:{:02}", sign, s / 3600, s / 60 % 60)?;
        if s % 60 != 0 {
            write!(f, ":{:02}", s % 60)?;
        }
        write!(f, ")")
    }
}


/// The date and time at some number of seconds after the Unix epoch, with
/// every field present.
fn fields_at(local_seconds: i64, nanosecond: i32) -> Result<Fields, Error> {
    let mjd = local_seconds.div_euclid(SECONDS_PER_DAY) + UNIX_EPOCH_MJD;
    if !mjd.is_within(MIN_MJD ..= MAX_MJD) {
        return Err(Error::out_of_range("modified julian day", mjd, MIN_MJD, MAX_MJD));
    }

    let (year, month, day) = julian::from_modified_julian_day(mjd);
    let in_day = local_seconds.rem_euclid(SECONDS_PER_DAY) as i32;

    Ok(Fields::new([
        Some(year), Some(month), Some(day),
        Some(in_day / 3600), Some(in_day / 60 % 60), Some(in_day % 60),
        Some(nanosecond),
    ]))
}

/// The seconds after the Unix epoch at the given date, with absent time
/// fields counted as zero.
fn local_seconds(fields: &Fields) -> Result<i64, Error> {
    Ok((fields.mjd()? - UNIX_EPOCH_MJD) * SECONDS_PER_DAY + fields.seconds_into_day())
}

impl DateTime {

    /// The date and time shown by a clock at the given offset when the
    /// instant happened.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::{DateTime, Instant, Offset};
    ///
    /// let instant = Instant::at(1_234_567_890);
    /// let when = DateTime::for_instant(instant, Offset::utc()).unwrap();
    /// assert_eq!(when.to_string(), "2009-02-13 23:31:30.000000000");
    /// ```
    pub fn for_instant(instant: Instant, offset: Offset) -> Result<Self, Error> {
        let local = instant.seconds() + i64::from(offset.seconds());
        Ok(Self::from_fields(fields_at(local, instant.nanoseconds())?))
    }

    /// The instant at which a clock at the given offset showed this date and
    /// time. Needs a year, month, and day; any absent time field counts as
    /// zero.
    pub fn to_instant(&self, offset: Offset) -> Result<Instant, Error> {
        let fields = self.fields()?;
        let seconds = local_seconds(fields)? - i64::from(offset.seconds());
        let nanoseconds = fields.get(Unit::Nanosecond).unwrap_or(0);
        Ok(Instant::at_ns(seconds, i64::from(nanoseconds)))
    }

    /// The current date and time at the given offset, with all seven
    /// fields present.
    pub fn now(offset: Offset) -> Result<Self, Error> {
        Self::for_instant(Instant::now(), offset)
    }

    /// The current date at the given offset, with no time fields.
    pub fn today(offset: Offset) -> Result<Self, Error> {
        Self::now(offset)?.truncate(Unit::Day)
    }

    /// Whether this date-time comes after the current time at the given
    /// offset.
    pub fn is_in_the_future(&self, offset: Offset) -> Result<bool, Error> {
        Ok(self.compare(&Self::now(offset)?)? == Ordering::Greater)
    }

    /// Whether this date-time comes before the current time at the given
    /// offset.
    pub fn is_in_the_past(&self, offset: Offset) -> Result<bool, Error> {
        Ok(self.compare(&Self::now(offset)?)? == Ordering::Less)
    }

    /// Moves a date-time read off a clock at one offset onto a clock at
    /// another.
    ///
    /// Needs a year, month, day, and hour. Only the date, the hour, and
    /// the minute (if present) move; the second and nanosecond are carried
    /// over as they are.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::{DateTime, Offset};
    ///
    /// let london = DateTime::parse("2010-01-15 02:30").unwrap();
    /// let toronto = london.change_offset(Offset::utc(), Offset::of_hours_and_minutes(-5, 0).unwrap()).unwrap();
    /// assert_eq!(toronto.to_string(), "2010-01-14 21:30");
    /// ```
    pub fn change_offset(&self, from: Offset, to: Offset) -> Result<Self, Error> {
        let fields = self.fields()?;
        let _ = fields.require_ymd()?;
        if fields.get(Unit::Hour).is_none() {
            return Err(fields.missing("hour"));
        }

        let minute = fields.get(Unit::Minute);
        let truncated = fields.with(Unit::Second, None).with(Unit::Nanosecond, None);
        let shift = i64::from(to.seconds()) - i64::from(from.seconds());
        let moved = fields_at(local_seconds(&truncated)? + shift, 0)?;

        Ok(Self::from_fields(moved
            .with(Unit::Minute,     minute.and(moved.get(Unit::Minute)))
            .with(Unit::Second,     fields.get(Unit::Second))
            .with(Unit::Nanosecond, fields.get(Unit::Nanosecond))))
    }
}
