//! Exact points on a timeline.

use std::fmt;

use crate::system::sys_time;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar, with nanosecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since
/// the Unix epoch, and the nanosecond of that second, which is always
/// between 0 and 999,999,999. Instants before the epoch have a negative
/// number of seconds but still count their nanoseconds forwards.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    nanoseconds: i32,
}

const NANOS_PER_SECOND: i64 = 1_000_000_000;

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero nanoseconds.
    pub fn at(seconds: i64) -> Self {
        Self { seconds, nanoseconds: 0 }
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, plus some nanoseconds. Nanoseconds outside a single
    /// second carry over into the seconds.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::Instant;
    ///
    /// let instant = Instant::at_ns(10, -1);
    /// assert_eq!(instant.seconds(), 9);
    /// assert_eq!(instant.nanoseconds(), 999_999_999);
    /// ```
    pub fn at_ns(seconds: i64, nanoseconds: i64) -> Self {
        Self {
            seconds: seconds + nanoseconds.div_euclid(NANOS_PER_SECOND),
            nanoseconds: nanoseconds.rem_euclid(NANOS_PER_SECOND) as i32,
        }
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, nanoseconds) = unsafe { sys_time() };
        trace!("system clock reads {}s {}ns", seconds, nanoseconds);
        Self { seconds, nanoseconds }
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of nanoseconds into the second at this instant.
    pub fn nanoseconds(&self) -> i32 {
        self.nanoseconds
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}ns)", self.seconds, self.nanoseconds)
    }
}


#[cfg(test)]
mod test {
    use super::Instant;

    #[test]
    fn epoch() {
        assert_eq!(Instant::at_epoch(), Instant::at_ns(0, 0));
    }

    #[test]
    fn carries() {
        assert_eq!(Instant::at_ns(1, 2_500_000_000), Instant::at_ns(3, 500_000_000));
        assert_eq!(Instant::at_ns(0, -500_000_000).seconds(), -1);
    }

    #[test]
    fn ordering() {
        assert!(Instant::at_ns(-1, 999_999_999) < Instant::at_epoch());
        assert!(Instant::now() > Instant::at(1_577_836_800));
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Instant::at_ns(12, 34)), "Instant(12s/34ns)");
    }
}
