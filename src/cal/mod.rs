//! Civil calendar calculations, which use years, months, days, hours,
//! minutes, seconds, and nanoseconds, any of which may be absent.

pub(crate) mod datetime;
pub(crate) mod fmt;
pub(crate) mod interval;
pub(crate) mod offset;
pub(crate) mod parse;
#[cfg(feature = "serde")] mod serialize;

pub mod julian;
pub mod rules;

pub use self::datetime::{DateTime, NullsGo, Unit};
pub use self::interval::{DayOverflow, Interval};
pub use self::offset::Offset;
pub use self::rules::{Month, Weekday, Year, YearMonth};

#[cfg(feature = "format")]
pub use self::fmt::custom::DateTimeFormat;
#[cfg(feature = "format")]
pub use self::fmt::locale::{CustomNames, Locale, LocaleText};
