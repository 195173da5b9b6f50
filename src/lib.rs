#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for civil date-times: dates and times as read off a calendar
//! and a clock, with no time zone attached, where any of the seven fields
//! (year, month, day, hour, minute, second, and nanosecond) may be absent.
//!
//! Date-times can be built from their fields, or from text that is only
//! parsed once something needs it. They can be compared, moved by calendar
//! intervals, converted to and from instants at a fixed UTC offset, and
//! formatted through a small pattern language.
//!
//! # Examples
//!
//! ```
//! use civil_datetime::{DateTime, DayOverflow, Interval, Offset};
//!
//! let _now = DateTime::now(Offset::utc()).unwrap();
//!
//! let due = DateTime::parse("2010-01-31").unwrap();
//! let month_later = due.plus(&Interval::default().months(1), DayOverflow::LastDay).unwrap();
//! assert_eq!(month_later.to_string(), "2010-02-28");
//!
//! let lunch = DateTime::hms(12, 30, 0).unwrap();
//! assert_eq!(lunch.format("h12:mm").unwrap(), "12:30");
//! ```
//!
//! # Cargo features
//!
//! - `format` (on by default): the pattern language, and month and weekday
//!   names from the `locale` crate.
//! - `logging`: records through the `log` crate.
//! - `serde`: serializing date-times as their text.

#[macro_use]
mod logging;

pub mod cal;
pub mod error;
pub mod instant;
mod system;
mod util;

pub use crate::cal::{DateTime, DayOverflow, Interval, Month, NullsGo, Offset, Unit, Weekday, Year, YearMonth};
pub use crate::error::Error;
pub use crate::instant::Instant;

#[cfg(feature = "format")]
pub use crate::cal::{CustomNames, DateTimeFormat, Locale, LocaleText};
