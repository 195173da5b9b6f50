//! The one error type shared by every fallible operation in this crate.

use thiserror::Error;


/// Everything that can go wrong when building, parsing, shifting, or
/// formatting a date-time.
///
/// Errors are plain values: they are `Clone` so a raw date-time can keep
/// the outcome of its one-time parse, and `PartialEq` so tests can assert
/// on them directly.
#[derive(PartialEq, Eq, Debug, Clone, Error)]
#[non_exhaustive]
pub enum Error {

    /// A field, an interval magnitude, or the result of some arithmetic
    /// fell outside the range it must lie in.
    #[error("{what} is not in the range {min}..={max}: {value}")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The operation needs fields that this date-time does not have.
    #[error("date-time {text:?} does not have the {needed} needed here")]
    MissingFields {
        needed: &'static str,
        text: String,
    },

    /// Every one of the seven fields is absent.
    #[error("date-time has no fields at all")]
    MissingAllFields,

    /// Under `DayOverflow::Abort`, a change of year or month left the day
    /// past the end of its new month.
    #[error("day {day} does not exist in {year:04}-{month:02}, which has {days_in_month} days")]
    DayOverflow {
        year: i32,
        month: i32,
        day: i32,
        days_in_month: i32,
    },

    /// A date or time segment of some text does not match the grammar.
    #[error("unrecognized {part} format: {segment:?}")]
    UnrecognizedFormat {
        part: &'static str,
        segment: String,
    },

    /// A format pattern uses a month name, weekday name, or AM/PM token,
    /// but nothing was supplied to produce the text.
    #[error("format pattern {0:?} uses a text token but no locale or custom names were given")]
    LocaleRequired(String),

    /// An argument was malformed in a way no range check covers.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {

    /// Builds an `OutOfRange` error for a value that missed an inclusive
    /// range.
    pub(crate) fn out_of_range<N: Into<i64>>(what: &'static str, value: N, min: N, max: N) -> Self {
        Error::OutOfRange { what, value: value.into(), min: min.into(), max: max.into() }
    }

    /// Whether this is any of the out-of-range errors.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}
