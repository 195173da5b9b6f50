//! Reading date-times out of text.
//!
//! The accepted forms are a date, a time, or a date and a time separated
//! by a space or a `T`:
//!
//! ```text
//! date := YYYY ('-' MM ('-' DD)?)?          year of 1 to 4 digits
//! time := hh (':' mm (':' ss ('.' f)?)?)?   fraction of 1 to 9 digits
//! ```
//!
//! Any field left off the end is simply absent in the result. Parsing only
//! picks the numbers out; range checks happen when the fields become a
//! `DateTime`.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::cal::datetime::{Fields, Unit};
use crate::error::Error;


lazy_static! {
    static ref DATE: Regex = Regex::new(
        r"^([0-9]{1,4})(?:-([0-9]{2})(?:-([0-9]{2}))?)?$"
    ).expect("date pattern compiles");

    static ref TIME: Regex = Regex::new(
        r"^([0-9]{2})(?::([0-9]{2})(?::([0-9]{2})(?:\.([0-9]{1,9}))?)?)?$"
    ).expect("time pattern compiles");
}

/// Number of digits in a full nanosecond fraction.
const FRACTION_DIGITS: usize = 9;


/// Picks the fields out of some text, without checking their ranges.
pub(crate) fn parse_fields(input: &str) -> Result<Fields, Error> {
    let input = input.trim();

    let (date, time) = match split_date_and_time(input) {
        Some((date, time))                  => (Some(date), Some(time)),
        None if has_colon_in_third_place(input) => (None, Some(input)),
        None                                => (Some(input), None),
    };

    let mut fields = Fields::default();

    if let Some(date) = date {
        let caps = DATE.captures(date).ok_or_else(|| unrecognized("date", date))?;
        fields = fields
            .with(Unit::Year,  number(&caps, 1))
            .with(Unit::Month, number(&caps, 2))
            .with(Unit::Day,   number(&caps, 3));
    }

    if let Some(time) = time {
        let caps = TIME.captures(time).ok_or_else(|| unrecognized("time", time))?;
        fields = fields
            .with(Unit::Hour,       number(&caps, 1))
            .with(Unit::Minute,     number(&caps, 2))
            .with(Unit::Second,     number(&caps, 3))
            .with(Unit::Nanosecond, fraction(&caps, 4));
    }

    Ok(fields)
}

/// Splits at the first space, or failing that the first `T`. A separator
/// right at the start of the text does not count.
fn split_date_and_time(input: &str) -> Option<(&str, &str)> {
    let position = input.find(' ').or_else(|| input.find('T'))?;
    if position == 0 {
        return None;
    }

    Some((&input[.. position], &input[position + 1 ..]))
}

fn has_colon_in_third_place(input: &str) -> bool {
    input.as_bytes().get(2) == Some(&b':')
}

fn unrecognized(part: &'static str, segment: &str) -> Error {
    Error::UnrecognizedFormat { part, segment: segment.to_owned() }
}

// The patterns only let ASCII digits through, and at most nine of them,
// so these always fit.

fn number(caps: &Captures<'_>, group: usize) -> Option<i32> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

/// A fraction of a second as nanoseconds. Short fractions are padded with
/// zeros on the right, so ".1" is 100,000,000 nanoseconds.
fn fraction(caps: &Captures<'_>, group: usize) -> Option<i32> {
    caps.get(group).and_then(|m| {
        let digits = format!("{:0<width$}", m.as_str(), width = FRACTION_DIGITS);
        digits.parse().ok()
    })
}


#[cfg(test)]
mod test {
    pub(crate) use super::*;

    fn fields(values: [Option<i32>; 7]) -> Fields {
        Fields::new(values)
    }

    mod accepted {
        use super::*;

        macro_rules! test {
            ($name: ident: $input: expr => $result: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(parse_fields($input), Ok(fields($result)))
                }
            };
        }

        test!(year:           "2009"                          => [Some(2009), None, None, None, None, None, None]);
        test!(short_year:     "9"                             => [Some(9), None, None, None, None, None, None]);
        test!(year_month:     "2009-01"                       => [Some(2009), Some(1), None, None, None, None, None]);
        test!(date:           "2009-01-01"                    => [Some(2009), Some(1), Some(1), None, None, None, None]);
        test!(date_hour:      "2009-01-01 23"                 => [Some(2009), Some(1), Some(1), Some(23), None, None, None]);
        test!(date_minutes:   "2009-01-01 23:59"              => [Some(2009), Some(1), Some(1), Some(23), Some(59), None, None]);
        test!(date_seconds:   "2009-12-31 00:00:00"           => [Some(2009), Some(12), Some(31), Some(0), Some(0), Some(0), None]);
        test!(full:           "2009-12-31 00:00:00.123456789" => [Some(2009), Some(12), Some(31), Some(0), Some(0), Some(0), Some(123_456_789)]);
        test!(t_separator:    "2009-12-31T00:00:00.123"       => [Some(2009), Some(12), Some(31), Some(0), Some(0), Some(0), Some(123_000_000)]);
        test!(time:           "23:59:59.12345"                => [None, None, None, Some(23), Some(59), Some(59), Some(123_450_000)]);
        test!(hour_minute:    "00:59"                         => [None, None, None, Some(0), Some(59), None, None]);
        test!(tenth:          "10:00:00.1"                    => [None, None, None, Some(10), Some(0), Some(0), Some(100_000_000)]);
        test!(surrounding:    "  2009-01-01  "                => [Some(2009), Some(1), Some(1), None, None, None, None]);
        test!(out_of_range:   "2009-13-45"                    => [Some(2009), Some(13), Some(45), None, None, None, None]);
    }

    mod rejected {
        use super::*;

        macro_rules! test {
            ($name: ident: $input: expr => $part: expr, $segment: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(parse_fields($input), Err(Error::UnrecognizedFormat { part: $part, segment: $segment.to_string() }))
                }
            };
        }

        test!(five_digit_year:  "20091"               => "date", "20091");
        test!(one_digit_month:  "2009-1-01"           => "date", "2009-1-01");
        test!(words:            "tomorrow"            => "date", "tomorrow");
        test!(long_fraction:    "10:00:00.1234567890" => "time", "10:00:00.1234567890");
        test!(bad_time:         "2009-01-01 9:00"     => "time", "9:00");
        test!(empty_time:       "2009-01-01T"         => "time", "");
        test!(empty:            ""                    => "date", "");
        test!(unicode_digits:   "２００９"             => "date", "２００９");
    }

    #[test]
    fn leading_t_is_no_separator() {
        assert!(parse_fields("T10:00").is_err());
    }
}
