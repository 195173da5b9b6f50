//! Datetime-to-string routines, driven by a small pattern language.
//!
//! A pattern is ordinary text with tokens in it. Each token stands for a
//! field of the date-time:
//!
//! | Token              | Output                                  |
//! |--------------------|-----------------------------------------|
//! | `YYYY`, `YY`       | year, four digits or the last two       |
//! | `MMMM`, `MMM`      | month name, full or first three letters |
//! | `MM`, `M`          | month number, padded to two or not      |
//! | `DD`, `D`          | day of the month                        |
//! | `WWWW`, `WWW`      | weekday name, full or first three       |
//! | `hh`, `h`          | hour on the 24-hour clock               |
//! | `hh12`, `h12`      | hour on the 12-hour clock               |
//! | `mm`, `m`          | minute                                  |
//! | `ss`, `s`          | second                                  |
//! | `a`                | AM/PM indicator                         |
//! | `f` to `fffffffff` | fraction of a second, truncated         |
//!
//! The pattern is read from left to right, taking the longest token that
//! fits at each point. Anything between a pair of `|` characters is copied
//! as it is, without the pipes. A field that is absent writes nothing.

use std::fmt::Display;

use num_traits::PrimInt;
use pad::{PadStr, Alignment};

use crate::cal::datetime::{DateTime, Fields, Unit};
use crate::cal::fmt::locale::{names_for, LocaleText, NameTable};
use crate::cal::julian;
use crate::cal::rules::{Month, Weekday};
use crate::error::Error;


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Year(NumArguments),
    YearOfCentury(NumArguments),

    MonthNumber(NumArguments),
    MonthName(TextArguments),

    Day(NumArguments),
    WeekdayName(TextArguments),

    Hour(NumArguments),
    Hour12(NumArguments),
    Minute(NumArguments),
    Second(NumArguments),
    AmPm,

    Fraction(usize),
}


/// How wide a number gets padded with zeros.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NumArguments {
    width: usize,
}

impl NumArguments {
    const fn unpadded() -> Self {
        NumArguments { width: 0 }
    }

    const fn padded(width: usize) -> Self {
        NumArguments { width }
    }

    fn format<N: PrimInt + Display>(self, number: N) -> String {
        number.to_string().pad(self.width, '0', Alignment::Right, false)
    }
}

/// Whether a name is written in full or cut down to three letters.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TextArguments {
    abbreviated: bool,
}

impl TextArguments {
    const fn full() -> Self {
        TextArguments { abbreviated: false }
    }

    const fn abbreviated() -> Self {
        TextArguments { abbreviated: true }
    }

    fn format(self, name: &str) -> String {
        if self.abbreviated {
            name.chars().take(3).collect()
        }
        else {
            name.to_owned()
        }
    }
}


/// Every token but the fractions, longest first wherever one token is the
/// start of another.
const TOKENS: &[(&str, Field<'static>)] = &[
    ("YYYY", Field::Year(NumArguments::padded(4))),
    ("YY",   Field::YearOfCentury(NumArguments::padded(2))),
    ("MMMM", Field::MonthName(TextArguments::full())),
    ("MMM",  Field::MonthName(TextArguments::abbreviated())),
    ("MM",   Field::MonthNumber(NumArguments::padded(2))),
    ("M",    Field::MonthNumber(NumArguments::unpadded())),
    ("DD",   Field::Day(NumArguments::padded(2))),
    ("D",    Field::Day(NumArguments::unpadded())),
    ("WWWW", Field::WeekdayName(TextArguments::full())),
    ("WWW",  Field::WeekdayName(TextArguments::abbreviated())),
    ("hh12", Field::Hour12(NumArguments::padded(2))),
    ("h12",  Field::Hour12(NumArguments::unpadded())),
    ("hh",   Field::Hour(NumArguments::padded(2))),
    ("h",    Field::Hour(NumArguments::unpadded())),
    ("mm",   Field::Minute(NumArguments::padded(2))),
    ("m",    Field::Minute(NumArguments::unpadded())),
    ("ss",   Field::Second(NumArguments::padded(2))),
    ("s",    Field::Second(NumArguments::unpadded())),
    ("a",    Field::AmPm),
];

const ESCAPE: char = '|';
const MAX_FRACTION_DIGITS: usize = 9;


impl<'a> Field<'a> {

    /// Whether this field needs names from a locale.
    fn is_text(&self) -> bool {
        matches!(*self, Field::MonthName(_) | Field::WeekdayName(_) | Field::AmPm)
    }

    /// Returns the token at the start of the input, and how many bytes it
    /// takes up.
    fn at_start_of(input: &str) -> Option<(usize, Field<'static>)> {
        let fs = input.bytes().take_while(|b| *b == b'f').take(MAX_FRACTION_DIGITS).count();
        if fs > 0 {
            return Some((fs, Field::Fraction(fs)));
        }

        TOKENS.iter()
              .find(|(token, _)| input.starts_with(token))
              .map(|(token, field)| (token.len(), *field))
    }

    fn format(&self, fields: &Fields, names: Option<&NameTable>, w: &mut String) -> Result<(), Error> {
        let get = |unit| fields.get(unit);
        let number = |unit, args: NumArguments| get(unit).map(|n| args.format(n)).unwrap_or_default();

        let text = match *self {
            Field::Literal(s)          => s.to_owned(),
            Field::Year(a)             => number(Unit::Year, a),
            Field::YearOfCentury(a)    => get(Unit::Year).map(|y| a.format(y % 100)).unwrap_or_default(),
            Field::MonthNumber(a)      => number(Unit::Month, a),
            Field::Day(a)              => number(Unit::Day, a),
            Field::Hour(a)             => number(Unit::Hour, a),
            Field::Hour12(a)           => get(Unit::Hour).map(|h| a.format(twelve_hour(h))).unwrap_or_default(),
            Field::Minute(a)           => number(Unit::Minute, a),
            Field::Second(a)           => number(Unit::Second, a),
            Field::Fraction(digits)    => get(Unit::Nanosecond).map(|n| fraction(n, digits)).unwrap_or_default(),

            Field::MonthName(a) => match (get(Unit::Month), names) {
                (Some(m), Some(names)) => a.format(names.month(Month::from_one(m)?)),
                _                      => String::new(),
            },
            Field::WeekdayName(a) => match (weekday(fields)?, names) {
                (Some(d), Some(names)) => a.format(names.weekday(d)),
                _                      => String::new(),
            },
            Field::AmPm => match (get(Unit::Hour), names) {
                (Some(h), Some(names)) => names.am_pm(h).to_owned(),
                _                      => String::new(),
            },
        };

        w.push_str(&text);
        Ok(())
    }
}

/// 0 becomes 12, and 13 to 23 become 1 to 11.
fn twelve_hour(hour: i32) -> i32 {
    match hour {
        0           => 12,
        h if h > 12 => h - 12,
        h           => h,
    }
}

/// The first few digits of the nanoseconds written out to nine places,
/// so nothing gets rounded.
fn fraction(nanosecond: i32, digits: usize) -> String {
    let mut all = format!("{:09}", nanosecond);
    all.truncate(digits);
    all
}

/// The weekday, which needs a full date. No date at all gives no weekday;
/// part of a date is an error.
fn weekday(fields: &Fields) -> Result<Option<Weekday>, Error> {
    if fields.all_absent(&[Unit::Year, Unit::Month, Unit::Day]) {
        return Ok(None);
    }

    let (y, m, d) = fields.require_ymd()?;
    let index = julian::weekday_of(julian::to_julian_day_number_at_noon(y, m, d));
    Weekday::from_one(index).map(Some)
}


/// A pattern that has been split into tokens, ready to format any number
/// of date-times.
///
/// ### Examples
///
/// ```
/// use civil_datetime::{DateTime, DateTimeFormat};
///
/// let format = DateTimeFormat::parse("YYYY-MM-DD hh:mm:ss.fffffffff").unwrap();
/// let when = DateTime::parse("1958-04-09 03:05:06.123456789").unwrap();
/// assert_eq!(format.format(&when, None).unwrap(), "1958-04-09 03:05:06.123456789");
/// ```
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DateTimeFormat<'a> {
    pattern: &'a str,
    fields: Vec<Field<'a>>,
}

impl<'a> DateTimeFormat<'a> {

    /// Splits a pattern into its tokens and literal text. Only an empty or
    /// blank pattern is an error.
    pub fn parse(pattern: &'a str) -> Result<DateTimeFormat<'a>, Error> {
        if pattern.trim().is_empty() {
            return Err(Error::InvalidArgument("format pattern is empty".into()));
        }

        let mut parser = FormatParser::new(pattern);
        parser.parse_format_string();

        Ok(DateTimeFormat { pattern, fields: parser.fields })
    }

    /// Whether any of the tokens needs names from a locale.
    pub fn needs_names(&self) -> bool {
        self.fields.iter().any(Field::is_text)
    }

    /// Formats a date-time. Names for months, weekdays, and AM/PM come
    /// from `names`, which must be given if the pattern uses any.
    pub fn format(&self, when: &DateTime, names: Option<&dyn LocaleText>) -> Result<String, Error> {
        let fields = when.fields()?;

        let table = match names {
            Some(text)                    => Some(names_for(text)),
            None if self.needs_names()    => return Err(Error::LocaleRequired(self.pattern.to_owned())),
            None                          => None,
        };

        let mut buf = String::new();
        for field in &self.fields {
            field.format(fields, table.as_deref(), &mut buf)?;
        }

        Ok(buf)
    }
}


struct FormatParser<'a> {
    input:  &'a str,
    pos:    usize,
    anchor: Option<usize>,
    fields: Vec<Field<'a>>,
}

impl<'a> FormatParser<'a> {
    fn new(input: &'a str) -> FormatParser<'a> {
        FormatParser {
            input,
            pos:    0,
            anchor: None,
            fields: Vec::new(),
        }
    }

    fn collect_up_to_anchor(&mut self) {
        if let Some(start) = self.anchor.take() {
            self.fields.push(Field::Literal(&self.input[start .. self.pos]));
        }
    }

    fn parse_format_string(&mut self) {
        let input = self.input;

        while self.pos < input.len() {
            let rest = &input[self.pos ..];

            if rest.starts_with(ESCAPE) {
                self.collect_up_to_anchor();

                // A pipe with no partner is dropped on its own.
                let inner = &rest[ESCAPE.len_utf8() ..];
                match inner.find(ESCAPE) {
                    Some(end) => {
                        if end > 0 {
                            self.fields.push(Field::Literal(&inner[.. end]));
                        }
                        self.pos += end + 2 * ESCAPE.len_utf8();
                    },
                    None => self.pos += ESCAPE.len_utf8(),
                }
            }
            else if let Some((len, field)) = Field::at_start_of(rest) {
                self.collect_up_to_anchor();
                self.fields.push(field);
                self.pos += len;
            }
            else {
                if self.anchor.is_none() {
                    self.anchor = Some(self.pos);
                }
                self.pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }

        self.collect_up_to_anchor();
    }
}


impl DateTime {

    /// Formats this date-time with a pattern that only uses numbers.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::DateTime;
    ///
    /// let when = DateTime::parse("2009-10-28 13:59:01").unwrap();
    /// assert_eq!(when.format("|Date:|YYYY-MM-DD |Time:|hh12:mm:ss").unwrap(), "Date:2009-10-28 Time:01:59:01");
    /// assert!(when.format("MMMM").is_err());
    /// ```
    pub fn format(&self, pattern: &str) -> Result<String, Error> {
        DateTimeFormat::parse(pattern)?.format(self, None)
    }

    /// Formats this date-time with a pattern, taking month names, weekday
    /// names, and AM/PM indicators from the given source.
    pub fn format_with(&self, pattern: &str, names: &dyn LocaleText) -> Result<String, Error> {
        DateTimeFormat::parse(pattern)?.format(self, Some(names))
    }
}
