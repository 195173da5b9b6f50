//! The plain, fixed text forms of date-times, used by `Display` and
//! `Debug`.
//!
//! These are the forms the parser reads back, so every value whose fields
//! form one of these shapes survives a trip through text. They are meant
//! for logs and diagnostics; use a `DateTimeFormat` for text that people
//! or other programs will read.

use std::fmt;

use crate::cal::datetime::{DateTime, Fields, Unit};


/// The shapes of present fields that have a fixed text form.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum Shape {
    Year,
    YearMonth,
    Date,
    DateHour,
    DateMinute,
    DateSecond,
    DateNanosecond,
    TimeNanosecond,
    TimeSecond,
    TimeMinute,
}

impl Shape {
    fn of(fields: &Fields) -> Option<Self> {
        use self::Shape::*;

        // How many units, counting from the year, are present with every
        // unit after them absent.
        let leading = |from: usize| -> Option<usize> {
            let units = &Unit::ALL[from ..];
            let present = units.iter().take_while(|u| fields.get(**u).is_some()).count();
            if fields.all_absent(&units[present ..]) { Some(present) } else { None }
        };

        if fields.all_absent(&Unit::ALL[.. 3]) {
            return match leading(3)? {
                4 => Some(TimeNanosecond),
                3 => Some(TimeSecond),
                2 => Some(TimeMinute),
                _ => None,
            };
        }

        match leading(0)? {
            1 => Some(Year),
            2 => Some(YearMonth),
            3 => Some(Date),
            4 => Some(DateHour),
            5 => Some(DateMinute),
            6 => Some(DateSecond),
            7 => Some(DateNanosecond),
            _ => None,
        }
    }
}

impl Fields {

    /// Whether these fields have one of the fixed text forms, which the
    /// parser reads back.
    #[cfg(feature = "serde")]
    pub(crate) fn has_text_form(&self) -> bool {
        Shape::of(self).is_some()
    }
}

/// Short names for the fields in the fallback form.
const LETTERS: [&str; 7] = ["Y", "M", "D", "h", "m", "s", "f"];

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = |unit| self.get(unit).unwrap_or(0);
        let (y, mo, d) = (value(Unit::Year), value(Unit::Month), value(Unit::Day));
        let (h, mi, s, ns) = (value(Unit::Hour), value(Unit::Minute), value(Unit::Second), value(Unit::Nanosecond));

        match Shape::of(self) {
            Some(Shape::Year)           => write!(f, "{:04}", y),
            Some(Shape::YearMonth)      => write!(f, "{:04}-{:02}", y, mo),
            Some(Shape::Date)           => write!(f, "{:04}-{:02}-{:02}", y, mo, d),
            Some(Shape::DateHour)       => write!(f, "{:04}-{:02}-{:02} {:02}", y, mo, d, h),
            Some(Shape::DateMinute)     => write!(f, "{:04}-{:02}-{:02} {:02}:{:02}", y, mo, d, h, mi),
            Some(Shape::DateSecond)     => write!(f, "{:04}-{:02}-{:02} {:02}:{:02}:{:02}", y, mo, d, h, mi, s),
            Some(Shape::DateNanosecond) => write!(f, "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:09}", y, mo, d, h, mi, s, ns),
            Some(Shape::TimeNanosecond) => write!(f, "{:02}:{:02}:{:02}.{:09}", h, mi, s, ns),
            Some(Shape::TimeSecond)     => write!(f, "{:02}:{:02}:{:02}", h, mi, s),
            Some(Shape::TimeMinute)     => write!(f, "{:02}:{:02}", h, mi),
            None => {
                let mut first = true;
                for (unit, letter) in Unit::ALL.iter().zip(LETTERS.iter()) {
                    if let Some(v) = self.get(*unit) {
                        if !first {
                            f.write_str(" ")?;
                        }
                        write!(f, "{}:{}", letter, v)?;
                        first = false;
                    }
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for DateTime {

    /// Writes the text this date-time was created from, if any, and
    /// otherwise the fixed form for its fields.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.raw_text() {
            Some(text) => f.write_str(text),
            None => match self.fields() {
                Ok(fields) => fmt::Display::fmt(fields, f),
                Err(_)     => Err(fmt::Error),
            },
        }
    }
}

impl fmt::Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.raw_text(), self.fields()) {
            (None,       Ok(fields)) => write!(f, "DateTime({})", fields),
            (Some(text), Ok(fields)) => write!(f, "DateTime({} from {:?})", fields, text),
            (Some(text), Err(_))     => write!(f, "DateTime(unparseable {:?})", text),
            (None,       Err(_))     => write!(f, "DateTime(?)"),
        }
    }
}
