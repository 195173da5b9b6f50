//! Serde support. A date-time is written as its text when it has one that
//! reads back, and as its seven optional fields when it does not. Either
//! way, it is checked again on the way back in.

use std::fmt;

use serde::de;
use serde::ser::{self, SerializeStruct};

use crate::cal::datetime::{DateTime, Unit};


/// The field names used when a date-time is written as a struct.
const FIELDS: [&str; 7] = ["year", "month", "day", "hour", "minute", "second", "nanosecond"];

impl serde::Serialize for DateTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(text) = self.raw_text() {
            return serializer.serialize_str(text);
        }

        let fields = self.fields().map_err(ser::Error::custom)?;
        if fields.has_text_form() {
            return serializer.collect_str(self);
        }

        let mut state = serializer.serialize_struct("DateTime", FIELDS.len())?;
        for (unit, name) in Unit::ALL.iter().zip(FIELDS.iter()) {
            state.serialize_field(*name, &fields.get(*unit))?;
        }
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for DateTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<DateTime, D::Error> {
        struct DateTimeVisitor;

        impl<'de> de::Visitor<'de> for DateTimeVisitor {
            type Value = DateTime;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a date-time string or a map of date-time fields")
            }

            #[inline]
            fn visit_str<E: de::Error>(self, value: &str) -> Result<DateTime, E> {
                DateTime::parse(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<DateTime, E> {
                match std::str::from_utf8(value) {
                    Ok(text) => self.visit_str(text),
                    Err(_)   => Err(de::Error::invalid_value(de::Unexpected::Bytes(value), &self)),
                }
            }

            fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<DateTime, A::Error> {
                let mut values: [Option<Option<i32>>; 7] = [None; 7];

                while let Some(key) = map.next_key::<String>()? {
                    let index = match FIELDS.iter().position(|name| *name == key) {
                        Some(index) => index,
                        None        => return Err(de::Error::unknown_field(&key, &FIELDS)),
                    };

                    if values[index].is_some() {
                        return Err(de::Error::duplicate_field(FIELDS[index]));
                    }
                    values[index] = Some(map.next_value()?);
                }

                let [y, mo, d, h, mi, s, ns] = values.map(Option::flatten);
                DateTime::new(y, mo, d, h, mi, s, ns).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(DateTimeVisitor)
    }
}
