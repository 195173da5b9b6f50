//! Where month names, weekday names, and AM/PM indicators come from.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;

use crate::cal::rules::{Month, Weekday};
use crate::error::Error;


/// Something that can name months, weekdays, and the halves of the day.
pub trait LocaleText {

    /// The full name of the month, such as “January”.
    fn month_name(&self, month: Month) -> String;

    /// The full name of the weekday, such as “Sunday”.
    fn weekday_name(&self, weekday: Weekday) -> String;

    /// The indicator for the half of the day the hour (0 to 23) falls in,
    /// such as “AM”.
    fn am_pm_indicator(&self, hour: i32) -> String;

    /// A name for this set of texts, under which they are kept once looked
    /// up. Texts without a name are looked up again each time.
    fn cache_key(&self) -> Option<&str> {
        None
    }
}


/// The texts of a locale, as the `locale` crate knows it.
pub struct Locale {
    key: String,
    time: locale::Time,
    am_pm: [String; 2],
}

impl Locale {

    /// The English names, which are always available.
    pub fn english() -> Self {
        Self::with_key("en".to_owned(), locale::Time::english())
    }

    /// The names for the user’s locale, going by the environment. Falls
    /// back to English when that locale cannot be loaded.
    pub fn user() -> Self {
        let key = ["LC_ALL", "LC_TIME", "LANG"].iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| "C".to_owned());

        match locale::Time::load_user_locale() {
            Ok(time) => Self::with_key(key, time),
            Err(_) => {
                warn!("could not load locale {:?}, using English names", key);
                Self::english()
            }
        }
    }

    fn with_key(key: String, time: locale::Time) -> Self {
        Locale { key, time, am_pm: ["AM".to_owned(), "PM".to_owned()] }
    }

    /// Replaces the AM/PM indicators, which the `locale` crate does not
    /// provide.
    pub fn with_am_pm<S: Into<String>>(mut self, am: S, pm: S) -> Self {
        self.am_pm = [am.into(), pm.into()];
        self.key = format!("{}/{}/{}", self.key, self.am_pm[0], self.am_pm[1]);
        self
    }
}

impl LocaleText for Locale {
    fn month_name(&self, month: Month) -> String {
        self.time.long_month_name(month.months_from_january())
    }

    fn weekday_name(&self, weekday: Weekday) -> String {
        self.time.long_day_name(weekday.days_from_sunday())
    }

    fn am_pm_indicator(&self, hour: i32) -> String {
        self.am_pm[if hour < 12 { 0 } else { 1 }].clone()
    }

    fn cache_key(&self) -> Option<&str> {
        Some(&self.key)
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Locale({})", self.key)
    }
}


/// Names given directly, instead of coming from a locale.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct CustomNames {
    months: Vec<String>,
    weekdays: Vec<String>,
    am_pm: Vec<String>,
}

impl CustomNames {

    /// Takes 12 month names starting with January, 7 weekday names starting
    /// with Sunday, and the indicators for before and after noon.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_datetime::{CustomNames, DateTime};
    ///
    /// let names = CustomNames::new(
    ///     &["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    ///     &["sun", "mon", "tue", "humpday", "thu", "fri", "sat"],
    ///     &["am", "pm"],
    /// ).unwrap();
    ///
    /// let when = DateTime::parse("2009-10-28 15:00").unwrap();
    /// assert_eq!(when.format_with("WWWW MMMM h12a", &names).unwrap(), "humpday O 3pm");
    /// ```
    pub fn new<S: AsRef<str>>(months: &[S], weekdays: &[S], am_pm: &[S]) -> Result<Self, Error> {
        fn collect<S: AsRef<str>>(what: &str, names: &[S], count: usize) -> Result<Vec<String>, Error> {
            if names.len() == count {
                Ok(names.iter().map(|s| s.as_ref().to_owned()).collect())
            }
            else {
                Err(Error::InvalidArgument(format!("expected {} {} names, got {}", count, what, names.len())))
            }
        }

        Ok(CustomNames {
            months: collect("month", months, 12)?,
            weekdays: collect("weekday", weekdays, 7)?,
            am_pm: collect("AM/PM", am_pm, 2)?,
        })
    }
}

impl LocaleText for CustomNames {
    fn month_name(&self, month: Month) -> String {
        self.months[month.months_from_january()].clone()
    }

    fn weekday_name(&self, weekday: Weekday) -> String {
        self.weekdays[weekday.days_from_sunday()].clone()
    }

    fn am_pm_indicator(&self, hour: i32) -> String {
        self.am_pm[if hour < 12 { 0 } else { 1 }].clone()
    }
}


/// Every name a format could need, looked up once.
#[derive(PartialEq, Eq, Debug)]
pub(crate) struct NameTable {
    months: Vec<String>,
    weekdays: Vec<String>,
    am_pm: Vec<String>,
}

impl NameTable {
    fn build(text: &dyn LocaleText) -> Self {
        let months = (1 ..= 12).filter_map(|m| Month::from_one(m).ok()).map(|m| text.month_name(m)).collect();
        let weekdays = (1 ..= 7).filter_map(|d| Weekday::from_one(d).ok()).map(|d| text.weekday_name(d)).collect();
        let am_pm = (0 .. 24).map(|h| text.am_pm_indicator(h)).collect();
        NameTable { months, weekdays, am_pm }
    }

    pub(crate) fn month(&self, month: Month) -> &str {
        &self.months[month.months_from_january()]
    }

    pub(crate) fn weekday(&self, weekday: Weekday) -> &str {
        &self.weekdays[weekday.days_from_sunday()]
    }

    /// The indicator for an hour, which has already been checked to be
    /// between 0 and 23.
    pub(crate) fn am_pm(&self, hour: i32) -> &str {
        usize::try_from(hour).ok()
            .and_then(|h| self.am_pm.get(h))
            .map_or("", String::as_str)
    }
}

lazy_static! {
    static ref TABLES: RwLock<HashMap<String, Arc<NameTable>>> = RwLock::new(HashMap::new());
}

/// Returns the names from the given source, reusing the ones already
/// looked up under its cache key. Two threads filling the same key at once
/// both build a table, and the first one in wins.
pub(crate) fn names_for(text: &dyn LocaleText) -> Arc<NameTable> {
    let key = match text.cache_key() {
        Some(key) => key,
        None => return Arc::new(NameTable::build(text)),
    };

    if let Some(table) = TABLES.read().ok().and_then(|tables| tables.get(key).cloned()) {
        return table;
    }

    debug!("looking up month and weekday names for locale {:?}", key);
    let table = Arc::new(NameTable::build(text));
    match TABLES.write() {
        Ok(mut tables) => Arc::clone(tables.entry(key.to_owned()).or_insert(table)),
        Err(_)         => table,
    }
}
