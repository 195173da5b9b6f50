use std::cmp::Ordering;
use std::collections::HashSet;

use civil_datetime::{DateTime, NullsGo, Unit};


fn dt(text: &str) -> DateTime {
    DateTime::parse(text).unwrap()
}


#[test]
fn date_order() {
    assert_eq!(dt("2009-01-01").compare(&dt("2009-01-02")), Ok(Ordering::Less));
    assert_eq!(dt("2010").compare(&dt("2009-12-31")), Ok(Ordering::Greater));
}

#[test]
fn absent_comes_first() {
    assert_eq!(dt("2009-01-01").compare(&dt("2009-01-01 00")), Ok(Ordering::Less));
    assert_eq!(dt("10:00").compare(&dt("0001-01-01")), Ok(Ordering::Less));
}

#[test]
fn absent_comes_last() {
    assert_eq!(dt("2009-01-01").compare_with(&dt("2009-01-01 00"), NullsGo::Last), Ok(Ordering::Greater));
    assert_eq!(dt("2009-01-01").compare_with(&dt("2009-01-01"), NullsGo::Last), Ok(Ordering::Equal));
}

#[test]
fn helpers() {
    let (a, b) = (dt("2009-01-01 10:00"), dt("2009-01-01 11:00"));
    assert_eq!(a.lt(&b), Ok(true));
    assert_eq!(a.lteq(&a), Ok(true));
    assert_eq!(a.gt(&b), Ok(false));
    assert_eq!(b.gteq(&a), Ok(true));
}

#[test]
fn helpers_report_bad_text() {
    let bad = DateTime::raw("someday");
    assert!(bad.lt(&dt("2009")).is_err());
    assert!(dt("2009").compare(&bad).is_err());
}

#[test]
fn sorting_puts_bad_text_last() {
    let mut list = vec![DateTime::raw("zzz"), dt("2009-06"), DateTime::raw("2001"), dt("12:00")];
    list.sort();

    let texts: Vec<String> = list.iter().map(ToString::to_string).collect();
    assert_eq!(texts, vec!["12:00", "2001", "2009-06", "zzz"]);
}

#[test]
fn equality_ignores_the_text() {
    assert_eq!(dt("2009-01-01T10:00"), dt("2009-01-01 10:00"));
    assert_eq!(dt("2009-01-01 10:00"), DateTime::new(Some(2009), Some(1), Some(1), Some(10), Some(0), None, None).unwrap());
    assert_ne!(dt("2009-01-01"), dt("2009-01-01 00:00"));

    let set: HashSet<DateTime> = vec![dt("2009-01-01T10:00"), dt("2009-01-01 10:00"), dt("2009-01-02")].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn same_day() {
    assert_eq!(dt("2009-01-01 10:00").is_same_day(&dt("2009-01-01 23:59:59")), Ok(true));
    assert_eq!(dt("2009-01-01 10:00").is_same_day(&dt("2009-01-02 10:00")), Ok(false));
    assert!(dt("2009-01").is_same_day(&dt("2009-01-01")).is_err());
}

#[test]
fn presence_probes() {
    let when = dt("2009-01-01 10:00");
    assert_eq!(when.has_year_month_day(), Ok(true));
    assert_eq!(when.has_hour_minute_second(), Ok(false));
    assert_eq!(when.units_all_present(&[Unit::Hour, Unit::Minute]), Ok(true));
    assert_eq!(when.units_all_absent(&[Unit::Second, Unit::Nanosecond]), Ok(true));
}

#[test]
fn precision_and_truncation() {
    let when = dt("2009-01-01 10:20:30.5");
    assert_eq!(when.precision(), Ok(Unit::Nanosecond));
    assert_eq!(when.truncate(Unit::Minute).unwrap().to_string(), "2009-01-01 10:20");
    assert_eq!(when.truncate(Unit::Year).unwrap().precision(), Ok(Unit::Year));
    assert!(when.truncate(Unit::Nanosecond).is_err());
}

#[test]
fn boundaries() {
    let when = dt("2009-02-14 10:20");
    assert_eq!(when.start_of_day().unwrap().to_string(), "2009-02-14 00:00:00.000000000");
    assert_eq!(when.end_of_day().unwrap().to_string(), "2009-02-14 23:59:59.999999999");
    assert_eq!(when.start_of_month().unwrap().to_string(), "2009-02-01 00:00:00.000000000");
    assert_eq!(when.end_of_month().unwrap().to_string(), "2009-02-28 23:59:59.999999999");
}
