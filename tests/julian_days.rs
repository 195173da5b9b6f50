use civil_datetime::DateTime;
use civil_datetime::cal::julian;


fn dt(text: &str) -> DateTime {
    DateTime::parse(text).unwrap()
}


#[test]
fn modified_julian_days() {
    assert_eq!(dt("1858-11-17").modified_julian_day_number(), Ok(0));
    assert_eq!(dt("1970-01-01").modified_julian_day_number(), Ok(40_587));
    assert_eq!(dt("2009-10-28 13:00").modified_julian_day_number(), Ok(55_132));
}

#[test]
fn range_ends() {
    assert_eq!(dt("0001-01-01").modified_julian_day_number(), Ok(-678_575));
    assert_eq!(dt("9999-12-31").modified_julian_day_number(), Ok(2_973_483));
}

#[test]
fn julian_day_numbers() {
    assert_eq!(julian::to_julian_day_number_at_noon(2000, 1, 1), 2_451_545);
    assert_eq!(julian::from_julian_day_number_at_noon(2_451_545), (2000, 1, 1));
    assert_eq!(julian::from_modified_julian_day(55_132), (2009, 10, 28));
}

#[test]
fn every_day_of_a_leap_year() {
    let start = julian::to_modified_julian_day(2012, 1, 1);
    for offset in 0 .. 366 {
        let (y, m, d) = julian::from_modified_julian_day(start + offset);
        assert_eq!(julian::to_modified_julian_day(y, m, d), start + offset);
        assert_eq!(y, 2012);
    }
}

#[test]
fn weekdays() {
    assert_eq!(dt("2009-10-28").weekday(), Ok(4));
    assert_eq!(dt("2009-02-01").weekday(), Ok(1));
    assert_eq!(dt("2000-01-01").weekday(), Ok(7));
    assert_eq!(dt("0001-01-01").weekday(), Ok(2));
}

#[test]
fn day_of_year() {
    assert_eq!(dt("2009-10-28").day_of_year(), Ok(301));
    assert_eq!(dt("9999-12-31").day_of_year(), Ok(365));
    assert_eq!(dt("2012-12-31").day_of_year(), Ok(366));
}

#[test]
fn days_in_month() {
    assert_eq!(dt("2012-02").num_days_in_month(), Ok(29));
    assert_eq!(dt("2013-02-10").num_days_in_month(), Ok(28));
    assert!(dt("2013").num_days_in_month().is_err());
}

#[test]
fn week_index() {
    assert_eq!(dt("2000-01-02").week_index(), Ok(1));
    assert_eq!(dt("2000-01-01").week_index(), Ok(0));
    assert_eq!(dt("2009-10-28").week_index(), Ok(513));
}

#[test]
fn week_index_from() {
    let reference = dt("2009-02-01");
    assert_eq!(dt("2009-02-07").week_index_from(&reference), Ok(1));
    assert_eq!(dt("2009-02-08").week_index_from(&reference), Ok(2));
    assert_eq!(dt("2009-02-15").week_index_from(&reference), Ok(3));
    assert_eq!(dt("2009-01-31").week_index_from(&reference), Ok(0));

    assert_eq!(dt("2009-05-03").week_index_from(&dt("2009-04-26")), Ok(2));
}

#[test]
fn needs_a_date() {
    assert!(dt("10:00").modified_julian_day_number().is_err());
    assert!(dt("2009-10").weekday().is_err());
}
