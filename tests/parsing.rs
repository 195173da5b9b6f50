use civil_datetime::{DateTime, Error, Unit};


fn fields(text: &str) -> [Option<i32>; 7] {
    let when = DateTime::parse(text).unwrap();
    let mut out = [None; 7];
    for (slot, unit) in out.iter_mut().zip(Unit::ALL.iter()) {
        *slot = when.get(*unit).unwrap();
    }
    out
}


#[test]
fn full() {
    assert_eq!(fields("2009-12-31 23:59:59.999999999"),
               [Some(2009), Some(12), Some(31), Some(23), Some(59), Some(59), Some(999_999_999)]);
}

#[test]
fn t_separator() {
    assert_eq!(fields("2009-12-31T10:00"),
               [Some(2009), Some(12), Some(31), Some(10), Some(0), None, None]);
}

#[test]
fn fraction_padded_on_the_right() {
    assert_eq!(DateTime::parse("10:00:00.1").unwrap().nanosecond(), Ok(Some(100_000_000)));
    assert_eq!(DateTime::parse("10:00:00.000000001").unwrap().nanosecond(), Ok(Some(1)));
}

#[test]
fn hour_only_after_date() {
    assert_eq!(fields("2009-01-01 05"),
               [Some(2009), Some(1), Some(1), Some(5), None, None, None]);
}

#[test]
fn out_of_range_fields() {
    assert!(DateTime::parse("2009-02-29").unwrap_err().is_out_of_range());
    assert!(DateTime::parse("24:00").unwrap_err().is_out_of_range());
    assert!(DateTime::parse("0000").unwrap_err().is_out_of_range());
}

#[test]
fn unrecognized() {
    assert_eq!(DateTime::parse("2009/01/01"),
               Err(Error::UnrecognizedFormat { part: "date", segment: "2009/01/01".into() }));
    assert_eq!(DateTime::parse("2009-01-01 1pm"),
               Err(Error::UnrecognizedFormat { part: "time", segment: "1pm".into() }));
}

#[test]
fn probes() {
    assert!(DateTime::is_parseable("2009-01-01"));
    assert!(!DateTime::is_parseable("2009-02-30"));
    assert!(!DateTime::is_parseable("yesterday"));
}

#[test]
fn from_str() {
    let when: DateTime = "1999-12-31".parse().unwrap();
    assert_eq!(when, DateTime::ymd(1999, 12, 31).unwrap());
}

#[test]
fn raw_is_lazy() {
    let bad = DateTime::raw("2009-13-01");
    assert_eq!(bad.to_string(), "2009-13-01");
    assert!(bad.month().unwrap_err().is_out_of_range());
    assert!(bad.day().unwrap_err().is_out_of_range());
}

#[test]
fn canonical_text_reads_back() {
    let texts = [
        "2009", "2009-01", "2009-01-02", "2009-01-02 03", "2009-01-02 03:04",
        "2009-01-02 03:04:05", "2009-01-02 03:04:05.000000006",
        "03:04:05.000000006", "03:04:05", "03:04",
    ];

    for text in texts.iter() {
        let [y, mo, d, h, mi, s, ns] = fields(text);
        let structured = DateTime::new(y, mo, d, h, mi, s, ns).unwrap();
        assert_eq!(structured.to_string(), *text);
        assert_eq!(DateTime::parse(&structured.to_string()), Ok(structured));
    }
}
