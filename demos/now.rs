use civil_datetime::{DateTime, DateTimeFormat, Error, Locale, Offset};

use std::env;


/// Reads an offset such as `+5`, `-03:30`, or `9:00`.
fn parse_offset(arg: &str) -> Result<Offset, Error> {
    let (sign, rest) = match arg.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None       => (1, arg.trim_start_matches('+')),
    };

    let bad = || Error::InvalidArgument(format!("not an offset: {:?}", arg));
    let mut parts = rest.splitn(2, ':');
    let hours: i8 = parts.next().and_then(|h| h.parse().ok()).ok_or_else(bad)?;
    let minutes: i8 = match parts.next() {
        Some(m) => m.parse().map_err(|_| bad())?,
        None    => 0,
    };

    Offset::of_hours_and_minutes(sign * hours, sign * minutes)
}

fn main() {
    let long = DateTimeFormat::parse("WWWW, D MMMM YYYY, h12:mm:ss a").unwrap();
    let short = DateTimeFormat::parse("YYYY-MM-DD|T|hh:mm:ss.fff").unwrap();
    let names = Locale::user();

    let now = DateTime::now(Offset::utc()).unwrap();
    println!("It is {} in UTC", long.format(&now, Some(&names)).unwrap());
    println!("      {}", short.format(&now, None).unwrap());

    for arg in env::args().skip(1) {
        let offset = match parse_offset(&arg) {
            Ok(o) => o,
            Err(e) => { println!("Error: {}", e); continue },
        };

        let then = match now.change_offset(Offset::utc(), offset) {
            Ok(t) => t,
            Err(e) => { println!("Error: {}", e); continue },
        };

        println!("It is {} at {:?}", long.format(&then, Some(&names)).unwrap(), offset);
    }
}
