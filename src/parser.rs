//! Holds parsers for dates given by users.

use jiff::{Zoned, civil, fmt::strtime::BrokenDownTime};

use crate::{Error, GregorianDate};

/// Parse a triplet of "%Y/%m/%d".
fn parse_ymd_raw(s: &str) -> Result<(i16, i8, i8), jiff::Error> {
    let tm = BrokenDownTime::parse("%Y/%m/%d", s.trim())?;
    match (tm.year(), tm.month(), tm.day()) {
        (Some(y), Some(m), Some(d)) => Ok((y, m, d)),
        _ => Err(jiff::Error::from_args(format_args!(
            "`{s}` is not a %Y/%m/%d date"
        ))),
    }
}

/// Parse a Gregorian date in "%Y/%m/%d" format.
pub fn parse_ymd(s: &str) -> Result<GregorianDate, jiff::Error> {
    let (y, m, d) = parse_ymd_raw(s)?;
    Ok(GregorianDate::new(y.into(), m as u8, d as u8)) // safe, parser keeps them positive
}

/// Parse a date relative to `now` and put it in the time zone of `now`.
///
/// A "%Y/%m/%d" date is the midnight of that day. Anything else goes to the `parse_datetime` crate
/// so "yesterday", "+3 days" or "2024-03-20 10:00" work too.
pub fn parse_datetime(s: &str, now: &Zoned) -> Result<Zoned, Error> {
    let tz = now.time_zone().clone();

    if let Ok((y, m, d)) = parse_ymd_raw(s) {
        tracing::debug!(input = s, "parsed as %Y/%m/%d");
        return Ok(civil::Date::new(y, m, d)?.to_zoned(tz)?);
    }

    let parsed = parse_datetime::parse_datetime_at_date(now.clone(), s)
        .or_else(|_| parse_datetime::parse_datetime(s))
        .map_err(|source| Error::Parse {
            input: s.to_owned(),
            source,
        })?;
    tracing::debug!(input = s, %parsed, "parsed as a free-form date");
    Ok(parsed.with_time_zone(tz))
}
