//! Holds `strftime`-like formatting for Jalali dates with Persian names.
//!
//! `jiff` only knows the Gregorian calendar. The Jalali year, month, day and day of the year are
//! written over the date fields of its [`BrokenDownTime`] and the names it would print in English are
//! replaced in the format string. Everything else (flags, widths, time, zone) is up to `jiff`.

use jiff::{Zoned, fmt::strtime::BrokenDownTime};

use crate::{JalaliDate, PERSIAN_COMMA, PERSIAN_WEEKDAYS};

/// A format string with the position of each of its directives.
#[derive(Debug, Clone, PartialEq)]
pub struct Formatter<'a> {
    directives: Vec<(usize, &'a str)>,
    original: &'a str,
}

impl<'a> Formatter<'a> {
    pub fn new(format: &'a str) -> Self {
        let mut chars = format.char_indices().peekable();
        let mut directives = Vec::new();
        let mut start = None;

        while let Some((i, c)) = chars.next() {
            // a '%' always starts over: "%%" is a literal and a trailing '%' is nothing
            if c == '%' {
                start = match chars.peek() {
                    Some((_, '%')) => {
                        chars.next();
                        None
                    }
                    Some(_) => Some(i),
                    None => None,
                };
                continue;
            }

            let Some(s) = start else {
                continue;
            };

            // E and O are POSIX modifiers, any other letter ends the directive
            if c.is_ascii_alphabetic() && c != 'E' && c != 'O' {
                directives.push((s, &format[s..=i]));
                start = None;
            }
        }

        Self {
            directives,
            original: format,
        }
    }

    /// Rebuild the format string replacing directives with what `f` returns.
    ///
    /// `f` gets a directive like `"%-d"` and returns `Ok(None)` to keep it as it is.
    pub fn try_reconstruct_with<F, E>(&self, f: F) -> Result<String, E>
    where
        F: Fn(&str) -> Result<Option<String>, E>,
    {
        let mut new = String::with_capacity(self.original.len());
        let mut previous_end = 0;
        for (start, directive) in self.directives.iter() {
            new.push_str(&self.original[previous_end..*start]);
            match f(directive)? {
                Some(replacement) => new.push_str(&replacement),
                None => new.push_str(directive),
            }
            previous_end = start + directive.len();
        }
        new.push_str(&self.original[previous_end..]);

        Ok(new)
    }
}

/// Resolve a single directive against a Jalali date.
///
/// Only names are resolved here (and `%x`/`%c` which are spelled out in other directives), numbers
/// are left to `jiff` so its flags and widths apply to them. Returns `None` for the directives `jiff`
/// handles itself. Week based directives are errors since the Jalali calendar here has no week
/// numbering.
pub fn resolve_jalali_directive(
    date: &JalaliDate,
    weekday: &str,
    directive: &str,
) -> Result<Option<String>, jiff::Error> {
    let Some(conversion) = directive
        .strip_prefix('%')
        .and_then(|body| body.chars().last())
    else {
        return Ok(None);
    };

    let resolved = match conversion {
        // Persian has no abbreviated names
        'B' | 'b' | 'h' => date.month_name().to_owned(),
        'A' | 'a' => weekday.to_owned(),
        'x' => "%Y/%m/%d".to_owned(),
        'c' => format!(
            "{weekday}{PERSIAN_COMMA} %-d {} %Y %H:%M:%S",
            date.month_name()
        ),
        'U' | 'W' | 'V' | 'G' | 'g' => {
            return Err(jiff::Error::from_args(format_args!(
                "`{directive}` is not supported for Jalali dates"
            )));
        }
        _ => return Ok(None),
    };

    Ok(Some(resolved))
}

/// Overwrite the date fields of `tm` with `date`.
///
/// `jiff` does not check these against each other (1404/2/31 is fine) or against the timestamp.
fn set_jalali_fields(tm: &mut BrokenDownTime, date: &JalaliDate) -> Result<(), jiff::Error> {
    let year = i16::try_from(date.year()).map_err(|_| {
        jiff::Error::from_args(format_args!("Jalali year {} is out of range", date.year()))
    })?;
    tm.set_year(Some(year))?;
    tm.set_month(Some(date.month() as i8))?;
    tm.set_day(Some(date.day() as i8))?;
    tm.set_day_of_year(Some(date.ordinal() as i16))
}

/// [`strftime_to`] a newly created string.
pub fn strftime(format: &str, now: &Zoned) -> Result<String, jiff::Error> {
    let mut buf = String::new();
    strftime_to(format, now, &mut buf)?;
    Ok(buf)
}

/// Format `now` in the Jalali calendar into the given writer.
pub fn strftime_to<W: jiff::fmt::Write>(
    format: &str,
    now: &Zoned,
    mut wtr: W,
) -> Result<(), jiff::Error> {
    let jdate = JalaliDate::from(now.date());
    let weekday = PERSIAN_WEEKDAYS[now.weekday().to_sunday_zero_offset() as usize];

    let format = Formatter::new(format)
        .try_reconstruct_with(|d| resolve_jalali_directive(&jdate, weekday, d))?;
    tracing::debug!(%jdate, %format, "resolved jalali directives");

    let mut tm = BrokenDownTime::from(now);
    set_jalali_fields(&mut tm, &jdate)?;
    tm.format(format, &mut wtr)
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone};

    use super::*;

    fn tm() -> Zoned {
        // 1404/2/31, invalid in Gregorian
        date(2025, 5, 21)
            .at(0, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    #[test]
    fn test_formatter_identification() {
        assert_eq!(Formatter::new("Hello There").directives, vec![]);
        assert_eq!(Formatter::new("Hello%sThere").directives, vec![(5, "%s")]);
        assert_eq!(Formatter::new("Hello%^sThere").directives, vec![(5, "%^s")]);
        assert_eq!(Formatter::new("%0_V").directives, vec![(0, "%0_V")]);
        assert_eq!(Formatter::new("%%0_V").directives, vec![]);
        assert_eq!(Formatter::new("%__%0_V").directives, vec![(3, "%0_V")]);
        assert_eq!(Formatter::new("%__0_").directives, vec![]);
        assert_eq!(Formatter::new("%").directives, vec![]);
        assert_eq!(Formatter::new("%Ey").directives, vec![(0, "%Ey")]);
        assert_eq!(
            Formatter::new("%%%Y/%m/%d-\u{6cc}-%:z%%").directives,
            vec![(2, "%Y"), (5, "%m"), (8, "%d"), (14, "%:z")]
        );
    }

    #[test]
    fn test_reconstruct_keeps_literals() {
        let f = Formatter::new("a %Y b %H c");
        let out: Result<String, ()> =
            f.try_reconstruct_with(|d| Ok((d == "%Y").then(|| "1404".to_owned())));
        assert_eq!(Ok("a 1404 b %H c".to_owned()), out);

        let failed: Result<String, &str> = f.try_reconstruct_with(|_| Err("no"));
        assert_eq!(Err("no"), failed);
    }

    #[test]
    fn test_strftime_date_directives() {
        let tm = tm();
        assert_eq!("::.1404/02/31.::", strftime("::.%Y/%m/%d.::", &tm).unwrap());
        assert_eq!("%", strftime("%%", &tm).unwrap());
        assert_eq!("چهارشنبه", strftime("%A", &tm).unwrap());
        assert_eq!("چهارشنبه", strftime("%a", &tm).unwrap());
        assert_eq!("اردیبهشت", strftime("%B", &tm).unwrap());
        assert_eq!("اردیبهشت", strftime("%b", &tm).unwrap());
        assert_eq!("اردیبهشت", strftime("%h", &tm).unwrap());
        assert_eq!("14", strftime("%C", &tm).unwrap());
        assert_eq!("04", strftime("%y", &tm).unwrap());
        assert_eq!("062", strftime("%j", &tm).unwrap());
        assert_eq!("31", strftime("%e", &tm).unwrap());
        assert_eq!("02", strftime("%m", &tm).unwrap());
        assert_eq!("1404-02-31", strftime("%F", &tm).unwrap());
        assert_eq!("02/31/04", strftime("%D", &tm).unwrap());
        assert_eq!("1404/02/31", strftime("%x", &tm).unwrap());
        assert_eq!(
            "چهارشنبه، 31 اردیبهشت 1404 00:00:00",
            strftime("%c", &tm).unwrap()
        );
    }

    #[test]
    fn test_strftime_padding_flags() {
        let tm = date(2024, 3, 20)
            .at(9, 5, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap();
        assert_eq!("1/1", strftime("%-m/%-d", &tm).unwrap());
        assert_eq!(" 1/ 1", strftime("%_m/%_d", &tm).unwrap());
        assert_eq!(" 1", strftime("%e", &tm).unwrap());
        assert_eq!("01", strftime("%0e", &tm).unwrap());
        assert_eq!("1", strftime("%-j", &tm).unwrap());
    }

    #[test]
    fn test_strftime_widths_follow_jiff() {
        let tm = date(2025, 5, 21)
            .at(9, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap();
        assert_eq!("0000001404", strftime("%10Y", &tm).unwrap());
        assert_eq!("0000000009", strftime("%10H", &tm).unwrap());
        assert_eq!("00031", strftime("%5d", &tm).unwrap());
        assert_eq!("00000", strftime("%5M", &tm).unwrap());
        assert_eq!(" 62", strftime("%_3j", &tm).unwrap());
        assert_eq!("  62", strftime("%_4j", &tm).unwrap());
        assert_eq!("1404-02-31", strftime("%F", &tm).unwrap());
    }

    #[test]
    fn test_strftime_delegates_time() {
        let tm = tm();
        assert_eq!("00:00:00", strftime("%H:%M:%S", &tm).unwrap());
        assert_eq!("00:00:00", strftime("%T", &tm).unwrap());
        assert_eq!("UTC", strftime("%Z", &tm).unwrap());
        assert_eq!("+0000", strftime("%z", &tm).unwrap());
        assert_eq!("1747785600", strftime("%s", &tm).unwrap());
        assert_eq!("\n", strftime("%n", &tm).unwrap());
    }

    #[test]
    fn test_strftime_rejects_weeks() {
        let tm = tm();
        for d in ["%U", "%W", "%V", "%G", "%g"] {
            assert!(strftime(d, &tm).is_err(), "{d}");
        }
    }
}
