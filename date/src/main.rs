//! Holds a `date`-like program that prints today in the Persian (Jalali) calendar.
//!
//! By default it prints the date the way it is written in Persian: "<weekday>، <day> <month>
//! <year>". A `+FORMAT` switches to `strftime` with Jalali date fields and Persian names.
//!
//! Differences with `date`:
//! - only Jalali output
//! - no support for `set`, `--reference`, `--file` or the RFC/ISO shortcuts
//! - parsing of `--date` is done with mostly `parse_datetime` crate so its limitations apply

use jiff::Zoned;
use pcal::{
    Clock, SystemClock, clap_helper::Parse, persian_date, strftime::strftime, time_string,
};
use tracing_subscriber::EnvFilter;

mod arg_parser;

use arg_parser::{Args, When};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Args::parse();
    init_tracing(config.debug);

    let now = match config.when {
        When::Now => SystemClock::new(config.timezone.clone()).now(),
        When::Given(v) => v,
    };
    tracing::debug!(format = ?config.format, basis = %now, "configured");

    println!("{}", config.digits.apply(&date_line(config.format.as_deref(), &now)?));

    if config.time {
        println!("{}", time_string(&now));
    }

    Ok(())
}

/// The date of `now` in the given format or the default Persian line.
fn date_line(format: Option<&str>, now: &Zoned) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        Some(format) => strftime(format, now)?,
        None => persian_date(now).formatted,
    })
}

/// Log to STDERR, everything with `--debug`, otherwise as `RUST_LOG` says or only warnings.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone};

    use super::*;

    #[test]
    fn test_date_line() {
        let tm = date(2024, 3, 20)
            .at(8, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap();
        assert_eq!("چهارشنبه، 1 فروردین 1403", date_line(None, &tm).unwrap());
        assert_eq!("1403/01/01", date_line(Some("%Y/%m/%d"), &tm).unwrap());
        assert!(date_line(Some("%V"), &tm).is_err());
    }
}
