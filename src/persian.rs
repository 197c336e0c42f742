//! Holds today's date and time as Persian speakers write them.

use std::fmt::Display;

use jiff::{Zoned, civil::Weekday};

use crate::{Clock, JalaliDate, PERSIAN_COMMA, PERSIAN_WEEKDAYS, SystemClock};

/// `0` in Extended Arabic-Indic digits, the rest follow in order.
const PERSIAN_ZERO: u32 = 0x06f0;

/// The digits used when printing numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Numerals {
    /// `0123456789`
    #[default]
    Latin,
    /// `۰۱۲۳۴۵۶۷۸۹`
    Persian,
}

impl Numerals {
    /// Replace ASCII digits in `s` with these numerals.
    pub fn apply(&self, s: &str) -> String {
        match self {
            Numerals::Latin => s.to_owned(),
            Numerals::Persian => s
                .chars()
                .map(|c| match c.to_digit(10) {
                    // `to_digit` only knows ASCII digits in radix 10
                    Some(d) => char::from_u32(PERSIAN_ZERO + d).unwrap_or(c),
                    None => c,
                })
                .collect(),
        }
    }
}

/// Replace ASCII digits with Persian ones.
pub fn to_persian_digits(s: &str) -> String {
    Numerals::Persian.apply(s)
}

/// A Jalali date with its names and display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub month_name: &'static str,
    pub day_of_week: &'static str,
    /// `"<day_of_week>، <day> <month_name> <year>"`
    pub formatted: String,
}

impl PersianDate {
    pub fn new(date: JalaliDate, weekday: Weekday) -> Self {
        let month_name = date.month_name();
        let day_of_week = PERSIAN_WEEKDAYS[weekday.to_sunday_zero_offset() as usize];
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            month_name,
            day_of_week,
            formatted: format!(
                "{day_of_week}{PERSIAN_COMMA} {} {month_name} {}",
                date.day(),
                date.year()
            ),
        }
    }

    /// Build from the civil date and weekday of `tm`.
    pub fn from_zoned(tm: &Zoned) -> Self {
        Self::new(JalaliDate::from(tm.date()), tm.weekday())
    }
}

impl Display for PersianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Today's date according to `clock`.
pub fn persian_date(clock: &impl Clock) -> PersianDate {
    let now = clock.now();
    tracing::debug!(%now, "reading persian date");
    PersianDate::from_zoned(&now)
}

/// Today's date in the system time zone.
pub fn current_persian_date() -> PersianDate {
    persian_date(&SystemClock::local())
}

/// The time of `clock` as `HH:MM:SS` (24-hour) in Persian digits.
pub fn time_string(clock: &impl Clock) -> String {
    to_persian_digits(&clock.now().strftime("%H:%M:%S").to_string())
}

/// The current time in the system time zone as `HH:MM:SS` (24-hour) in Persian digits.
pub fn current_time_string() -> String {
    time_string(&SystemClock::local())
}
