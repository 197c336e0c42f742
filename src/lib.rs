//! Gregorian to Persian (Jalali) date conversion with Persian names.
//!
//! The heart of this crate is [`convert`]. Around it are the name tables, a [`Clock`] seam for
//! reading "now", and helpers to print today's date and time the way Persian speakers expect:
//!
//! ```no_run
//! let today = pcal::current_persian_date();
//! println!("{today}"); // e.g. "شنبه، 25 مهر 1405"
//! println!("{}", pcal::current_time_string()); // e.g. "۱۴:۰۵:۰۹"
//! ```
pub mod clap_helper;
pub mod clock;
pub mod convert;
pub mod error;
pub mod parser;
pub mod persian;
pub mod strftime;

pub use clock::{Clock, SystemClock};
pub use convert::{Epoch, GregorianDate, JalaliDate, convert};
pub use error::Error;
pub use persian::{
    Numerals, PersianDate, current_persian_date, current_time_string, persian_date, time_string,
    to_persian_digits,
};

/// Sunday based weekdays in Persian.
pub const PERSIAN_WEEKDAYS: [&str; 7] = [
    "یکشنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنج\u{200c}شنبه",
    "جمعه",
    "شنبه",
];

/// Jalali months in Persian.
// these are official, do NOT change!
pub const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// The Persian comma (U+060C) used between the weekday and the rest of a date.
pub const PERSIAN_COMMA: char = '\u{060c}';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables() {
        assert_eq!("فروردین", PERSIAN_MONTHS[0]);
        assert_eq!("اسفند", PERSIAN_MONTHS[11]);
        assert_eq!("یکشنبه", PERSIAN_WEEKDAYS[0]);
        assert_eq!("شنبه", PERSIAN_WEEKDAYS[6]);
        // zero-width non-joiner, not a space
        assert!(PERSIAN_WEEKDAYS[2].contains('\u{200c}'));
        assert!(!PERSIAN_WEEKDAYS.iter().any(|i| i.contains(' ')));
    }

    #[test]
    fn test_comma() {
        assert_eq!("،", PERSIAN_COMMA.to_string());
    }
}
