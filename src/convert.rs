//! Holds the Gregorian to Jalali conversion.
//!
//! The conversion counts the days elapsed since a normalization [`Epoch`] and splits that count
//! with the arithmetic leap rule of the Jalali calendar: 33-year cycles of 12053 days, 4-year blocks
//! of 1461 days whose first year is leap and finally plain years of 365 days. The remainder is the
//! day of the Jalali year which maps to a month and a day without any table since the first 6 months
//! have 31 days and the rest have 30 (Esfand may be cut short at 29).

use std::fmt::Display;

use jiff::civil;

use crate::{Error, PERSIAN_MONTHS};

/// Days before the first of each Gregorian month in a non-leap year.
const CUMULATIVE_DAYS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const CYCLE_DAYS: i64 = 12053;
const CYCLE_YEARS: i64 = 33;
const BLOCK_DAYS: i64 = 1461;
const BLOCK_YEARS: i64 = 4;
const YEAR_DAYS: i64 = 365;

/// Days in the first half of a Jalali year (6 months of 31 days).
const FIRST_HALF_DAYS: i64 = 186;
const FIRST_HALF_MONTH_DAYS: i64 = 31;
const SECOND_HALF_MONTH_DAYS: i64 = 30;

/// A Gregorian date as given by the caller.
///
/// Only the ranges of month and day are checked on conversion. A day that does not exist in the
/// given month (like February 30th) is converted as if it rolled over into the next month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    pub year: i32,
    /// 1..=12
    pub month: u8,
    /// 1..=31
    pub day: u8,
}

impl GregorianDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Convert this date to the Jalali calendar.
    pub fn to_jalali(&self) -> Result<JalaliDate, Error> {
        if !(1..=12).contains(&self.month) {
            return Err(Error::InvalidMonth(self.month));
        }
        if !(1..=31).contains(&self.day) {
            return Err(Error::InvalidDay(self.day));
        }

        let (year, month, day) = gregorian_to_jalali(self.year, self.month, self.day);
        let year = i32::try_from(year).map_err(|_| Error::YearOutOfRange(self.year))?;

        tracing::trace!(gregorian = %self, year, month, day, "converted to jalali");
        Ok(JalaliDate { year, month, day })
    }
}

impl From<civil::Date> for GregorianDate {
    fn from(value: civil::Date) -> Self {
        Self::new(value.year().into(), value.month() as u8, value.day() as u8)
    }
}

impl Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A date in the Jalali (Persian/Solar Hijri) calendar.
///
/// Values only come out of a conversion so the month is always 1..=12 and the day is valid for
/// that month. Ordering is by year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year: i32,
    month: u8,
    day: u8,
}

impl JalaliDate {
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year (1..=12).
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month (1..=31).
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Day of the year (1..=366).
    pub const fn ordinal(&self) -> u16 {
        let month = self.month as u16;
        let day = self.day as u16;
        if month <= 6 {
            (month - 1) * FIRST_HALF_MONTH_DAYS as u16 + day
        } else {
            FIRST_HALF_DAYS as u16 + (month - 7) * SECOND_HALF_MONTH_DAYS as u16 + day
        }
    }

    /// Persian name of this month.
    pub const fn month_name(&self) -> &'static str {
        PERSIAN_MONTHS[self.month as usize - 1]
    }
}

impl From<civil::Date> for JalaliDate {
    /// `jiff` keeps years in -9999..=9999 so this never leaves the range of [`JalaliDate`].
    fn from(value: civil::Date) -> Self {
        let (year, month, day) =
            gregorian_to_jalali(value.year().into(), value.month() as u8, value.day() as u8);
        Self {
            year: year as i32,
            month,
            day,
        }
    }
}

impl TryFrom<GregorianDate> for JalaliDate {
    type Error = Error;

    fn try_from(value: GregorianDate) -> Result<Self, Self::Error> {
        value.to_jalali()
    }
}

impl From<JalaliDate> for (i32, u8, u8) {
    fn from(value: JalaliDate) -> Self {
        (value.year, value.month, value.day)
    }
}

impl Display for JalaliDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

/// Convert a Gregorian date to a Jalali one.
///
/// ```
/// let nowruz: (i32, u8, u8) = pcal::convert(2024, 3, 20).unwrap().into();
/// assert_eq!((1403, 1, 1), nowruz);
/// ```
pub fn convert(year: i32, month: u8, day: u8) -> Result<JalaliDate, Error> {
    GregorianDate::new(year, month, day).to_jalali()
}

/// A reference point that keeps the day count of a conversion small.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Epoch {
    /// Subtracted from the Gregorian year before counting.
    pub gregorian_year: i32,
    /// The Jalali year that day 0 of the count falls in.
    pub jalali_year: i64,
    /// Added to the day count after the Gregorian part is summed.
    pub day_offset: i64,
}

impl Epoch {
    /// Last Gregorian year that counts from [`Self::EARLY`].
    pub const THRESHOLD: i32 = 1600;

    /// Exactly 78 cycles (940134 days) before [`Self::LATE`] with the Gregorian centuries counted
    /// from year 0 so both epochs give the same date for any input.
    pub const EARLY: Self = Self {
        gregorian_year: 0,
        jalali_year: -1595,
        day_offset: 355_666,
    };

    /// Day 0 is 1600-03-20, the first of Farvardin 979.
    pub const LATE: Self = Self {
        gregorian_year: 1600,
        jalali_year: 979,
        day_offset: -80,
    };

    /// Pick the epoch for a Gregorian year.
    pub const fn for_year(year: i32) -> Self {
        if year <= Self::THRESHOLD {
            Self::EARLY
        } else {
            Self::LATE
        }
    }

    /// Days elapsed since this epoch (may be negative for years far before it).
    ///
    /// Month must be 1..=12.
    fn days_since(&self, year: i32, month: u8, day: u8) -> i64 {
        let shifted = year as i64 - self.gregorian_year as i64;
        // has the leap day of this year passed yet
        let leap_year = if month > 2 { shifted + 1 } else { shifted };

        let day_of_year = CUMULATIVE_DAYS[month as usize - 1] + day as i64;

        YEAR_DAYS * shifted + gregorian_leap_days(leap_year) + self.day_offset + day_of_year
    }
}

/// Leap days in the Gregorian years before `year` (counted from year 0 of the shifted scale).
fn gregorian_leap_days(year: i64) -> i64 {
    (year + 3).div_euclid(4) - (year + 99).div_euclid(100) + (year + 399).div_euclid(400)
}

/// The conversion itself on raw parts. Month must be 1..=12.
fn gregorian_to_jalali(year: i32, month: u8, day: u8) -> (i64, u8, u8) {
    let epoch = Epoch::for_year(year);
    let mut days = epoch.days_since(year, month, day);
    let mut jy = epoch.jalali_year;

    jy += CYCLE_YEARS * days.div_euclid(CYCLE_DAYS);
    days = days.rem_euclid(CYCLE_DAYS);

    jy += BLOCK_YEARS * (days / BLOCK_DAYS);
    days %= BLOCK_DAYS;

    // the first year of a block has the extra day
    if days > YEAR_DAYS {
        jy += (days - 1) / YEAR_DAYS;
        days = (days - 1) % YEAR_DAYS;
    }

    let (jm, jd) = if days < FIRST_HALF_DAYS {
        (
            1 + days / FIRST_HALF_MONTH_DAYS,
            1 + days % FIRST_HALF_MONTH_DAYS,
        )
    } else {
        let days = days - FIRST_HALF_DAYS;
        (
            7 + days / SECOND_HALF_MONTH_DAYS,
            1 + days % SECOND_HALF_MONTH_DAYS,
        )
    };

    // days is in 0..=365 here so both fit
    (jy, jm as u8, jd as u8)
}
