use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_HOUR, MAX_MILLISECOND, MAX_MINUTE, MAX_MONTH, MAX_SECOND, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::error::{CalendarField, FieldError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns a `FieldError` on `CalendarField::Year` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, FieldError> {
        let err = || FieldError::new(CalendarField::Year, value, MIN_YEAR, MAX_YEAR);
        let non_zero = NonZeroU16::new(value).ok_or_else(err)?;
        if value > MAX_YEAR {
            return Err(err());
        }
        Ok(Self(non_zero))
    }

    /// Validates a year produced by calendar arithmetic, which may be far out of range.
    pub(crate) fn checked(value: i64) -> Result<Self, FieldError> {
        u16::try_from(value)
            .map_err(|_| FieldError::new(CalendarField::Year, value, MIN_YEAR, MAX_YEAR))
            .and_then(Self::new)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = FieldError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns a `FieldError` on `CalendarField::Month` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, FieldError> {
        let err = || FieldError::new(CalendarField::Month, value, 1, MAX_MONTH);
        let non_zero = NonZeroU8::new(value).ok_or_else(err)?;
        if value > MAX_MONTH {
            return Err(err());
        }
        Ok(Self(non_zero))
    }

    /// Validates a month given as a wide integer, e.g. a cardinal from a spec.
    pub(crate) fn checked(value: u32) -> Result<Self, FieldError> {
        u8::try_from(value)
            .map_err(|_| FieldError::new(CalendarField::Month, value, 1, MAX_MONTH))
            .and_then(Self::new)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns a `FieldError` on `CalendarField::Day` if the value is 0 or past the end of the month,
    /// or on `CalendarField::Month` if the month itself is invalid.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, FieldError> {
        let max_day = days_in_month(year, Month::new(month)?.get());
        let err = || FieldError::new(CalendarField::Day, value, MIN_DAY, max_day);
        let non_zero = NonZeroU8::new(value).ok_or_else(err)?;
        if value > max_day {
            return Err(err());
        }
        Ok(Self(non_zero))
    }

    /// Validates a day given as a wide integer, e.g. a cardinal from a spec.
    pub(crate) fn checked(value: u32, year: u16, month: u8) -> Result<Self, FieldError> {
        u8::try_from(value)
            .map_err(|_| {
                FieldError::new(CalendarField::Day, value, MIN_DAY, days_in_month(year, month))
            })
            .and_then(|day| Self::new(day, year, month))
    }

    /// The last day of the given month
    pub fn last_of(year: u16, month: Month) -> Self {
        match NonZeroU8::new(days_in_month(year, month.get())) {
            Some(day) => Self(day),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so only check the widest month
        let err = || FieldError::new(CalendarField::Day, value, MIN_DAY, DAYS_IN_MONTH[1]);
        let non_zero = NonZeroU8::new(value).ok_or_else(err)?;
        if value > DAYS_IN_MONTH[1] {
            return Err(err());
        }
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Time of day with millisecond precision, no zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawTimeOfDay", into = "RawTimeOfDay")]
pub struct TimeOfDay {
    hour:        u8,
    minute:      u8,
    second:      u8,
    millisecond: u16,
}

#[derive(Serialize, Deserialize)]
struct RawTimeOfDay {
    hour:        u8,
    minute:      u8,
    second:      u8,
    millisecond: u16,
}

impl TimeOfDay {
    /// 00:00:00.000
    pub const MIDNIGHT: Self = Self {
        hour:        0,
        minute:      0,
        second:      0,
        millisecond: 0,
    };

    /// Creates a new time of day, validating each component
    ///
    /// # Errors
    /// Returns a `FieldError` naming the first component out of range.
    pub fn new(hour: u8, minute: u8, second: u8, millisecond: u16) -> Result<Self, FieldError> {
        if hour > MAX_HOUR {
            return Err(FieldError::new(CalendarField::Hour, hour, 0, MAX_HOUR));
        }
        if minute > MAX_MINUTE {
            return Err(FieldError::new(CalendarField::Minute, minute, 0, MAX_MINUTE));
        }
        if second > MAX_SECOND {
            return Err(FieldError::new(CalendarField::Second, second, 0, MAX_SECOND));
        }
        if millisecond > MAX_MILLISECOND {
            return Err(FieldError::new(
                CalendarField::Millisecond,
                millisecond,
                0,
                MAX_MILLISECOND,
            ));
        }
        Ok(Self {
            hour,
            minute,
            second,
            millisecond,
        })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub const fn second(self) -> u8 {
        self.second
    }

    pub const fn millisecond(self) -> u16 {
        self.millisecond
    }
}

impl TryFrom<RawTimeOfDay> for TimeOfDay {
    type Error = FieldError;

    fn try_from(raw: RawTimeOfDay) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute, raw.second, raw.millisecond)
    }
}

impl From<TimeOfDay> for RawTimeOfDay {
    fn from(time: TimeOfDay) -> Self {
        Self {
            hour:        time.hour,
            minute:      time.minute,
            second:      time.second,
            millisecond: time.millisecond,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of a month in days.
///
/// # Panics
/// If `month` is not in `1..=MAX_MONTH`; public callers go through [`Day::last_of`].
pub(crate) const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
