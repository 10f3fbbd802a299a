use std::{fmt, str::FromStr};

use crate::{
    DATE_SEPARATOR, DATE_TIME_SEPARATOR, FRACTION_SEPARATOR, TIME_SEPARATOR,
    error::{FieldError, ParseError},
    types::{Day, Month, TimeOfDay, Year},
};

/// Digits of millisecond precision in the fraction of a second
const FRACTION_DIGITS: usize = 3;

/// A zone-less calendar timestamp with millisecond precision.
///
/// This is the default working value of spec evaluation; see [`crate::Calendar`].
/// Ordering is chronological since fields compare from the most significant down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub(crate) year:  Year,
    pub(crate) month: Month,
    pub(crate) day:   Day,
    pub(crate) time:  TimeOfDay,
}

impl Timestamp {
    /// Creates a timestamp from raw components.
    ///
    /// # Errors
    /// Returns a `FieldError` naming the first component out of range.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Self, FieldError> {
        let time = TimeOfDay::new(hour, minute, second, millisecond)?;
        Ok(Self::from_date(year, month, day)?.with_time(time))
    }

    /// Creates a timestamp at midnight of the given date.
    ///
    /// # Errors
    /// Returns a `FieldError` if the date is not a valid calendar date.
    pub fn from_date(year: u16, month: u8, day: u8) -> Result<Self, FieldError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
            time:  TimeOfDay::MIDNIGHT,
        })
    }

    /// Creates a timestamp from already validated parts.
    pub const fn from_parts(year: Year, month: Month, day: Day, time: TimeOfDay) -> Self {
        Self {
            year,
            month,
            day,
            time,
        }
    }

    /// Returns a copy with the time of day replaced
    pub const fn with_time(self, time: TimeOfDay) -> Self {
        Self { time, ..self }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Converts to (year, month, day)
    pub const fn date(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}{DATE_TIME_SEPARATOR}{}",
            self.year.get(),
            self.month.get(),
            self.day.get(),
            self.time
        )
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (date_str, time_str) = match trimmed.split_once([DATE_TIME_SEPARATOR, ' ']) {
            Some((date, time)) => (date, Some(time.trim())),
            None => (trimmed, None),
        };

        let (year, month, day) = parse_date(date_str)?;
        let time = match time_str {
            Some(time) => parse_time(time)?,
            None => TimeOfDay::MIDNIGHT,
        };

        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
            time,
        })
    }
}

/// Helper to parse an all-digit component with better error messages
fn parse_number<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_date(s: &str) -> Result<(u16, u8, u8), ParseError> {
    let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
    match parts.as_slice() {
        [year, month, day] => Ok((parse_number(year)?, parse_number(month)?, parse_number(day)?)),
        _ => Err(ParseError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {s}"
        ))),
    }
}

fn parse_time(s: &str) -> Result<TimeOfDay, ParseError> {
    let parts: Vec<&str> = s.split(TIME_SEPARATOR).collect();
    let (hour, minute, seconds) = match parts.as_slice() {
        [hour, minute] => (*hour, *minute, None),
        [hour, minute, seconds] => (*hour, *minute, Some(*seconds)),
        _ => {
            return Err(ParseError::InvalidFormat(format!(
                "Expected HH{TIME_SEPARATOR}MM[{TIME_SEPARATOR}SS[{FRACTION_SEPARATOR}fff]], found {s}"
            )));
        },
    };

    let (second, millisecond) = match seconds {
        None => (0, 0),
        Some(seconds) => match seconds.split_once(FRACTION_SEPARATOR) {
            None => (parse_number(seconds)?, 0),
            Some((whole, fraction)) => (parse_number(whole)?, parse_fraction(fraction)?),
        },
    };

    Ok(TimeOfDay::new(
        parse_number(hour)?,
        parse_number(minute)?,
        second,
        millisecond,
    )?)
}

/// Parses 1-3 fraction digits into milliseconds: ".5" is 500ms.
fn parse_fraction(s: &str) -> Result<u16, ParseError> {
    if s.len() > FRACTION_DIGITS {
        return Err(ParseError::InvalidFormat(format!(
            "At most {FRACTION_DIGITS} fraction digits supported, found {s}"
        )));
    }
    let value: u16 = parse_number(s)?;
    let scale = FRACTION_DIGITS - s.len();
    Ok(value * 10u16.pow(u32::try_from(scale).unwrap_or(0)))
}

impl serde::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
