//! The calendar engine seen by adjusters.
//!
//! Adjusters never do calendar math themselves; they go through [`Calendar`], which
//! owns field ranges, month-length clamping and day roll-over.

use std::fmt;

use crate::{
    JANUARY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
    consts::MONTHS_PER_YEAR,
    error::{AdjustError, CalendarField, FieldError},
    timestamp::Timestamp,
    token::TimeUnit,
    types::{Day, Month, TimeOfDay, Year, days_in_month},
};

/// Days in a 400 year Gregorian cycle
const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
const EPOCH_SHIFT: i64 = 719_468;

/// A mutable calendar value that spec tokens are applied to.
///
/// `Display` is used to log intermediate results.
pub trait Calendar: Sized + fmt::Display {
    /// Current value of the field named by `unit`
    fn get(&self, unit: TimeUnit) -> u32;

    /// Largest valid value of the field named by `unit` given the other fields,
    /// e.g. the length of the current month for `TimeUnit::Day`.
    fn maximum(&self, unit: TimeUnit) -> u32;

    /// Sets the field named by `unit`.
    ///
    /// # Errors
    /// Returns `AdjustError::InvalidFieldValue` if `value` is out of the field's current range.
    fn set(&mut self, unit: TimeUnit, value: u32) -> Result<(), AdjustError>;

    /// Moves by whole months, clamping the day to the length of the target month.
    ///
    /// # Errors
    /// Returns `AdjustError::InvalidFieldValue` if the result leaves the supported years.
    fn add_months(&mut self, amount: i64) -> Result<(), AdjustError>;

    /// Moves by whole days, rolling over month and year boundaries.
    ///
    /// # Errors
    /// Returns `AdjustError::InvalidFieldValue` if the result leaves the supported years.
    fn add_days(&mut self, amount: i64) -> Result<(), AdjustError>;

    /// Resets the time of day to midnight, leaving the date alone.
    fn zero_time(&mut self);
}

impl Calendar for Timestamp {
    fn get(&self, unit: TimeUnit) -> u32 {
        match unit {
            TimeUnit::Month => u32::from(self.month.get()),
            TimeUnit::Day => u32::from(self.day.get()),
        }
    }

    fn maximum(&self, unit: TimeUnit) -> u32 {
        match unit {
            TimeUnit::Month => u32::from(MAX_MONTH),
            TimeUnit::Day => u32::from(Day::last_of(self.year.get(), self.month).get()),
        }
    }

    fn set(&mut self, unit: TimeUnit, value: u32) -> Result<(), AdjustError> {
        let year = self.year.get();
        match unit {
            TimeUnit::Month => {
                let month = Month::checked(value)?;
                self.month = month;
                self.day = clamp_day(self.day, year, month);
            },
            TimeUnit::Day => {
                self.day = Day::checked(value, year, self.month.get())?;
            },
        }
        Ok(())
    }

    fn add_months(&mut self, amount: i64) -> Result<(), AdjustError> {
        let (year, month) = (i64::from(self.year.get()), u32::from(self.month.get()));
        ShiftBounds::months(year, month).check(amount)?;

        let total = month_index(year, month) + amount;
        let year = Year::checked(total.div_euclid(MONTHS_PER_YEAR))?;
        let month = Month::checked(u32::try_from(total.rem_euclid(MONTHS_PER_YEAR) + 1).unwrap_or(0))?;

        self.year = year;
        self.month = month;
        self.day = clamp_day(self.day, year.get(), month);
        Ok(())
    }

    fn add_days(&mut self, amount: i64) -> Result<(), AdjustError> {
        let (year, month, day) = (
            i64::from(self.year.get()),
            u32::from(self.month.get()),
            u32::from(self.day.get()),
        );
        ShiftBounds::days(year, month, day).check(amount)?;

        let (year, month, day) = civil_from_days(days_from_civil(year, month, day) + amount);
        let year = Year::checked(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year.get(), month.get())?;

        self.year = year;
        self.month = month;
        self.day = day;
        Ok(())
    }

    fn zero_time(&mut self) {
        self.time = TimeOfDay::MIDNIGHT;
    }
}

/// Shift amounts that keep a value within `MIN_YEAR..=MAX_YEAR`.
///
/// Out-of-range shifts are reported on the shifted unit, with the allowed amounts as bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShiftBounds {
    field: CalendarField,
    min:   i64,
    max:   i64,
}

impl ShiftBounds {
    pub(crate) fn months(year: i64, month: u32) -> Self {
        let current = month_index(year, month);
        Self {
            field: CalendarField::Month,
            min:   month_index(i64::from(MIN_YEAR), u32::from(JANUARY)) - current,
            max:   month_index(i64::from(MAX_YEAR), u32::from(MAX_MONTH)) - current,
        }
    }

    pub(crate) fn days(year: i64, month: u32, day: u32) -> Self {
        let current = days_from_civil(year, month, day);
        let last_day = u32::from(days_in_month(MAX_YEAR, MAX_MONTH));
        Self {
            field: CalendarField::Day,
            min:   days_from_civil(i64::from(MIN_YEAR), u32::from(JANUARY), u32::from(MIN_DAY)) - current,
            max:   days_from_civil(i64::from(MAX_YEAR), u32::from(MAX_MONTH), last_day) - current,
        }
    }

    pub(crate) fn check(self, amount: i64) -> Result<(), FieldError> {
        if (self.min..=self.max).contains(&amount) {
            Ok(())
        } else {
            Err(self.rejected(amount))
        }
    }

    pub(crate) fn rejected(self, amount: i64) -> FieldError {
        FieldError::new(self.field, amount, self.min, self.max)
    }
}

/// Months since January of year 0
fn month_index(year: i64, month: u32) -> i64 {
    year * MONTHS_PER_YEAR + i64::from(month) - 1
}

/// Keeps the day of month, or the last day if the month is shorter
fn clamp_day(day: Day, year: u16, month: Month) -> Day {
    day.min(Day::last_of(year, month))
}

/// Days since 1970-01-01 of a proleptic Gregorian date
pub(crate) fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let day = i64::from(day);
    let year = year - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let yoe = year - era * 400;
    let doy = (153 * (month + if month > 2 { -3 } else { 9 }) + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`]; the year is unbounded, month and day are always valid.
pub(crate) fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    // Ranges: day 1..=31, month 1..=12
    (
        year,
        u8::try_from(month).unwrap_or(JANUARY),
        u8::try_from(day).unwrap_or(MIN_DAY),
    )
}
