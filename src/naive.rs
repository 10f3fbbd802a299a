//! [`Calendar`] for `chrono::NaiveDateTime`, behind the `chrono` feature.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::{
    DAYS_IN_MONTH, FEBRUARY, MAX_MONTH,
    calendar::{Calendar, ShiftBounds},
    error::{AdjustError, CalendarField, FieldError},
    token::TimeUnit,
};

impl Calendar for NaiveDateTime {
    fn get(&self, unit: TimeUnit) -> u32 {
        match unit {
            TimeUnit::Month => self.month(),
            TimeUnit::Day => self.day(),
        }
    }

    fn maximum(&self, unit: TimeUnit) -> u32 {
        match unit {
            TimeUnit::Month => u32::from(MAX_MONTH),
            TimeUnit::Day => last_day_of_month(self.date()),
        }
    }

    fn set(&mut self, unit: TimeUnit, value: u32) -> Result<(), AdjustError> {
        let updated = match unit {
            TimeUnit::Month => {
                // Same day, clamped to the new month
                let first = self.with_day(1).and_then(|dt| dt.with_month(value));
                first.and_then(|dt| dt.with_day(self.day().min(last_day_of_month(dt.date()))))
            },
            TimeUnit::Day => self.with_day(value),
        };
        *self = updated.ok_or_else(|| {
            let (field, max) = match unit {
                TimeUnit::Month => (CalendarField::Month, u32::from(MAX_MONTH)),
                TimeUnit::Day => (CalendarField::Day, last_day_of_month(self.date())),
            };
            FieldError::new(field, value, 1, max)
        })?;
        Ok(())
    }

    fn add_months(&mut self, amount: i64) -> Result<(), AdjustError> {
        let bounds = ShiftBounds::months(i64::from(self.year()), self.month());
        bounds.check(amount)?;
        let months = Months::new(u32::try_from(amount.unsigned_abs()).map_err(|_| bounds.rejected(amount))?);
        let shifted = if amount < 0 {
            self.checked_sub_months(months)
        } else {
            self.checked_add_months(months)
        };
        *self = shifted.ok_or_else(|| bounds.rejected(amount))?;
        Ok(())
    }

    fn add_days(&mut self, amount: i64) -> Result<(), AdjustError> {
        let bounds = ShiftBounds::days(i64::from(self.year()), self.month(), self.day());
        bounds.check(amount)?;
        let shifted = TimeDelta::try_days(amount).and_then(|delta| self.checked_add_signed(delta));
        *self = shifted.ok_or_else(|| bounds.rejected(amount))?;
        Ok(())
    }

    fn zero_time(&mut self) {
        *self = self.date().and_time(NaiveTime::MIN);
    }
}

/// Day before the first of next month
fn last_day_of_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map_or(u32::from(DAYS_IN_MONTH[usize::from(FEBRUARY)]), |last| last.day())
}
