//! The adjuster set: one operation per token shape.

use crate::{
    calendar::Calendar,
    error::AdjustError,
    token::{SetValue, TimeUnit, Token},
};

impl Token {
    /// Applies this token to a working value, handing it back adjusted.
    ///
    /// # Errors
    /// Returns `AdjustError::InvalidFieldValue` if the calendar rejects the result.
    pub fn apply<C: Calendar>(&self, ts: C) -> Result<C, AdjustError> {
        match *self {
            Self::ZeroTime => Ok(zero_time(ts)),
            Self::RelativeShift { unit, amount } => shift(ts, unit, amount),
            Self::CardinalSet { unit, value } => set_value(ts, unit, value),
        }
    }
}

/// Midnight of the same day
fn zero_time<C: Calendar>(mut ts: C) -> C {
    ts.zero_time();
    ts
}

/// Moves back or forth; month-end clamping is up to the calendar
fn shift<C: Calendar>(mut ts: C, unit: TimeUnit, amount: i64) -> Result<C, AdjustError> {
    match unit {
        TimeUnit::Month => ts.add_months(amount)?,
        TimeUnit::Day => ts.add_days(amount)?,
    }
    Ok(ts)
}

/// Sets a field to a cardinal, or to its last value given the next larger unit.
/// Cardinals are not range checked here, the calendar does that.
fn set_value<C: Calendar>(mut ts: C, unit: TimeUnit, value: SetValue) -> Result<C, AdjustError> {
    let target = match value {
        SetValue::Last => ts.maximum(unit),
        SetValue::Cardinal(cardinal) => cardinal,
    };
    ts.set(unit, target)?;
    Ok(ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{CalendarField, FieldError},
        timestamp::Timestamp,
    };
    use pretty_assertions::assert_eq;

    fn origin() -> Timestamp {
        Timestamp::new(2011, 3, 31, 15, 45, 54, 0).unwrap()
    }

    #[test]
    fn test_zero_time_keeps_date() {
        let result = Token::ZeroTime.apply(origin()).unwrap();
        assert_eq!(result, Timestamp::from_date(2011, 3, 31).unwrap());
    }

    #[test]
    fn test_shift_months_clamps() {
        let token = Token::RelativeShift {
            unit:   TimeUnit::Month,
            amount: -1,
        };
        assert_eq!(
            token.apply(origin()).unwrap(),
            Timestamp::new(2011, 2, 28, 15, 45, 54, 0).unwrap()
        );
    }

    #[test]
    fn test_shift_days_rolls_over() {
        let token = Token::RelativeShift {
            unit:   TimeUnit::Day,
            amount: 1,
        };
        assert_eq!(
            token.apply(origin()).unwrap(),
            Timestamp::new(2011, 4, 1, 15, 45, 54, 0).unwrap()
        );
    }

    #[test]
    fn test_set_last_follows_current_month() {
        let last_day = Token::CardinalSet {
            unit:  TimeUnit::Day,
            value: SetValue::Last,
        };
        let april = Timestamp::new(2011, 4, 3, 15, 45, 54, 0).unwrap();
        assert_eq!(last_day.apply(april).unwrap().day(), 30);

        let leap_feb = Timestamp::from_date(2012, 2, 1).unwrap();
        assert_eq!(last_day.apply(leap_feb).unwrap().day(), 29);

        let last_month = Token::CardinalSet {
            unit:  TimeUnit::Month,
            value: SetValue::Last,
        };
        assert_eq!(last_month.apply(origin()).unwrap().month(), 12);
    }

    #[test]
    fn test_set_cardinal() {
        let token = Token::CardinalSet {
            unit:  TimeUnit::Day,
            value: SetValue::Cardinal(15),
        };
        assert_eq!(
            token.apply(origin()).unwrap(),
            Timestamp::new(2011, 3, 15, 15, 45, 54, 0).unwrap()
        );
    }

    #[test]
    fn test_set_cardinal_out_of_range() {
        let token = Token::CardinalSet {
            unit:  TimeUnit::Month,
            value: SetValue::Cardinal(0),
        };
        assert_eq!(
            token.apply(origin()),
            Err(AdjustError::InvalidFieldValue(FieldError::new(
                CalendarField::Month,
                0,
                1,
                12
            )))
        );

        let token = Token::CardinalSet {
            unit:  TimeUnit::Day,
            value: SetValue::Cardinal(31),
        };
        let april = Timestamp::from_date(2011, 4, 1).unwrap();
        assert!(matches!(
            token.apply(april),
            Err(AdjustError::InvalidFieldValue(FieldError {
                field: CalendarField::Day,
                value: 31,
                max: 30,
                ..
            }))
        ));
    }
}
