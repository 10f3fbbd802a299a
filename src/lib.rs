//! Relative timestamp adjustment by compact specs.
//!
//! A spec is a string of steps applied left to right to an origin timestamp:
//!
//! | Step    | Meaning                                                      |
//! |---------|--------------------------------------------------------------|
//! | `Z`     | reset the time of day to midnight                            |
//! | `-12D`  | twelve days back; `+` goes forth; `M` is months, `D` is days |
//! | `=2M`   | second month of the current year                             |
//! | `=LD`   | last day of the current month                                |
//!
//! Each step acts on the result of the previous one, so order matters:
//! `-1M=1DZ` is midnight of the first day of last month.
//!
//! ```rust
//! use relative_dttm::{Timestamp, evaluate};
//! let origin: Timestamp = "2011-03-31T15:45:54".parse().unwrap();
//! let adjusted = evaluate(origin, "-1M=LDZ").unwrap();
//! assert_eq!(adjusted.to_string(), "2011-02-28T00:00:00.000");
//! ```

mod adjust;
mod calendar;
mod consts;
mod error;
#[cfg(feature = "chrono")]
mod naive;
mod prelude;
mod spec;
mod timestamp;
mod token;
mod types;

pub use calendar::Calendar;
pub use consts::*;
pub use error::{AdjustError, CalendarField, FieldError, ParseError};
pub use spec::Spec;
pub use timestamp::Timestamp;
pub use token::{SetValue, Strictness, TimeUnit, Token, tokenize, tokenize_strict};
pub use types::{Day, Month, TimeOfDay, Year, is_leap_year};

/// Adjusts `origin` by `spec`, skipping any text that is not a step.
///
/// An empty spec returns `origin` unchanged.
///
/// # Errors
/// Returns `AdjustError::InvalidFieldValue` if a step sets or moves a field out of range.
pub fn evaluate<C: Calendar>(origin: C, spec: &str) -> Result<C, AdjustError> {
    evaluate_with(origin, spec, Strictness::Lenient)
}

/// Adjusts `origin` by `spec` with the given strictness.
///
/// # Errors
/// As [`evaluate`], plus `AdjustError::MalformedSpec` for unrecognized text in strict mode.
pub fn evaluate_with<C: Calendar>(
    origin: C,
    spec: &str,
    strictness: Strictness,
) -> Result<C, AdjustError> {
    if spec.is_empty() {
        return Ok(origin);
    }
    Spec::parse_with(spec, strictness)?.apply(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn origin() -> Timestamp {
        Timestamp::new(2011, 3, 31, 15, 45, 54, 0).unwrap()
    }

    fn at(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn test_identity() {
        assert_eq!(evaluate(origin(), "").unwrap(), origin());
        assert_eq!(evaluate_with(origin(), "", Strictness::Strict).unwrap(), origin());
    }

    #[test]
    fn test_zero_time() {
        assert_eq!(evaluate(origin(), "Z").unwrap(), at("2011-03-31T00:00:00"));
    }

    #[test]
    fn test_zero_time_is_idempotent() {
        let once = evaluate(origin(), "Z").unwrap();
        assert_eq!(evaluate(once, "Z").unwrap(), once);
        assert_eq!(evaluate(origin(), "ZZ").unwrap(), once);
    }

    #[test]
    fn test_last_day_of_last_month() {
        assert_eq!(evaluate(origin(), "-1M=LD").unwrap(), at("2011-02-28T15:45:54"));
        assert_eq!(evaluate(origin(), "-1M=LDZ").unwrap(), at("2011-02-28T00:00:00"));
    }

    #[test]
    fn test_time_and_date_steps_commute() {
        let expected = at("2011-02-28T00:00:00");
        for spec in ["-1M=LDZ", "-1MZ=LD", "Z-1M=LD", "Z=LD-1M"] {
            assert_eq!(evaluate(origin(), spec).unwrap(), expected, "spec {spec}");
        }
    }

    #[test]
    fn test_order_of_date_steps_matters() {
        let mid_april = at("2011-04-15T15:45:54");
        // Last day of April is the 30th; a month back keeps the 30th
        assert_eq!(evaluate(mid_april, "=LD-1M").unwrap(), at("2011-03-30T15:45:54"));
        // A month back first, then the last day of March
        assert_eq!(evaluate(mid_april, "-1M=LD").unwrap(), at("2011-03-31T15:45:54"));
    }

    #[test]
    fn test_last_month_then_last_day() {
        assert_eq!(evaluate(origin(), "-6M=LM=LD").unwrap(), at("2010-12-31T15:45:54"));
    }

    #[test]
    fn test_days_back() {
        assert_eq!(evaluate(origin(), "-365D").unwrap(), at("2010-03-31T15:45:54"));
    }

    #[test]
    fn test_first_day_of_last_month_midnight() {
        assert_eq!(evaluate(origin(), "-1M=1DZ").unwrap(), at("2011-02-01T00:00:00"));
    }

    #[test]
    fn test_leap_february() {
        let leap = at("2012-03-31T15:45:54");
        assert_eq!(evaluate(leap, "-1M=LD").unwrap(), at("2012-02-29T15:45:54"));
        assert_eq!(evaluate(leap, "=2M").unwrap(), at("2012-02-29T15:45:54"));
    }

    #[test]
    fn test_out_of_range_cardinals_fail() {
        let result = evaluate(origin(), "=0M");
        assert_eq!(
            result,
            Err(AdjustError::InvalidFieldValue(FieldError::new(
                CalendarField::Month,
                0,
                1,
                12
            )))
        );
        assert!(evaluate(origin(), "=13M").is_err());
        assert!(evaluate(origin(), "-1M=29D").is_err());
        assert!(evaluate(origin(), "=99999999999D").is_err());
        // The origin is a value, the caller's copy is untouched
        assert_eq!(origin().to_string(), "2011-03-31T15:45:54.000");
    }

    #[test]
    fn test_out_of_range_shifts_fail() {
        assert!(matches!(
            evaluate(origin(), "+99999999999999999999M"),
            Err(AdjustError::InvalidFieldValue(FieldError {
                field: CalendarField::Month,
                ..
            }))
        ));
        assert!(evaluate(origin(), "-1000000D").is_err());
    }

    #[test]
    fn test_shift_past_last_year_reports_shifted_unit() {
        let december = at("9999-12-01T15:45:54");
        assert_eq!(
            evaluate(december, "+1M"),
            Err(AdjustError::InvalidFieldValue(FieldError::new(
                CalendarField::Month,
                1,
                -119_987,
                0
            )))
        );
        assert_eq!(
            evaluate(december, "+31D"),
            Err(AdjustError::InvalidFieldValue(FieldError::new(
                CalendarField::Day,
                31,
                -3_652_028,
                30
            )))
        );
    }

    #[test]
    fn test_lenient_skips_noise() {
        assert_eq!(
            evaluate(origin(), "last month: -1M, end: =LD").unwrap(),
            at("2011-02-28T15:45:54")
        );
        assert_eq!(evaluate(origin(), "garbage").unwrap(), origin());
    }

    #[test]
    fn test_strict_rejects_noise() {
        assert!(matches!(
            evaluate_with(origin(), "-1M=Ld", Strictness::Strict),
            Err(AdjustError::MalformedSpec { offset: 3, .. })
        ));
        assert_eq!(
            evaluate_with(origin(), "-1M =LD", Strictness::Strict).unwrap(),
            at("2011-02-28T15:45:54")
        );
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let first = evaluate(origin(), "+1M-3D=LDZ").unwrap();
        let second = evaluate(origin(), "+1M-3D=LDZ").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_evaluations_are_independent() {
        let handles: Vec<_> = (1..=12u8)
            .map(|month| {
                std::thread::spawn(move || {
                    let start = Timestamp::from_date(2011, month, 1).unwrap();
                    evaluate(start, "=LDZ").unwrap()
                })
            })
            .collect();
        for (handle, month) in handles.into_iter().zip(1..=12u8) {
            let result = handle.join().unwrap();
            assert_eq!(result.date(), (2011, month, Day::last_of(2011, Month::new(month).unwrap()).get()));
        }
    }
}
