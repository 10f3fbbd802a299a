use crate::prelude::*;

/// A calendar field, used to name the offending field in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CalendarField {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "millisecond")]
    Millisecond,
}

/// A value outside the valid range of a calendar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field}: {value} (must be {min}-{max})")]
pub struct FieldError {
    pub field: CalendarField,
    pub value: i64,
    pub min:   i64,
    pub max:   i64,
}

impl FieldError {
    pub fn new(field: CalendarField, value: impl Into<i64>, min: impl Into<i64>, max: impl Into<i64>) -> Self {
        Self {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Error type for spec evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdjustError {
    /// A unit letter other than `M` or `D`.
    #[error("Invalid Time Unit: {0}")]
    UnrecognizedUnit(char),

    /// A field would be set, or shifted, outside its valid range.
    #[error(transparent)]
    InvalidFieldValue(#[from] FieldError),

    /// Text that matches no token; only reported by strict parsing.
    #[error("Unrecognized spec fragment {fragment:?} at offset {offset}")]
    MalformedSpec { offset: usize, fragment: String },
}

/// Error type for parsing a timestamp from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid timestamp format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "{_0}")]
    InvalidField(FieldError),
    #[display(fmt = "Empty timestamp string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl From<FieldError> for ParseError {
    fn from(err: FieldError) -> Self {
        Self::InvalidField(err)
    }
}
