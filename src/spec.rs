use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    calendar::Calendar,
    error::AdjustError,
    token::{Strictness, Token, scan},
};

/// A tokenized adjustment spec, ready to be applied to any number of origins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Spec {
    tokens: Vec<Token>,
}

impl Spec {
    /// Tokenizes `text` with the given strictness.
    ///
    /// # Errors
    /// Returns `AdjustError::MalformedSpec` for unrecognized text in strict mode.
    pub fn parse_with(text: &str, strictness: Strictness) -> Result<Self, AdjustError> {
        Ok(Self {
            tokens: scan(text, strictness)?,
        })
    }

    /// Returns the tokens in source order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when applying the spec returns the origin unchanged
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Applies every token in source order, each one to the result of the previous.
    ///
    /// # Errors
    /// Returns the first error raised by a step; no partial result is produced.
    pub fn apply<C: Calendar>(&self, origin: C) -> Result<C, AdjustError> {
        tracing::debug!(origin = %origin, spec = %self, "adjusting");
        self.tokens.iter().try_fold(origin, |ts, token| {
            let ts = token.apply(ts)?;
            tracing::debug!(step = %token, result = %ts, "step applied");
            Ok(ts)
        })
    }
}

impl From<Vec<Token>> for Spec {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl FromStr for Spec {
    type Err = AdjustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, Strictness::Lenient)
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens.iter().try_for_each(|token| write!(f, "{token}"))
    }
}

impl Serialize for Spec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Spec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_with(&s, Strictness::Strict).map_err(serde::de::Error::custom)
    }
}
