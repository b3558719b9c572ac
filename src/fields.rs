//! Form Fields

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Raw value of a numeric form field.
///
/// Input is kept as typed until validation, so that a non-numeric entry is
/// reported as a violation rather than silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Nothing entered yet.
    #[default]
    Empty,

    /// An integer value.
    Number(i64),

    /// Anything that is not an integer, kept verbatim.
    Text(String),
}

impl FieldValue {
    /// Interpret raw user input.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Self::Empty;
        }

        trimmed
            .parse::<i64>()
            .map_or_else(|_err| Self::Text(raw.to_string()), Self::Number)
    }

    /// The numeric value, if there is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Empty | Self::Text(_) => None,
        }
    }

    /// Check if nothing has been entered.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Empty => Ok(()),
            Self::Number(value) => Display::fmt(value, f),
            Self::Text(text) => f.write_str(text),
        }
    }
}
