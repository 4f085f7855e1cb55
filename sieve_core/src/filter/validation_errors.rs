//! Error types for condition validation

use std::fmt;

use serde::Serialize;

/// Which part of a condition failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Field,
    Operator,
    Value,
}

/// Why a condition cannot be evaluated.
///
/// Returned as data from validation so a UI can show it next to the
/// offending input. At most one is reported per condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum ValidationError {
    /// The field is unknown, or its declared type disagrees with the registry
    #[serde(rename = "fieldError")]
    Field(String),
    /// The operator is not offered for the field
    #[serde(rename = "operatorError")]
    Operator(String),
    /// The value is missing or has the wrong shape for the operator
    #[serde(rename = "valueError")]
    Value(String),
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Field(_) => ErrorKind::Field,
            ValidationError::Operator(_) => ErrorKind::Operator,
            ValidationError::Value(_) => ErrorKind::Value,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ValidationError::Field(message)
            | ValidationError::Operator(message)
            | ValidationError::Value(message) => message,
        }
    }

    pub(crate) fn value(message: impl Into<String>) -> Self {
        ValidationError::Value(message.into())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Field(message) => write!(f, "Field error: {}", message),
            ValidationError::Operator(message) => write!(f, "Operator error: {}", message),
            ValidationError::Value(message) => write!(f, "Value error: {}", message),
        }
    }
}

impl std::error::Error for ValidationError {}
