//! Error types for loading a field registry

use std::fmt;

use super::{FieldType, Operator};

/// Errors that make a field catalog unusable
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// The catalog could not be parsed
    InvalidJson(String),
    /// Two definitions share a key
    DuplicateKey(String),
    /// A definition lists no operators
    EmptyOperators(String),
    /// A definition lists an operator its type does not support
    IllegalOperator {
        key: String,
        field_type: FieldType,
        operator: Operator,
    },
    /// A select field has no options to choose from
    MissingOptions(String),
    /// A non-select field carries options
    UnexpectedOptions(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidJson(error) => {
                write!(f, "Field catalog could not be parsed: {}", error)
            }
            RegistryError::DuplicateKey(key) => {
                write!(f, "Field '{}' is defined more than once", key)
            }
            RegistryError::EmptyOperators(key) => {
                write!(f, "Field '{}' must allow at least one operator", key)
            }
            RegistryError::IllegalOperator {
                key,
                field_type,
                operator,
            } => write!(
                f,
                "Field '{}' allows '{}', which is not supported on {} fields",
                key, operator, field_type
            ),
            RegistryError::MissingOptions(key) => {
                write!(f, "Select field '{}' must define its options", key)
            }
            RegistryError::UnexpectedOptions(key) => {
                write!(f, "Field '{}' defines options but is not a select field", key)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
