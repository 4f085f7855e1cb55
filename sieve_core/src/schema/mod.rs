//! Field schema registry
//!
//! The static catalog of filterable fields: what type each field has, which
//! operators it offers, its choices (for select fields) and where its value
//! lives inside a record.

mod catalog;
mod field_type;
mod registry;
mod schema_errors;

pub use field_type::*;
pub use registry::*;
pub use schema_errors::*;

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

/// One choice of a select field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Describes a single filterable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Offered operators, in picker order. The first one is the default.
    pub operators: Vec<Operator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_path: Option<String>,
}

impl FieldDefinition {
    /// Creates a definition offering every operator legal for its type,
    /// labelled after its key.
    pub fn new(key: impl Into<String>, field_type: FieldType) -> Self {
        let key = key.into();
        Self {
            label: default_label(&key),
            key,
            field_type,
            operators: field_type.legal_operators().to_vec(),
            options: None,
            nested_path: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_operators(mut self, operators: Vec<Operator>) -> Self {
        self.operators = operators;
        self
    }

    /// Adds choices given as `(label, value)` pairs.
    pub fn with_options(mut self, options: &[(&str, &str)]) -> Self {
        self.options = Some(
            options
                .iter()
                .map(|(label, value)| SelectOption::new(*label, *value))
                .collect(),
        );
        self
    }

    pub fn with_nested_path(mut self, path: impl Into<String>) -> Self {
        self.nested_path = Some(path.into());
        self
    }

    /// The operator a new condition on this field starts with.
    pub fn default_operator(&self) -> Option<Operator> {
        self.operators.first().copied()
    }

    pub fn allows(&self, operator: Operator) -> bool {
        self.operators.contains(&operator)
    }
}

/// Derives a display label from a field key, e.g. `start_date` becomes `Start Date`.
pub(crate) fn default_label(key: &str) -> String {
    key.to_case(Case::Title)
}
