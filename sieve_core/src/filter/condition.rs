use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{FilterValue, ValueShape};
use crate::schema::{FieldDefinition, FieldType, Operator};

/// Opaque identifier of a condition within a filter group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionId(String);

impl ConditionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single filter rule: field, operator and value.
///
/// Conditions are values. Every edit produces a new condition with the
/// same id; nothing mutates a condition in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub id: ConditionId,
    pub field: String,
    pub field_type: FieldType,
    pub operator: Operator,
    pub value: FilterValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_path: Option<String>,
}

impl Condition {
    /// Creates a condition with every part given explicitly.
    pub fn new(
        field: impl Into<String>,
        field_type: FieldType,
        operator: Operator,
        value: FilterValue,
    ) -> Self {
        Self {
            id: ConditionId::generate(),
            field: field.into(),
            field_type,
            operator,
            value,
            nested_path: None,
        }
    }

    /// Starts a new condition on a field, with its default operator and an empty value.
    pub fn for_field(definition: &FieldDefinition) -> Self {
        Self::reset_to(ConditionId::generate(), definition)
    }

    fn reset_to(id: ConditionId, definition: &FieldDefinition) -> Self {
        let operator = definition
            .default_operator()
            .unwrap_or(definition.field_type.legal_operators()[0]);

        Self {
            id,
            field: definition.key.clone(),
            field_type: definition.field_type,
            operator,
            value: FilterValue::default_for(definition.field_type, operator),
            nested_path: definition.nested_path.clone(),
        }
    }

    pub fn with_id(mut self, id: ConditionId) -> Self {
        self.id = id;
        self
    }

    pub fn with_nested_path(mut self, path: impl Into<String>) -> Self {
        self.nested_path = Some(path.into());
        self
    }

    /// Switches to another field. Operator and value start over.
    pub fn with_field(&self, definition: &FieldDefinition) -> Self {
        Self::reset_to(self.id.clone(), definition)
    }

    /// Switches operator, keeping the value when its shape still fits.
    pub fn with_operator(&self, operator: Operator) -> Self {
        let value = if ValueShape::expected(self.field_type, operator) == self.value.shape() {
            self.value.clone()
        } else {
            FilterValue::default_for(self.field_type, operator)
        };

        Self {
            operator,
            value,
            ..self.clone()
        }
    }

    pub fn with_value(&self, value: FilterValue) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }

    /// The record path this condition reads: its nested path, or the field key.
    pub fn path(&self) -> &str {
        self.nested_path.as_deref().unwrap_or(&self.field)
    }
}
