//! Filter conditions, validation and matching logic

mod boolean;
mod coerce;
mod condition;
mod datetime;
mod group;
mod list;
mod numeric;
mod select;
mod text;
mod types;
mod validation;
mod validation_errors;

// Re-export types
pub use condition::*;
pub use group::*;
pub use types::*;
pub use validation::ValidationResult;
pub use validation_errors::*;

use log::trace;
use regex::Regex;
use serde_json::Value;

use crate::record;
use crate::schema::{FieldType, Operator};

impl Condition {
    /// Check if a record matches this condition.
    ///
    /// Only meaningful for a condition that passed validation. Never fails:
    /// values that cannot be read as the field's type simply don't match.
    pub fn matches(&self, record: &Value) -> bool {
        let value = record::resolve(record, self.path());
        let matched = self.compare(value);

        trace!(
            "Condition '{}' ({} {}) on {:?}: {}",
            self.id, self.field, self.operator, value, matched
        );
        matched
    }

    fn compare(&self, value: Option<&Value>) -> bool {
        match self.field_type {
            FieldType::Text => text::compare_text(value, self.operator, &self.value),
            FieldType::Number => numeric::compare_number(value, self.operator, &self.value),
            FieldType::Amount => numeric::compare_amount(value, self.operator, &self.value),
            FieldType::Date => datetime::compare_date(value, self.operator, &self.value),
            FieldType::SingleSelect => select::compare_select(value, self.operator, &self.value),
            FieldType::MultiSelect => list::compare_list(value, self.operator, &self.value),
            FieldType::Boolean => boolean::compare_boolean(value, self.operator, &self.value),
        }
    }
}

/// A condition readied for a scan over many records. Regex patterns are
/// compiled once here instead of once per record.
pub(crate) struct PreparedCondition<'a> {
    condition: &'a Condition,
    pattern: Option<Option<Regex>>,
}

impl<'a> PreparedCondition<'a> {
    pub(crate) fn new(condition: &'a Condition) -> Self {
        let pattern = match (condition.field_type, condition.operator, &condition.value) {
            (FieldType::Text, Operator::Regex, FilterValue::Scalar(Some(Scalar::String(pattern)))) => {
                Some(text::compile_pattern(pattern))
            }
            _ => None,
        };
        Self { condition, pattern }
    }

    pub(crate) fn matches(&self, record: &Value) -> bool {
        let Some(regex) = &self.pattern else {
            return self.condition.matches(record);
        };

        let value = record::resolve(record, self.condition.path());
        let matched = text::compare_regex(value, regex.as_ref());
        trace!(
            "Condition '{}' ({} {}) on {:?}: {}",
            self.condition.id, self.condition.field, self.condition.operator, value, matched
        );
        matched
    }
}
