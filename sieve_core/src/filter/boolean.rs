//! Boolean comparison logic for filters

use serde_json::Value;

use super::coerce::{is_truthy, scalar_to_bool};
use super::types::FilterValue;
use crate::schema::Operator;

/// Compare a boolean field against a filter.
///
/// The record value is read by truthiness, so a missing flag counts as `false`.
pub fn compare_boolean(value: Option<&Value>, operator: Operator, filter_value: &FilterValue) -> bool {
    let FilterValue::Scalar(Some(filter)) = filter_value else {
        return false;
    };
    let Some(expected) = scalar_to_bool(filter) else {
        return false;
    };

    match operator {
        Operator::Is => is_truthy(value) == expected,
        _ => false,
    }
}
