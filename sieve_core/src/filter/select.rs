//! Single select comparison logic for filters

use serde_json::Value;

use super::coerce::value_to_option;
use super::types::FilterValue;
use crate::schema::Operator;

/// Compare a single select field against a filter.
///
/// Exact string equality. A missing value equals nothing, so it only satisfies `IsNot`.
pub fn compare_select(value: Option<&Value>, operator: Operator, filter_value: &FilterValue) -> bool {
    let FilterValue::Scalar(Some(selected)) = filter_value else {
        return false;
    };
    let selected = selected.to_string();

    let is_selected = value
        .and_then(value_to_option)
        .is_some_and(|text| text == selected);

    match operator {
        Operator::Is => is_selected,
        Operator::IsNot => !is_selected,
        _ => false,
    }
}
