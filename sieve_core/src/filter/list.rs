//! Multi select comparison logic for filters

use std::borrow::Cow;

use serde_json::Value;

use super::coerce::value_to_option;
use super::types::FilterValue;
use crate::schema::Operator;

/// Compare a multi select field against a filter.
///
/// The record value is read as a set: a scalar is a one-item set and a
/// missing value is empty. `In` needs any shared item, `NotIn` none, and
/// `ContainsAll` every filter item present in the record.
pub fn compare_list(value: Option<&Value>, operator: Operator, filter_value: &FilterValue) -> bool {
    let FilterValue::List(filter_items) = filter_value else {
        return false;
    };
    let wanted: Vec<String> = filter_items.iter().map(|item| item.to_string()).collect();
    let items = record_items(value);

    let contains = |item: &str| items.iter().any(|i| i.as_ref() == item);

    match operator {
        Operator::In => wanted.iter().any(|w| contains(w)),
        Operator::NotIn => !wanted.iter().any(|w| contains(w)),
        Operator::ContainsAll => wanted.iter().all(|w| contains(w)),
        _ => false,
    }
}

fn record_items(value: Option<&Value>) -> Vec<Cow<'_, str>> {
    match value {
        None => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(value_to_option).collect(),
        Some(scalar) => value_to_option(scalar).into_iter().collect(),
    }
}
