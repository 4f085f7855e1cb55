//! Numeric comparison logic for filters (numbers and monetary amounts)

use serde_json::Value;

use super::coerce::{scalar_to_amount, scalar_to_number, value_to_amount, value_to_number};
use super::types::{FilterValue, NumberRange, Scalar};
use crate::schema::Operator;

/// Compare a number field against a filter, as `f64`
pub fn compare_number(value: Option<&Value>, operator: Operator, filter_value: &FilterValue) -> bool {
    match value.and_then(value_to_number) {
        Some(value) => compare_ordered(value, operator, filter_value, scalar_to_number),
        None => false,
    }
}

/// Compare an amount field against a filter, as exact decimals.
///
/// Values beyond `Decimal` range or scale still compare, as `f64`.
pub fn compare_amount(value: Option<&Value>, operator: Operator, filter_value: &FilterValue) -> bool {
    match value.and_then(value_to_amount) {
        Some(value) => compare_ordered(value, operator, filter_value, scalar_to_amount),
        None => false,
    }
}

fn compare_ordered<T, F>(value: T, operator: Operator, filter_value: &FilterValue, parse: F) -> bool
where
    T: PartialOrd,
    F: Fn(&Scalar) -> Option<T>,
{
    match filter_value {
        FilterValue::Range(NumberRange {
            min: Some(min),
            max: Some(max),
        }) if operator == Operator::Between => match (parse(min), parse(max)) {
            (Some(min), Some(max)) => min <= value && value <= max,
            _ => false,
        },
        FilterValue::Scalar(Some(bound)) => {
            let Some(bound) = parse(bound) else {
                return false;
            };
            match operator {
                Operator::Equals => value == bound,
                Operator::GreaterThan => value > bound,
                Operator::LessThan => value < bound,
                Operator::GreaterThanOrEqual => value >= bound,
                Operator::LessThanOrEqual => value <= bound,
                _ => false,
            }
        }
        _ => false,
    }
}
