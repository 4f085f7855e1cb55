//! Text comparison logic for filters

use log::trace;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

use super::coerce::value_to_text;
use super::types::{FilterValue, Scalar};
use crate::schema::Operator;

/// Compare a record value against a text filter.
///
/// Every operator is case-insensitive. A missing value only satisfies `NotContains`.
pub fn compare_text(value: Option<&Value>, operator: Operator, filter_value: &FilterValue) -> bool {
    let filter_str = match filter_value {
        FilterValue::Scalar(Some(Scalar::String(s))) => s.as_str(),
        _ => return false,
    };

    let value = match value.and_then(value_to_text) {
        Some(text) => text,
        None => return operator == Operator::NotContains,
    };

    match operator {
        Operator::Equals => value.to_lowercase() == filter_str.to_lowercase(),
        Operator::Contains => value.to_lowercase().contains(&filter_str.to_lowercase()),
        Operator::StartsWith => value.to_lowercase().starts_with(&filter_str.to_lowercase()),
        Operator::EndsWith => value.to_lowercase().ends_with(&filter_str.to_lowercase()),
        Operator::NotContains => !value.to_lowercase().contains(&filter_str.to_lowercase()),
        Operator::Regex => compile_pattern(filter_str).is_some_and(|regex| regex.is_match(&value)),
        _ => false,
    }
}

/// Compiles a case-insensitive pattern. `None` if it does not compile,
/// and such a pattern matches nothing.
pub(crate) fn compile_pattern(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(e) => {
            trace!("Ignoring invalid pattern '{}': {}", pattern, e);
            None
        }
    }
}

/// Tests the original-case record value against an already compiled pattern.
pub(crate) fn compare_regex(value: Option<&Value>, regex: Option<&Regex>) -> bool {
    match (regex, value.and_then(value_to_text)) {
        (Some(regex), Some(text)) => regex.is_match(&text),
        _ => false,
    }
}
