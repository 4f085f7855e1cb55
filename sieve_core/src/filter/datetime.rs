//! Date comparison logic for filters

use chrono::Utc;
use serde_json::Value;

use super::coerce::{parse_date, value_to_date};
use super::types::{DateRange, FilterValue, Scalar};
use crate::schema::Operator;

/// Compare a date field against a filter.
///
/// `Equals` compares UTC calendar days; `Before` and `After` compare instants
/// strictly; `Between` is inclusive on both ends.
pub fn compare_date(value: Option<&Value>, operator: Operator, filter_value: &FilterValue) -> bool {
    let Some(value) = value.and_then(value_to_date) else {
        return false;
    };

    match (operator, filter_value) {
        (
            Operator::Between,
            FilterValue::DateRange(DateRange {
                from: Some(from),
                to: Some(to),
            }),
        ) => match (parse_date(from), parse_date(to)) {
            (Some(from), Some(to)) => from <= value && value <= to,
            _ => false,
        },
        (_, FilterValue::Scalar(Some(Scalar::String(filter_str)))) => {
            let Some(filter_dt) = parse_date(filter_str) else {
                return false;
            };
            match operator {
                Operator::Equals => {
                    value.with_timezone(&Utc).date_naive() == filter_dt.with_timezone(&Utc).date_naive()
                }
                Operator::Before => value < filter_dt,
                Operator::After => value > filter_dt,
                _ => false,
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(s: &str) -> FilterValue {
        FilterValue::scalar(s)
    }

    #[test]
    fn test_equals_ignores_time_of_day() {
        let morning = json!("2025-09-30T08:15:00Z");
        let evening = json!("2025-09-30T22:45:00Z");
        assert!(compare_date(Some(&morning), Operator::Equals, &date("2025-09-30")));
        assert!(compare_date(Some(&evening), Operator::Equals, &date("2025-09-30T01:00:00Z")));
        assert!(!compare_date(Some(&evening), Operator::Equals, &date("2025-10-01")));
    }

    #[test]
    fn test_equals_uses_utc_day_for_offset_values() {
        let filter = date("2024-03-15");
        let utc = json!("2024-03-15T23:30:00Z");
        let same_instant = json!("2024-03-16T01:30:00+02:00");
        let next_day = json!("2024-03-16T03:00:00+02:00");

        assert!(compare_date(Some(&utc), Operator::Equals, &filter));
        assert!(compare_date(Some(&same_instant), Operator::Equals, &filter));
        assert!(!compare_date(Some(&next_day), Operator::Equals, &filter));
        assert!(compare_date(Some(&utc), Operator::Equals, &date("2024-03-16T01:30:00+02:00")));
    }

    #[test]
    fn test_before_is_strict() {
        let value = json!("2024-03-15");
        assert!(compare_date(Some(&value), Operator::Before, &date("2024-03-16")));
        assert!(!compare_date(Some(&value), Operator::Before, &date("2024-03-15")));
        assert!(!compare_date(Some(&value), Operator::Before, &date("2024-03-14")));
    }

    #[test]
    fn test_after_is_strict() {
        let value = json!("2024-03-15T12:00:00Z");
        assert!(compare_date(Some(&value), Operator::After, &date("2024-03-15")));
        assert!(!compare_date(Some(&value), Operator::After, &date("2024-03-15T12:00:00Z")));
    }

    #[test]
    fn test_offsets_compare_as_instants() {
        let value = json!("2024-03-15T10:00:00+02:00");
        assert!(compare_date(Some(&value), Operator::Before, &date("2024-03-15T09:00:00Z")));
        assert!(compare_date(Some(&value), Operator::After, &date("2024-03-15T07:59:59Z")));
    }

    #[test]
    fn test_between_is_inclusive() {
        let range = FilterValue::date_range("2024-01-01", "2024-06-30");
        assert!(compare_date(Some(&json!("2024-01-01")), Operator::Between, &range));
        assert!(compare_date(Some(&json!("2024-03-15")), Operator::Between, &range));
        assert!(compare_date(Some(&json!("2024-06-30")), Operator::Between, &range));
        assert!(!compare_date(Some(&json!("2023-12-31")), Operator::Between, &range));
        assert!(!compare_date(Some(&json!("2024-07-01")), Operator::Between, &range));
    }

    #[test]
    fn test_unparseable_record_value() {
        let filter = date("2024-01-01");
        assert!(!compare_date(None, Operator::After, &filter));
        assert!(!compare_date(Some(&json!("soon")), Operator::After, &filter));
        assert!(!compare_date(Some(&json!(1700000000)), Operator::After, &filter));
    }

    #[test]
    fn test_unparseable_filter_value() {
        let value = json!("2024-01-01");
        assert!(!compare_date(Some(&value), Operator::Equals, &date("not a date")));
        assert!(!compare_date(
            Some(&value),
            Operator::Between,
            &FilterValue::date_range("2023-01-01", "later")
        ));
    }
}
