use log::debug;

use super::coerce::{Amount, parse_date, scalar_to_amount, scalar_to_bool, scalar_to_number};
use super::types::{DateRange, FilterValue, NumberRange, Scalar, ValueShape};
use super::{Condition, ValidationError};
use crate::schema::{FieldRegistry, FieldType, Operator};

pub type ValidationResult = Result<(), ValidationError>;

impl FieldRegistry {
    /// Checks that a condition can be evaluated.
    ///
    /// Checks run in order (field, operator, value) and the first failure is
    /// returned. `None` means the condition is valid.
    pub fn validate(&self, condition: &Condition) -> Option<ValidationError> {
        let result = self.check(condition);
        if let Err(error) = &result {
            debug!("Condition '{}' rejected: {}", condition.id, error);
        }
        result.err()
    }

    pub fn is_valid(&self, condition: &Condition) -> bool {
        self.validate(condition).is_none()
    }

    fn check(&self, condition: &Condition) -> ValidationResult {
        let definition = self.lookup(&condition.field).ok_or_else(|| {
            ValidationError::Field(format!("Unknown field '{}'", condition.field))
        })?;

        if definition.field_type != condition.field_type {
            return Err(ValidationError::Field(format!(
                "Field '{}' is a {} field, not {}",
                definition.key, definition.field_type, condition.field_type
            )));
        }

        if !definition.allows(condition.operator) {
            let supported: Vec<&str> = definition.operators.iter().map(|op| op.label()).collect();
            return Err(ValidationError::Operator(format!(
                "Cannot use '{}' on {}. Supported: {}",
                condition.operator,
                definition.label,
                supported.join(", ")
            )));
        }

        check_value(definition.field_type, condition.operator, &condition.value)
    }
}

fn check_value(field_type: FieldType, operator: Operator, value: &FilterValue) -> ValidationResult {
    let expected = ValueShape::expected(field_type, operator);

    match (field_type, expected, value) {
        (FieldType::Text, ValueShape::Scalar, FilterValue::Scalar(scalar)) => match required(scalar)? {
            Scalar::String(_) => Ok(()),
            other => Err(ValidationError::value(format!(
                "Text value must be a string, got a {}",
                other.type_name()
            ))),
        },
        (FieldType::Number, ValueShape::Scalar, FilterValue::Scalar(scalar)) => {
            number(required(scalar)?).map(|_| ())
        }
        (FieldType::Number, ValueShape::Range, FilterValue::Range(range)) => check_range(range, number),
        (FieldType::Amount, ValueShape::Scalar, FilterValue::Scalar(scalar)) => {
            amount(required(scalar)?).map(|_| ())
        }
        (FieldType::Amount, ValueShape::Range, FilterValue::Range(range)) => check_range(range, amount),
        (FieldType::Date, ValueShape::Scalar, FilterValue::Scalar(scalar)) => match required(scalar)? {
            Scalar::String(text) => date(text).map(|_| ()),
            other => Err(ValidationError::value(format!(
                "Date value must be a date string, got a {}",
                other.type_name()
            ))),
        },
        (FieldType::Date, ValueShape::DateRange, FilterValue::DateRange(range)) => check_date_range(range),
        (FieldType::SingleSelect, ValueShape::Scalar, FilterValue::Scalar(scalar)) => required(scalar).map(|_| ()),
        (FieldType::MultiSelect, ValueShape::List, FilterValue::List(items)) => {
            if items.is_empty() {
                Err(ValidationError::value("Select at least one value"))
            } else {
                Ok(())
            }
        }
        (FieldType::Boolean, ValueShape::Scalar, FilterValue::Scalar(scalar)) => {
            let scalar = scalar
                .as_ref()
                .ok_or_else(|| ValidationError::value("A true or false value is required"))?;
            scalar_to_bool(scalar).map(|_| ()).ok_or_else(|| {
                ValidationError::value(format!("'{}' is not a boolean", scalar))
            })
        }
        (_, expected, _) => Err(ValidationError::value(format!(
            "'{}' on a {} field expects {}",
            operator, field_type, expected
        ))),
    }
}

fn required(scalar: &Option<Scalar>) -> Result<&Scalar, ValidationError> {
    match scalar {
        Some(value) if !value.is_blank() => Ok(value),
        _ => Err(ValidationError::value("A value is required")),
    }
}

fn number(scalar: &Scalar) -> Result<f64, ValidationError> {
    scalar_to_number(scalar)
        .ok_or_else(|| ValidationError::value(format!("'{}' is not a valid number", scalar)))
}

fn amount(scalar: &Scalar) -> Result<Amount, ValidationError> {
    scalar_to_amount(scalar)
        .ok_or_else(|| ValidationError::value(format!("'{}' is not a valid amount", scalar)))
}

fn date(text: &str) -> Result<chrono::DateTime<chrono::FixedOffset>, ValidationError> {
    parse_date(text)
        .ok_or_else(|| ValidationError::value(format!("'{}' is not a valid date", text)))
}

fn check_range<T, F>(range: &NumberRange, parse: F) -> ValidationResult
where
    T: PartialOrd,
    F: Fn(&Scalar) -> Result<T, ValidationError>,
{
    let (Some(min), Some(max)) = (
        range.min.as_ref().filter(|s| !s.is_blank()),
        range.max.as_ref().filter(|s| !s.is_blank()),
    ) else {
        return Err(ValidationError::value("Both minimum and maximum are required"));
    };

    if parse(min)? > parse(max)? {
        return Err(ValidationError::value(format!(
            "Minimum {} is greater than maximum {}",
            min, max
        )));
    }
    Ok(())
}

fn check_date_range(range: &DateRange) -> ValidationResult {
    let (Some(from), Some(to)) = (
        range.from.as_deref().filter(|s| !s.is_empty()),
        range.to.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(ValidationError::value("Both start and end dates are required"));
    };

    if date(from)? > date(to)? {
        return Err(ValidationError::value(format!(
            "Start date {} is after end date {}",
            from, to
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ErrorKind;
    use assert_matches::assert_matches;

    fn registry() -> &'static FieldRegistry {
        FieldRegistry::builtin()
    }

    fn condition(field: &str, operator: Operator, value: FilterValue) -> Condition {
        let definition = registry().lookup(field).unwrap();
        Condition::for_field(definition)
            .with_operator(operator)
            .with_value(value)
    }

    fn error_kind(condition: &Condition) -> Option<ErrorKind> {
        registry().validate(condition).map(|e| e.kind())
    }

    #[test]
    fn test_valid_text_condition() {
        let c = condition("name", Operator::Contains, FilterValue::scalar("john"));
        assert_eq!(registry().validate(&c), None);
        assert!(registry().is_valid(&c));
    }

    #[test]
    fn test_unknown_field_is_field_error() {
        let c = Condition::new(
            "shoe_size",
            FieldType::Number,
            Operator::Contains,
            FilterValue::Scalar(None),
        );

        assert_matches!(registry().validate(&c), Some(ValidationError::Field(msg)) if msg.contains("shoe_size"));
    }

    #[test]
    fn test_field_type_mismatch_is_field_error() {
        let c = Condition::new(
            "salary",
            FieldType::Text,
            Operator::Contains,
            FilterValue::scalar("10"),
        );
        assert_eq!(error_kind(&c), Some(ErrorKind::Field));
    }

    #[test]
    fn test_illegal_operator_is_operator_error() {
        let c = Condition::new(
            "salary",
            FieldType::Number,
            Operator::Contains,
            FilterValue::scalar(10.0),
        );
        assert_eq!(error_kind(&c), Some(ErrorKind::Operator));
    }

    #[test]
    fn test_operator_legal_for_type_but_not_offered() {
        // email only offers contains, equals, ends with and regex
        let c = Condition::new(
            "email",
            FieldType::Text,
            Operator::StartsWith,
            FilterValue::scalar("a"),
        );
        assert_matches!(
            registry().validate(&c),
            Some(ValidationError::Operator(msg)) if msg.contains("ends with")
        );
    }

    #[test]
    fn test_operator_checked_before_value() {
        let c = Condition::new(
            "salary",
            FieldType::Number,
            Operator::Regex,
            FilterValue::Scalar(None),
        );
        assert_eq!(error_kind(&c), Some(ErrorKind::Operator));
    }

    #[test]
    fn test_empty_text_is_value_error() {
        let c = condition("name", Operator::Equals, FilterValue::scalar(""));
        assert_matches!(registry().validate(&c), Some(ValidationError::Value(msg)) if msg == "A value is required");

        let missing = condition("name", Operator::Equals, FilterValue::Scalar(None));
        assert_eq!(error_kind(&missing), Some(ErrorKind::Value));
    }

    #[test]
    fn test_text_must_be_string() {
        let c = condition("name", Operator::Equals, FilterValue::scalar(12.0));
        assert_eq!(error_kind(&c), Some(ErrorKind::Value));
    }

    #[test]
    fn test_invalid_regex_still_validates() {
        let c = condition("name", Operator::Regex, FilterValue::scalar("("));
        assert_eq!(registry().validate(&c), None);
    }

    #[test]
    fn test_number_values() {
        let ok = condition("salary", Operator::GreaterThan, FilterValue::scalar("90000"));
        assert_eq!(registry().validate(&ok), None);

        let bad = condition("salary", Operator::GreaterThan, FilterValue::scalar("lots"));
        assert_matches!(registry().validate(&bad), Some(ValidationError::Value(msg)) if msg.contains("lots"));

        let infinite = condition("salary", Operator::LessThan, FilterValue::scalar("inf"));
        assert_eq!(error_kind(&infinite), Some(ErrorKind::Value));
    }

    #[test]
    fn test_number_between() {
        let ok = condition("salary", Operator::Between, FilterValue::range(50000.0, 100000.0));
        assert_eq!(registry().validate(&ok), None);

        let equal = condition("salary", Operator::Between, FilterValue::range(5.0, "5"));
        assert_eq!(registry().validate(&equal), None);

        let inverted = condition("salary", Operator::Between, FilterValue::range(100.0, 50.0));
        assert_matches!(registry().validate(&inverted), Some(ValidationError::Value(msg)) if msg.contains("greater than"));

        let half = condition(
            "salary",
            Operator::Between,
            FilterValue::Range(NumberRange {
                min: Some(Scalar::Number(1.0)),
                max: None,
            }),
        );
        assert_eq!(error_kind(&half), Some(ErrorKind::Value));
    }

    #[test]
    fn test_between_needs_range_shape() {
        let c = condition("salary", Operator::Between, FilterValue::scalar(5.0));
        assert_matches!(registry().validate(&c), Some(ValidationError::Value(msg)) if msg.contains("{min, max}"));
    }

    #[test]
    fn test_amount_values() {
        let ok = condition("bonus", Operator::Between, FilterValue::range("1000.50", "2000"));
        assert_eq!(registry().validate(&ok), None);

        let bad = condition("bonus", Operator::Equals, FilterValue::scalar("$100"));
        assert_eq!(error_kind(&bad), Some(ErrorKind::Value));
    }

    #[test]
    fn test_amount_accepts_any_finite_number() {
        let huge = condition("bonus", Operator::GreaterThan, FilterValue::scalar(1e30));
        assert_eq!(registry().validate(&huge), None);

        let tiny = condition("bonus", Operator::LessThan, FilterValue::scalar("1e-30"));
        assert_eq!(registry().validate(&tiny), None);

        let wide = condition("bonus", Operator::Between, FilterValue::range(0.5, 1e30));
        assert_eq!(registry().validate(&wide), None);

        let reversed = condition("bonus", Operator::Between, FilterValue::range(1e30, 0.5));
        assert_eq!(error_kind(&reversed), Some(ErrorKind::Value));
    }

    #[test]
    fn test_date_values() {
        let ok = condition("start_date", Operator::Before, FilterValue::scalar("2024-01-01"));
        assert_eq!(registry().validate(&ok), None);

        let bad = condition("start_date", Operator::Before, FilterValue::scalar("2024-13-01"));
        assert_eq!(error_kind(&bad), Some(ErrorKind::Value));

        let number = condition("start_date", Operator::After, FilterValue::scalar(2024.0));
        assert_eq!(error_kind(&number), Some(ErrorKind::Value));
    }

    #[test]
    fn test_date_between() {
        let ok = condition(
            "start_date",
            Operator::Between,
            FilterValue::date_range("2024-01-01", "2024-12-31"),
        );
        assert_eq!(registry().validate(&ok), None);

        let inverted = condition(
            "start_date",
            Operator::Between,
            FilterValue::date_range("2024-12-31", "2024-01-01"),
        );
        assert_eq!(error_kind(&inverted), Some(ErrorKind::Value));

        let missing = condition(
            "start_date",
            Operator::Between,
            FilterValue::DateRange(DateRange {
                from: Some("2024-01-01".to_string()),
                to: Some(String::new()),
            }),
        );
        assert_matches!(registry().validate(&missing), Some(ValidationError::Value(msg)) if msg.contains("required"));
    }

    #[test]
    fn test_single_select_requires_value() {
        let ok = condition("department", Operator::Is, FilterValue::scalar("Engineering"));
        assert_eq!(registry().validate(&ok), None);

        // Not checked against the options list
        let unlisted = condition("department", Operator::IsNot, FilterValue::scalar("Legal"));
        assert_eq!(registry().validate(&unlisted), None);

        let empty = condition("department", Operator::Is, FilterValue::Scalar(None));
        assert_eq!(error_kind(&empty), Some(ErrorKind::Value));
    }

    #[test]
    fn test_multi_select_requires_items() {
        let ok = condition("skills", Operator::ContainsAll, FilterValue::list(["Rust"]));
        assert_eq!(registry().validate(&ok), None);

        let empty = condition("skills", Operator::In, FilterValue::List(vec![]));
        assert_eq!(error_kind(&empty), Some(ErrorKind::Value));

        let scalar = condition("skills", Operator::In, FilterValue::scalar("Rust"));
        assert_eq!(error_kind(&scalar), Some(ErrorKind::Value));
    }

    #[test]
    fn test_boolean_values() {
        let yes = condition("active", Operator::Is, FilterValue::scalar(true));
        let no = condition("active", Operator::Is, FilterValue::scalar(false));
        let text = condition("active", Operator::Is, FilterValue::scalar("false"));
        assert_eq!(registry().validate(&yes), None);
        assert_eq!(registry().validate(&no), None);
        assert_eq!(registry().validate(&text), None);

        let absent = condition("active", Operator::Is, FilterValue::Scalar(None));
        assert_eq!(error_kind(&absent), Some(ErrorKind::Value));

        let junk = condition("active", Operator::Is, FilterValue::scalar("maybe"));
        assert_eq!(error_kind(&junk), Some(ErrorKind::Value));
    }

    #[test]
    fn test_validate_is_repeatable() {
        let c = condition("salary", Operator::Between, FilterValue::range(10.0, 1.0));
        assert_eq!(registry().validate(&c), registry().validate(&c));
    }
}
