//! Best-effort conversions between record values, filter values and the
//! types comparisons need. Every conversion fails closed with `None`.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

use super::types::Scalar;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Text form of a scalar record value. Arrays and objects have none.
pub(crate) fn value_to_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// Text form of a select option, read the way filter scalars print, so a
/// record `2.0` and a filter `2.0` both read as `2`.
pub(crate) fn value_to_option(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) => Some(Cow::Owned(Scalar::Number(f).to_string())),
            None => Some(Cow::Owned(n.to_string())),
        },
        other => value_to_text(other),
    }
}

pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub(crate) fn value_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

pub(crate) fn scalar_to_number(scalar: &Scalar) -> Option<f64> {
    match scalar {
        Scalar::Number(n) if n.is_finite() => Some(*n),
        Scalar::String(s) => parse_number(s),
        _ => None,
    }
}

pub(crate) fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

pub(crate) fn value_to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

pub(crate) fn scalar_to_decimal(scalar: &Scalar) -> Option<Decimal> {
    match scalar {
        Scalar::Number(n) if n.is_finite() => parse_decimal(&n.to_string()),
        Scalar::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// A monetary amount: exact when it fits a `Decimal`, otherwise an `f64`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Amount {
    Exact(Decimal),
    Approx(f64),
}

impl Amount {
    fn as_f64(self) -> Option<f64> {
        match self {
            Amount::Exact(d) => d.to_f64(),
            Amount::Approx(n) => Some(n),
        }
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Amount::Exact(a), Amount::Exact(b)) => a.partial_cmp(b),
            _ => self.as_f64()?.partial_cmp(&other.as_f64()?),
        }
    }
}

pub(crate) fn value_to_amount(value: &Value) -> Option<Amount> {
    value_to_decimal(value)
        .map(Amount::Exact)
        .or_else(|| value_to_number(value).map(Amount::Approx))
}

pub(crate) fn scalar_to_amount(scalar: &Scalar) -> Option<Amount> {
    scalar_to_decimal(scalar)
        .map(Amount::Exact)
        .or_else(|| scalar_to_number(scalar).map(Amount::Approx))
}

/// Parses an ISO-8601 date or timestamp.
///
/// Values without an offset are taken as UTC.
pub(crate) fn parse_date(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }

    let utc = FixedOffset::east_opt(0)?;
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().with_timezone(&utc));
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().with_timezone(&utc))
}

pub(crate) fn value_to_date(value: &Value) -> Option<DateTime<FixedOffset>> {
    value.as_str().and_then(parse_date)
}

/// Truthiness of a record value. Absent, `null`, `false`, zero and the
/// empty string are false; everything else is true.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Reads a filter value as a boolean: a real bool, or the strings `true`/`false`.
pub(crate) fn scalar_to_bool(scalar: &Scalar) -> Option<bool> {
    match scalar {
        Scalar::Bool(b) => Some(*b),
        Scalar::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Scalar::Number(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_from_strings() {
        assert_eq!(value_to_number(&json!("42.5")), Some(42.5));
        assert_eq!(value_to_number(&json!(" 7 ")), Some(7.0));
        assert_eq!(value_to_number(&json!("")), None);
        assert_eq!(value_to_number(&json!("abc")), None);
        assert_eq!(value_to_number(&json!("NaN")), None);
        assert_eq!(value_to_number(&json!("inf")), None);
        assert_eq!(value_to_number(&json!(true)), None);
    }

    #[test]
    fn test_decimals_are_exact() {
        let sum = scalar_to_decimal(&Scalar::Number(0.1)).unwrap()
            + scalar_to_decimal(&Scalar::Number(0.2)).unwrap();
        assert_eq!(sum, parse_decimal("0.3").unwrap());
        assert_eq!(value_to_decimal(&json!("1e3")), parse_decimal("1000"));
    }

    #[test]
    fn test_amounts_outside_decimal_range() {
        let huge = scalar_to_amount(&Scalar::Number(1e30)).unwrap();
        let tiny = value_to_amount(&json!(1e-30)).unwrap();
        let hundred = scalar_to_amount(&Scalar::from("100")).unwrap();

        assert!(huge > hundred);
        assert!(tiny < hundred);
        assert!(hundred > Amount::Exact(Decimal::ZERO));
        assert_eq!(scalar_to_amount(&Scalar::from("100.00")), Some(hundred));
        assert_eq!(scalar_to_amount(&Scalar::from("$100")), None);
    }

    #[test]
    fn test_option_text_matches_scalar_display() {
        assert_eq!(value_to_option(&json!(2.0)).as_deref(), Some("2"));
        assert_eq!(value_to_option(&json!(2)).as_deref(), Some("2"));
        assert_eq!(value_to_option(&json!(2.5)).as_deref(), Some("2.5"));
        assert_eq!(value_to_option(&json!("2.0")).as_deref(), Some("2.0"));
        assert_eq!(Scalar::Number(2.0).to_string(), "2");
    }

    #[test]
    fn test_date_formats() {
        let day = parse_date("2024-03-15").unwrap();
        assert_eq!(day.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

        assert!(parse_date("2024-03-15T10:30:00Z").is_some());
        assert!(parse_date("2024-03-15T10:30:00+02:00").is_some());
        assert!(parse_date("2024-03-15T10:30:00").is_some());
        assert!(parse_date("2024-03-15 10:30:00.250").is_some());
    }

    #[test]
    fn test_invalid_dates() {
        assert!(parse_date("2024-02-30").is_none());
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("").is_none());
        assert!(value_to_date(&json!(20240315)).is_none());
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(is_truthy(Some(&json!(1))));
        assert!(is_truthy(Some(&json!("no"))));
        assert!(is_truthy(Some(&json!([]))));
    }

    #[test]
    fn test_bool_from_scalar() {
        assert_eq!(scalar_to_bool(&Scalar::Bool(false)), Some(false));
        assert_eq!(scalar_to_bool(&Scalar::from("TRUE")), Some(true));
        assert_eq!(scalar_to_bool(&Scalar::from("yes")), None);
        assert_eq!(scalar_to_bool(&Scalar::Number(1.0)), None);
    }
}
