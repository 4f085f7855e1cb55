//! Filter value payloads

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{FieldType, Operator};

/// A single user-entered value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Number(f64),
    Bool(bool),
}

impl Scalar {
    /// True for the empty string, which counts as "no value entered".
    pub fn is_blank(&self) -> bool {
        matches!(self, Scalar::String(s) if s.is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::String(_) => "string",
            Scalar::Number(_) => "number",
            Scalar::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "{}", s),
            Scalar::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// Bounds of a numeric `Between` condition
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberRange {
    pub min: Option<Scalar>,
    pub max: Option<Scalar>,
}

/// Bounds of a date `Between` condition, as entered date strings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// The value payload of a condition.
///
/// Each variant is one payload shape; which shape a condition must carry is
/// fixed by its field type and operator (see [`ValueShape::expected`]).
/// Serialized untagged, so the JSON keeps its natural form: a scalar,
/// `{min, max}`, `{from, to}` or an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    List(Vec<Scalar>),
    Range(NumberRange),
    DateRange(DateRange),
    Scalar(Option<Scalar>),
}

impl FilterValue {
    /// The value a freshly created condition starts with.
    pub fn default_for(field_type: FieldType, operator: Operator) -> Self {
        match ValueShape::expected(field_type, operator) {
            ValueShape::Scalar if field_type == FieldType::Boolean => {
                FilterValue::Scalar(Some(Scalar::Bool(true)))
            }
            ValueShape::Scalar => FilterValue::Scalar(None),
            ValueShape::Range => FilterValue::Range(NumberRange::default()),
            ValueShape::DateRange => FilterValue::DateRange(DateRange::default()),
            ValueShape::List => FilterValue::List(Vec::new()),
        }
    }

    pub fn scalar(value: impl Into<Scalar>) -> Self {
        FilterValue::Scalar(Some(value.into()))
    }

    pub fn range(min: impl Into<Scalar>, max: impl Into<Scalar>) -> Self {
        FilterValue::Range(NumberRange {
            min: Some(min.into()),
            max: Some(max.into()),
        })
    }

    pub fn date_range(from: impl Into<String>, to: impl Into<String>) -> Self {
        FilterValue::DateRange(DateRange {
            from: Some(from.into()),
            to: Some(to.into()),
        })
    }

    pub fn list<T: Into<Scalar>>(items: impl IntoIterator<Item = T>) -> Self {
        FilterValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn shape(&self) -> ValueShape {
        match self {
            FilterValue::Scalar(_) => ValueShape::Scalar,
            FilterValue::Range(_) => ValueShape::Range,
            FilterValue::DateRange(_) => ValueShape::DateRange,
            FilterValue::List(_) => ValueShape::List,
        }
    }
}

/// The payload shapes a condition value can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Scalar,
    Range,
    DateRange,
    List,
}

impl ValueShape {
    /// The shape a value must have for a field type and operator.
    pub fn expected(field_type: FieldType, operator: Operator) -> Self {
        match (field_type, operator) {
            (FieldType::Number | FieldType::Amount, Operator::Between) => ValueShape::Range,
            (FieldType::Date, Operator::Between) => ValueShape::DateRange,
            (FieldType::MultiSelect, _) => ValueShape::List,
            (
                FieldType::Text
                | FieldType::Number
                | FieldType::Amount
                | FieldType::Date
                | FieldType::SingleSelect
                | FieldType::Boolean,
                _,
            ) => ValueShape::Scalar,
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueShape::Scalar => "a single value",
            ValueShape::Range => "a {min, max} range",
            ValueShape::DateRange => "a {from, to} date range",
            ValueShape::List => "a list of values",
        };
        write!(f, "{}", name)
    }
}
