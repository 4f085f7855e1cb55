//! Field types and the operators each of them accepts

use std::fmt;

use serde::{Deserialize, Serialize};

/// The semantic type of a filterable field.
///
/// Determines both which operators are legal and what shape a condition's value takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Text,
    Number,
    Amount,
    Date,
    SingleSelect,
    MultiSelect,
    Boolean,
}

const TEXT_OPERATORS: [Operator; 6] = [
    Operator::Equals,
    Operator::Contains,
    Operator::StartsWith,
    Operator::EndsWith,
    Operator::NotContains,
    Operator::Regex,
];

const NUMERIC_OPERATORS: [Operator; 6] = [
    Operator::Equals,
    Operator::GreaterThan,
    Operator::LessThan,
    Operator::GreaterThanOrEqual,
    Operator::LessThanOrEqual,
    Operator::Between,
];

const DATE_OPERATORS: [Operator; 4] = [
    Operator::Equals,
    Operator::Before,
    Operator::After,
    Operator::Between,
];

const SINGLE_SELECT_OPERATORS: [Operator; 2] = [Operator::Is, Operator::IsNot];

const MULTI_SELECT_OPERATORS: [Operator; 3] =
    [Operator::In, Operator::NotIn, Operator::ContainsAll];

const BOOLEAN_OPERATORS: [Operator; 1] = [Operator::Is];

impl FieldType {
    /// All field types, in declaration order
    pub const ALL: [FieldType; 7] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Amount,
        FieldType::Date,
        FieldType::SingleSelect,
        FieldType::MultiSelect,
        FieldType::Boolean,
    ];

    /// The operators that are legal for this field type, in their default UI order.
    pub fn legal_operators(&self) -> &'static [Operator] {
        match self {
            FieldType::Text => &TEXT_OPERATORS,
            FieldType::Number | FieldType::Amount => &NUMERIC_OPERATORS,
            FieldType::Date => &DATE_OPERATORS,
            FieldType::SingleSelect => &SINGLE_SELECT_OPERATORS,
            FieldType::MultiSelect => &MULTI_SELECT_OPERATORS,
            FieldType::Boolean => &BOOLEAN_OPERATORS,
        }
    }

    pub fn allows(&self, operator: Operator) -> bool {
        self.legal_operators().contains(&operator)
    }

    /// Select types carry an enumerated list of choices.
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::SingleSelect | FieldType::MultiSelect)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Amount => "amount",
            FieldType::Date => "date",
            FieldType::SingleSelect => "single select",
            FieldType::MultiSelect => "multi select",
            FieldType::Boolean => "boolean",
        };
        write!(f, "{}", name)
    }
}

/// Comparison operators for filter conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Equals,
    Contains,
    StartsWith,
    EndsWith,
    NotContains,
    Regex,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Between,
    Before,
    After,
    Is,
    IsNot,
    In,
    NotIn,
    ContainsAll,
}

impl Operator {
    /// Human readable label, as shown in an operator picker
    pub fn label(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::Contains => "contains",
            Operator::StartsWith => "starts with",
            Operator::EndsWith => "ends with",
            Operator::NotContains => "does not contain",
            Operator::Regex => "matches regex",
            Operator::GreaterThan => "greater than",
            Operator::LessThan => "less than",
            Operator::GreaterThanOrEqual => "greater than or equal",
            Operator::LessThanOrEqual => "less than or equal",
            Operator::Between => "between",
            Operator::Before => "before",
            Operator::After => "after",
            Operator::Is => "is",
            Operator::IsNot => "is not",
            Operator::In => "is any of",
            Operator::NotIn => "is none of",
            Operator::ContainsAll => "contains all",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
