use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Condition, ConditionId, PreparedCondition};
use crate::schema::FieldRegistry;

/// Logical operator for combining multiple filter conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

/// An ordered set of conditions and how to combine them.
///
/// Order is kept for display; it does not affect which records match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterGroup {
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub logical_operator: LogicalOperator,
}

impl FilterGroup {
    pub fn new(logical_operator: LogicalOperator) -> Self {
        Self {
            conditions: Vec::new(),
            logical_operator,
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Returns a copy with the condition appended.
    pub fn add(&self, condition: Condition) -> Self {
        self.clone().with_condition(condition)
    }

    /// Returns a copy without the condition with the given id.
    pub fn remove(&self, id: &ConditionId) -> Self {
        Self {
            conditions: self
                .conditions
                .iter()
                .filter(|c| &c.id != id)
                .cloned()
                .collect(),
            logical_operator: self.logical_operator,
        }
    }

    /// Returns a copy where the condition sharing the new condition's id is swapped out.
    pub fn replace(&self, condition: Condition) -> Self {
        Self {
            conditions: self
                .conditions
                .iter()
                .map(|c| {
                    if c.id == condition.id {
                        condition.clone()
                    } else {
                        c.clone()
                    }
                })
                .collect(),
            logical_operator: self.logical_operator,
        }
    }

    pub fn with_logical_operator(&self, logical_operator: LogicalOperator) -> Self {
        Self {
            logical_operator,
            ..self.clone()
        }
    }

    /// The conditions that pass validation against the registry, in order.
    pub fn valid_conditions(&self, registry: &FieldRegistry) -> Vec<Condition> {
        self.conditions
            .iter()
            .filter(|c| registry.is_valid(c))
            .cloned()
            .collect()
    }

    /// Applies every condition of the group. All of them must already be valid.
    pub fn apply<'a>(&self, records: &'a [Value]) -> Vec<&'a Value> {
        apply(records, &self.conditions, self.logical_operator)
    }
}

/// Filters records by a list of valid conditions, keeping input order.
///
/// An empty condition list keeps every record. With `And` a record must match
/// every condition, with `Or` at least one.
pub fn apply<'a>(
    records: &'a [Value],
    conditions: &[Condition],
    logical_operator: LogicalOperator,
) -> Vec<&'a Value> {
    let prepared: Vec<PreparedCondition> = conditions.iter().map(PreparedCondition::new).collect();

    let matched: Vec<&Value> = if prepared.is_empty() {
        records.iter().collect()
    } else {
        records
            .iter()
            .filter(|record| match logical_operator {
                LogicalOperator::And => prepared.iter().all(|c| c.matches(record)),
                LogicalOperator::Or => prepared.iter().any(|c| c.matches(record)),
            })
            .collect()
    };

    debug!(
        "Applied {} condition(s) with {:?}: {} of {} records matched",
        conditions.len(),
        logical_operator,
        matched.len(),
        records.len()
    );
    matched
}
