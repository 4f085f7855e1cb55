//! Core of Sieve: typed filter conditions over JSON records.
//!
//! A [`FieldRegistry`] describes which fields can be filtered, with what
//! operators. A [`Condition`] is checked against the registry with
//! [`FieldRegistry::validate`], tested against a record with
//! [`Condition::matches`], and a list of valid conditions is run over a
//! collection with [`apply`].

pub mod filter;
pub mod record;
pub mod schema;

pub use filter::{
    Condition, ConditionId, FilterGroup, FilterValue, LogicalOperator, Scalar, ValidationError,
    apply,
};
pub use record::{Record, resolve};
pub use schema::{FieldDefinition, FieldRegistry, FieldType, Operator, SelectOption};
