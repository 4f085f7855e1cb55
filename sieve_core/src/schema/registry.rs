use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use log::debug;

use super::catalog;
use super::{FieldDefinition, RegistryError, default_label};

static BUILTIN: LazyLock<FieldRegistry> =
    LazyLock::new(|| FieldRegistry::index(catalog::employee_fields()));

/// Read-only catalog of field definitions, keyed by field key.
///
/// Definitions keep their load order, which is the order a field picker shows them in.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    definitions: Vec<FieldDefinition>,
    by_key: HashMap<String, usize>,
}

impl FieldRegistry {
    /// Builds a registry, rejecting catalogs that break the definition invariants.
    pub fn new(definitions: Vec<FieldDefinition>) -> Result<Self, RegistryError> {
        debug!("Loading field registry with {} definitions", definitions.len());

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(definitions.len());

        for mut definition in definitions {
            if !seen.insert(definition.key.clone()) {
                return Err(RegistryError::DuplicateKey(definition.key));
            }
            check_definition(&definition)?;

            if definition.label.trim().is_empty() {
                definition.label = default_label(&definition.key);
            }
            normalized.push(definition);
        }

        Ok(Self::index(normalized))
    }

    /// Parses a JSON array of field definitions.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let definitions: Vec<FieldDefinition> =
            serde_json::from_str(json).map_err(|e| RegistryError::InvalidJson(e.to_string()))?;
        Self::new(definitions)
    }

    /// The process-wide employee directory catalog, built on first use.
    pub fn builtin() -> &'static FieldRegistry {
        &BUILTIN
    }

    fn index(definitions: Vec<FieldDefinition>) -> Self {
        let by_key = definitions
            .iter()
            .enumerate()
            .map(|(i, definition)| (definition.key.clone(), i))
            .collect();

        Self {
            definitions,
            by_key,
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&FieldDefinition> {
        self.by_key.get(key).map(|&i| &self.definitions[i])
    }

    pub fn definitions(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn check_definition(definition: &FieldDefinition) -> Result<(), RegistryError> {
    if definition.operators.is_empty() {
        return Err(RegistryError::EmptyOperators(definition.key.clone()));
    }

    if let Some(operator) = definition
        .operators
        .iter()
        .find(|op| !definition.field_type.allows(**op))
    {
        return Err(RegistryError::IllegalOperator {
            key: definition.key.clone(),
            field_type: definition.field_type,
            operator: *operator,
        });
    }

    match (definition.field_type.has_options(), &definition.options) {
        (true, Some(options)) if !options.is_empty() => Ok(()),
        (true, _) => Err(RegistryError::MissingOptions(definition.key.clone())),
        (false, Some(_)) => Err(RegistryError::UnexpectedOptions(definition.key.clone())),
        (false, None) => Ok(()),
    }
}
