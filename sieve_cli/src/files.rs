//! Loading the field catalog, records and filter groups from disk.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use sieve_core::{FieldRegistry, FilterGroup};

use crate::errors::CliError;
use crate::ui;

/// Registry from a catalog file, or the builtin employee catalog.
pub fn load_registry(path: Option<&Path>) -> Result<FieldRegistry, CliError> {
    let Some(path) = path else {
        ui::debug("Using builtin field catalog");
        return Ok(FieldRegistry::builtin().clone());
    };

    let source = read_file(path)?;
    let registry = FieldRegistry::from_json(&source).map_err(|e| {
        ui::error_with_details(
            &format!("Invalid field catalog '{}'", path.display()),
            &e.to_string(),
        );
        CliError::SchemaError
    })?;

    ui::debug(&format!(
        "Loaded {} field(s) from '{}'",
        registry.len(),
        path.display()
    ));
    Ok(registry)
}

/// Records must be a JSON array; each element is one record.
pub fn load_records(path: &Path) -> Result<Vec<Value>, CliError> {
    parse_file(path)
}

pub fn load_filter_group(path: &Path) -> Result<FilterGroup, CliError> {
    parse_file(path)
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| {
        ui::error_with_details(
            &format!("Failed to read '{}'", path.display()),
            &e.to_string(),
        );
        CliError::FileError
    })
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let source = read_file(path)?;
    serde_json::from_str(&source).map_err(|e| {
        ui::error_with_details(
            &format!("Failed to parse '{}'", path.display()),
            &e.to_string(),
        );
        CliError::ParseError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_registry_without_path() {
        let registry = load_registry(None).unwrap();
        assert!(registry.lookup("salary").is_some());
    }

    #[test]
    fn test_registry_from_file() {
        let file = write_temp(r#"[{"key": "age", "type": "number", "operators": ["greaterThan"]}]"#);
        let registry = load_registry(Some(file.path())).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("age").unwrap().label, "Age");
    }

    #[test]
    fn test_invalid_registry_is_schema_error() {
        let file = write_temp(r#"[{"key": "age", "type": "number", "operators": ["contains"]}]"#);
        assert_matches!(load_registry(Some(file.path())), Err(CliError::SchemaError));
    }

    #[test]
    fn test_missing_file_is_file_error() {
        assert_matches!(
            load_records(Path::new("/nonexistent/records.json")),
            Err(CliError::FileError)
        );
    }

    #[test]
    fn test_records_must_be_array() {
        let file = write_temp(r#"{"name": "not an array"}"#);
        assert_matches!(load_records(file.path()), Err(CliError::ParseError));

        let file = write_temp(r#"[{"name": "a"}, {"name": "b"}]"#);
        assert_eq!(load_records(file.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_filter_group_file() {
        let file = write_temp(
            r#"{"conditions": [{"id": "a", "field": "salary", "fieldType": "number", "operator": "greaterThan", "value": 10}]}"#,
        );
        let group = load_filter_group(file.path()).unwrap();
        assert_eq!(group.conditions.len(), 1);
    }
}
