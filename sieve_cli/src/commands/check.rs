//! Check command: validates every condition of a filter group.

use std::path::Path;

use serde::Serialize;
use sieve_core::{ConditionId, FieldRegistry, ValidationError};

use crate::errors::CliError;
use crate::files;
use crate::ui::{self, OutputFormat};

#[derive(Serialize)]
struct ConditionReport<'a> {
    id: &'a ConditionId,
    field: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a ValidationError>,
}

/// Validate a filter group file. Fails if any condition is invalid.
pub fn check_filter(
    registry: &FieldRegistry,
    filter_path: &Path,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Checking filter conditions");
    let group = files::load_filter_group(filter_path)?;

    let errors: Vec<Option<ValidationError>> = group
        .conditions
        .iter()
        .map(|condition| registry.validate(condition))
        .collect();

    match output_format {
        OutputFormat::Pretty => {
            for (condition, error) in group.conditions.iter().zip(&errors) {
                ui::pretty_output_condition(condition, error.as_ref());
            }
        }
        OutputFormat::Json => {
            let reports: Vec<ConditionReport> = group
                .conditions
                .iter()
                .zip(&errors)
                .map(|(condition, error)| ConditionReport {
                    id: &condition.id,
                    field: &condition.field,
                    valid: error.is_none(),
                    error: error.as_ref(),
                })
                .collect();
            ui::json_output(&reports);
        }
    }

    let invalid = errors.iter().filter(|e| e.is_some()).count();
    if invalid == 0 {
        ui::success(&format!("All {} condition(s) are valid", errors.len()));
        Ok(())
    } else {
        ui::error(&format!(
            "Found {} invalid condition(s) of {}",
            invalid,
            errors.len()
        ));
        Err(CliError::InvalidFilter)
    }
}
