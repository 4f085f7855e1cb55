//! Apply command: runs a filter group over a file of records.

use std::path::Path;

use sieve_core::{FieldRegistry, LogicalOperator, apply};

use crate::errors::CliError;
use crate::files;
use crate::ui::{self, OutputFormat};

/// Applies the valid conditions of a filter group and prints matching records.
///
/// Invalid conditions are reported as warnings and left out, so a group with
/// no valid conditions returns every record.
pub fn apply_filter(
    registry: &FieldRegistry,
    records_path: &Path,
    filter_path: &Path,
    operator: Option<LogicalOperator>,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Applying filter");
    let records = files::load_records(records_path)?;
    let group = files::load_filter_group(filter_path)?;

    for condition in &group.conditions {
        if let Some(error) = registry.validate(condition) {
            ui::warning(&format!("Skipping condition '{}': {}", condition.id, error));
        }
    }

    let conditions = group.valid_conditions(registry);
    let logical_operator = operator.unwrap_or(group.logical_operator);
    ui::debug(&format!(
        "Using {} of {} condition(s) with {:?}",
        conditions.len(),
        group.conditions.len(),
        logical_operator
    ));

    let matched = apply(&records, &conditions, logical_operator);

    match output_format {
        OutputFormat::Pretty => {
            ui::pretty_output_record_list(&matched);
            ui::success(&format!(
                "{} of {} record(s) matched",
                matched.len(),
                records.len()
            ));
        }
        OutputFormat::Json => ui::json_output(&matched),
    }

    Ok(())
}
