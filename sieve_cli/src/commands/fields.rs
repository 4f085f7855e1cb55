use sieve_core::{FieldDefinition, FieldRegistry};

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Lists every filterable field with its type and operators.
pub fn list_fields(registry: &FieldRegistry, output_format: OutputFormat) -> Result<(), CliError> {
    ui::header("Listing filterable fields");

    let definitions: Vec<&FieldDefinition> = registry.definitions().collect();
    match output_format {
        OutputFormat::Pretty => ui::pretty_output_field_list(&definitions),
        OutputFormat::Json => ui::json_output(&definitions),
    }

    Ok(())
}
