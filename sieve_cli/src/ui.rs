//! Terminal output helpers. Status lines go to stderr, results to stdout.

use console::style;
use serde::Serialize;
use serde_json::Value;
use sieve_core::{Condition, FieldDefinition, ValidationError};
use std::fmt;

/// How command results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn header(message: &str) {
    eprintln!("{}", style(message).bold());
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

pub fn error_with_details(message: &str, details: &str) {
    error(message);
    eprintln!("  {}", style(details).dim());
}

pub fn debug(message: &str) {
    log::debug!("{}", message);
}

/// Prints any serializable value as pretty JSON on stdout.
pub fn json_output<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error_with_details("Failed to serialize output", &e.to_string()),
    }
}

pub fn pretty_output_field_list(definitions: &[&FieldDefinition]) {
    for definition in definitions {
        let operators: Vec<&str> = definition.operators.iter().map(|o| o.label()).collect();
        println!(
            "{} {} {}",
            style(&definition.key).cyan().bold(),
            style(format!("({})", definition.field_type)).dim(),
            definition.label
        );
        if let Some(path) = &definition.nested_path {
            println!("  path: {}", path);
        }
        println!("  operators: {}", operators.join(", "));
        if let Some(options) = &definition.options {
            let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
            println!("  options: {}", values.join(", "));
        }
    }
}

/// One line per condition, marked valid or with its error.
pub fn pretty_output_condition(condition: &Condition, error: Option<&ValidationError>) {
    let summary = format!(
        "{} {} {}",
        condition.field,
        condition.operator,
        serde_json::to_string(&condition.value).unwrap_or_default()
    );
    match error {
        None => success(&summary),
        Some(e) => error_with_details(&summary, &e.to_string()),
    }
}

pub fn pretty_output_record_list(records: &[&Value]) {
    for record in records {
        match serde_json::to_string(record) {
            Ok(line) => println!("{}", line),
            Err(e) => error_with_details("Failed to serialize record", &e.to_string()),
        }
    }
}
