use std::fmt;

/// Failure categories of a CLI run. Details are printed before returning.
#[derive(Debug, PartialEq)]
pub enum CliError {
    FileError,
    ParseError,
    SchemaError,
    InvalidFilter,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileError => write!(f, "Could not read input file"),
            CliError::ParseError => write!(f, "Could not parse input file"),
            CliError::SchemaError => write!(f, "Field catalog is invalid"),
            CliError::InvalidFilter => write!(f, "Filter group has invalid conditions"),
        }
    }
}

impl std::error::Error for CliError {}
