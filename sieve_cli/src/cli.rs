use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::ui::OutputFormat;

/// Defines the top-level interface for the Sieve CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "sieve")]
#[command(version, about = "Sieve CLI: Filter JSON records with typed conditions.")]
pub struct SieveCli {
    /// Path to a JSON field catalog. Uses the builtin employee catalog if omitted.
    #[arg(short, long, global = true, env = "SIEVE_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: SieveCliCommand,
}

/// Defines the available subcommands of the Sieve CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum SieveCliCommand {
    /// List the filterable fields and their operators.
    Fields,
    /// Validate every condition of a filter group file.
    Check {
        /// Filter group JSON file
        filter: PathBuf,
    },
    /// Apply a filter group to a JSON array of records. Invalid conditions are skipped.
    Apply {
        /// Records JSON file (an array of objects)
        records: PathBuf,
        /// Filter group JSON file
        filter: PathBuf,
        /// Override the group's logical operator
        #[arg(short, long)]
        operator: Option<CliLogicalOperator>,
    },
}

/// How to combine conditions, as given on the command line.
#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum CliLogicalOperator {
    And,
    Or,
}

impl From<CliLogicalOperator> for sieve_core::LogicalOperator {
    fn from(value: CliLogicalOperator) -> Self {
        match value {
            CliLogicalOperator::And => sieve_core::LogicalOperator::And,
            CliLogicalOperator::Or => sieve_core::LogicalOperator::Or,
        }
    }
}
