mod cli;
mod commands;
mod errors;
mod files;
mod ui;

use clap::Parser;
use std::process::ExitCode;

use cli::{SieveCli, SieveCliCommand};

fn main() -> ExitCode {
    let cli = SieveCli::parse();
    initialize_logging(cli.verbose);

    let registry = match files::load_registry(cli.schema.as_deref()) {
        Ok(registry) => registry,
        Err(_) => return ExitCode::FAILURE,
    };

    let result = match cli.command {
        SieveCliCommand::Fields => commands::list_fields(&registry, cli.format),
        SieveCliCommand::Check { filter } => commands::check_filter(&registry, &filter, cli.format),
        SieveCliCommand::Apply {
            records,
            filter,
            operator,
        } => commands::apply_filter(
            &registry,
            &records,
            &filter,
            operator.map(Into::into),
            cli.format,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Command failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn initialize_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .init();
}
