//! Explodomatica CLI - Explosion Sound Generator
//!
//! Command-line interface for the explosion synthesizer.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use explodomatica::cli::{commands, Cli};
use explodomatica::ExplodeError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Explodomatica v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(explode_err) = err.downcast_ref::<ExplodeError>() {
                for suggestion in explode_err.recovery_suggestions() {
                    eprintln!("  - {}", suggestion);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    commands::generate(cli)
        .with_context(|| format!("failed to generate '{}'", cli.output.display()))?;
    Ok(())
}
