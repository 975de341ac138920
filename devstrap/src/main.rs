mod cli;
mod commands;
mod observability;

use clap::Parser;
use cli::Cli;
use devstrap_core::config::{self, ObservabilityConfig};
use devstrap_core::BootstrapError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    config::load_dotenv();

    let mut obs = ObservabilityConfig::from_env();
    if cli.quiet {
        obs.quiet = true;
    }
    observability::init_tracing(&obs);

    match commands::bootstrap::cmd_bootstrap(&cli, &obs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Typed bootstrap failures keep their own code; anything else is 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<BootstrapError>()
        .map(BootstrapError::exit_code)
        .unwrap_or(1)
}
