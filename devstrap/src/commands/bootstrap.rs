//! `devstrap`: locate, create, install, register.

use anyhow::{Context, Result};
use devstrap_core::config::{LocatorConfig, ObservabilityConfig, ToolConfig};
use devstrap_core::{resolve_env_path, Bootstrapper};
use devstrap_env::PythonToolchain;
use std::path::Path;

use crate::cli::Cli;
use crate::observability::AuditLog;

pub fn cmd_bootstrap(cli: &Cli, obs: &ObservabilityConfig) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let locator = LocatorConfig::from_env()
        .with_cli_overrides(cli.env_path.clone(), cli.env_root.clone());

    if cli.print_path {
        return print_path(&cwd, &locator);
    }

    let tools = ToolConfig::from_env().with_cli_overrides(cli.python.clone());
    let toolchain = PythonToolchain::from_config(&tools, obs.quiet);
    let audit = AuditLog::from_config(obs);

    // A run that fails to locate writes nothing, audit log included.
    let located = Bootstrapper::new(toolchain.collaborators()).locate(&cwd, &locator)?;
    audit.started(located.target());
    match located.provision() {
        Ok(target) => {
            audit.succeeded(&target);
            if !obs.quiet {
                eprintln!(
                    "✓ {} is ready at {}",
                    cwd.file_name().unwrap_or_default().to_string_lossy(),
                    target.env_path.display()
                );
            }
            Ok(())
        }
        Err(e) => {
            audit.failed(&e);
            Err(e.into())
        }
    }
}

fn print_path(cwd: &Path, locator: &LocatorConfig) -> Result<()> {
    let env_path = resolve_env_path(cwd, locator)?;
    println!("{}", env_path.display());
    Ok(())
}
