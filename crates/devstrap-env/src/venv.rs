//! Python virtual environment creation.

use anyhow::{Context, Result};
use devstrap_core::EnvironmentCreator;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::process::run_tool;

/// Written by `python -m venv`; its presence is what makes a directory a valid environment.
pub const VENV_MARKER_FILE: &str = "pyvenv.cfg";

pub fn is_valid_env(env_path: &Path) -> bool {
    env_path.join(VENV_MARKER_FILE).is_file()
}

/// Get the path to python in the virtual environment
pub fn env_python(env_path: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        env_path.join("Scripts").join("python.exe")
    } else {
        env_path.join("bin").join("python")
    }
}

pub fn which_python() -> Result<PathBuf> {
    which::which("python3")
        .or_else(|_| which::which("python"))
        .context("python3 or python not found in PATH; set DEVSTRAP_PYTHON or pass --python")
}

/// Creates environments with `<python> -m venv`.
///
/// An existing directory without `pyvenv.cfg` (for instance the project
/// checkout itself, which is the default target) is created over in place.
/// Nothing is ever deleted.
#[derive(Debug, Clone, Default)]
pub struct VenvCreator {
    python: Option<PathBuf>,
}

impl VenvCreator {
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: Some(python.into()),
        }
    }

    /// Look the interpreter up on PATH when an environment actually has to be created.
    pub fn discover() -> Self {
        Self { python: None }
    }

    fn interpreter(&self) -> Result<PathBuf> {
        match self.python {
            Some(ref p) => Ok(p.clone()),
            None => which_python(),
        }
    }
}

impl EnvironmentCreator for VenvCreator {
    fn create_environment(&self, env_path: &Path) -> Result<()> {
        if is_valid_env(env_path) {
            tracing::info!(env_path = %env_path.display(), "Reusing existing environment");
            return Ok(());
        }

        let python = self.interpreter()?;
        fs::create_dir_all(env_path)
            .with_context(|| format!("Failed to create directory: {}", env_path.display()))?;

        let mut cmd = Command::new(&python);
        cmd.arg("-m").arg("venv").arg(env_path);
        run_tool(cmd, &format!("{} -m venv", python.display()))?;

        if !is_valid_env(env_path) {
            anyhow::bail!(
                "venv finished but {} is missing from {}",
                VENV_MARKER_FILE,
                env_path.display()
            );
        }
        Ok(())
    }
}
