//! Bootstrap error taxonomy.
//!
//! Every variant carries the collaborator's reason verbatim plus the paths
//! involved, so the message alone tells the user which step failed.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One stage of a bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Locate,
    CreateEnvironment,
    InstallDependencies,
    RegisterPackage,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Locate => "locate",
            Step::CreateEnvironment => "create-environment",
            Step::InstallDependencies => "install-dependencies",
            Step::RegisterPackage => "register-package",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by locating or bootstrapping an environment.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Cannot determine target environment path: {reason}")]
    Configuration { reason: String },

    #[error("Failed to create environment at {}: {reason}", .env_path.display())]
    EnvironmentCreation { env_path: PathBuf, reason: String },

    #[error(
        "Failed to install dependencies from {} into {}: {reason}",
        .manifest.display(),
        .env_path.display()
    )]
    DependencyInstall {
        manifest: PathBuf,
        env_path: PathBuf,
        reason: String,
    },

    #[error(
        "Failed to register {} as editable package in {}: {reason}",
        .project_dir.display(),
        .env_path.display()
    )]
    Registration {
        project_dir: PathBuf,
        env_path: PathBuf,
        reason: String,
    },
}

impl BootstrapError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        BootstrapError::Configuration {
            reason: reason.into(),
        }
    }

    pub fn step(&self) -> Step {
        match self {
            BootstrapError::Configuration { .. } => Step::Locate,
            BootstrapError::EnvironmentCreation { .. } => Step::CreateEnvironment,
            BootstrapError::DependencyInstall { .. } => Step::InstallDependencies,
            BootstrapError::Registration { .. } => Step::RegisterPackage,
        }
    }

    /// Process exit code for this failure. Never 0.
    pub fn exit_code(&self) -> u8 {
        match self {
            BootstrapError::Configuration { .. } => 2,
            BootstrapError::EnvironmentCreation { .. } => 3,
            BootstrapError::DependencyInstall { .. } => 4,
            BootstrapError::Registration { .. } => 5,
        }
    }
}
