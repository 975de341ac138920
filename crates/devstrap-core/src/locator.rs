//! Resolve where a project's environment lives.
//!
//! Pure path arithmetic: nothing here touches the filesystem. Given the same
//! current directory and [`LocatorConfig`] the result is always the same.

use crate::config::LocatorConfig;
use crate::error::BootstrapError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Dependency manifest read from the project directory. Not configurable.
pub const MANIFEST_FILE: &str = "requirements.txt";

/// Project name: the base name of the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity(String);

impl ProjectIdentity {
    pub fn from_dir(dir: &Path) -> Result<Self, BootstrapError> {
        let name = dir.file_name().ok_or_else(|| {
            BootstrapError::configuration(format!(
                "{} has no base name to use as project name",
                dir.display()
            ))
        })?;
        let name = name.to_str().ok_or_else(|| {
            BootstrapError::configuration(format!(
                "project directory name {:?} is not valid UTF-8",
                name
            ))
        })?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the bootstrap steps need, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapTarget {
    pub project_dir: PathBuf,
    pub manifest: PathBuf,
    pub env_path: PathBuf,
}

/// Environment Root: `root_override`, else the parent of `cwd`.
pub fn resolve_env_root(cwd: &Path, config: &LocatorConfig) -> Result<PathBuf, BootstrapError> {
    if let Some(ref root) = config.root_override {
        return Ok(root.clone());
    }
    match cwd.parent() {
        // `Path::new("myapp").parent()` is `Some("")`, which is no directory at all.
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
        _ => Err(BootstrapError::configuration(format!(
            "{} has no parent directory; set an environment root or path override",
            cwd.display()
        ))),
    }
}

/// Target Environment Path. Precedence: full override > root override > parent of `cwd`.
pub fn resolve_env_path(cwd: &Path, config: &LocatorConfig) -> Result<PathBuf, BootstrapError> {
    if let Some(ref full) = config.full_override {
        return Ok(full.clone());
    }
    let root = resolve_env_root(cwd, config)?;
    let project = ProjectIdentity::from_dir(cwd)?;
    Ok(root.join(project.as_str()))
}

pub fn locate(cwd: &Path, config: &LocatorConfig) -> Result<BootstrapTarget, BootstrapError> {
    let env_path = resolve_env_path(cwd, config)?;
    Ok(BootstrapTarget {
        project_dir: cwd.to_path_buf(),
        manifest: cwd.join(MANIFEST_FILE),
        env_path,
    })
}
