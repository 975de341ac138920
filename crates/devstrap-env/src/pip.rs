//! pip-backed dependency installer and editable registrar.

use anyhow::Result;
use devstrap_core::{DependencyInstaller, PackageRegistrar};
use std::path::Path;
use std::process::Command;

use crate::process::run_tool;
use crate::venv::env_python;

/// Files that make a directory pip-installable, checked in order.
pub const PROJECT_DESCRIPTORS: &[&str] = &["pyproject.toml", "setup.py"];

fn pip_install(env_path: &Path, quiet: bool) -> Result<Command> {
    let python = env_python(env_path);
    if !python.exists() {
        anyhow::bail!(
            "no interpreter at {}; is {} a virtual environment?",
            python.display(),
            env_path.display()
        );
    }
    let mut cmd = Command::new(python);
    cmd.args(["-m", "pip", "install", "--disable-pip-version-check"]);
    if quiet {
        cmd.arg("--quiet");
    }
    Ok(cmd)
}

/// `python -m pip install -r <manifest>` inside the environment.
#[derive(Debug, Clone, Default)]
pub struct PipInstaller {
    pub quiet: bool,
}

impl DependencyInstaller for PipInstaller {
    fn install_dependencies(&self, manifest: &Path, env_path: &Path) -> Result<()> {
        if !manifest.is_file() {
            anyhow::bail!("manifest not found: {}", manifest.display());
        }
        let mut cmd = pip_install(env_path, self.quiet)?;
        cmd.arg("-r").arg(manifest);
        if let Some(dir) = manifest.parent().filter(|d| !d.as_os_str().is_empty()) {
            cmd.current_dir(dir);
        }
        run_tool(cmd, "pip install -r")
    }
}

/// `python -m pip install -e <project>` inside the environment.
#[derive(Debug, Clone, Default)]
pub struct EditableRegistrar {
    pub quiet: bool,
}

impl PackageRegistrar for EditableRegistrar {
    fn register_editable(&self, env_path: &Path, project_dir: &Path) -> Result<()> {
        if !PROJECT_DESCRIPTORS
            .iter()
            .any(|d| project_dir.join(d).is_file())
        {
            anyhow::bail!(
                "no project descriptor ({}) in {}",
                PROJECT_DESCRIPTORS.join(" or "),
                project_dir.display()
            );
        }
        let mut cmd = pip_install(env_path, self.quiet)?;
        cmd.arg("-e").arg(project_dir).current_dir(project_dir);
        run_tool(cmd, "pip install -e")
    }
}
