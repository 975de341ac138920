//! Python collaborators for devstrap: venv creation, pip install, editable install.
//!
//! Each type implements one of the `devstrap-core` bootstrap traits and shells
//! out to the real tool. Callers pick them up through [`PythonToolchain`].

pub mod pip;
mod process;
pub mod venv;

pub use pip::{EditableRegistrar, PipInstaller, PROJECT_DESCRIPTORS};
pub use venv::{env_python, is_valid_env, which_python, VenvCreator, VENV_MARKER_FILE};

use devstrap_core::config::ToolConfig;
use devstrap_core::Collaborators;

/// The three collaborators wired for one run.
#[derive(Debug, Clone)]
pub struct PythonToolchain {
    pub creator: VenvCreator,
    pub installer: PipInstaller,
    pub registrar: EditableRegistrar,
}

impl PythonToolchain {
    pub fn from_config(tools: &ToolConfig, quiet: bool) -> Self {
        let creator = match tools.python {
            Some(ref p) => VenvCreator::new(p.clone()),
            None => VenvCreator::discover(),
        };
        Self {
            creator,
            installer: PipInstaller { quiet },
            registrar: EditableRegistrar { quiet },
        }
    }

    pub fn collaborators(&self) -> Collaborators<'_> {
        Collaborators {
            creator: &self.creator,
            installer: &self.installer,
            registrar: &self.registrar,
        }
    }
}
