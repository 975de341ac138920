//! devstrap core: configuration, environment locator, bootstrap state machine.
//!
//! The concrete venv / pip collaborators live in `devstrap-env`; this crate
//! only knows them through the traits in [`bootstrap`].

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod locator;

pub use bootstrap::{
    Bootstrapper, Collaborators, DependencyInstaller, EnvironmentCreator, Located,
    PackageRegistrar,
};
pub use error::{BootstrapError, Step};
pub use locator::{
    locate, resolve_env_path, resolve_env_root, BootstrapTarget, ProjectIdentity, MANIFEST_FILE,
};
