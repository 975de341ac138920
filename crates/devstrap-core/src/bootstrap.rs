//! Bootstrap state machine and the collaborator seams it drives.
//!
//! `Unresolved → Located → Created → Provisioned`, with `Failed` reachable from
//! every non-terminal state. [`Bootstrapper`] is `Unresolved`, [`Located`] is
//! `Located`, an `Ok` target is `Provisioned` and an `Err` is `Failed` at
//! [`BootstrapError::step`]. Steps run strictly in order; the first failure
//! stops the run and nothing is rolled back.

use crate::config::LocatorConfig;
use crate::error::BootstrapError;
use crate::locator::{self, BootstrapTarget};
use std::path::Path;

/// Creates an isolated environment at `env_path`, including missing parents.
///
/// Implementations must treat an already-valid environment at `env_path` as a
/// successful no-op: re-running a bootstrap depends on it.
pub trait EnvironmentCreator {
    fn create_environment(&self, env_path: &Path) -> anyhow::Result<()>;
}

/// Installs every dependency declared in `manifest` into `env_path`.
pub trait DependencyInstaller {
    fn install_dependencies(&self, manifest: &Path, env_path: &Path) -> anyhow::Result<()>;
}

/// Makes `project_dir` importable from `env_path` in place.
pub trait PackageRegistrar {
    fn register_editable(&self, env_path: &Path, project_dir: &Path) -> anyhow::Result<()>;
}

pub struct Collaborators<'a> {
    pub creator: &'a dyn EnvironmentCreator,
    pub installer: &'a dyn DependencyInstaller,
    pub registrar: &'a dyn PackageRegistrar,
}

/// A bootstrap in the `Unresolved` state. Consumed by [`Bootstrapper::locate`]
/// or [`Bootstrapper::run`], so each value drives exactly one run.
pub struct Bootstrapper<'a> {
    collaborators: Collaborators<'a>,
}

impl<'a> Bootstrapper<'a> {
    pub fn new(collaborators: Collaborators<'a>) -> Self {
        Self { collaborators }
    }

    /// `Unresolved → Located`. Pure path resolution: nothing is touched on disk
    /// and no collaborator is called.
    pub fn locate(
        self,
        cwd: &Path,
        config: &LocatorConfig,
    ) -> Result<Located<'a>, BootstrapError> {
        let target = locator::locate(cwd, config).inspect_err(failed)?;
        tracing::info!(
            env_path = %target.env_path.display(),
            project_dir = %target.project_dir.display(),
            "Resolved target environment"
        );
        Ok(Located {
            collaborators: self.collaborators,
            target,
        })
    }

    pub fn run(
        self,
        cwd: &Path,
        config: &LocatorConfig,
    ) -> Result<BootstrapTarget, BootstrapError> {
        self.locate(cwd, config)?.provision()
    }
}

/// A bootstrap whose target has been resolved but not yet provisioned.
pub struct Located<'a> {
    collaborators: Collaborators<'a>,
    target: BootstrapTarget,
}

impl Located<'_> {
    pub fn target(&self) -> &BootstrapTarget {
        &self.target
    }

    /// `Located → Created → Provisioned`. Returns the target on success; on
    /// failure the error's [`BootstrapError::step`] names the step that failed.
    pub fn provision(self) -> Result<BootstrapTarget, BootstrapError> {
        let Located {
            collaborators,
            target,
        } = self;

        collaborators
            .creator
            .create_environment(&target.env_path)
            .map_err(|e| BootstrapError::EnvironmentCreation {
                env_path: target.env_path.clone(),
                reason: format!("{:#}", e),
            })
            .inspect_err(failed)?;
        tracing::info!(env_path = %target.env_path.display(), "Environment ready");

        collaborators
            .installer
            .install_dependencies(&target.manifest, &target.env_path)
            .map_err(|e| BootstrapError::DependencyInstall {
                manifest: target.manifest.clone(),
                env_path: target.env_path.clone(),
                reason: format!("{:#}", e),
            })
            .inspect_err(failed)?;
        tracing::info!(manifest = %target.manifest.display(), "Dependencies installed");

        collaborators
            .registrar
            .register_editable(&target.env_path, &target.project_dir)
            .map_err(|e| BootstrapError::Registration {
                project_dir: target.project_dir.clone(),
                env_path: target.env_path.clone(),
                reason: format!("{:#}", e),
            })
            .inspect_err(failed)?;
        tracing::info!(
            project_dir = %target.project_dir.display(),
            "Project registered as editable package"
        );

        Ok(target)
    }
}

fn failed(e: &BootstrapError) {
    tracing::debug!(step = %e.step(), "Bootstrap step failed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Step;
    use anyhow::bail;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct Fakes {
        calls: RefCell<Vec<String>>,
        fail_create: bool,
        fail_install: bool,
        fail_register: bool,
    }

    impl EnvironmentCreator for Fakes {
        fn create_environment(&self, env_path: &Path) -> anyhow::Result<()> {
            self.calls
                .borrow_mut()
                .push(format!("create {}", env_path.display()));
            if self.fail_create {
                bail!("permission denied");
            }
            Ok(())
        }
    }

    impl DependencyInstaller for Fakes {
        fn install_dependencies(&self, manifest: &Path, env_path: &Path) -> anyhow::Result<()> {
            self.calls.borrow_mut().push(format!(
                "install {} {}",
                manifest.display(),
                env_path.display()
            ));
            if self.fail_install {
                bail!("manifest not found");
            }
            Ok(())
        }
    }

    impl PackageRegistrar for Fakes {
        fn register_editable(&self, env_path: &Path, project_dir: &Path) -> anyhow::Result<()> {
            self.calls.borrow_mut().push(format!(
                "register {} {}",
                env_path.display(),
                project_dir.display()
            ));
            if self.fail_register {
                bail!("no project descriptor");
            }
            Ok(())
        }
    }

    fn bootstrapper(fakes: &Fakes) -> Bootstrapper<'_> {
        Bootstrapper::new(Collaborators {
            creator: fakes,
            installer: fakes,
            registrar: fakes,
        })
    }

    fn run_with(
        fakes: &Fakes,
        cwd: &str,
        config: &LocatorConfig,
    ) -> Result<BootstrapTarget, BootstrapError> {
        bootstrapper(fakes).run(Path::new(cwd), config)
    }

    #[test]
    fn test_default_scenario_runs_all_steps_in_order() {
        let fakes = Fakes::default();
        let target = run_with(&fakes, "/home/u/myapp", &LocatorConfig::default()).unwrap();

        assert_eq!(target.env_path, PathBuf::from("/home/u/myapp"));
        assert_eq!(
            *fakes.calls.borrow(),
            vec![
                "create /home/u/myapp",
                "install /home/u/myapp/requirements.txt /home/u/myapp",
                "register /home/u/myapp /home/u/myapp",
            ]
        );
    }

    #[test]
    fn test_root_override_scenario() {
        let fakes = Fakes::default();
        let config = LocatorConfig {
            root_override: Some(PathBuf::from("/opt/envs")),
            ..Default::default()
        };
        let result = run_with(&fakes, "/home/u/myapp", &config);
        assert_eq!(result.unwrap().env_path, PathBuf::from("/opt/envs/myapp"));
        assert_eq!(fakes.calls.borrow()[0], "create /opt/envs/myapp");
    }

    #[test]
    fn test_configuration_error_invokes_nothing() {
        let fakes = Fakes::default();
        let err = run_with(&fakes, "/", &LocatorConfig::default()).unwrap_err();
        assert!(matches!(err, BootstrapError::Configuration { .. }));
        assert_eq!(err.step(), Step::Locate);
        assert!(fakes.calls.borrow().is_empty());
    }

    #[test]
    fn test_locate_calls_no_collaborator() {
        let fakes = Fakes::default();
        let located = bootstrapper(&fakes)
            .locate(Path::new("/home/u/myapp"), &LocatorConfig::default())
            .unwrap();
        assert_eq!(
            located.target().manifest,
            PathBuf::from("/home/u/myapp/requirements.txt")
        );
        assert!(fakes.calls.borrow().is_empty());

        let target = located.provision().unwrap();
        assert_eq!(target.project_dir, PathBuf::from("/home/u/myapp"));
        assert_eq!(fakes.calls.borrow().len(), 3);
    }

    #[test]
    fn test_create_failure_stops_before_install() {
        let fakes = Fakes {
            fail_create: true,
            ..Default::default()
        };
        let err = run_with(&fakes, "/home/u/myapp", &LocatorConfig::default()).unwrap_err();
        assert!(matches!(err, BootstrapError::EnvironmentCreation { .. }));
        assert!(err.to_string().contains("permission denied"));
        assert_eq!(err.step(), Step::CreateEnvironment);
        assert_eq!(fakes.calls.borrow().len(), 1);
    }

    #[test]
    fn test_install_failure_never_registers() {
        let fakes = Fakes {
            fail_install: true,
            ..Default::default()
        };
        let err = run_with(&fakes, "/home/u/myapp", &LocatorConfig::default()).unwrap_err();
        assert!(matches!(err, BootstrapError::DependencyInstall { .. }));
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.step(), Step::InstallDependencies);
        assert!(fakes.calls.borrow().iter().all(|c| !c.starts_with("register")));
    }

    #[test]
    fn test_register_failure_is_reported() {
        let fakes = Fakes {
            fail_register: true,
            ..Default::default()
        };
        let err = run_with(&fakes, "/home/u/myapp", &LocatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no project descriptor"));
        assert_eq!(err.step(), Step::RegisterPackage);
        assert_eq!(fakes.calls.borrow().len(), 3);
    }

    #[test]
    fn test_rerun_after_success_succeeds() {
        let fakes = Fakes::default();
        let config = LocatorConfig::default();
        let first = run_with(&fakes, "/home/u/myapp", &config).unwrap();
        let second = run_with(&fakes, "/home/u/myapp", &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(fakes.calls.borrow().len(), 6);
    }
}
