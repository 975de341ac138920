//! 按领域分组的配置结构体
//!
//! 从环境变量加载，统一 fallback 逻辑。CLI 参数通过 `with_cli_overrides` 叠加。

use super::env_keys::{locator as loc_keys, observability as obv_keys, tools as tool_keys};
use super::loader::{env_bool_with, env_optional_with, process_env};
use std::path::PathBuf;

/// Where the target environment lives.
///
/// Precedence: `full_override` > `root_override` > parent of the current directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatorConfig {
    /// Used verbatim as the Target Environment Path.
    pub full_override: Option<PathBuf>,
    /// Environment Root; the target becomes `<root>/<project name>`.
    pub root_override: Option<PathBuf>,
}

impl LocatorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            full_override: env_optional_with(&lookup, loc_keys::DEVSTRAP_ENV_PATH)
                .map(PathBuf::from),
            root_override: env_optional_with(&lookup, loc_keys::DEVSTRAP_ENV_ROOT)
                .map(PathBuf::from),
        }
    }

    /// A CLI value replaces the environment value for the same field only.
    pub fn with_cli_overrides(
        mut self,
        env_path: Option<PathBuf>,
        env_root: Option<PathBuf>,
    ) -> Self {
        if let Some(p) = env_path.filter(|p| !p.as_os_str().is_empty()) {
            self.full_override = Some(p);
        }
        if let Some(r) = env_root.filter(|r| !r.as_os_str().is_empty()) {
            self.root_override = Some(r);
        }
        self
    }
}

/// External tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolConfig {
    /// Interpreter for `-m venv`; discovered on PATH when unset.
    pub python: Option<PathBuf>,
}

impl ToolConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            python: env_optional_with(&lookup, tool_keys::DEVSTRAP_PYTHON).map(PathBuf::from),
        }
    }

    pub fn with_cli_overrides(mut self, python: Option<PathBuf>) -> Self {
        if let Some(p) = python.filter(|p| !p.as_os_str().is_empty()) {
            self.python = Some(p);
        }
        self
    }
}

pub const DEFAULT_LOG_LEVEL: &str = "devstrap=info,devstrap_core=info,devstrap_env=info";
pub const QUIET_LOG_LEVEL: &str = "devstrap=warn,devstrap_core=warn,devstrap_env=warn";

/// 可观测性配置：quiet、log_level、log_json、audit_log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    pub audit_log: Option<String>,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            quiet: env_bool_with(&lookup, obv_keys::DEVSTRAP_QUIET, false),
            log_level: env_optional_with(&lookup, obv_keys::DEVSTRAP_LOG_LEVEL)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_json: env_bool_with(&lookup, obv_keys::DEVSTRAP_LOG_JSON, false),
            audit_log: env_optional_with(&lookup, obv_keys::DEVSTRAP_AUDIT_LOG),
        }
    }

    /// Filter directive to use when `RUST_LOG` is not set.
    pub fn effective_level(&self) -> &str {
        if self.quiet {
            QUIET_LOG_LEVEL
        } else {
            &self.log_level
        }
    }
}
