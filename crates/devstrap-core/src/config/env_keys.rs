//! 环境变量 key 常量
//!
//! 所有变量统一使用 `DEVSTRAP_*` 前缀。

/// Target environment location
pub mod locator {
    /// Full Target Environment Path, used verbatim. Beats `DEVSTRAP_ENV_ROOT`.
    pub const DEVSTRAP_ENV_PATH: &str = "DEVSTRAP_ENV_PATH";
    /// Directory under which `<root>/<project name>` is created.
    pub const DEVSTRAP_ENV_ROOT: &str = "DEVSTRAP_ENV_ROOT";
}

/// External tools
pub mod tools {
    /// Interpreter used to run `-m venv`.
    pub const DEVSTRAP_PYTHON: &str = "DEVSTRAP_PYTHON";
}

/// 可观测性与日志
pub mod observability {
    pub const DEVSTRAP_QUIET: &str = "DEVSTRAP_QUIET";
    pub const DEVSTRAP_LOG_LEVEL: &str = "DEVSTRAP_LOG_LEVEL";
    pub const DEVSTRAP_LOG_JSON: &str = "DEVSTRAP_LOG_JSON";
    pub const DEVSTRAP_AUDIT_LOG: &str = "DEVSTRAP_AUDIT_LOG";
}
