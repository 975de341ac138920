//! devstrap 统一配置层
//!
//! 所有环境变量读取集中在此模块，业务代码通过结构化配置访问，避免直接 `std::env::var`。
//!
//! - `loader`：env_optional_with、env_bool_with、load_dotenv 等辅助函数
//! - `schema`：LocatorConfig、ToolConfig、ObservabilityConfig
//! - `env_keys`：key 常量

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{
    env_bool_with, env_optional_with, load_dotenv, load_dotenv_from_dir, process_env,
};
pub use schema::{LocatorConfig, ObservabilityConfig, ToolConfig};
