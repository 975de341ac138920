//! 统一环境变量加载逻辑
//!
//! 空值视为未设置，避免在业务代码中重复 trim / is_empty 判断。
//! `*_with` 变体接受任意 lookup 函数，便于测试时不触碰进程环境。

use std::env;
use std::path::Path;

/// Lookup against the process environment.
pub fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// 加载当前目录下的 `.env` 到环境变量（不覆盖已存在的变量）
pub fn load_dotenv() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if let Ok(dir) = env::current_dir() {
            load_dotenv_from_dir(&dir);
        }
    });
}

/// Load `<dir>/.env` into the process environment without overriding set variables.
///
/// Returns the number of variables applied.
pub fn load_dotenv_from_dir(dir: &Path) -> usize {
    let path = dir.join(".env");
    let Ok(content) = std::fs::read_to_string(&path) else {
        return 0;
    };
    let mut applied = 0;
    for (key, value) in parse_dotenv(&content) {
        if env::var(key).is_err() {
            env::set_var(key, value);
            applied += 1;
        }
    }
    if applied > 0 {
        tracing::debug!(path = %path.display(), applied, "loaded .env");
    }
    applied
}

/// Parse `KEY=VALUE` lines. Blank lines and `#` comments are skipped, surrounding
/// quotes are stripped, and an unquoted trailing `# comment` is dropped.
pub fn parse_dotenv(content: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some(eq_pos) = line.find('=') else {
            continue;
        };
        let key = line[..eq_pos].trim();
        let mut value = line[eq_pos + 1..].trim();
        if let Some(hash_pos) = value.find('#') {
            let before_hash = value[..hash_pos].trim_end();
            if !before_hash.contains('"') && !before_hash.contains('\'') {
                value = before_hash;
            }
        }
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }
        if !key.is_empty() {
            out.push((key, value));
        }
    }
    out
}

/// 读取变量，返回 Option（空值视为未设置）
pub fn env_optional_with<F>(lookup: F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|s| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    })
}

/// 解析布尔型变量：0/false/no/off 为 false，其余非空值为 true
pub fn env_bool_with<F>(lookup: F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match env_optional_with(lookup, key) {
        Some(s) => !matches!(s.to_lowercase().as_str(), "0" | "false" | "no" | "off"),
        None => default,
    }
}
