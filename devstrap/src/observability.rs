//! Observability: tracing init and audit log.
//!
//! Uses config::ObservabilityConfig for DEVSTRAP_QUIET, LOG_LEVEL, LOG_JSON, AUDIT_LOG.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use devstrap_core::config::ObservabilityConfig;
use devstrap_core::{BootstrapError, BootstrapTarget};
use serde_json::json;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Initialize tracing. Call at process startup, after `.env` is loaded.
/// `RUST_LOG` wins over DEVSTRAP_LOG_LEVEL; quiet keeps only WARN and above.
pub fn init_tracing(cfg: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.effective_level()));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}

/// Appends one JSON line per bootstrap event when DEVSTRAP_AUDIT_LOG is set.
pub struct AuditLog {
    path: Option<String>,
}

impl AuditLog {
    pub fn from_config(cfg: &ObservabilityConfig) -> Self {
        Self {
            path: cfg.audit_log.clone().filter(|p| !p.is_empty()),
        }
    }

    pub fn started(&self, target: &BootstrapTarget) {
        self.append(json!({
            "event": "bootstrap_started",
            "project_dir": target.project_dir.display().to_string(),
            "env_path": target.env_path.display().to_string(),
        }));
    }

    pub fn succeeded(&self, target: &BootstrapTarget) {
        self.append(json!({
            "event": "bootstrap_succeeded",
            "project_dir": target.project_dir.display().to_string(),
            "env_path": target.env_path.display().to_string(),
        }));
    }

    pub fn failed(&self, err: &BootstrapError) {
        self.append(json!({
            "event": "bootstrap_failed",
            "step": err.step().as_str(),
            "exit_code": err.exit_code(),
            "error": err.to_string(),
        }));
    }

    fn append(&self, mut record: serde_json::Value) {
        let Some(ref path) = self.path else {
            return;
        };
        record["ts"] = json!(Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true));
        // Parent directory is created on first write only.
        if let Some(parent) = Path::new(path).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
            if let Ok(line) = serde_json::to_string(&record) {
                let _ = writeln!(f, "{}", line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cfg_with_audit(path: Option<String>) -> ObservabilityConfig {
        ObservabilityConfig {
            quiet: false,
            log_level: "devstrap=info".to_string(),
            log_json: false,
            audit_log: path,
        }
    }

    fn target() -> BootstrapTarget {
        BootstrapTarget {
            project_dir: PathBuf::from("/home/u/myapp"),
            manifest: PathBuf::from("/home/u/myapp/requirements.txt"),
            env_path: PathBuf::from("/opt/envs/myapp"),
        }
    }

    #[test]
    fn test_audit_log_appends_jsonl() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logs").join("audit.jsonl");
        let audit = AuditLog::from_config(&cfg_with_audit(Some(path.display().to_string())));
        assert!(!tmp.path().join("logs").exists());

        audit.started(&target());
        audit.failed(&BootstrapError::DependencyInstall {
            manifest: PathBuf::from("/home/u/myapp/requirements.txt"),
            env_path: PathBuf::from("/home/u/myapp"),
            reason: "manifest not found".to_string(),
        });

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["event"], "bootstrap_started");
        assert_eq!(records[0]["project_dir"], "/home/u/myapp");
        assert_eq!(records[0]["env_path"], "/opt/envs/myapp");
        assert_eq!(records[1]["event"], "bootstrap_failed");
        assert_eq!(records[1]["step"], "install-dependencies");
        assert_eq!(records[1]["exit_code"], 4);
        assert!(records[1]["ts"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_audit_log_disabled_writes_nothing() {
        let audit = AuditLog::from_config(&cfg_with_audit(None));
        audit.succeeded(&target());
        assert!(audit.path.is_none());
    }
}
