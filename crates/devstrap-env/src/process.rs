use anyhow::{Context, Result};
use std::process::Command;

/// Run `cmd` to completion; a non-zero exit becomes an error carrying the tool's output.
pub(crate) fn run_tool(mut cmd: Command, what: &str) -> Result<()> {
    tracing::debug!(command = ?cmd, "Running {}", what);
    let out = cmd
        .output()
        .with_context(|| format!("Failed to execute {}", what))?;

    let stdout = String::from_utf8_lossy(&out.stdout);
    if !stdout.trim().is_empty() {
        tracing::debug!("{} stdout:\n{}", what, stdout.trim_end());
    }

    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        let detail = if stderr.trim().is_empty() {
            stdout.trim()
        } else {
            stderr.trim()
        };
        anyhow::bail!("{} failed ({}): {}", what, out.status, detail);
    }

    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Command {
        let mut c = Command::new("sh");
        c.arg("-c").arg(script);
        c
    }

    #[test]
    fn test_success() {
        run_tool(sh("echo ok"), "echo").unwrap();
    }

    #[test]
    fn test_failure_carries_stderr() {
        let err = run_tool(sh("echo boom >&2; exit 3"), "boom tool").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("boom tool failed"));
        assert!(msg.ends_with("boom"));
    }

    #[test]
    fn test_failure_falls_back_to_stdout() {
        let err = run_tool(sh("echo only-stdout; exit 1"), "quiet tool").unwrap_err();
        assert!(err.to_string().ends_with("only-stdout"));
    }

    #[test]
    fn test_missing_binary() {
        let err = run_tool(Command::new("/nonexistent/devstrap-tool"), "missing").unwrap_err();
        assert!(err.to_string().contains("Failed to execute missing"));
    }
}
