use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: OnceLock<()> = OnceLock::new();
static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the logger. Later calls are no-ops.
///
/// Events go to `walfox.log` in the XDG state directory. Output on stdout is
/// the command's result, so logging never writes there; when the log file
/// cannot be opened, events go to stderr instead.
pub fn init() -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    init_inner()?;
    let _ = INIT.set(());
    Ok(())
}

fn init_inner() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match determine_log_path().and_then(|path| open_log_file(&path)) {
        Ok(writer) => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(false),
            )
            .try_init()
            .context("Failed to initialize tracing subscriber")?,
        Err(err) => {
            // Without a log file only warnings and errors are worth showing.
            tracing_subscriber::registry()
                .with(EnvFilter::new("warn"))
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .try_init()
                .context("Failed to initialize tracing subscriber")?;
            tracing::warn!(error = %err, "logging to stderr");
        }
    }

    Ok(())
}

fn open_log_file(log_path: &Path) -> Result<NonBlocking> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory at {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file at {}", log_path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    let _ = GUARD.set(guard);
    Ok(non_blocking)
}

fn determine_log_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("WALFOX_LOG_FILE")
        && !path.is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if let Ok(state_home) = std::env::var("XDG_STATE_HOME")
        && !state_home.is_empty()
    {
        return Ok(PathBuf::from(state_home).join("walfox").join("walfox.log"));
    }

    // ~/.local/state/walfox/walfox.log
    if let Some(home_dir) = home::home_dir() {
        return Ok(home_dir
            .join(".local")
            .join("state")
            .join("walfox")
            .join("walfox.log"));
    }

    Ok(std::env::current_dir()?.join("walfox.log"))
}

#[cfg(test)]
mod tests {
    use super::open_log_file;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_log_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("walfox.log");
        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn unopenable_log_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocked = dir.path().join("walfox.log");
        fs::create_dir(&blocked).unwrap();

        let err = open_log_file(&blocked).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
