//! File logging for the terminal client.
//!
//! The terminal is owned by the UI, so all tracing output goes to a
//! per-session log file instead of stderr.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

/// Installs the global subscriber writing to `<log dir>/wormhole-<session>.log`.
///
/// The returned guard flushes buffered lines on drop and must be held for
/// the lifetime of the program.
pub fn setup_logging(config: &CliConfig) -> Result<WorkerGuard> {
    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let session_id = config.session_id.clone().unwrap_or_else(timestamp_session_id);
    let file_name = log_file_name(&session_id);

    let file_appender = tracing_appender::rolling::never(&log_dir, &file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_path(&log_dir, &session_id).display());

    Ok(guard)
}

/// Platform cache directory for log files.
///
/// - macOS: `~/Library/Caches/wormhole/logs`
/// - Linux: `~/.cache/wormhole/logs` (or `$XDG_CACHE_HOME/wormhole/logs`)
/// - Windows: `%LOCALAPPDATA%\wormhole\cache\logs`
/// - Fallback: `/tmp/wormhole/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "wormhole")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/wormhole"))
        .join("logs")
}

pub fn log_file_name(session_id: &str) -> String {
    format!("wormhole-{session_id}.log")
}

pub fn log_path(log_dir: &Path, session_id: &str) -> PathBuf {
    log_dir.join(log_file_name(session_id))
}

fn timestamp_session_id() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{secs}")
}
