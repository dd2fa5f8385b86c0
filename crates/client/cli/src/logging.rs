//! Logging to stderr and to a per-session file.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the whole run.
pub fn setup_logging(session_id: &Option<String>, log_root: Option<PathBuf>) -> Result<WorkerGuard> {
    let log_dir = log_root.unwrap_or_else(default_log_directory);

    let session_id = session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "fight.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/fight.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory for logs.
///
/// - macOS: `~/Library/Caches/fight-sim/logs`
/// - Linux: `~/.cache/fight-sim/logs` (or `$XDG_CACHE_HOME/fight-sim/logs`)
/// - Windows: `%LOCALAPPDATA%\fight-sim\cache\logs`
/// - Fallback: `<temp dir>/fight-sim/logs`
fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "fight-sim")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("fight-sim"))
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_directory_is_project_scoped() {
        let dir = default_log_directory();
        assert!(dir.ends_with("logs"));
        assert!(dir.iter().any(|part| part.to_string_lossy().contains("fight-sim")));
    }
}
