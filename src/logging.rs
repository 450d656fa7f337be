/// Logging setup for the `isostamp` binary.
///
/// Logs go to stderr by default, or to `{log_dir}/isostamp.log` when a log
/// directory is given. Each session written to a file starts with a separator.
use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "isostamp.log";

/// Initializes the global tracing subscriber.
///
/// # Arguments
///
/// * `log_dir` - Directory for the log file; stderr when `None`
/// * `verbose` - Default to `debug` instead of `info` when `RUST_LOG` is unset
pub fn init_logging(log_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            write_session_separator(dir)?;

            let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_line_number(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .try_init()
                .ok(); // Ignore error if already initialized
        }
        None => {
            let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .ok();
        }
    }

    tracing::debug!(log_dir = ?log_dir, "logging initialized");
    Ok(())
}

fn write_session_separator(dir: &Path) -> Result<()> {
    use std::io::Write;

    let path = dir.join(LOG_FILE_NAME);
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    writeln!(
        file,
        "{sep}\n[{ts}] New isostamp session\n{sep}",
        sep = "=".repeat(80),
        ts = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S"),
    )
    .with_context(|| format!("Failed to write log file: {}", path.display()))?;
    Ok(())
}
