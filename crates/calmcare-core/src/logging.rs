//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "CALMCARE_LOG";

const LOG_FILE_NAME: &str = "calmcare.log";

/// Initialize the logging subsystem
///
/// Logs roll daily into `~/.local/share/calmcare/logs/calmcare.log.YYYY-MM-DD`
/// so they never interleave with the TUI. Log level is controlled by `CALMCARE_LOG`.
///
/// # Examples
/// ```bash
/// CALMCARE_LOG=debug calmcare
/// CALMCARE_LOG=calmcare_app=trace calmcare --route /provider
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, warn for everything else
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("CalmCare starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

fn default_filter() -> &'static str {
    "calmcare=info,calmcare_core=info,calmcare_app=info,calmcare_tui=info,warn"
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("calmcare").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_calmcare_dir() {
        assert!(get_log_directory().ends_with("calmcare/logs"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(default_filter()).is_ok());
    }
}
