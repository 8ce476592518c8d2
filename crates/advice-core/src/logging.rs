//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "advice.log";

const LOG_ENV_VAR: &str = "ADVICE_LOG";

/// Used when `ADVICE_LOG` is unset or invalid
const DEFAULT_FILTER: &str =
    "advice_dice=info,advice_app=info,advice_client=info,advice_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/advice-dice/logs/` since the TUI owns
/// the terminal. Log level is controlled by the `ADVICE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// ADVICE_LOG=debug cargo run
/// ADVICE_LOG=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let directives = std::env::var(LOG_ENV_VAR).ok();
    let env_filter = filter_from(directives.as_deref());

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

    tracing::info!(
        "Advice Dice {} logging to {} (filter: {})",
        env!("CARGO_PKG_VERSION"),
        log_dir.display(),
        directives.as_deref().unwrap_or(DEFAULT_FILTER)
    );

    Ok(())
}

/// Build the filter from `ADVICE_LOG` directives, falling back to the
/// per-crate defaults
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("advice-dice").join("logs")
}

/// Get the log file path (rolling appender appends the date suffix)
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_app_dir() {
        let path = get_current_log_file();
        assert!(path.ends_with("advice-dice/logs/advice.log"));
    }

    #[test]
    fn test_default_filter_covers_every_crate() {
        let filter = filter_from(None).to_string().to_lowercase();
        for target in ["advice_dice", "advice_app", "advice_client", "advice_tui"] {
            assert!(filter.contains(&format!("{}=info", target)), "{}", filter);
        }
    }

    #[test]
    fn test_blank_directives_use_default() {
        let filter = filter_from(Some("  ")).to_string().to_lowercase();
        assert!(filter.contains("advice_app=info"));
    }

    #[test]
    fn test_directives_override_default() {
        let filter = filter_from(Some("advice_client=trace"))
            .to_string()
            .to_lowercase();
        assert!(filter.contains("advice_client=trace"));
        assert!(!filter.contains("advice_app=info"));
    }
}
