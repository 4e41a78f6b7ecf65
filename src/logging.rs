//! Tracing setup.
//!
//! The terminal belongs to the TUI, so events go to a log file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable that takes precedence over configured log levels.
pub const LOG_ENV: &str = "SCOREPAD_LOG";

/// Default log file: `<cache_dir>/scorepad/scorepad.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("scorepad").join("scorepad.log")
}

/// Build the filter: `SCOREPAD_LOG` if set and valid, else `level`, else "info".
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Returns the log file in use, or `None` if
/// logging had to be disabled.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let path = config.file.clone().unwrap_or_else(default_log_path);

    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("scorepad: logging disabled, cannot create {}: {err}", parent.display());
            return None;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("scorepad: logging disabled, cannot open {}: {err}", path.display());
            return None;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.level))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init();

    match installed {
        Ok(()) => Some(path),
        Err(err) => {
            eprintln!("scorepad: logging disabled: {err}");
            None
        }
    }
}
