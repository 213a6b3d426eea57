use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// `PEONY_LOG` when it parses, else the configured `log.filter`.
fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env("PEONY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(settings.log.filter.as_str()))
}

/// Route `tracing` output to the log file; the terminal belongs to the TUI.
///
/// Returns the log path, or `None` when no location could be resolved
/// (logging stays disabled).
pub fn init_tracing(settings: &Settings) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    let Some(path) = settings.log_path() else {
        return Ok(None);
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(Some(path))
}
