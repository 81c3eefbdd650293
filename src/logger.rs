//! File logging setup.
//!
//! A TUI owns the terminal, so log output goes to a file instead of stderr.
//! Logging is off unless enabled in the `[logging]` config table.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Default log file location under the XDG data dir.
pub fn default_log_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("tasklens").join("tasklens.log"))
}

/// Initialize fern file logging according to the logging config.
///
/// Does nothing when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = match &config.file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to install logger")?;

    log::info!("logging initialized, writing to {}", path.display());
    Ok(())
}
