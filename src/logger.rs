use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application.
///
/// Entries are kept in memory for the log viewer and forwarded to the `log`
/// facade, which writes them to a file when file logging is enabled.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// In-memory logger without a file backend
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: None,
        }
    }

    /// Build a logger from configuration, installing the file backend if enabled
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        if !config.enabled {
            return Ok(Self::new());
        }
        Self::with_log_file(config, Self::get_log_file_path()?)
    }

    /// Logger writing to `path` at the configured level
    pub fn with_log_file(config: &LoggingConfig, path: PathBuf) -> Result<Self> {
        install_file_backend(&path, config.level_filter()?)?;
        Ok(Self {
            log_file: Some(path),
            ..Self::new()
        })
    }

    /// Add a log entry
    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    /// Path of the log file, if file logging is enabled
    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Location of the log file inside the local data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn install_file_backend(path: &Path, level: log::LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file);

    // Only one backend can be installed per process; a second install keeps the first.
    if dispatch.apply().is_err() {
        log::debug!("log backend already installed, keeping existing one");
    }

    Ok(())
}
