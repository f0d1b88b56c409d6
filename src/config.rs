//! Configuration management for ReEarth
//!
//! This module handles loading, parsing, and validation of the optional
//! configuration file. Every value has a default, so running without a file
//! behaves exactly like the built-in settings.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_PRIMARY_SYMBOLS_IMAGE, DEFAULT_PRIMARY_SYMBOLS_SIZE,
    DEFAULT_SECONDARY_SYMBOLS_IMAGE, DEFAULT_SECONDARY_SYMBOLS_SIZE, MAX_SYMBOLS_IMAGE_EDGE,
};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub symbols: SymbolsConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (clickable buttons and tabs)
    pub mouse_enabled: bool,
}

/// Images shown by the recycling symbols window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SymbolsConfig {
    /// Upper image
    pub primary: ImageSpec,
    /// Lower image
    pub secondary: ImageSpec,
}

/// An image file and the pixel size it is resized to before display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageSpec {
    /// Path relative to the working directory, or absolute
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write log records to a file
    pub enabled: bool,
    /// Minimum level written to the log file ("error" .. "trace")
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { mouse_enabled: true }
    }
}

impl ImageSpec {
    pub fn new(path: impl Into<PathBuf>, (width, height): (u32, u32)) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            primary: ImageSpec::new(DEFAULT_PRIMARY_SYMBOLS_IMAGE, DEFAULT_PRIMARY_SYMBOLS_SIZE),
            secondary: ImageSpec::new(DEFAULT_SECONDARY_SYMBOLS_IMAGE, DEFAULT_SECONDARY_SYMBOLS_SIZE),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level. Call [`Config::validate`] first.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration, falling back to defaults when the file is broken.
    ///
    /// The load error is handed back so it can be logged once a logger exists.
    pub fn load_or_default() -> (Self, Option<anyhow::Error>) {
        Self::or_default(Self::load())
    }

    /// Unwrap a load result into a usable config and the error it replaced
    pub fn or_default(result: Result<Self>) -> (Self, Option<anyhow::Error>) {
        match result {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path()?;
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        Self::validate_image("symbols.primary", &self.symbols.primary)?;
        Self::validate_image("symbols.secondary", &self.symbols.secondary)?;
        self.logging.level_filter()?;
        Ok(())
    }

    fn validate_image(key: &str, spec: &ImageSpec) -> Result<()> {
        if spec.path.as_os_str().is_empty() {
            anyhow::bail!("{}.path cannot be empty", key);
        }

        for (name, value) in [("width", spec.width), ("height", spec.height)] {
            if value == 0 || value > MAX_SYMBOLS_IMAGE_EDGE {
                anyhow::bail!(
                    "{}.{} must be between 1 and {} pixels, got {}",
                    key,
                    name,
                    MAX_SYMBOLS_IMAGE_EDGE,
                    value
                );
            }
        }

        Ok(())
    }

    /// Get the default config file path inside the XDG config directory
    pub fn get_default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
    }
}
