//! Configuration management for tasklens
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub capture: CaptureConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Which pane has focus on startup: "input" or "list"
    pub initial_focus: String,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for task due dates
    pub date_format: String,
    /// Show the captured-photo panel below the list
    pub show_photo_panel: bool,
}

/// Camera capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// External capture command; empty means no camera access
    pub command: String,
    /// Arguments for the capture command. `{output}` and `{quality}`
    /// placeholders are substituted at launch time.
    pub args: Vec<String>,
    /// Allow the capture tool to offer editing before saving
    pub allows_editing: bool,
    /// Compression quality in the 0.0..=1.0 range
    pub quality: f32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
    /// Log file path; defaults to the XDG data dir when unset
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_focus: "input".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DATE_FORMAT.to_string(),
            show_photo_panel: true,
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            command: String::new(),
            args: vec!["{output}".to_string()],
            allows_editing: true,
            quality: 0.8,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("tasklens.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("tasklens").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_focus = ["input", "list"];
        if !valid_focus.contains(&self.ui.initial_focus.as_str()) {
            anyhow::bail!(
                "initial_focus must be one of {:?}, got '{}'",
                valid_focus,
                self.ui.initial_focus
            );
        }

        let mut items = chrono::format::StrftimeItems::new(&self.display.date_format);
        if items.any(|item| matches!(item, chrono::format::Item::Error)) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        if !(0.0..=1.0).contains(&self.capture.quality) {
            anyhow::bail!(
                "capture quality must be between 0.0 and 1.0, got {}",
                self.capture.quality
            );
        }

        // An empty capture command is allowed; the camera binding reports it
        // as a permission denial at capture time.

        Ok(())
    }

    /// Capture options derived from the `[capture]` table
    pub fn capture_options(&self) -> crate::capture::CaptureOptions {
        crate::capture::CaptureOptions {
            allows_editing: self.capture.allows_editing,
            quality: self.capture.quality,
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# tasklens Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("Generated default configuration file: {}", path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("tasklens"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
