//! Application configuration, loaded from a `config.toml` file.
//!
//! Every section is optional; missing values fall back to the defaults below.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use fograph_layout::LayoutOptions;

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, DEFAULT_COMMIT_RADIUS};
use crate::error::{FographError, Result};

/// Settings for the SVG output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Radius of the circle drawn for each commit.
    #[serde(default = "default_commit_radius")]
    pub commit_radius: f64,
    /// CSS file embedded instead of the built-in stylesheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<PathBuf>,
}

fn default_commit_radius() -> f64 {
    DEFAULT_COMMIT_RADIUS
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            commit_radius: default_commit_radius(),
            stylesheet: None,
        }
    }
}

/// Which commits are read and how they are labelled.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Keep only the newest `max_count` commits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<usize>,
    /// Walk every local branch instead of `HEAD` only.
    #[serde(default)]
    pub all_refs: bool,
    /// Prefix labels with the commit date.
    #[serde(default)]
    pub show_dates: bool,
}

/// Top-level configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub layout: LayoutOptions,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Returns the default path to the configuration file.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| FographError::Config("Could not find config directory".to_string()))?
        .join(APP_NAME);
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Gets the configuration path by checking ENV, override, or default location.
pub fn get_config_path_or_default(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        debug!("Using override config path: {}", path.display());
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        debug!("Using config path from ENV: {}", env_path);
        return Ok(PathBuf::from(env_path));
    }
    get_config_path()
}

/// Loads the configuration from an explicit path or the default location.
///
/// A missing file at the default location yields the defaults. A missing
/// file that was asked for explicitly is an error, as is a file that exists
/// but cannot be read or parsed.
pub fn load_config(override_path: Option<&Path>) -> Result<AppConfig> {
    let explicit = override_path.is_some();
    let config_file_path = get_config_path_or_default(override_path)?;
    debug!("Attempting to load config from: {}", config_file_path.display());

    if !config_file_path.exists() {
        if explicit {
            return Err(FographError::Config(format!(
                "Config file '{}' does not exist",
                config_file_path.display()
            )));
        }
        info!(
            "Config file not found at '{}'. Using defaults.",
            config_file_path.display()
        );
        return Ok(AppConfig::default());
    }

    info!("Loading config from '{}'", config_file_path.display());
    let content = fs::read_to_string(&config_file_path)?;
    let config = parse_config(&content)?;
    debug!("Parsed config successfully: {:?}", config);
    Ok(config)
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    /// Reject values that would produce a broken drawing.
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        if !self.render.commit_radius.is_finite() || self.render.commit_radius <= 0.0 {
            return Err(FographError::Config(format!(
                "render.commit_radius must be a positive number, got {}",
                self.render.commit_radius
            )));
        }
        if self.history.max_count == Some(0) {
            return Err(FographError::Config(
                "history.max_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
