//! Configuration file loading for the CLI
//!
//! This module finds and loads the optional TOML configuration file
//! (explicit path, then `godiagram.toml` in the working directory) and
//! applies its `[rendering]` table to [`RenderingOptions`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use godiagram::{ConfigError, OptionValue, RenderingOptions};

/// Configuration file looked up in the working directory
pub const LOCAL_CONFIG: &str = "godiagram.toml";

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to read {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
}

/// Contents of a configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Rendering option keys and values
    pub rendering: toml::Table,
    /// Package discovery settings
    pub load: LoadSection,
}

/// `[load]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadSection {
    pub recursive: bool,
    pub ignore: Vec<String>,
}

impl FileConfig {
    /// Apply the `[rendering]` table to `options`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unknown keys and values of the wrong kind.
    pub fn apply(&self, options: &mut RenderingOptions) -> Result<(), ConfigError> {
        for (key, value) in &self.rendering {
            options.set(key, option_value(key, value)?)?;
        }
        Ok(())
    }
}

fn option_value(key: &str, value: &toml::Value) -> Result<OptionValue, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: key.to_string(),
        expected: "boolean, string or list of strings",
    };
    match value {
        toml::Value::Boolean(flag) => Ok(OptionValue::Bool(*flag)),
        toml::Value::String(text) => Ok(OptionValue::Text(text.clone())),
        toml::Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()
            .map(OptionValue::List),
        _ => Err(invalid()),
    }
}

/// Find and load the configuration file
///
/// Search order:
/// 1. Explicit path if provided
/// 2. `godiagram.toml` in the working directory
/// 3. Empty configuration if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read or parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<FileConfig, ConfigFileError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    debug!("No configuration file found, using default configuration");
    Ok(FileConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: &Path) -> Result<FileConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::MissingFile(path.to_path_buf()));
    }

    let content =
        fs::read_to_string(path).map_err(|e| ConfigFileError::Io(path.to_path_buf(), e))?;
    parse_config(&content)
}

/// Parse the TOML text of a configuration file
pub fn parse_config(content: &str) -> Result<FileConfig, ConfigFileError> {
    toml::from_str(content).map_err(|e| ConfigFileError::Parse(e.to_string()))
}
