#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Wirecode Configuration
//!
//! Loads and saves the TOML file that tells the generator where the
//! declaration file lives, where generated sources go, which target
//! languages to emit, and how verbose logging should be.
//!
//! Every section is optional; missing sections and keys fall back to the
//! values of [`Config::default`]. Command-line flags take precedence over
//! anything read here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::Lang;

/// Directory name used under the user's config directory.
const APP_DIR: &str = "wirecode";

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Configuration file was not found at the specified path
    #[error("Config file not found at: {0}")]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where service declarations are read from
    pub declarations: DeclarationsConfig,
    /// Code generation settings
    pub codegen: CodegenConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Declaration input configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclarationsConfig {
    /// Path to the JSON declaration file (resources/protocol.json)
    pub input_path: PathBuf,
}

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Root directory for generated sources; each language gets a subdirectory
    pub output_dir: PathBuf,
    /// Target languages to emit
    pub languages: Vec<Lang>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines instead of compact text
    pub json: bool,
    /// Log file path (optional)
    pub file: Option<PathBuf>,
}

impl Default for DeclarationsConfig {
    fn default() -> Self { Self { input_path: PathBuf::from("resources/protocol.json") } }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self { output_dir: Config::default_output_dir(), languages: vec![Lang::host()] }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "info".to_string(), json: false, file: None } }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load the configuration at `path` if given, else the file at
    /// [`Config::default_path`] if it exists, else the defaults.
    ///
    /// An explicitly requested file that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Ok(default) if default.exists() => Self::from_file(default),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/wirecode/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join(APP_DIR);
        Ok(config_dir.join("config.toml"))
    }

    /// Get the default output directory for generated code
    pub fn default_output_dir() -> PathBuf {
        Self::default_output_dir_internal(
            std::env::var("OUT_DIR").ok(),
            std::env::current_dir().ok(),
        )
    }

    /// Build scripts write under `OUT_DIR`; everything else under `./generated`.
    fn default_output_dir_internal(
        out_dir: Option<String>,
        current_dir: Option<PathBuf>,
    ) -> PathBuf {
        if let Some(out_dir) = out_dir {
            return PathBuf::from(out_dir).join("wirecode");
        }

        current_dir.unwrap_or_else(|| PathBuf::from(".")).join("generated")
    }
}
