//! Configuration loading from files

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::{Config, Result, Validate};

/// Format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Default config file names probed by [`Config::load`], in order
const DEFAULT_PATHS: &[&str] = &[
    ".docsplit.yml",
    ".docsplit.yaml",
    ".docsplit.toml",
    ".docsplit.json",
];

impl Config {
    /// Load configuration from the default location
    ///
    /// Probes `.docsplit.{yml,yaml,toml,json}` in the current directory and
    /// falls back to defaults when none exists.
    pub fn load() -> Result<Config> {
        for candidate in DEFAULT_PATHS {
            let path = Path::new(candidate);
            if path.exists() {
                return Config::from_file(path);
            }
        }
        Ok(Config::default())
    }

    /// Load configuration from a specific file
    ///
    /// The format is detected from the file extension. The configuration is
    /// validated before being returned.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let format = detect_format(path)?;

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let path_str = path.display().to_string();
        let config: Config = match format {
            ConfigFormat::Yaml => {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlError {
                    path: path_str,
                    message: e.to_string(),
                })?
            }
            ConfigFormat::Toml => {
                toml::from_str(&content).map_err(|e| ConfigError::TomlError {
                    path: path_str,
                    message: e.to_string(),
                })?
            }
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| ConfigError::JsonError {
                    path: path_str,
                    message: e.to_string(),
                })?
            }
        };

        config.validate()?;
        Ok(config)
    }
}

/// Detect configuration format from file extension
fn detect_format(path: &Path) -> Result<ConfigFormat> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yml") | Some("yaml") => Ok(ConfigFormat::Yaml),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some("json") => Ok(ConfigFormat::Json),
        _ => Err(ConfigError::UnknownFormat {
            path: path.to_path_buf(),
        }),
    }
}
