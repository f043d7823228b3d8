//! Configuration loading
//!
//! Picks a parser from the file extension, deserializes, normalizes and validates.

use std::path::Path;

use tracing::{debug, info};

use crate::config::BoardConfig;
use crate::error::{ConfigError, ConfigResult};

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl ConfigFormat {
    /// Map a path's extension to a format, if it is one we recognize.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

/// Entry point for reading board configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load, normalize and validate a configuration file.
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<BoardConfig> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            ConfigError::UnsupportedFormat(
                path.extension()
                    .and_then(|e| e.to_str())
                    .map(str::to_string),
            )
        })?;

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?format, "read board config");

        let config = Self::load_from_str(&contents, format)?;
        info!(path = %path.display(), "loaded board config");
        Ok(config)
    }

    /// Parse `contents` in the given format, then normalize and validate.
    pub fn load_from_str(contents: &str, format: ConfigFormat) -> ConfigResult<BoardConfig> {
        let config = match format {
            ConfigFormat::Toml => Self::parse_toml(contents)?,
            ConfigFormat::Json => serde_json::from_str(contents)?,
            ConfigFormat::Yaml => Self::parse_yaml(contents)?,
        };
        let config = config.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML text.
    pub fn from_toml_str(contents: &str) -> ConfigResult<BoardConfig> {
        Self::load_from_str(contents, ConfigFormat::Toml)
    }

    /// Parse JSON text.
    pub fn from_json_str(contents: &str) -> ConfigResult<BoardConfig> {
        Self::load_from_str(contents, ConfigFormat::Json)
    }

    /// Render a configuration as TOML.
    #[cfg(feature = "toml")]
    pub fn to_toml_string(config: &BoardConfig) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(config)?)
    }

    #[cfg(feature = "toml")]
    fn parse_toml(contents: &str) -> ConfigResult<BoardConfig> {
        Ok(toml::from_str(contents)?)
    }

    #[cfg(not(feature = "toml"))]
    fn parse_toml(_contents: &str) -> ConfigResult<BoardConfig> {
        Err(ConfigError::UnsupportedFormat(Some("toml".to_string())))
    }

    #[cfg(feature = "yaml")]
    fn parse_yaml(contents: &str) -> ConfigResult<BoardConfig> {
        Ok(serde_yaml::from_str(contents)?)
    }

    #[cfg(not(feature = "yaml"))]
    fn parse_yaml(_contents: &str) -> ConfigResult<BoardConfig> {
        Err(ConfigError::UnsupportedFormat(Some("yaml".to_string())))
    }
}
