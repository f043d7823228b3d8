use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// TOML input did not parse into a board configuration.
    #[cfg(feature = "toml")]
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration could not be serialized back to TOML.
    #[cfg(feature = "toml")]
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON input did not parse into a board configuration.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML input did not parse into a board configuration.
    #[cfg(feature = "yaml")]
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension does not map to an enabled format.
    #[error("unsupported config format: {0:?}")]
    UnsupportedFormat(Option<String>),

    /// A value parsed but falls outside its allowed range.
    #[error("invalid value for '{field}': {reason}")]
    Invalid {
        /// Dotted option path, e.g. `modal.pct_width`.
        field: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the config crate.
pub type ConfigResult<T> = Result<T, ConfigError>;
