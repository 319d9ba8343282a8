//! Configuration error types.

/// Errors raised while loading or validating configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        /// Configuration file path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the schema.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        /// Configuration file path.
        path: String,
        /// Parser error from `toml`.
        #[source]
        source: toml::de::Error,
    },

    /// A setting has an unusable value.
    #[error("Invalid configuration for '{field}': {message}")]
    Invalid {
        /// Dotted path of the offending setting.
        field: String,
        /// What is wrong with it.
        message: String,
    },
}

impl ConfigError {
    /// Create a validation error for `field`.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
