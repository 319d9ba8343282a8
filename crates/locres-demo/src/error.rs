//! Application-wide error types using thiserror.

use locres_config::ConfigError;
use locres_i18n::I18nError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Locale resource error.
    #[error("Locale resource error: {0}")]
    I18n(#[from] I18nError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the demo application.
pub type DemoResult<T> = Result<T, DemoError>;
