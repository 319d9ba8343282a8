//! Default values.

use crate::schema::{Config, LocalesConfig};
use locres_common::logging::LoggingConfig;

/// Default locale file extension.
pub const DEFAULT_EXTENSION: &str = "toml";

/// Default locale.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "LOCRES_CONFIG";

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: LocalesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            directory: None,
            files: Vec::new(),
            extension: DEFAULT_EXTENSION.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}
