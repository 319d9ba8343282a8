//! Runtime validation of loaded configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use locres_common::LocaleTag;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> ConfigResult<()> {
        let locales = &config.locales;

        if locales.extension.is_empty() || locales.extension.contains('.') {
            return Err(ConfigError::invalid(
                "locales.extension",
                format!("expected a bare extension such as 'toml', got '{}'", locales.extension),
            ));
        }

        LocaleTag::new(locales.default_locale.as_str())
            .map_err(|e| ConfigError::invalid("locales.default_locale", e.to_string()))?;

        for (index, file) in locales.files.iter().enumerate() {
            if file.path.as_os_str().is_empty() {
                return Err(ConfigError::invalid(
                    format!("locales.files[{index}].path"),
                    "path cannot be empty",
                ));
            }
        }

        if config.logging.level.trim().is_empty() {
            return Err(ConfigError::invalid("logging.level", "level cannot be empty"));
        }

        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate(self)
    }

    /// The configured default locale as a tag.
    pub fn default_locale(&self) -> ConfigResult<LocaleTag> {
        LocaleTag::new(self.locales.default_locale.as_str())
            .map_err(|e| ConfigError::invalid("locales.default_locale", e.to_string()))
    }
}
