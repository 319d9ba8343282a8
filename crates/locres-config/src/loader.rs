//! Configuration loading from TOML files.

use crate::defaults::CONFIG_ENV_VAR;
use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration loader.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates configuration from file.
    ///
    /// Relative locale paths are resolved against the configuration file's
    /// directory.
    pub fn load(&self) -> ConfigResult<Config> {
        debug!("Loading configuration from {:?}", self.path);

        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.display().to_string(),
            source,
        })?;

        let mut config = Self::parse(&self.path.display().to_string(), &content)?;
        if let Some(base) = self.path.parent() {
            config.resolve_paths(base);
        }
        config.validate()?;

        info!("Loaded configuration from {:?}", self.path);
        Ok(config)
    }

    /// Parses configuration content without validating it.
    pub fn parse(source_name: &str, content: &str) -> ConfigResult<Config> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: source_name.to_string(),
            source,
        })
    }

    /// Loads the file named by `LOCRES_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> ConfigResult<Config> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::new(path).load(),
            None => {
                debug!("{} not set, using default configuration", CONFIG_ENV_VAR);
                Ok(Config::default())
            }
        }
    }
}

impl Config {
    /// Makes relative locale paths relative to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if let Some(dir) = self.locales.directory.as_mut() {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
        for file in &mut self.locales.files {
            if file.path.is_relative() {
                file.path = base.join(&file.path);
            }
        }
    }
}
