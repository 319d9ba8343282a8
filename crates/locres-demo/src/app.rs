//! Demo application: the composition root that owns the locale registry.

use crate::error::DemoResult;
use locres_common::{file_name, LocaleTag, ResourceKey};
use locres_config::{Config, ConfigLoader, CONFIG_ENV_VAR};
use locres_i18n::LocaleRegistry;
use locres_rest::{conflict_error, ErrorResponse, StructuredError, StructuredResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Message shown when an approval is rejected.
pub const APPROVAL_FAILED: ResourceKey = ResourceKey::from_static("efast.err.in.approval");

/// Key that no locale file defines.
pub const UNKNOWN_KEY: ResourceKey = ResourceKey::from_static("efast.err.in.approvalxxxxxxxxxxxx");

/// Sample configuration shipped with the demo, next to its `locale/` directory.
#[must_use]
pub fn bundled_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("locres.toml")
}

/// Resolves the demo configuration.
///
/// An explicit `path` wins, then the file named by `LOCRES_CONFIG`, then the
/// bundled sample configuration.
pub fn load_config(path: Option<PathBuf>) -> DemoResult<Config> {
    let config = match path {
        Some(path) => ConfigLoader::new(path).load()?,
        None if std::env::var_os(CONFIG_ENV_VAR).is_some() => ConfigLoader::from_env()?,
        None => {
            let bundled = bundled_config_path();
            debug!("{} not set, using bundled configuration {:?}", CONFIG_ENV_VAR, bundled);
            ConfigLoader::new(bundled).load()?
        }
    };
    Ok(config)
}

/// Main demo structure.
pub struct DemoApp {
    config: Arc<Config>,
    registry: Arc<LocaleRegistry>,
}

impl DemoApp {
    /// Creates a new demo instance with an empty registry.
    pub fn new(config: Config) -> Self {
        let registry = LocaleRegistry::with_extension(config.locales.extension.clone());
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Shared handle to the registry.
    #[must_use]
    pub fn registry(&self) -> Arc<LocaleRegistry> {
        Arc::clone(&self.registry)
    }

    /// Loads configured files, then the configured directory.
    ///
    /// A configured file that fails to load is an error. Files in the
    /// directory that fail are logged and skipped.
    pub fn load_resources(&self) -> DemoResult<usize> {
        let locales = &self.config.locales;

        for file in &locales.files {
            self.registry.load_file(&file.locale, &file.path)?;
        }

        if let Some(dir) = &locales.directory {
            let report = self.registry.load_dir(dir)?;
            for failure in &report.failures {
                warn!("Skipped {:?}: {}", failure.path, failure.error);
            }
        }

        let loaded = self.registry.locales().len();
        info!("{} locales available", loaded);
        Ok(loaded)
    }

    /// Runs the demonstration and returns the lines it would print.
    pub fn run(&self) -> DemoResult<Vec<String>> {
        let mut lines = Vec::new();

        for locale in self.registry.locales() {
            lines.push(format!("{locale}: {}", self.registry.localize(&locale, &APPROVAL_FAILED)));
            lines.push(format!("{locale}: {}", self.registry.localize(&locale, &UNKNOWN_KEY)));
        }

        lines.push(file_name("../a/a.test:314").to_string());

        if let Err(err) = submit_approval() {
            lines.push(match &err {
                StructuredError::Client(detail) => format!("client error: {}", detail.resource_key()),
                StructuredError::Server(detail) => format!("server error: {}", detail.resource_key()),
            });

            let locale = self.config.default_locale()?;
            lines.push(self.render(&err, &locale)?);
        }

        Ok(lines)
    }

    /// Renders `err` as a JSON response body in `locale`.
    pub fn render(&self, err: &StructuredError, locale: &LocaleTag) -> DemoResult<String> {
        let response = ErrorResponse::render(err, &self.registry, locale);
        Ok(serde_json::to_string(&response)?)
    }
}

/// Stand-in for a business operation that rejects the request.
pub fn submit_approval() -> StructuredResult<()> {
    Err(conflict_error!("eofs", APPROVAL_FAILED))
}
