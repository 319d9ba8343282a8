//! Configuration schema definitions using serde.

use locres_common::logging::LoggingConfig;
use locres_common::LocaleTag;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale resource sources.
    pub locales: LocalesConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Where locale definition files come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalesConfig {
    /// Directory scanned for `<locale>.<extension>` files.
    pub directory: Option<PathBuf>,
    /// Individual files loaded before the directory is scanned.
    pub files: Vec<LocaleFileConfig>,
    /// Extension recognised when scanning `directory`.
    pub extension: String,
    /// Locale used when a caller does not specify one.
    pub default_locale: String,
}

/// One explicitly configured locale file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleFileConfig {
    /// Locale the file's entries are loaded into.
    pub locale: LocaleTag,
    /// Path to the file.
    pub path: PathBuf,
}
