//! Error types for locale resource loading

use thiserror::Error;

/// Errors that can occur while ingesting locale resources
#[derive(Error, Debug)]
pub enum I18nError {
    /// A locale definition file could not be opened or read
    #[error("Failed to read resource file {path}: {source}")]
    ResourceRead {
        /// File that was requested.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A locale definition file is not a well-formed key/value table
    #[error("Failed to parse resource file {path}: {source}")]
    ResourceParse {
        /// File or source name that was parsed.
        path: String,
        /// Parser error from `toml`.
        #[source]
        source: toml::de::Error,
    },

    /// A locale directory could not be enumerated
    #[error("Failed to read locale directory {path}: {source}")]
    DirectoryRead {
        /// Directory that was scanned.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl I18nError {
    /// Whether this error belongs to the resource-load class (read or parse failure)
    #[must_use]
    pub const fn is_resource_load(&self) -> bool {
        matches!(self, Self::ResourceRead { .. } | Self::ResourceParse { .. })
    }

    /// Path of the file or directory involved
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::ResourceRead { path, .. }
            | Self::ResourceParse { path, .. }
            | Self::DirectoryRead { path, .. } => path,
        }
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
