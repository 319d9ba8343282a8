//! Structured error value shared by service handlers.

use locres_common::{file_name, ResourceKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Who is at fault for an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSource {
    /// Caused by caller input.
    Client,
    /// Caused by an internal or service failure.
    Server,
}

impl ErrorSource {
    /// Lowercase name, as used in rendered responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for ErrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source location where an error was raised.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    file: String,
    line: u32,
}

impl Origin {
    /// Create an origin from a file path and line number.
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// File path as given at construction.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// File path with directories stripped.
    #[must_use]
    pub fn file_name(&self) -> &str {
        file_name(&self.file)
    }

    /// `file_name:line`, suitable for user-facing output.
    #[must_use]
    pub fn short(&self) -> String {
        format!("{}:{}", self.file_name(), self.line)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Attributes common to both error classifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    origin: Origin,
    tag: String,
    resource_key: ResourceKey,
}

impl ErrorDetail {
    /// Bundle an origin, a diagnostic tag and a resource key.
    pub fn new(origin: Origin, tag: impl Into<String>, resource_key: ResourceKey) -> Self {
        Self {
            origin,
            tag: tag.into(),
            resource_key,
        }
    }

    /// Where the error was raised.
    #[must_use]
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Free-form diagnostic tag for log correlation. Never localized.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Key of the localizable message describing the error.
    #[must_use]
    pub const fn resource_key(&self) -> &ResourceKey {
        &self.resource_key
    }
}

/// An error attributed either to the caller or to the service.
///
/// The classification is fixed at construction. Handlers `match` on the
/// variant to decide how to respond, and pass [`resource_key`] to the
/// locale registry to obtain user-facing text.
///
/// [`resource_key`]: StructuredError::resource_key
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuredError {
    /// The caller is at fault.
    #[error("client error at {}: [{}] {}", .0.origin, .0.tag, .0.resource_key)]
    Client(ErrorDetail),

    /// The service is at fault.
    #[error("server error at {}: [{}] {}", .0.origin, .0.tag, .0.resource_key)]
    Server(ErrorDetail),
}

impl StructuredError {
    /// Create an error with the given classification.
    pub fn new(
        source: ErrorSource,
        file: impl Into<String>,
        line: u32,
        tag: impl Into<String>,
        resource_key: ResourceKey,
    ) -> Self {
        let detail = ErrorDetail::new(Origin::new(file, line), tag, resource_key);
        match source {
            ErrorSource::Client => Self::Client(detail),
            ErrorSource::Server => Self::Server(detail),
        }
    }

    /// Create a client-caused error. See also [`client_error!`](crate::client_error).
    pub fn client(
        file: impl Into<String>,
        line: u32,
        tag: impl Into<String>,
        resource_key: ResourceKey,
    ) -> Self {
        Self::new(ErrorSource::Client, file, line, tag, resource_key)
    }

    /// Create a server-caused error. See also [`server_error!`](crate::server_error).
    pub fn server(
        file: impl Into<String>,
        line: u32,
        tag: impl Into<String>,
        resource_key: ResourceKey,
    ) -> Self {
        Self::new(ErrorSource::Server, file, line, tag, resource_key)
    }

    /// Create a client-caused error for a request that conflicts with current state.
    pub fn conflict(
        file: impl Into<String>,
        line: u32,
        tag: impl Into<String>,
        resource_key: ResourceKey,
    ) -> Self {
        Self::client(file, line, tag, resource_key)
    }

    /// Shared attributes.
    #[must_use]
    pub const fn detail(&self) -> &ErrorDetail {
        match self {
            Self::Client(detail) | Self::Server(detail) => detail,
        }
    }

    /// Client or server classification.
    #[must_use]
    pub const fn source_kind(&self) -> ErrorSource {
        match self {
            Self::Client(_) => ErrorSource::Client,
            Self::Server(_) => ErrorSource::Server,
        }
    }

    /// Whether the caller is at fault.
    #[must_use]
    pub const fn is_client(&self) -> bool {
        matches!(self, Self::Client(_))
    }

    /// Whether the service is at fault.
    #[must_use]
    pub const fn is_server(&self) -> bool {
        matches!(self, Self::Server(_))
    }

    /// Where the error was raised.
    #[must_use]
    pub const fn origin(&self) -> &Origin {
        self.detail().origin()
    }

    /// File the error was raised in.
    #[must_use]
    pub fn file(&self) -> &str {
        self.origin().file()
    }

    /// Line the error was raised at.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.origin().line()
    }

    /// Diagnostic tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        self.detail().tag()
    }

    /// Key of the localizable message.
    #[must_use]
    pub const fn resource_key(&self) -> &ResourceKey {
        self.detail().resource_key()
    }
}

/// Result type for operations that fail with a [`StructuredError`].
pub type StructuredResult<T> = Result<T, StructuredError>;
