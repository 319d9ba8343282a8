//! Handler-side rendering of structured errors into localized responses.

use crate::error::{ErrorSource, StructuredError};
use locres_i18n::LocaleRegistry;
use serde::Serialize;
use tracing::debug;

/// Serializable error body for a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Who is at fault.
    pub source: ErrorSource,
    /// Resource key of the message.
    pub key: String,
    /// Message localized for `locale`, or a placeholder naming `key`.
    pub message: String,
    /// Locale the message was resolved in.
    pub locale: String,
    /// `file:line` of the raising site, directories stripped.
    pub origin: String,
    /// Diagnostic tag.
    pub tag: String,
}

impl ErrorResponse {
    /// Resolve `error`'s resource key in `locale` and build the response body.
    pub fn render(error: &StructuredError, registry: &LocaleRegistry, locale: impl AsRef<str>) -> Self {
        let locale = locale.as_ref();
        let key = error.resource_key().as_str();
        let message = registry.localize(locale, key);

        debug!("Rendering {} error '{}' in {} at {}", error.source_kind(), key, locale, error.origin());

        Self {
            source: error.source_kind(),
            key: key.to_string(),
            message,
            locale: locale.to_string(),
            origin: error.origin().short(),
            tag: error.tag().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locres_common::{LocaleTag, ResourceKey};

    const APPROVAL: ResourceKey = ResourceKey::from_static("efast.err.in.approval");

    #[test]
    fn test_render_known_key() {
        let registry = LocaleRegistry::new();
        let en: LocaleTag = "en-US".parse().unwrap();
        registry
            .load_str(&en, "inline", r#""efast.err.in.approval" = "Approval failed""#)
            .unwrap();

        let err = StructuredError::client("src/handlers/approval.rs", 88, "eofs", APPROVAL);
        let response = ErrorResponse::render(&err, &registry, &en);

        assert_eq!(response.source, ErrorSource::Client);
        assert_eq!(response.message, "Approval failed");
        assert_eq!(response.origin, "approval.rs:88");
        assert_eq!(response.locale, "en-US");
    }

    #[test]
    fn test_render_unknown_locale_uses_placeholder() {
        let registry = LocaleRegistry::new();
        let err = StructuredError::server("lib.rs", 1, "db", APPROVAL);
        let response = ErrorResponse::render(&err, &registry, "de-DE");

        assert_eq!(response.message, locres_i18n::missing_placeholder("efast.err.in.approval"));
        assert_eq!(response.source, ErrorSource::Server);
    }
}
