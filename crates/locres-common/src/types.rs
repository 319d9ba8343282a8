//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;

/// A locale tag such as `en-US` or `zh-CN`.
///
/// Tags are compared verbatim: `en-US`, `en-us` and `en` are three unrelated
/// namespaces. No normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Creates a locale tag, rejecting empty input, whitespace and path separators.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if tag.is_empty()
            || tag
                .chars()
                .any(|c| c.is_whitespace() || c == '/' || c == '\\')
        {
            return Err(LocresError::InvalidLocale(tag));
        }
        Ok(Self(tag))
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleTag {
    type Err = LocresError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = LocresError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LocaleTag {
    type Error = LocresError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.0
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocaleTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identifier of one localizable message template, e.g. `efast.err.in.approval`.
///
/// A key only has to be non-empty; it does not have to exist in any loaded
/// resource table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceKey(Cow<'static, str>);

impl ResourceKey {
    /// Creates a resource key from owned or borrowed input.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(LocresError::InvalidResourceKey(key));
        }
        Ok(Self(Cow::Owned(key)))
    }

    /// Creates a resource key from a static string, usable in `const` items.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty. In a `const` context this is a compile error.
    #[must_use]
    pub const fn from_static(key: &'static str) -> Self {
        assert!(!key.is_empty(), "resource key must not be empty");
        Self(Cow::Borrowed(key))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ResourceKey {
    type Err = LocresError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ResourceKey {
    type Error = LocresError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ResourceKey {
    type Error = LocresError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ResourceKey> for String {
    fn from(key: ResourceKey) -> Self {
        key.0.into_owned()
    }
}

impl AsRef<str> for ResourceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Common result type for validation in this crate.
pub type Result<T> = std::result::Result<T, LocresError>;

/// Validation errors for the shared domain types.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocresError {
    /// Locale tag was empty or contained whitespace or a path separator.
    #[error("Invalid locale tag: {0:?}")]
    InvalidLocale(String),

    /// Resource key was empty.
    #[error("Invalid resource key: {0:?}")]
    InvalidResourceKey(String),
}
