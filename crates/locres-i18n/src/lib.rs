//! # Locres I18n
//!
//! Runtime localization of message templates keyed by resource identifier.
//!
//! This crate provides:
//!
//! - Per-locale resource tables with last-write-wins merging
//! - Locale definition file reading (TOML key/value tables)
//! - A locale registry with file and directory ingestion
//! - Exact-match lookup that degrades to a visible placeholder on a miss
//!
//! # Example
//!
//! ```rust
//! use locres_common::{LocaleTag, ResourceKey};
//! use locres_i18n::LocaleRegistry;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = LocaleRegistry::new();
//! let en: LocaleTag = "en-US".parse()?;
//! registry.load_str(&en, "inline", r#""efast.err.in.approval" = "Approval failed""#)?;
//!
//! let key = ResourceKey::new("efast.err.in.approval")?;
//! assert_eq!(registry.localize(&en, &key), "Approval failed");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod reader;
pub mod registry;
pub mod table;

pub use error::{I18nError, I18nResult};
pub use registry::{missing_placeholder, LoadFailure, LoadReport, LocaleRegistry, DEFAULT_EXTENSION};
pub use table::ResourceTable;
