//! # Locres Common
//!
//! Shared types, utilities, and logging bootstrap for locres.
//!
//! This crate provides the foundational types used across all other crates
//! in the locres workspace: locale tags, resource keys, and the path helpers
//! used to derive locale tags from file names.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use types::*;
pub use utils::*;
