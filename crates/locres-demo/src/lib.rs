//! # Locres Demo
//!
//! Demonstration driver for the locres crates.
//!
//! Loads locale resources as configured, prints localized messages, raises
//! a structured error and renders it the way a service handler would.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;

pub use app::*;
pub use error::*;
