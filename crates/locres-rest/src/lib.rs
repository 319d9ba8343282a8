//! # Locres Rest
//!
//! Structured errors for service handlers.
//!
//! A [`StructuredError`] records where it was raised, whether the caller or
//! the service is at fault, and the resource key of the message that
//! describes it. Turning that key into text is done separately, by
//! [`ErrorResponse::render`] against a [`locres_i18n::LocaleRegistry`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod macros;
pub mod response;

pub use error::{ErrorDetail, ErrorSource, Origin, StructuredError, StructuredResult};
pub use response::ErrorResponse;
