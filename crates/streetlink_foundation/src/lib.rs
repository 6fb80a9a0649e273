//! Core error types and text normalization for Streetlink.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context, one kind per per-record outcome
//! - [`ErrorCategory`] - Coarse grouping of error kinds for batch tallies
//! - [`CasePolicy`] - The case convention of the reference dataset
//! - Text helpers shared by the parser and the linker

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod text;

pub use error::{Error, ErrorCategory, ErrorContext, ErrorKind, Result};
pub use text::{CasePolicy, collapse_whitespace, is_blank};
