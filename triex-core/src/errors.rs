//! errors.rs - Custom error types for the triex-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific error types that callers can handle programmatically.
//!
//! License: MIT

use thiserror::Error;

use crate::value::UnsupportedValue;

/// Raised when strict insertion meets a value that cannot be coerced to text.
///
/// Carries the offending value so the caller can report both its rendering
/// and its type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot add value {} of type {}", .value.repr, .value.kind)]
pub struct CoercionError {
    pub value: UnsupportedValue,
}

/// This enum represents all possible error types in the `triex-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TriexError {
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
