//! Error types for cirrus-model.
//!
//! Setters never fail. Errors come only from wire decoding and from the
//! opt-in constraint checks.

use thiserror::Error;

/// The unified error type for cirrus-model operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A value violates a documented field constraint.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ConstraintError),

    /// The wire document could not be decoded or encoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A documented field constraint that a value does not satisfy.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{field} '{value}': {reason}")]
pub struct ConstraintError {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// The offending value.
    pub value: String,
    /// Which constraint failed.
    pub reason: String,
}

impl ConstraintError {
    /// Create a new constraint error.
    pub fn new(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
