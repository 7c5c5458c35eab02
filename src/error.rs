//! Error types for corkboard.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Field-level validation errors.
///
/// Maps a field name to the error codes raised against it, in a stable
/// order so error output and serialized responses are deterministic.
/// Codes are short machine-readable tokens such as `required` or
/// `too_long`; the presentation layer turns them into messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error code against a field.
    pub fn add(&mut self, field: impl Into<String>, code: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(code.into());
    }

    /// True when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error codes recorded against a field, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Iterate over fields and their error codes.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Consume the set, yielding the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, codes) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, codes.join(", "))?;
        }
        Ok(())
    }
}

/// Common error type for corkboard.
#[derive(Error, Debug)]
pub enum CorkboardError {
    /// Database error.
    ///
    /// Wraps failures from the storage backend unchanged; no retry is
    /// attempted at this layer.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input, with per-field error codes.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// The supplied post password did not match the stored one.
    #[error("invalid password")]
    InvalidPassword,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for CorkboardError {
    fn from(e: sqlx::Error) -> Self {
        CorkboardError::Database(e.to_string())
    }
}

/// Result type alias for corkboard operations.
pub type Result<T> = std::result::Result<T, CorkboardError>;
