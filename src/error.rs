//! Error types for glTF validation
//!
//! Content problems in a document are never Rust errors: they are recorded as
//! diagnostics in a [`ValidatorResult`](crate::ValidatorResult). The [`Error`]
//! type is reserved for failures that abort a pass: reading or deserializing a
//! document, a broken invariant inside the validator itself, or a registered
//! check that gave up.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O errors
//! - **E2xxx**: JSON deserialization errors
//! - **E3xxx**: Internal invariant violations
//! - **E4xxx**: Registered check failures
//!
//! ## Common Error Codes
//!
//! - `E1001`: I/O error reading a document
//! - `E2001`: JSON deserialization error
//! - `E3001`: Internal validator error
//! - `E4001`: A registered check aborted the pass

use std::io;
use thiserror::Error;

/// Result type for glTF validator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a validation pass or document load
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the document
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document JSON could not be deserialized into the entity graph
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Malformed JSON syntax
    /// - A field holding a value of the wrong JSON type (e.g. a string `count`)
    ///
    /// **Suggestions**:
    /// - Check the glTF 1.0 schema for the shape of the offending property
    #[error("[E2001] JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A structural invariant of the validator itself was violated
    ///
    /// **Error Code**: E3001
    ///
    /// This indicates a bug in the code that built the document graph or in
    /// the validator wiring, never a problem with the document content.
    #[error("[E3001] Internal validator error: {0}")]
    Internal(String),

    /// A registered document check aborted the pass
    ///
    /// **Error Code**: E4001
    #[error("[E4001] Check '{name}' failed: {message}")]
    CheckFailed {
        /// Name of the check that failed
        name: String,
        /// Description of the failure
        message: String,
    },
}

impl Error {
    /// Create an Internal error describing a broken invariant
    ///
    /// # Arguments
    /// * `what` - The invariant that did not hold
    pub fn internal(what: impl Into<String>) -> Self {
        Error::Internal(what.into())
    }

    /// Create a CheckFailed error for the named check
    ///
    /// # Example
    /// ```
    /// use gltf_validator::Error;
    ///
    /// let err = Error::check_failed("payload", "store was poisoned");
    /// assert!(err.to_string().contains("[E4001]"));
    /// ```
    pub fn check_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::CheckFailed {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Whether this error signals a defect in the validator rather than in
    /// the input
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}
