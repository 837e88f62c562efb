//! Error types for state restoration

use thiserror::Error;

/// Raised when a saved-topology mapping cannot be applied to a node.
///
/// Restoration is strict: a key that is absent or carries the wrong JSON
/// type fails the whole restore, rather than leaving the node half-filled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedStateError {
    #[error("malformed state: missing key '{0}'")]
    MissingKey(String),

    #[error("malformed state: key '{key}' is not {expected}")]
    InvalidValue { key: String, expected: &'static str },
}
