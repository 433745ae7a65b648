//! Core error types

use thiserror::Error;

/// Result type for shiftkit-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while loading and decoding manifests
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Manifest file missing or unreadable
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not valid YAML or JSON
    #[error("malformed manifest: {message}")]
    MalformedInput { message: String },

    /// Document carries no usable apiVersion/kind pair
    #[error("manifest is missing apiVersion or kind metadata")]
    MissingTypeMeta,

    /// No decoder is registered for the document's group/version
    #[error("no decoder registered for group/version '{group_version}'")]
    UnknownType { group_version: String },

    /// Bytes do not match the schema of any kind registered for that group/version
    #[error("failed to decode '{gvk}': {message}")]
    Decode { gvk: String, message: String },
}

impl CoreError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        CoreError::MalformedInput {
            message: message.into(),
        }
    }

    pub(crate) fn decode(gvk: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Decode {
            gvk: gvk.into(),
            message: message.into(),
        }
    }
}
