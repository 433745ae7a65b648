//! Error types for shiftkit-template

use thiserror::Error;

/// Result type for shiftkit-template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while bootstrapping or processing a template
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// Loader/scheme failure while decoding the template or its objects
    #[error(transparent)]
    Core(#[from] shiftkit_core::CoreError),

    /// The transport handle cannot be built from the given configuration
    #[error("invalid transport configuration: {message}")]
    TransportConfig { message: String },

    /// The remote render call failed at the transport layer or returned a
    /// non-success status
    #[error("template API request failed: {0}")]
    Transport(#[source] kube::Error),

    /// A decoded resource was expected to be a Template but is not
    #[error("expected a Template, got kind '{kind}'")]
    NotATemplate { kind: String },

    /// The template could not be serialized for the render request
    #[error("failed to serialize template: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TemplateError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        TemplateError::TransportConfig {
            message: message.into(),
        }
    }
}
