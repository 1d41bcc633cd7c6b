//! Error types for the media manager.

use crate::media::GenerationError;

/// Error dispatching a request through the manager.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The requested provider name has no registered match.
    #[error("media provider '{0}' not found")]
    ProviderNotFound(String),

    /// No provider was named and the registry is empty.
    #[error("no media provider configured")]
    NoProviderConfigured,

    /// The resolved provider does not support task queries.
    #[error("media provider '{0}' does not support task queries")]
    QueryUnsupported(String),

    /// A failure raised inside the provider itself, passed through as-is.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
