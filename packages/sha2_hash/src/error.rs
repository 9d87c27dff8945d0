//! Error handling for the digest facade

use thiserror::Error;

/// Digest facade errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Neither a native nor a subtle-crypto provider is available
    #[error("No supported hashing provider found in this environment")]
    EnvironmentUnsupported,

    /// Algorithm name outside of `sha256` / `sha512`
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Error raised by the underlying provider, passed through unchanged
    #[error("Provider failure: {0}")]
    ProviderFailure(String),

    /// Invalid configuration input
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Create a provider failure error
    #[must_use]
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::ProviderFailure(msg.into())
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether retrying the same call could ever succeed
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::EnvironmentUnsupported | Self::UnsupportedAlgorithm(_) | Self::Config(_)
        )
    }
}

/// Result type for digest operations
pub type Result<T> = std::result::Result<T, HashError>;
