//! Platform hashing providers wrapped by the adapters
//!
//! Two provider shapes exist:
//! - a native, process-level API: `create_hash(name)` returns a one-shot context
//!   fed with `update` and closed with `finalize`
//! - a subtle-crypto style API: `digest(label, bytes)` resolves asynchronously
//!
//! The crate ships one implementation of each behind the `native` and `subtle`
//! features. Anything implementing the traits can be injected through
//! [`crate::Environment`].

use crate::Result;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "native")]
mod native;
#[cfg(feature = "subtle")]
mod subtle;

#[cfg(feature = "native")]
pub use native::Sha2NativeProvider;
#[cfg(feature = "subtle")]
pub use subtle::RingSubtleCrypto;

/// Which kind of provider backs a digest service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// Native `create_hash` style provider
    NativeHashing,
    /// Subtle-crypto `digest` style provider
    SubtleCrypto,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeHashing => f.write_str("native-hashing"),
            Self::SubtleCrypto => f.write_str("subtle-crypto"),
        }
    }
}

/// One-shot hashing context created by a [`NativeHashProvider`]
pub trait HashContext: Send {
    /// Feed input bytes
    fn update(&mut self, data: &[u8]);

    /// Consume the context and return the digest
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

/// Native, synchronous hashing API
pub trait NativeHashProvider: Send + Sync {
    /// Create a fresh hashing context for the given algorithm name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HashError::ProviderFailure`] when the name is not recognized.
    fn create_hash(&self, name: &str) -> Result<Box<dyn HashContext>>;
}

/// Subtle-crypto style asynchronous hashing API
pub trait SubtleCryptoProvider: Send + Sync {
    /// Digest `data` with the algorithm identified by `label` (e.g. `"SHA-256"`).
    ///
    /// The returned future owns everything it needs, so it can be moved onto
    /// another task.
    fn digest(&self, label: &str, data: Vec<u8>) -> BoxFuture<'static, Result<Vec<u8>>>;
}
