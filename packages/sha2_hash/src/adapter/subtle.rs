//! Adapter over a subtle-crypto style provider

use crate::provider::SubtleCryptoProvider;
use crate::{HashAlgorithm, HashResult, Result};
use std::sync::Arc;

/// Digest adapter bound to one subtle-crypto provider
#[derive(Clone)]
pub struct SubtleAdapter {
    provider: Arc<dyn SubtleCryptoProvider>,
}

impl SubtleAdapter {
    /// Bind the adapter to a provider
    #[must_use]
    pub fn new(provider: Arc<dyn SubtleCryptoProvider>) -> Self {
        Self { provider }
    }

    /// Digest `data`, awaiting the provider.
    ///
    /// # Errors
    ///
    /// Provider errors are returned unchanged.
    pub async fn digest(&self, data: Vec<u8>, algorithm: HashAlgorithm) -> Result<HashResult> {
        let bytes = self.provider.digest(algorithm.subtle_label(), data).await?;
        Ok(HashResult::new(bytes))
    }
}
