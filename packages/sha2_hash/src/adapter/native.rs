//! Adapter over a native `create_hash` provider

use crate::provider::NativeHashProvider;
use crate::{HashAlgorithm, HashError, HashResult, Result};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Digest adapter bound to one native hashing provider
#[derive(Clone)]
pub struct NativeAdapter {
    provider: Arc<dyn NativeHashProvider>,
}

impl NativeAdapter {
    /// Bind the adapter to a provider
    #[must_use]
    pub fn new(provider: Arc<dyn NativeHashProvider>) -> Self {
        Self { provider }
    }

    /// Digest `data` in one pass.
    ///
    /// Inside a tokio runtime the provider runs on the blocking pool; without
    /// one it runs inline on the polling thread.
    ///
    /// # Errors
    ///
    /// Provider errors are returned unchanged.
    pub async fn digest(&self, data: Vec<u8>, algorithm: HashAlgorithm) -> Result<HashResult> {
        let Ok(handle) = Handle::try_current() else {
            return self.digest_now(&data, algorithm);
        };

        let adapter = self.clone();
        handle
            .spawn_blocking(move || adapter.digest_now(&data, algorithm))
            .await
            .map_err(|e| HashError::internal(format!("Digest task failed: {e}")))?
    }

    fn digest_now(&self, data: &[u8], algorithm: HashAlgorithm) -> Result<HashResult> {
        let mut context = self.provider.create_hash(algorithm.native_name())?;
        context.update(data);
        Ok(HashResult::new(context.finalize()))
    }
}
