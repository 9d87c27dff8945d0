//! The digest facade handed to callers

use crate::adapter::{NativeAdapter, SubtleAdapter};
use crate::probe::{self, Environment, ResolvedProvider};
use crate::provider::ProviderKind;
use crate::{AsyncHashResult, HashAlgorithm, HashResult, Result};
use tracing::{debug, trace};

/// Uniform SHA-256 / SHA-512 digest service
///
/// Exactly one adapter is bound for the lifetime of the service. Clones share
/// the same provider handle, and concurrent calls never share any state.
///
/// Every digest call returns an [`AsyncHashResult`], whichever backend is
/// underneath. Inside a tokio runtime the hashing itself runs on the blocking
/// pool; any other executor can drive it too.
#[derive(Clone)]
pub enum DigestService {
    /// Backed by a native hashing provider
    Native(NativeAdapter),
    /// Backed by a subtle-crypto provider
    Subtle(SubtleAdapter),
}

impl DigestService {
    /// Probe the process environment and bind the matching adapter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HashError::EnvironmentUnsupported`] if no provider is available.
    pub async fn create() -> Result<Self> {
        Self::from_environment(Environment::process()).await
    }

    /// Probe an explicit environment and bind the matching adapter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HashError::EnvironmentUnsupported`] if `env` has no provider.
    pub async fn from_environment(env: &Environment) -> Result<Self> {
        let resolved = probe::resolve(env).await?;
        Ok(Self::from_provider(resolved))
    }

    /// Bind the adapter matching an already resolved provider
    #[must_use]
    pub fn from_provider(provider: ResolvedProvider) -> Self {
        let service = match provider {
            ResolvedProvider::Native(native) => Self::Native(NativeAdapter::new(native)),
            ResolvedProvider::Subtle(subtle) => Self::Subtle(SubtleAdapter::new(subtle)),
        };
        debug!(kind = %service.kind(), "Digest service ready");
        service
    }

    /// Kind of provider serving this instance
    #[must_use]
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Native(_) => ProviderKind::NativeHashing,
            Self::Subtle(_) => ProviderKind::SubtleCrypto,
        }
    }

    /// SHA-256 digest of `data`
    pub fn digest<D: Into<Vec<u8>>>(&self, data: D) -> AsyncHashResult {
        self.digest_with(data, HashAlgorithm::default())
    }

    /// Digest of `data` with an explicit algorithm
    pub fn digest_with<D: Into<Vec<u8>>>(
        &self,
        data: D,
        algorithm: HashAlgorithm,
    ) -> AsyncHashResult {
        let data = data.into();
        let service = self.clone();
        AsyncHashResult::new(async move { service.compute(data, algorithm).await })
    }

    /// Digest of `data` with the algorithm given by name (`"sha256"` or `"sha512"`).
    ///
    /// Any other name fails with [`crate::HashError::UnsupportedAlgorithm`]
    /// before a provider is involved.
    pub fn digest_named<D: Into<Vec<u8>>>(&self, data: D, algorithm: &str) -> AsyncHashResult {
        match algorithm.parse::<HashAlgorithm>() {
            Ok(algorithm) => self.digest_with(data, algorithm),
            Err(e) => AsyncHashResult::error(e),
        }
    }

    async fn compute(&self, data: Vec<u8>, algorithm: HashAlgorithm) -> Result<HashResult> {
        trace!(kind = %self.kind(), %algorithm, len = data.len(), "Computing digest");
        match self {
            Self::Native(adapter) => adapter.digest(data, algorithm).await,
            Self::Subtle(adapter) => adapter.digest(data, algorithm).await,
        }
    }
}

impl std::fmt::Debug for DigestService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DigestService").field(&self.kind()).finish()
    }
}

/// Create a digest service for the current process.
///
/// # Errors
///
/// Returns [`crate::HashError::EnvironmentUnsupported`] if no provider is available.
pub async fn create_digest_service() -> Result<DigestService> {
    DigestService::create().await
}
