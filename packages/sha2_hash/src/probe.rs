//! Backend capability probe
//!
//! The set of available providers is an explicit [`Environment`] value rather
//! than a global lookup, so callers and tests decide exactly what the probe sees.

use crate::config::HashConfig;
use crate::provider::{NativeHashProvider, ProviderKind, SubtleCryptoProvider};
use crate::{HashError, Result};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

static PROCESS_ENVIRONMENT: Lazy<Environment> =
    Lazy::new(|| Environment::from_config(&HashConfig::from_env()));

/// Providers present in a given environment
#[derive(Clone, Default)]
pub struct Environment {
    native: Option<Arc<dyn NativeHashProvider>>,
    subtle: Option<Arc<dyn SubtleCryptoProvider>>,
}

impl Environment {
    /// An environment with no providers at all
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in providers that are compiled in and enabled by `config`
    #[must_use]
    pub fn from_config(config: &HashConfig) -> Self {
        #[allow(unused_mut)]
        let mut env = Self::empty();

        #[cfg(feature = "native")]
        {
            if config.native {
                env = env.with_native(crate::provider::Sha2NativeProvider::new());
            }
        }

        #[cfg(feature = "subtle")]
        {
            if config.subtle {
                env = env.with_subtle(crate::provider::RingSubtleCrypto::new());
            }
        }

        #[cfg(not(any(feature = "native", feature = "subtle")))]
        let _ = config;

        env
    }

    /// The environment of this process, detected once from `SHA2_HASH_*` variables
    #[must_use]
    pub fn process() -> &'static Self {
        &PROCESS_ENVIRONMENT
    }

    /// Add or replace the native hashing provider
    #[must_use]
    pub fn with_native<P>(mut self, provider: P) -> Self
    where
        P: NativeHashProvider + 'static,
    {
        self.native = Some(Arc::new(provider));
        self
    }

    /// Add or replace the subtle-crypto provider
    #[must_use]
    pub fn with_subtle<P>(mut self, provider: P) -> Self
    where
        P: SubtleCryptoProvider + 'static,
    {
        self.subtle = Some(Arc::new(provider));
        self
    }

    /// Provider kinds present, in probe preference order
    #[must_use]
    pub fn available(&self) -> Vec<ProviderKind> {
        let mut kinds = Vec::with_capacity(2);
        if self.subtle.is_some() {
            kinds.push(ProviderKind::SubtleCrypto);
        }
        if self.native.is_some() {
            kinds.push(ProviderKind::NativeHashing);
        }
        kinds
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("native", &self.native.is_some())
            .field("subtle", &self.subtle.is_some())
            .finish()
    }
}

/// Provider picked by [`resolve`], tagged with its kind
#[derive(Clone)]
pub enum ResolvedProvider {
    /// Native hashing provider
    Native(Arc<dyn NativeHashProvider>),
    /// Subtle-crypto provider
    Subtle(Arc<dyn SubtleCryptoProvider>),
}

impl ResolvedProvider {
    /// Kind of the resolved provider
    #[must_use]
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Native(_) => ProviderKind::NativeHashing,
            Self::Subtle(_) => ProviderKind::SubtleCrypto,
        }
    }
}

impl fmt::Debug for ResolvedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResolvedProvider").field(&self.kind()).finish()
    }
}

/// Pick the provider to use: subtle-crypto when present, otherwise native.
///
/// # Errors
///
/// Returns [`HashError::EnvironmentUnsupported`] when neither provider exists.
pub async fn resolve(env: &Environment) -> Result<ResolvedProvider> {
    let resolved = match (&env.subtle, &env.native) {
        (Some(subtle), _) => ResolvedProvider::Subtle(Arc::clone(subtle)),
        (None, Some(native)) => ResolvedProvider::Native(Arc::clone(native)),
        (None, None) => return Err(HashError::EnvironmentUnsupported),
    };

    debug!(kind = %resolved.kind(), "Resolved hashing provider");
    Ok(resolved)
}
