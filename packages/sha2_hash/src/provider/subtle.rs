//! Subtle-crypto style provider backed by `ring::digest`

use super::SubtleCryptoProvider;
use crate::{HashError, Result};
use futures::future::BoxFuture;
use ring::digest::{self, Algorithm};
use tokio::runtime::Handle;

/// Asynchronous provider mirroring the web `SubtleCrypto.digest` contract
///
/// Recognizes the labels `SHA-1`, `SHA-256`, `SHA-384` and `SHA-512`. Hashing
/// runs on tokio's blocking pool when a runtime is active, inline otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct RingSubtleCrypto;

impl RingSubtleCrypto {
    /// Create the provider
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn algorithm(label: &str) -> Option<&'static Algorithm> {
    match label {
        "SHA-1" => Some(&digest::SHA1_FOR_LEGACY_USE_ONLY),
        "SHA-256" => Some(&digest::SHA256),
        "SHA-384" => Some(&digest::SHA384),
        "SHA-512" => Some(&digest::SHA512),
        _ => None,
    }
}

fn compute(algorithm: &'static Algorithm, data: &[u8]) -> Vec<u8> {
    let mut context = digest::Context::new(algorithm);
    context.update(data);
    context.finish().as_ref().to_vec()
}

impl SubtleCryptoProvider for RingSubtleCrypto {
    fn digest(&self, label: &str, data: Vec<u8>) -> BoxFuture<'static, Result<Vec<u8>>> {
        let lookup = algorithm(label).ok_or_else(|| {
            HashError::provider(format!("NotSupportedError: Unrecognized name {label}"))
        });

        Box::pin(async move {
            let algorithm = lookup?;
            let Ok(handle) = Handle::try_current() else {
                return Ok(compute(algorithm, &data));
            };
            handle
                .spawn_blocking(move || compute(algorithm, &data))
                .await
                .map_err(|e| HashError::internal(format!("Digest task failed: {e}")))
        })
    }
}
