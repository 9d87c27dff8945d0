//! Native provider backed by the RustCrypto `sha2` crate

use super::{HashContext, NativeHashProvider};
use crate::{HashError, Result};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

/// Process-level SHA-2 provider
///
/// Recognizes `sha224`, `sha256`, `sha384` and `sha512`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha2NativeProvider;

impl Sha2NativeProvider {
    /// Create the provider
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

struct Sha2Context<D> {
    hasher: D,
}

impl<D> HashContext for Sha2Context<D>
where
    D: Digest + Send + 'static,
{
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.hasher.finalize().to_vec()
    }
}

fn context<D>() -> Box<dyn HashContext>
where
    D: Digest + Send + 'static,
{
    Box::new(Sha2Context { hasher: D::new() })
}

impl NativeHashProvider for Sha2NativeProvider {
    fn create_hash(&self, name: &str) -> Result<Box<dyn HashContext>> {
        match name {
            "sha224" => Ok(context::<Sha224>()),
            "sha256" => Ok(context::<Sha256>()),
            "sha384" => Ok(context::<Sha384>()),
            "sha512" => Ok(context::<Sha512>()),
            other => Err(HashError::provider(format!(
                "Digest method not supported: {other}"
            ))),
        }
    }
}
