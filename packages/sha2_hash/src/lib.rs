//! SHA-256 / SHA-512 digests over whichever hashing provider the environment offers
//!
//! ```no_run
//! # async fn run() -> sha2_hash::Result<()> {
//! let service = sha2_hash::create_digest_service().await?;
//! let digest = service.digest(b"abc".to_vec()).await?;
//! assert_eq!(digest.len(), 32);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod adapter;
pub mod algorithm;
pub mod async_result;
pub mod config;
pub mod error;
pub mod hash_result;
pub mod probe;
pub mod provider;
pub mod service;

pub use algorithm::HashAlgorithm;
pub use async_result::AsyncHashResult;
pub use config::HashConfig;
pub use error::{HashError, Result};
pub use hash_result::HashResult;
pub use probe::{Environment, ResolvedProvider, resolve};
pub use provider::{HashContext, NativeHashProvider, ProviderKind, SubtleCryptoProvider};
pub use service::{DigestService, create_digest_service};

#[cfg(feature = "native")]
pub use provider::Sha2NativeProvider;
#[cfg(feature = "subtle")]
pub use provider::RingSubtleCrypto;
