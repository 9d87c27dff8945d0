//! Digest bytes as handed back to callers
//!
//! Both backends produce the same `HashResult`, so output alone never reveals
//! which provider served a call.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde::{Serialize, Serializer};
use std::fmt;

/// SHA-256 (32 bytes) or SHA-512 (64 bytes) digest
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HashResult {
    digest: Vec<u8>,
}

impl HashResult {
    pub(crate) fn new(digest: Vec<u8>) -> Self {
        Self { digest }
    }

    /// Digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.digest
    }

    /// Take ownership of the digest bytes
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.digest
    }

    /// 32 for SHA-256, 64 for SHA-512
    #[must_use]
    pub fn len(&self) -> usize {
        self.digest.len()
    }

    /// Always false for digests produced by a provider
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digest.is_empty()
    }

    /// Lowercase hex, the form published test vectors use
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.digest)
    }

    /// Padded standard base64, as in `Digest:` headers and SRI hashes
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.digest)
    }

    /// Unpadded URL-safe base64
    #[must_use]
    pub fn to_base64url(&self) -> String {
        URL_SAFE_NO_PAD.encode(&self.digest)
    }
}

impl From<HashResult> for Vec<u8> {
    fn from(result: HashResult) -> Self {
        result.digest
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        &self.digest
    }
}

impl PartialEq<[u8]> for HashResult {
    fn eq(&self, other: &[u8]) -> bool {
        self.digest == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for HashResult {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.digest == other
    }
}

// Serialized as the hex string so digests read naturally in JSON and logs.
impl Serialize for HashResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl fmt::Debug for HashResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashResult({})", self.to_hex())
    }
}

impl fmt::Display for HashResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
