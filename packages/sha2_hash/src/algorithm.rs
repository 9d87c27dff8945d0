//! Supported digest algorithms

use crate::{HashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SHA-2 variant selected for a digest call
///
/// Only SHA-256 and SHA-512 are reachable through the facade. Parsing any other
/// name fails with [`HashError::UnsupportedAlgorithm`], so a provider never sees it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256, 32 byte digest
    #[default]
    Sha256,
    /// SHA-512, 64 byte digest
    Sha512,
}

impl HashAlgorithm {
    /// Every algorithm the facade accepts
    pub const ALL: [Self; 2] = [Self::Sha256, Self::Sha512];

    /// Name understood by a native `create_hash` provider
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Label understood by a subtle-crypto `digest` provider
    #[must_use]
    pub const fn subtle_label(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            other => Err(HashError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl TryFrom<&str> for HashAlgorithm {
    type Error = HashError;

    fn try_from(name: &str) -> Result<Self> {
        name.parse()
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}
