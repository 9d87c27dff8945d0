//! Provider selection configuration

use crate::{HashError, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable toggling the built-in native provider
pub const NATIVE_ENV: &str = "SHA2_HASH_NATIVE";
/// Environment variable toggling the built-in subtle-crypto provider
pub const SUBTLE_ENV: &str = "SHA2_HASH_SUBTLE";

/// Which built-in providers may be offered to the capability probe
///
/// A provider that is enabled here but compiled out (see the `native` and
/// `subtle` cargo features) is still absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Offer the native hashing provider
    pub native: bool,
    /// Offer the subtle-crypto provider
    pub subtle: bool,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            native: true,
            subtle: true,
        }
    }
}

impl HashConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Config`] if the JSON is malformed.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| HashError::Config(e.to_string()))
    }

    /// Read the `SHA2_HASH_NATIVE` / `SHA2_HASH_SUBTLE` toggles.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            native: toggle(NATIVE_ENV, lookup(NATIVE_ENV), defaults.native),
            subtle: toggle(SUBTLE_ENV, lookup(SUBTLE_ENV), defaults.subtle),
        }
    }
}

fn toggle(key: &str, value: Option<String>, default: bool) -> bool {
    let Some(value) = value else {
        return default;
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => true,
        "0" | "false" | "off" | "no" => false,
        _ => {
            warn!(key, value = %value, "Ignoring unrecognized provider toggle");
            default
        }
    }
}
