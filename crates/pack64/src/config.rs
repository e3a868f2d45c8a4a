//! Codec configuration

use serde::{Deserialize, Serialize};

use crate::codec::decode_with;
use crate::error::Result;

/// Environment variable controlling decode validation
pub const VALIDATE_ENV: &str = "PACK64_VALIDATE";

/// Codec configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Check length and character set before decoding.
    ///
    /// Disabling this is only safe for strings known to be well formed.
    pub validate: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { validate: true }
    }
}

impl CodecConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup, e.g. a parsed env file
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(VALIDATE_ENV) {
            match parse_bool(&value) {
                Some(v) => config.validate = v,
                None => tracing::warn!("Ignoring unparsable {}={:?}", VALIDATE_ENV, value),
            }
        }

        config
    }

    /// Config that skips character-set validation
    pub fn unchecked() -> Self {
        Self { validate: false }
    }

    /// Decode with this configuration
    pub fn decode<S: AsRef<[u8]> + ?Sized>(&self, input: &S) -> Result<Vec<f32>> {
        decode_with(input, self.validate)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
