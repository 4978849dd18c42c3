//! Share link configuration.

use serde::{Deserialize, Serialize};

/// Share link generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Base URL prepended to generated links (e.g. `https://docs.example.com`).
    /// When unset, links are relative (`/share?d=...`).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Maximum accepted length, in characters, of the encoded payload.
    /// Payloads at or above this length are reported as not shareable.
    #[serde(default = "default_max_encoded_len")]
    pub max_encoded_len: usize,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            max_encoded_len: default_max_encoded_len(),
        }
    }
}

fn default_max_encoded_len() -> usize {
    8000
}
