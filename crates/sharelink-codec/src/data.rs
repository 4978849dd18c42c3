//! Share payload data model.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Schema version written into every payload.
///
/// Parsing rejects any other version outright; there is no migration
/// path for old links.
pub const PAYLOAD_VERSION: u32 = 1;

/// Milliseconds per hour, for expiry arithmetic.
pub const MS_PER_HOUR: i64 = 3_600_000;

/// The full serialized form of a shared document.
///
/// An instance is built once at link-generation time, serialized
/// immediately, and never mutated afterwards; on the receiving end it is
/// reconstructed once at parse time and treated as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareData {
    /// Payload schema version.
    pub version: u32,
    /// Document title.
    pub title: String,
    /// Document body: plaintext, or ciphertext when `is_encrypted`.
    pub content: String,
    /// Creation instant (epoch milliseconds).
    pub created_at: i64,
    /// Absolute expiry instant (epoch milliseconds). `None` = never expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    /// Whether `content` holds ciphertext rather than plaintext.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_encrypted: bool,
}

impl ShareData {
    /// Check whether this share has passed its expiry instant.
    ///
    /// A share without `expires_at` never expires. Expiry is a strict
    /// comparison: a share is still valid at exactly its expiry instant.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    /// Expiry check against an explicit instant (epoch milliseconds).
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => now_ms > expires_at,
            None => false,
        }
    }
}

/// Options controlling link generation.
#[derive(Debug, Clone, Default)]
pub struct ShareOptions {
    /// Password protecting the document body. When set, the payload
    /// carries ciphertext and `is_encrypted` is recorded.
    pub password: Option<String>,
    /// Hours until the link expires, counted from creation. Must be
    /// positive when given; `None` = never expires.
    pub expires_in_hours: Option<u32>,
}

fn is_false(value: &bool) -> bool {
    !value
}
