//! Share link generation and parsing.

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use sharelink_core::config::share::ShareConfig;
use sharelink_core::{AppError, AppResult};

use crate::compress;
use crate::crypto::{self, DecryptedContent};
use crate::data::{MS_PER_HOUR, PAYLOAD_VERSION, ShareData, ShareOptions};

/// Result of a shareability check.
#[derive(Debug, Clone, Serialize)]
pub struct ShareEstimate {
    /// Whether the encoded payload fits the configured size budget.
    pub shareable: bool,
    /// Encoded payload length in characters.
    pub size: usize,
    /// The configured size budget.
    pub max_size: usize,
    /// Original byte length divided by encoded length (informational).
    pub compression_ratio: f64,
}

/// Builds and parses URL-embeddable share payloads.
///
/// The size budget and link base come from [`ShareConfig`] so deployments
/// can vary them; `ShareConfig::default()` gives the stock relative-link,
/// 8000-character setup.
#[derive(Debug, Clone, Default)]
pub struct ShareLinkCodec {
    config: ShareConfig,
}

impl ShareLinkCodec {
    /// Create a codec from configuration.
    pub fn new(config: ShareConfig) -> Self {
        Self { config }
    }

    /// Build a share link embedding the given document.
    ///
    /// With a password in `options`, the body is encrypted before
    /// serialization. With `expires_in_hours`, the payload records an
    /// absolute expiry instant of `created_at + hours * 3_600_000`.
    ///
    /// Oversized output is not an error here; callers that care about
    /// the budget check [`is_content_shareable`](Self::is_content_shareable)
    /// first.
    pub fn generate_share_link(
        &self,
        title: &str,
        content: &str,
        options: &ShareOptions,
    ) -> AppResult<String> {
        if options.expires_in_hours == Some(0) {
            return Err(AppError::validation("expires_in_hours must be positive"));
        }

        let created_at = Utc::now().timestamp_millis();
        let expires_at = options
            .expires_in_hours
            .map(|hours| created_at + i64::from(hours) * MS_PER_HOUR);

        let (content, is_encrypted) = match &options.password {
            Some(password) => (crypto::encrypt_content(content, password)?, true),
            None => (content.to_string(), false),
        };

        let data = ShareData {
            version: PAYLOAD_VERSION,
            title: title.to_string(),
            content,
            created_at,
            expires_at,
            is_encrypted,
        };

        let payload = compress::compress(&serde_json::to_string(&data)?)?;
        debug!(size = payload.len(), is_encrypted, "encoded share payload");

        Ok(match &self.config.base_url {
            Some(base) => format!("{}/share?d={payload}", base.trim_end_matches('/')),
            None => format!("/share?d={payload}"),
        })
    }

    /// Decode a payload back into its [`ShareData`].
    ///
    /// Fails with distinguishable error kinds for undecodable payloads,
    /// unparseable JSON, and unsupported schema versions. No partial
    /// recovery is attempted; callers treat any error as "cannot
    /// display".
    pub fn parse_share_data(&self, payload: &str) -> AppResult<ShareData> {
        let json = compress::decompress(payload)?;
        if json.is_empty() {
            return Err(AppError::payload("Payload decompressed to nothing"));
        }

        let data: ShareData = serde_json::from_str(&json)?;
        if data.version != PAYLOAD_VERSION {
            return Err(AppError::unsupported_version(format!(
                "Unsupported payload version {} (expected {PAYLOAD_VERSION})",
                data.version
            )));
        }

        debug!(is_encrypted = data.is_encrypted, "parsed share payload");
        Ok(data)
    }

    /// Decrypt an encrypted share body with the supplied password.
    ///
    /// The success side distinguishes non-empty plaintext from a
    /// legitimately empty document; a wrong password is an error.
    pub fn decrypt_content(&self, content: &str, password: &str) -> AppResult<DecryptedContent> {
        crypto::decrypt_content(content, password)
    }

    /// Encoded length of a minimal payload wrapping `content`.
    ///
    /// The probe uses an empty title, a zero timestamp, and no expiry, so
    /// it is an estimator: the real link differs slightly once title and
    /// creation time are filled in.
    pub fn share_data_size(&self, content: &str) -> AppResult<usize> {
        let probe = ShareData {
            version: PAYLOAD_VERSION,
            title: String::new(),
            content: content.to_string(),
            created_at: 0,
            expires_at: None,
            is_encrypted: false,
        };
        Ok(compress::compress(&serde_json::to_string(&probe)?)?.len())
    }

    /// Check whether `content` fits the configured payload size budget.
    pub fn is_content_shareable(&self, content: &str) -> AppResult<ShareEstimate> {
        let size = self.share_data_size(content)?;
        let max_size = self.config.max_encoded_len;
        Ok(ShareEstimate {
            shareable: size < max_size,
            size,
            max_size,
            compression_ratio: content.len() as f64 / size as f64,
        })
    }
}

/// Pull the `d` payload out of a share link.
///
/// Accepts a full link (`.../share?d=<payload>`) or a bare payload, which
/// is returned unchanged. `d` is the only parameter the link format
/// defines, but anything after a `&` is ignored for robustness.
pub fn extract_payload(input: &str) -> &str {
    match input.split_once("?d=") {
        Some((_, rest)) => rest.split('&').next().unwrap_or(rest),
        None => input,
    }
}
