//! URL-safe text compression.
//!
//! The payload transform is DEFLATE followed by base64 with the URL-safe
//! alphabet and no padding, so the result survives a URL query string
//! without additional escaping. `decompress(compress(s)) == s` holds for
//! every valid unicode string, including the empty string.

use std::io::{Read, Write};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;

use sharelink_core::{AppError, AppResult};

/// Compress a string into a URL-safe token.
pub fn compress(input: &str) -> AppResult<String> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(input.as_bytes())?;
    let compressed = encoder.finish()?;
    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

/// Decompress a token produced by [`compress`].
///
/// Any defect in the token (bad base64, corrupt DEFLATE stream, invalid
/// UTF-8) maps to a payload error; no partial output is returned.
pub fn decompress(token: &str) -> AppResult<String> {
    let compressed = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| AppError::payload(format!("Invalid payload encoding: {e}")))?;

    let mut output = String::new();
    DeflateDecoder::new(compressed.as_slice())
        .read_to_string(&mut output)
        .map_err(|e| AppError::payload(format!("Payload decompression failed: {e}")))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let input = "A Product Requirements Document, drafted iteratively.";
        let token = compress(input).unwrap();
        assert_eq!(decompress(&token).unwrap(), input);
    }

    #[test]
    fn test_round_trip_empty_string() {
        let token = compress("").unwrap();
        assert_eq!(decompress(&token).unwrap(), "");
    }

    #[test]
    fn test_round_trip_unicode() {
        let input = "标题 — résumé 🚀\nnewline\ttab";
        let token = compress(input).unwrap();
        assert_eq!(decompress(&token).unwrap(), input);
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = compress("a?b&c=d%e+f/g#h").unwrap();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_rejects_invalid_base64() {
        let err = decompress("not%valid!").unwrap_err();
        assert_eq!(err.kind, sharelink_core::error::ErrorKind::Payload);
    }

    #[test]
    fn test_rejects_corrupt_stream() {
        // Valid base64, but not a DEFLATE stream.
        let token = URL_SAFE_NO_PAD.encode(b"garbage bytes");
        let err = decompress(&token).unwrap_err();
        assert_eq!(err.kind, sharelink_core::error::ErrorKind::Payload);
    }
}
