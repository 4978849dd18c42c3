//! End-to-end tests for share link generation, parsing, and budgets.

use sharelink_codec::{
    DecryptedContent, PAYLOAD_VERSION, ShareLinkCodec, ShareOptions, extract_payload,
};
use sharelink_core::config::share::ShareConfig;
use sharelink_core::error::ErrorKind;

#[test]
fn test_round_trip_without_password() {
    let codec = ShareLinkCodec::default();
    let link = codec
        .generate_share_link(
            "产品需求文档 — v2",
            "## Goals\nShip the thing. 🚀",
            &ShareOptions::default(),
        )
        .unwrap();

    let data = codec.parse_share_data(extract_payload(&link)).unwrap();
    assert_eq!(data.title, "产品需求文档 — v2");
    assert_eq!(data.content, "## Goals\nShip the thing. 🚀");
    assert!(!data.is_encrypted);
    assert_eq!(data.expires_at, None);
    assert!(!data.is_expired());
}

#[test]
fn test_round_trip_empty_content() {
    let codec = ShareLinkCodec::default();
    let link = codec
        .generate_share_link("", "", &ShareOptions::default())
        .unwrap();
    let data = codec.parse_share_data(extract_payload(&link)).unwrap();
    assert_eq!(data.title, "");
    assert_eq!(data.content, "");
}

#[test]
fn test_round_trip_with_password() {
    let codec = ShareLinkCodec::default();
    let options = ShareOptions {
        password: Some("correct horse".to_string()),
        ..ShareOptions::default()
    };
    let link = codec
        .generate_share_link("Secret", "battery staple", &options)
        .unwrap();

    let data = codec.parse_share_data(extract_payload(&link)).unwrap();
    assert!(data.is_encrypted);
    assert_ne!(data.content, "battery staple");

    let decrypted = codec.decrypt_content(&data.content, "correct horse").unwrap();
    assert_eq!(decrypted.into_text(), "battery staple");
}

#[test]
fn test_wrong_password_fails_decryption() {
    let codec = ShareLinkCodec::default();
    let options = ShareOptions {
        password: Some("right".to_string()),
        ..ShareOptions::default()
    };
    let link = codec
        .generate_share_link("Secret", "body", &options)
        .unwrap();
    let data = codec.parse_share_data(extract_payload(&link)).unwrap();

    let err = codec.decrypt_content(&data.content, "wrong").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Encryption);
}

#[test]
fn test_empty_document_decrypts_to_tagged_empty() {
    let codec = ShareLinkCodec::default();
    let options = ShareOptions {
        password: Some("pw".to_string()),
        ..ShareOptions::default()
    };
    let link = codec.generate_share_link("Empty", "", &options).unwrap();
    let data = codec.parse_share_data(extract_payload(&link)).unwrap();

    let decrypted = codec.decrypt_content(&data.content, "pw").unwrap();
    assert_eq!(decrypted, DecryptedContent::Empty);
}

#[test]
fn test_expiry_recorded_and_evaluated() {
    let codec = ShareLinkCodec::default();
    let options = ShareOptions {
        expires_in_hours: Some(48),
        ..ShareOptions::default()
    };
    let link = codec.generate_share_link("t", "c", &options).unwrap();
    let mut data = codec.parse_share_data(extract_payload(&link)).unwrap();

    let expires_at = data.expires_at.expect("expiry should be recorded");
    assert_eq!(expires_at, data.created_at + 48 * 3_600_000);
    assert!(!data.is_expired());

    // Forcing the instant into the past or future flips the check.
    data.expires_at = Some(data.created_at - 1);
    assert!(data.is_expired());
    data.expires_at = Some(i64::MAX);
    assert!(!data.is_expired());
}

#[test]
fn test_short_content_is_shareable() {
    let codec = ShareLinkCodec::default();
    let estimate = codec.is_content_shareable("twenty characters ok").unwrap();
    assert!(estimate.shareable);
    assert_eq!(estimate.max_size, 8000);
    assert!(estimate.size < 8000);
}

#[test]
fn test_incompressible_content_exceeds_budget() {
    let codec = ShareLinkCodec::default();
    let estimate = codec
        .is_content_shareable(&pseudo_random_content(50_000))
        .unwrap();
    assert!(!estimate.shareable);
    assert!(estimate.size >= 8000);
}

#[test]
fn test_custom_budget_is_honored() {
    let codec = ShareLinkCodec::new(ShareConfig {
        max_encoded_len: 40,
        ..ShareConfig::default()
    });
    let estimate = codec
        .is_content_shareable("long enough to blow a 40-character budget")
        .unwrap();
    assert!(!estimate.shareable);
    assert_eq!(estimate.max_size, 40);
}

#[test]
fn test_malformed_payload_is_rejected() {
    let codec = ShareLinkCodec::default();
    let err = codec
        .parse_share_data("not-a-valid-compressed-string")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Payload);
}

#[test]
fn test_non_share_data_json_is_rejected() {
    let codec = ShareLinkCodec::default();
    let payload = sharelink_codec::compress::compress(r#"{"unrelated":true}"#).unwrap();
    let err = codec.parse_share_data(&payload).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Serialization);
}

#[test]
fn test_unknown_version_is_a_distinct_failure() {
    let codec = ShareLinkCodec::default();
    let future = format!(
        r#"{{"version":{},"title":"t","content":"c","created_at":0}}"#,
        PAYLOAD_VERSION + 1
    );
    let payload = sharelink_codec::compress::compress(&future).unwrap();
    let err = codec.parse_share_data(&payload).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedVersion);
}

/// Deterministic high-entropy content that DEFLATE cannot squeeze under
/// the default budget.
fn pseudo_random_content(len: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            CHARSET[(state >> 33) as usize % CHARSET.len()] as char
        })
        .collect()
}
