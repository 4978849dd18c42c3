//! # sharelink-codec
//!
//! Builds and parses compact, URL-embeddable snapshots of a document.
//! A share link carries its entire payload in a single `d` query
//! parameter: the document is serialized to JSON, optionally encrypted
//! under a password, DEFLATE-compressed, and base64-encoded with the
//! URL-safe alphabet. No server-side state is involved.
//!
//! All operations are synchronous, pure transforms over in-memory
//! strings.

pub mod codec;
pub mod compress;
pub mod crypto;
pub mod data;
pub mod expiry;

pub use codec::{ShareEstimate, ShareLinkCodec, extract_payload};
pub use crypto::DecryptedContent;
pub use data::{PAYLOAD_VERSION, ShareData, ShareOptions};
pub use expiry::format_expires_at;
