//! Password-based content encryption.
//!
//! Ciphertext layout is `salt(16) || nonce(12) || ChaCha20-Poly1305
//! ciphertext+tag`, base64-encoded with the URL-safe alphabet. The
//! encryption key is derived from the password with Argon2id; salt and
//! nonce are random per encryption and embedded in the output, so the
//! password is the only input a caller supplies. The format is opaque to
//! callers.

use argon2::Argon2;
use argon2::password_hash::rand_core::{OsRng, RngCore};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};

use sharelink_core::{AppError, AppResult};

const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;

/// Successful decryption output.
///
/// `Empty` is distinct from `Text` so a legitimately empty document can
/// be told apart from a decryption failure (which is an `Err`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecryptedContent {
    /// Non-empty plaintext.
    Text(String),
    /// Decryption succeeded and the original document was empty.
    Empty,
}

impl DecryptedContent {
    /// Consume the outcome, yielding the plaintext (empty for `Empty`).
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Empty => String::new(),
        }
    }
}

/// Encrypt plaintext under a password, producing an opaque textual token.
pub fn encrypt_content(plaintext: &str, password: &str) -> AppResult<String> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);

    let key = derive_key(password, &salt)?;
    let cipher = ChaCha20Poly1305::new(Key::from_slice(&key));

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_bytes())
        .map_err(|e| AppError::encryption(format!("Encryption failed: {e}")))?;

    let mut out = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    out.extend_from_slice(&salt);
    out.extend_from_slice(&nonce_bytes);
    out.extend_from_slice(&ciphertext);

    Ok(URL_SAFE_NO_PAD.encode(out))
}

/// Decrypt a token produced by [`encrypt_content`] with the supplied
/// password.
///
/// A wrong password fails the Poly1305 tag check and maps to an
/// encryption error; the error does not distinguish a wrong password
/// from corrupted data.
pub fn decrypt_content(token: &str, password: &str) -> AppResult<DecryptedContent> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| AppError::encryption(format!("Invalid ciphertext encoding: {e}")))?;

    if bytes.len() < SALT_LEN + NONCE_LEN {
        return Err(AppError::encryption("Ciphertext too short"));
    }

    let (salt, rest) = bytes.split_at(SALT_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

    let key = derive_key(password, salt)?;
    let cipher = ChaCha20Poly1305::new(Key::from_slice(&key));

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| AppError::encryption("Decryption failed: wrong password or corrupted data"))?;

    let text = String::from_utf8(plaintext)
        .map_err(|e| AppError::encryption(format!("Decrypted content is not UTF-8: {e}")))?;

    if text.is_empty() {
        Ok(DecryptedContent::Empty)
    } else {
        Ok(DecryptedContent::Text(text))
    }
}

/// Derive a 256-bit key from a password and salt using Argon2id.
fn derive_key(password: &str, salt: &[u8]) -> AppResult<[u8; KEY_LEN]> {
    let mut key = [0u8; KEY_LEN];
    Argon2::default()
        .hash_password_into(password.as_bytes(), salt, &mut key)
        .map_err(|e| AppError::encryption(format!("Key derivation failed: {e}")))?;
    Ok(key)
}
