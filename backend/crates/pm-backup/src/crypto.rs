//! Password-based authenticated encryption for manifests.
//!
//! AES-256-GCM keyed by PBKDF2-HMAC-SHA256 over the password. Salt and
//! nonce are drawn fresh for every call. The GCM tag travels separately
//! from the ciphertext, and every binary field is standard base64.

use crate::{BackupError, Result};

use pm_core::EncryptedPayload;

use std::panic::Location;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::{Engine, engine::general_purpose::STANDARD};
use error_location::ErrorLocation;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

pub const PBKDF2_ITERATIONS: u32 = 100_000;
pub const KEY_LEN: usize = 32;
pub const SALT_LEN: usize = 32;
pub const NONCE_LEN: usize = 12;
pub const TAG_LEN: usize = 16;

fn derive_key(password: &str, salt: &[u8]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut *key);
    key
}

pub fn encrypt(plaintext: &[u8], password: &str) -> Result<EncryptedPayload> {
    let mut salt = [0u8; SALT_LEN];
    let mut nonce = [0u8; NONCE_LEN];
    let mut rng = rand::rng();
    rng.fill_bytes(&mut salt);
    rng.fill_bytes(&mut nonce);

    let key = derive_key(password, &salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_slice()));

    let mut sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| BackupError::EncryptionFailed {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let Some(split_at) = sealed.len().checked_sub(TAG_LEN) else {
        return Err(BackupError::EncryptionFailed {
            location: ErrorLocation::from(Location::caller()),
        });
    };
    let tag = sealed.split_off(split_at);

    Ok(EncryptedPayload {
        ciphertext: STANDARD.encode(&sealed),
        salt: STANDARD.encode(salt),
        nonce: STANDARD.encode(nonce),
        auth_tag: STANDARD.encode(tag),
    })
}

/// Reverse `encrypt`. Bad encodings, bad lengths, a wrong password and
/// tampered bytes all fail the same way.
pub fn decrypt(payload: &EncryptedPayload, password: &str) -> Result<Vec<u8>> {
    let salt = decode(&payload.salt, Some(SALT_LEN))?;
    let nonce = decode(&payload.nonce, Some(NONCE_LEN))?;
    let tag = decode(&payload.auth_tag, Some(TAG_LEN))?;
    let mut sealed = decode(&payload.ciphertext, None)?;
    sealed.extend_from_slice(&tag);

    let key = derive_key(password, &salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_slice()));

    cipher
        .decrypt(Nonce::from_slice(&nonce), sealed.as_slice())
        .map_err(|_| BackupError::decryption_failed())
}

#[track_caller]
fn decode(field: &str, expected_len: Option<usize>) -> Result<Vec<u8>> {
    let bytes = STANDARD
        .decode(field)
        .map_err(|_| BackupError::decryption_failed())?;

    match expected_len {
        Some(len) if bytes.len() != len => Err(BackupError::decryption_failed()),
        _ => Ok(bytes),
    }
}
