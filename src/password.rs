use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Result, XgenError};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 of `password` keyed by `secret`, the bcrypt pre-hash.
fn pre_hash(secret: &str, password: &str) -> Result<[u8; 32]> {
    if secret.is_empty() {
        return Err(XgenError::EmptyInput { field: "secret" });
    }
    if password.is_empty() {
        return Err(XgenError::EmptyInput { field: "password" });
    }
    let mut mac = <HmacSha256 as Mac>::new_from_slice(secret.as_bytes()).map_err(|e| {
        XgenError::Hash {
            reason: e.to_string(),
        }
    })?;
    mac.update(password.as_bytes());
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    Ok(digest)
}

/// Hash `password` for storage at a given bcrypt cost (4..=31).
///
/// # Errors
///
/// Returns `EmptyInput` if `secret` or `password` is empty, or `Hash` if
/// bcrypt rejects the cost.
pub fn hash_password_with_cost(secret: &str, password: &str, cost: u32) -> Result<String> {
    let pre_hashed = pre_hash(secret, password)?;
    bcrypt::hash(pre_hashed, cost).map_err(|e| XgenError::Hash {
        reason: e.to_string(),
    })
}

/// Hash `password` for storage: HMAC-SHA256 keyed by `secret`, then bcrypt.
///
/// The pre-hash keeps long passwords under bcrypt's 72-byte input limit and
/// ties stored hashes to the server-side secret.
///
/// # Errors
///
/// Returns `EmptyInput` if `secret` or `password` is empty.
pub fn hash_password(secret: &str, password: &str) -> Result<String> {
    hash_password_with_cost(secret, password, bcrypt::DEFAULT_COST)
}

/// Returns true if `password` under `secret` matches the stored `hashed` value.
pub fn verify_password(secret: &str, password: &str, hashed: &str) -> bool {
    pre_hash(secret, password)
        .ok()
        .and_then(|pre_hashed| bcrypt::verify(pre_hashed, hashed).ok())
        .unwrap_or(false)
}
