//! Secret token generation.
//!
//! Unlike [`crate::random`], tokens never fall back to the non-secure
//! generator: if the OS source fails, the error is returned to the caller.

use crate::entropy;
use crate::error::Result;

/// Random bytes in an API key (32 hex characters).
pub const API_KEY_BYTES: usize = 16;

/// Random bytes in a secret key (64 hex characters).
pub const SECRET_KEY_BYTES: usize = 32;

/// Lowercase hex token built from `byte_len` bytes drawn by `source`.
///
/// # Errors
///
/// Returns whatever `source` returns, typically `EntropyUnavailable`.
pub fn generate_token_with<F>(byte_len: usize, source: F) -> Result<String>
where
    F: FnOnce(&mut [u8]) -> Result<()>,
{
    let mut buf = vec![0u8; byte_len];
    if let Err(err) = source(buf.as_mut_slice()) {
        tracing::warn!(bytes = byte_len, error = %err, "token generation failed");
        return Err(err);
    }
    Ok(hex::encode(buf))
}

/// Lowercase hex token of `2 * byte_len` characters from the OS secure source.
///
/// # Errors
///
/// Returns `EntropyUnavailable` if the OS source cannot be read.
pub fn generate_token(byte_len: usize) -> Result<String> {
    generate_token_with(byte_len, entropy::fill_secure)
}

/// 32-character lowercase hex API key.
///
/// # Errors
///
/// Returns `EntropyUnavailable` if the OS source cannot be read.
pub fn generate_api_key() -> Result<String> {
    generate_token(API_KEY_BYTES)
}

/// 64-character lowercase hex secret key.
///
/// # Errors
///
/// Returns `EntropyUnavailable` if the OS source cannot be read.
pub fn generate_secret_key() -> Result<String> {
    generate_token(SECRET_KEY_BYTES)
}
