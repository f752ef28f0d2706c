//! HMAC-SHA256 request signatures.
//!
//! The signed message is the canonical string `METHOD\nPATH\nTIMESTAMP\nBODY`,
//! and signatures travel as lowercase hex. Replay protection is left to the
//! caller via [`is_valid_timestamp`].

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Result, XgenError};

type HmacSha256 = Hmac<Sha256>;

/// Default accepted clock drift for signature timestamps: ±5 minutes.
pub const DEFAULT_SIGNATURE_DRIFT: Duration = Duration::from_secs(5 * 60);

/// Join request components into the string that gets signed.
pub fn canonical_string(method: &str, path: &str, timestamp: &str, body: &str) -> String {
    format!("{method}\n{path}\n{timestamp}\n{body}")
}

fn signing_mac(
    secret: &str,
    method: &str,
    path: &str,
    timestamp: &str,
    body: &str,
) -> Result<HmacSha256> {
    for (field, value) in [
        ("secret", secret),
        ("method", method),
        ("path", path),
        ("timestamp", timestamp),
    ] {
        if value.is_empty() {
            return Err(XgenError::MissingField { field });
        }
    }
    // HMAC accepts keys of any length
    let mut mac = <HmacSha256 as Mac>::new_from_slice(secret.as_bytes())
        .map_err(|_| XgenError::MissingField { field: "secret" })?;
    mac.update(canonical_string(method, path, timestamp, body).as_bytes());
    Ok(mac)
}

/// Lowercase hex HMAC-SHA256 of the canonical string, keyed by `secret`.
///
/// # Errors
///
/// Returns `MissingField` if `secret`, `method`, `path` or `timestamp` is
/// empty. An empty body is allowed.
pub fn sign(secret: &str, method: &str, path: &str, timestamp: &str, body: &str) -> Result<String> {
    let mac = signing_mac(secret, method, path, timestamp, body)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Returns true if `received` is the valid hex signature for the request.
///
/// The comparison is constant-time. Malformed hex or missing fields yield false.
pub fn verify(
    secret: &str,
    method: &str,
    path: &str,
    timestamp: &str,
    body: &str,
    received: &str,
) -> bool {
    let Ok(received) = hex::decode(received) else {
        return false;
    };
    signing_mac(secret, method, path, timestamp, body)
        .is_ok_and(|mac| mac.verify_slice(&received).is_ok())
}

/// Returns true if `timestamp` (Unix seconds) is within `allowed_drift` of now,
/// in either direction.
pub fn is_valid_timestamp(timestamp: &str, allowed_drift: Duration) -> bool {
    let Ok(seconds) = timestamp.parse::<i64>() else {
        return false;
    };
    let signed_at = match u64::try_from(seconds) {
        Ok(secs) => UNIX_EPOCH.checked_add(Duration::from_secs(secs)),
        Err(_) => UNIX_EPOCH.checked_sub(Duration::from_secs(seconds.unsigned_abs())),
    };
    let Some(signed_at) = signed_at else {
        return false;
    };
    let now = SystemTime::now();
    let drift = now
        .duration_since(signed_at)
        .or_else(|_| signed_at.duration_since(now))
        .unwrap_or(Duration::MAX);
    drift <= allowed_drift
}

/// [`is_valid_timestamp`] with [`DEFAULT_SIGNATURE_DRIFT`].
pub fn is_valid_timestamp_default(timestamp: &str) -> bool {
    is_valid_timestamp(timestamp, DEFAULT_SIGNATURE_DRIFT)
}
