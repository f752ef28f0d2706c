//! Random byte sourcing.
//!
//! The primary path reads from the operating system's secure random source.
//! If that read fails, [`fill`] falls back to a time-seeded linear
//! congruential generator. The fallback is NOT cryptographically secure: it
//! exists only so identifier generation keeps working when the OS source is
//! broken. Security-sensitive callers use [`fill_secure`] and handle the error.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Result, XgenError};

/// glibc `rand()` multiplier.
pub const LCG_MULTIPLIER: u64 = 1_103_515_245;

/// glibc `rand()` increment.
pub const LCG_INCREMENT: u64 = 12_345;

/// Which strategy filled a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entropy {
    /// Bytes came from the operating system's secure source.
    Secure,
    /// The secure source failed; bytes came from the clock-seeded [`Lcg`].
    DeterministicFallback,
}

/// Linear congruential generator used as the non-secure fallback.
///
/// Each step emits the low byte of the 64-bit state, then advances
/// `state = state * 1103515245 + 12345` with wrapping arithmetic.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from the wall clock in nanoseconds since the Unix epoch.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        // Keep the low 64 bits, matching a wrapping i64 nanosecond count.
        Self::new(nanos as u64)
    }

    pub const fn next_byte(&mut self) -> u8 {
        let byte = self.state.to_le_bytes()[0];
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        byte
    }

    pub fn fill(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b = self.next_byte();
        }
    }
}

/// Fill `buf` from the operating system's secure random source.
///
/// # Errors
///
/// Returns `EntropyUnavailable` if the OS source cannot be read.
pub fn fill_secure(buf: &mut [u8]) -> Result<()> {
    if buf.is_empty() {
        return Ok(());
    }
    getrandom::fill(buf).map_err(|e| XgenError::EntropyUnavailable {
        reason: e.to_string(),
    })
}

/// Fill `buf` using `source`, falling back to the clock-seeded [`Lcg`] if it fails.
///
/// Never fails. The returned tag says which path produced the bytes.
pub fn fill_with<F>(buf: &mut [u8], source: F) -> Entropy
where
    F: FnOnce(&mut [u8]) -> Result<()>,
{
    if buf.is_empty() {
        return Entropy::Secure;
    }
    match source(&mut *buf) {
        Ok(()) => Entropy::Secure,
        Err(err) => {
            tracing::warn!(
                bytes = buf.len(),
                error = %err,
                "secure entropy unavailable, using deterministic fallback"
            );
            Lcg::from_clock().fill(buf);
            Entropy::DeterministicFallback
        }
    }
}

/// Fill `buf` from the OS secure source, silently degrading to the fallback.
pub fn fill(buf: &mut [u8]) -> Entropy {
    fill_with(buf, fill_secure)
}
