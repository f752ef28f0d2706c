use crate::base32::ALPHABET;
use crate::entropy;

/// Map each byte to `ALPHABET[byte % 32]`.
///
/// 256 is a multiple of 32, so uniform bytes give uniform characters.
pub fn random_base32_string_from(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| char::from(ALPHABET[usize::from(b % 32)]))
        .collect()
}

/// Random Crockford Base32 string of exactly `n` characters.
///
/// Draws `n` bytes from [`entropy::fill`], so this never fails: if the OS
/// source is unavailable the characters come from the non-secure fallback.
/// Do not use the output as a secret; use [`crate::token`] for that.
pub fn random_base32_string(n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    let mut buf = vec![0u8; n];
    entropy::fill(&mut buf);
    random_base32_string_from(&buf)
}
