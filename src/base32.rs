use crate::error::{Result, XgenError};

/// Crockford Base32 alphabet (no I, L, O, U).
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// The zero digit, used for left-padding fixed-width encodings.
pub const ZERO: char = '0';

/// Index of `c` in [`ALPHABET`], if it is an alphabet character.
fn digit_value(c: u8) -> Option<u64> {
    ALPHABET
        .iter()
        .position(|&a| a == c)
        .and_then(|i| u64::try_from(i).ok())
}

/// Encode a u64 as a Crockford Base32 string, most significant digit first.
///
/// Zero encodes as `"0"`; no other value has a leading zero.
#[allow(clippy::cast_possible_truncation)]
pub fn encode(value: u64) -> String {
    if value == 0 {
        return ZERO.to_string();
    }
    let mut result = Vec::with_capacity(13);
    let mut v = value;
    while v > 0 {
        result.push(ALPHABET[(v % 32) as usize]);
        v /= 32;
    }
    result.reverse();
    result.into_iter().map(char::from).collect()
}

/// Decode a Crockford Base32 string produced by [`encode`].
///
/// Leading zero digits are accepted, so fixed-width padded values decode too.
///
/// # Errors
///
/// Returns `InvalidBase32` if the input is empty, contains a character outside
/// [`ALPHABET`] (lowercase included), or does not fit in a u64.
pub fn decode(input: &str) -> Result<u64> {
    let invalid = || XgenError::InvalidBase32 {
        input: input.to_string(),
    };
    if input.is_empty() {
        return Err(invalid());
    }
    input.bytes().try_fold(0u64, |acc, c| {
        let digit = digit_value(c).ok_or_else(invalid)?;
        acc.checked_mul(32)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(invalid)
    })
}

/// Returns true if every character of `s` is in [`ALPHABET`].
pub fn is_base32(s: &str) -> bool {
    s.bytes().all(|c| ALPHABET.contains(&c))
}
