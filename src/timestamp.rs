use std::time::{SystemTime, UNIX_EPOCH};

use crate::base32;

/// Prefix width for microsecond timestamps (~34,000 years before wrapping).
pub const MICROS_PREFIX_WIDTH: usize = 11;

/// Prefix width for nanosecond timestamps.
pub const NANOS_PREFIX_WIDTH: usize = 13;

/// Clock resolution of a timestamp prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resolution {
    #[default]
    Micros,
    Nanos,
}

impl Resolution {
    /// Prefix width of the predefined profile for this resolution.
    pub const fn default_width(self) -> usize {
        match self {
            Self::Micros => MICROS_PREFIX_WIDTH,
            Self::Nanos => NANOS_PREFIX_WIDTH,
        }
    }
}

/// Current wall-clock time since the Unix epoch at `resolution`.
///
/// A clock set before the epoch reads as 0. Nanoseconds wrap to the low 64 bits.
#[allow(clippy::cast_possible_truncation)]
pub fn now(resolution: Resolution) -> u64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    match resolution {
        Resolution::Micros => elapsed.as_micros() as u64,
        Resolution::Nanos => elapsed.as_nanos() as u64,
    }
}

/// Force `code` to exactly `width` characters.
///
/// Shorter codes are left-padded with [`base32::ZERO`]. Longer codes keep their
/// last `width` characters, dropping the most significant digits. Lengths are
/// counted in chars, so non-ASCII input is never split mid-character.
pub fn fit_width(code: &str, width: usize) -> String {
    let len = code.chars().count();
    if len >= width {
        code.chars().skip(len - width).collect()
    } else {
        format!("{code:0>width$}")
    }
}

/// Encode `timestamp` as a fixed-width Base32 prefix.
pub fn encode_timestamp_value(timestamp: u64, width: usize) -> String {
    fit_width(&base32::encode(timestamp), width)
}

/// Encode the current time at `resolution` as a `width`-character Base32 prefix.
pub fn encode_timestamp(resolution: Resolution, width: usize) -> String {
    encode_timestamp_value(now(resolution), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ========== Resolution ==========

    #[test]
    fn test_default_widths() {
        assert_eq!(Resolution::Micros.default_width(), 11);
        assert_eq!(Resolution::Nanos.default_width(), 13);
        assert_eq!(Resolution::default(), Resolution::Micros);
    }

    #[test]
    fn test_now_nanos_exceeds_micros() {
        let micros = now(Resolution::Micros);
        let nanos = now(Resolution::Nanos);
        assert!(micros > 0);
        assert!(nanos > micros);
    }

    // ========== fit_width ==========

    #[test]
    fn test_fit_width_pads_left() {
        assert_eq!(fit_width("Z", 4), "000Z");
        assert_eq!(fit_width("100", 11), "00000000100");
    }

    #[test]
    fn test_fit_width_exact() {
        assert_eq!(fit_width("ABCD", 4), "ABCD");
    }

    #[test]
    fn test_fit_width_keeps_least_significant() {
        assert_eq!(fit_width("ABCDEF", 3), "DEF");
    }

    #[test]
    fn test_fit_width_zero() {
        assert_eq!(fit_width("ABC", 0), "");
    }

    #[test]
    fn test_fit_width_counts_chars_not_bytes() {
        assert_eq!(fit_width("A\u{c4}", 1), "\u{c4}");
        let padded = fit_width("\u{c4}", 3);
        assert_eq!(padded, "00\u{c4}");
        assert_eq!(padded.chars().count(), 3);
    }

    // ========== encode_timestamp ==========

    #[test]
    fn test_encode_timestamp_value_padded() {
        assert_eq!(encode_timestamp_value(0, 11), "00000000000");
        assert_eq!(encode_timestamp_value(1024, 5), "00100");
    }

    #[test]
    fn test_encode_timestamp_value_truncated() {
        // u64::MAX is 13 digits; width 11 drops the leading "FZ"
        assert_eq!(encode_timestamp_value(u64::MAX, 11), "ZZZZZZZZZZZ");
    }

    #[test]
    fn test_encode_timestamp_micros_fits_without_truncation() {
        let prefix = encode_timestamp(Resolution::Micros, MICROS_PREFIX_WIDTH);
        assert_eq!(prefix.len(), 11);
        // Current microsecond counts need 11 digits at most, so the prefix decodes back
        let decoded = base32::decode(&prefix).unwrap();
        assert!(decoded <= now(Resolution::Micros));
    }

    #[test]
    fn test_encode_timestamp_nanos_width() {
        assert_eq!(encode_timestamp(Resolution::Nanos, NANOS_PREFIX_WIDTH).len(), 13);
    }

    #[test]
    fn test_encode_timestamp_non_decreasing() {
        let mut previous = encode_timestamp(Resolution::Micros, MICROS_PREFIX_WIDTH);
        for _ in 0..1000 {
            let current = encode_timestamp(Resolution::Micros, MICROS_PREFIX_WIDTH);
            assert!(current >= previous, "{} < {}", current, previous);
            previous = current;
        }
    }

    proptest! {
        #[test]
        fn prop_fit_width_exact_length(value in any::<u64>(), width in 0usize..32) {
            let prefix = encode_timestamp_value(value, width);
            prop_assert_eq!(prefix.len(), width);
            prop_assert!(base32::is_base32(&prefix));
        }

        #[test]
        fn prop_wide_prefix_preserves_order(a in any::<u64>(), b in any::<u64>()) {
            let (pa, pb) = (encode_timestamp_value(a, 13), encode_timestamp_value(b, 13));
            prop_assert_eq!(a.cmp(&b), pa.cmp(&pb));
        }

        #[test]
        fn prop_fit_width_any_text(code in ".*", width in 0usize..32) {
            prop_assert_eq!(fit_width(&code, width).chars().count(), width);
        }

        #[test]
        fn prop_current_prefix_length(width in 1usize..20) {
            prop_assert_eq!(encode_timestamp(Resolution::Micros, width).len(), width);
            prop_assert_eq!(encode_timestamp(Resolution::Nanos, width).len(), width);
        }
    }
}
