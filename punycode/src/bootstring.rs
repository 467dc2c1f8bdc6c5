//! Bootstring parameters and helpers shared by the encoder and decoder.
//!
//! These are the Punycode parameter values from RFC 3492 section 5. The
//! digit alphabet is a-z (0-25) followed by 0-9 (26-35).

/// Base for variable-length integer encoding.
pub(crate) const BASE: u32 = 36;

/// Minimum threshold value.
pub(crate) const T_MIN: u32 = 1;

/// Maximum threshold value.
pub(crate) const T_MAX: u32 = 26;

/// Skew factor for bias adaptation.
pub(crate) const SKEW: u32 = 38;

/// Damping factor for first adaptation.
pub(crate) const DAMP: u32 = 700;

/// Initial bias value.
pub(crate) const INITIAL_BIAS: u32 = 72;

/// First non-basic code point.
pub(crate) const INITIAL_N: u32 = 0x80;

/// Separates the basic code points from the encoded deltas.
pub(crate) const DELIMITER: char = '-';

/// Largest value any intermediate quantity may reach (2^31 - 1).
pub(crate) const MAX_INT: u32 = i32::MAX as u32;

/// The encoding alphabet: a-z (0-25) + 0-9 (26-35).
const ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Adapt bias after encoding/decoding a delta.
///
/// RFC 3492 section 6.1. `num_points` is the number of code points in the
/// output so far, including the one just handled; `first_time` is set only
/// for the first delta of a string.
pub(crate) fn adapt_bias(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta = if first_time { delta / DAMP } else { delta >> 1 };

    // Compensate for the length of the string
    delta += delta / num_points;

    let mut k = 0u32;
    let base_minus_tmin = BASE - T_MIN;
    let threshold = (base_minus_tmin * T_MAX) / 2;

    while delta > threshold {
        delta /= base_minus_tmin;
        k += BASE;
    }

    k + ((base_minus_tmin + 1) * delta) / (delta + SKEW)
}

/// Encode a digit value (0-35) to its lowercase character.
///
/// Returns `None` if the digit is out of range.
pub(crate) fn encode_digit(d: u32) -> Option<char> {
    ALPHABET.get(d as usize).map(|&b| b as char)
}

/// Decode a byte to its digit value.
///
/// Anything outside the alphabet maps to `BASE`, which every caller treats
/// as an overflow.
pub(crate) fn decode_digit(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => (b - b'0') as u32 + 26,
        b'A'..=b'Z' => (b - b'A') as u32,
        b'a'..=b'z' => (b - b'a') as u32,
        _ => BASE,
    }
}

/// Calculate the threshold for a given position k and bias.
pub(crate) fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias + T_MIN {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}
