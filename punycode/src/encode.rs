//! Punycode encoding (RFC 3492 section 6.3).

use std::collections::BTreeSet;

use crate::bootstring::{
    adapt_bias, encode_digit, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N, MAX_INT,
};
use crate::error::{Error, Result};

/// Encode a Unicode string as Punycode.
///
/// Basic (ASCII) characters are copied in order, followed by the delimiter
/// and the encoded deltas for everything else. Returns an empty string for
/// empty input.
///
/// # Examples
///
/// ```
/// use punycode::encode;
///
/// assert_eq!(encode("mañana").unwrap(), "maana-pta");
/// assert_eq!(encode("bücher").unwrap(), "bcher-kva");
/// assert_eq!(encode("ü").unwrap(), "tda");
/// ```
pub fn encode(input: &str) -> Result<String> {
    let code_points: Vec<u32> = input.chars().map(u32::from).collect();
    encode_code_points(&code_points)
}

/// Encode UTF-16 code units as Punycode.
///
/// Surrogate pairs are combined first; an unpaired surrogate is an error.
pub fn encode_utf16(input: &[u16]) -> Result<String> {
    let code_points = crate::ucs2::decode(input)?;
    encode_code_points(&code_points)
}

/// Encode a sequence of code points as Punycode.
pub fn encode_code_points(input: &[u32]) -> Result<String> {
    let mut output = String::with_capacity(input.len());

    for &cp in input {
        if cp < INITIAL_N {
            // Below 0x80, so always a valid char
            output.push(cp as u8 as char);
        }
    }

    let basic_count = output.len() as u32;
    if basic_count > 0 {
        output.push(DELIMITER);
    }

    // Distinct non-basic code points, visited in increasing order
    let non_basic: BTreeSet<u32> = input.iter().copied().filter(|&cp| cp >= INITIAL_N).collect();

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut h = basic_count;

    for m in non_basic {
        // Advance delta to <m, 0>
        let room = MAX_INT.checked_sub(delta).ok_or(Error::Overflow)?;
        if m - n > room / (h + 1) {
            return Err(Error::Overflow);
        }

        delta += (m - n) * (h + 1);
        n = m;

        for &c in input {
            if c < n {
                delta += 1;
                if delta > MAX_INT {
                    return Err(Error::Overflow);
                }
            }

            if c == n {
                encode_varint(&mut output, delta, bias);
                bias = adapt_bias(delta, h + 1, h == basic_count);
                delta = 0;
                h += 1;
            }
        }

        delta += 1;
        n += 1;
    }

    Ok(output)
}

/// Append `value` as a generalized variable-length integer.
fn encode_varint(output: &mut String, mut value: u32, bias: u32) {
    let mut k = BASE;

    loop {
        let t = threshold(k, bias);

        if value < t {
            push_digit(output, value);
            break;
        }

        push_digit(output, t + (value - t) % (BASE - t));
        value = (value - t) / (BASE - t);
        k += BASE;
    }
}

fn push_digit(output: &mut String, digit: u32) {
    // Every caller reduces the digit modulo BASE first
    if let Some(c) = encode_digit(digit) {
        output.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(""), Ok(String::new()));
    }

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode("mañana"), Ok("maana-pta".to_string()));
        assert_eq!(encode("bücher"), Ok("bcher-kva".to_string()));
        assert_eq!(encode("ü"), Ok("tda".to_string()));
    }

    #[test]
    fn test_encode_basic_only() {
        // Basic code points still get the delimiter
        assert_eq!(encode("a"), Ok("a-".to_string()));
        assert_eq!(encode("foo-bar"), Ok("foo-bar-".to_string()));
    }

    #[test]
    fn test_encode_basic_delimiter_in_input() {
        assert_eq!(encode("ñ-"), Ok("--qga".to_string()));
    }

    #[test]
    fn test_encode_astral() {
        assert_eq!(encode("\u{1F600}"), Ok("e28h".to_string()));
    }

    #[test]
    fn test_encode_lowercase_output() {
        // Basic code points keep their case, digits are always lowercase
        assert_eq!(encode("MAÑANA"), Ok("MAANA-7na".to_string()));
    }

    #[test]
    fn test_encode_repeated_code_points() {
        // Each occurrence gets its own delta
        let once = encode("ü").unwrap();
        let thrice = encode("üüü").unwrap();
        assert!(thrice.len() > once.len());
        assert_eq!(crate::decode::decode(&thrice), Ok("üüü".to_string()));
    }

    #[test]
    fn test_encode_utf16() {
        let units: Vec<u16> = "mañana".encode_utf16().collect();
        assert_eq!(encode_utf16(&units), Ok("maana-pta".to_string()));

        let units: Vec<u16> = "\u{1F600}".encode_utf16().collect();
        assert_eq!(encode_utf16(&units), Ok("e28h".to_string()));
    }

    #[test]
    fn test_encode_utf16_unpaired_surrogate() {
        assert_eq!(
            encode_utf16(&[0x61, 0xD800]),
            Err(Error::UnpairedSurrogate { index: 1 })
        );
        assert_eq!(
            encode_utf16(&[0xDC00, 0x61]),
            Err(Error::UnpairedSurrogate { index: 0 })
        );
    }

    #[test]
    fn test_encode_code_points_overflow() {
        // (0x10FFFF - 0x80) * (h + 1) passes 2^31 - 1 once enough basic
        // code points come first.
        let mut input = vec![u32::from('a'); 3000];
        input.push(0x10FFFF);
        assert_eq!(encode_code_points(&input), Err(Error::Overflow));
    }

    #[test]
    fn test_encode_code_points_matches_encode() {
        let s = "Bahnhofstraße";
        let code_points: Vec<u32> = s.chars().map(u32::from).collect();
        assert_eq!(encode_code_points(&code_points), encode(s));
    }
}
