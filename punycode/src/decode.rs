//! Punycode decoding (RFC 3492 section 6.2).

use crate::bootstring::{
    adapt_bias, decode_digit, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N, MAX_INT,
};
use crate::error::{Error, Result};

/// Decode a Punycode string into Unicode.
///
/// Digits are case-insensitive. Returns an empty string for empty input.
///
/// # Examples
///
/// ```
/// use punycode::{decode, Error};
///
/// assert_eq!(decode("maana-pta").unwrap(), "mañana");
/// assert_eq!(decode("bcher-kva").unwrap(), "bücher");
///
/// // The digit stream stops before the last delta is complete
/// assert_eq!(decode("maana-p"), Err(Error::MalformedInput));
/// ```
pub fn decode(input: &str) -> Result<String> {
    decode_to_code_points(input)?
        .into_iter()
        .map(|cp| char::from_u32(cp).ok_or(Error::InvalidCodePoint(cp)))
        .collect()
}

/// Decode a Punycode string into UTF-16 code units.
pub fn decode_utf16(input: &str) -> Result<Vec<u16>> {
    let code_points = decode_to_code_points(input)?;
    Ok(crate::ucs2::encode(&code_points))
}

/// Decode a Punycode string into a sequence of Unicode scalar values.
pub fn decode_to_code_points(input: &str) -> Result<Vec<u32>> {
    let bytes = input.as_bytes();

    // Basic code points are everything before the last delimiter. A
    // delimiter at index 0 has no basic code points in front of it, so
    // digits start at the beginning of the input.
    let (mut output, digits) = match input.rfind(DELIMITER) {
        Some(pos) if pos > 0 => {
            let basic = basic_code_points(&input[..pos])?;
            (basic, &bytes[pos + 1..])
        }
        _ => (Vec::new(), bytes),
    };

    let mut n = INITIAL_N;
    let mut bias = INITIAL_BIAS;
    let mut i: u32 = 0;
    let mut digits = digits.iter();

    while !digits.as_slice().is_empty() {
        let old_i = i;
        let mut w: u32 = 1;
        let mut k = BASE;

        // Decode one generalized variable-length integer into i
        loop {
            let &b = digits.next().ok_or(Error::MalformedInput)?;
            let digit = decode_digit(b);

            if digit >= BASE || digit > (MAX_INT - i) / w {
                return Err(Error::Overflow);
            }

            i += digit * w;
            let t = threshold(k, bias);

            if digit < t {
                break;
            }

            if w > MAX_INT / (BASE - t) {
                return Err(Error::Overflow);
            }

            w *= BASE - t;
            k += BASE;
        }

        let out_len = output.len() as u32 + 1;
        bias = adapt_bias(i - old_i, out_len, old_i == 0);

        if i / out_len > MAX_INT - n {
            return Err(Error::Overflow);
        }

        n += i / out_len;
        i %= out_len;

        if char::from_u32(n).is_none() {
            tracing::debug!(code_point = n, "decoded value is not a scalar value");
            return Err(Error::InvalidCodePoint(n));
        }

        output.insert(i as usize, n);
        i += 1;
    }

    Ok(output)
}

/// Collect the literal prefix, rejecting anything outside ASCII.
fn basic_code_points(basic: &str) -> Result<Vec<u32>> {
    basic
        .chars()
        .map(|c| {
            if c.is_ascii() {
                Ok(c as u32)
            } else {
                Err(Error::NotBasic(c))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), Ok(String::new()));
    }

    #[test]
    fn test_decode_known_vectors() {
        assert_eq!(decode("maana-pta"), Ok("mañana".to_string()));
        assert_eq!(decode("bcher-kva"), Ok("bücher".to_string()));
        assert_eq!(decode("tda"), Ok("ü".to_string()));
    }

    #[test]
    fn test_decode_uppercase_digits() {
        assert_eq!(decode("maana-PTA"), Ok("mañana".to_string()));
        assert_eq!(decode("bcher-KVA"), Ok("bücher".to_string()));
    }

    #[test]
    fn test_decode_basic_only() {
        // An encoder emits "a-" for "a"
        assert_eq!(decode("a-"), Ok("a".to_string()));
        assert_eq!(decode("foo-bar-"), Ok("foo-bar".to_string()));
    }

    #[test]
    fn test_decode_no_delimiter_reads_digits_from_start() {
        assert_eq!(decode("tda"), Ok("ü".to_string()));
    }

    #[test]
    fn test_decode_leading_delimiter_is_a_digit() {
        // '-' is not in the digit alphabet
        assert_eq!(decode("-tda"), Err(Error::Overflow));
    }

    #[test]
    fn test_decode_truncated() {
        // 'z' = 25 is above every threshold, so another digit must follow
        assert_eq!(decode("a-z"), Err(Error::MalformedInput));
        assert_eq!(decode("maana-pt"), Err(Error::MalformedInput));
    }

    #[test]
    fn test_decode_invalid_digit() {
        assert_eq!(decode("maana-p!a"), Err(Error::Overflow));
        assert_eq!(decode("maana-p a"), Err(Error::Overflow));
    }

    #[test]
    fn test_decode_overflow() {
        // Every '9' (35) is a continuation digit, so the weight keeps
        // growing until it no longer fits in 31 bits.
        assert_eq!(decode("99999999999"), Err(Error::Overflow));
        assert_eq!(decode("a-99999999999"), Err(Error::Overflow));
    }

    #[test]
    fn test_decode_not_basic() {
        assert_eq!(decode("mañana-pta"), Err(Error::NotBasic('ñ')));
    }

    #[test]
    fn test_decode_invalid_code_point() {
        // One past the last scalar value
        assert_eq!(decode("en32g"), Err(Error::InvalidCodePoint(0x110000)));
        // A lone surrogate cannot be a char
        assert_eq!(decode("ib9b"), Err(Error::InvalidCodePoint(0xD800)));
    }

    #[test]
    fn test_decode_to_code_points() {
        assert_eq!(
            decode_to_code_points("maana-pta"),
            Ok(vec![0x6D, 0x61, 0xF1, 0x61, 0x6E, 0x61])
        );
    }

    #[test]
    fn test_decode_utf16_astral() {
        // U+1F600 GRINNING FACE
        let expected: Vec<u16> = "\u{1F600}".encode_utf16().collect();
        assert_eq!(decode_utf16("e28h"), Ok(expected));
    }
}
