//! Conversion between UTF-16 code units and Unicode code points.
//!
//! The encoder works on code points, so text that arrives as UTF-16 (from a
//! JavaScript host, a Windows API, a UCS-2 wire format) is turned into a
//! code-point sequence first, with surrogate pairs combined.

use crate::error::{Error, Result};

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Decode UTF-16 code units into code points.
///
/// A high surrogate must be followed by a low surrogate; the pair becomes
/// one code point. Either half on its own is rejected with
/// [`Error::UnpairedSurrogate`].
///
/// # Examples
///
/// ```
/// use punycode::ucs2;
///
/// assert_eq!(ucs2::decode(&[0x61, 0x62, 0x63]).unwrap(), vec![0x61, 0x62, 0x63]);
/// // U+1D306 TETRAGRAM FOR CENTRE
/// assert_eq!(ucs2::decode(&[0xD834, 0xDF06]).unwrap(), vec![0x1D306]);
/// ```
pub fn decode(units: &[u16]) -> Result<Vec<u32>> {
    let mut output = Vec::with_capacity(units.len());
    let mut index = 0;

    while index < units.len() {
        let unit = units[index];

        if HIGH_SURROGATES.contains(&unit) {
            match units.get(index + 1) {
                Some(&low) if LOW_SURROGATES.contains(&low) => {
                    let hi = (unit - 0xD800) as u32;
                    let lo = (low - 0xDC00) as u32;
                    output.push(hi * 0x400 + lo + 0x10000);
                    index += 2;
                    continue;
                }
                _ => return Err(Error::UnpairedSurrogate { index }),
            }
        }

        if LOW_SURROGATES.contains(&unit) {
            return Err(Error::UnpairedSurrogate { index });
        }

        output.push(unit as u32);
        index += 1;
    }

    Ok(output)
}

/// Encode code points as UTF-16 code units.
///
/// Values at or above U+10000 are split into surrogate pairs. The input is
/// assumed to hold code points in `0..=0x10FFFF`.
///
/// # Examples
///
/// ```
/// use punycode::ucs2;
///
/// assert_eq!(ucs2::encode(&[0x61, 0x1D306]), vec![0x61, 0xD834, 0xDF06]);
/// ```
pub fn encode(code_points: &[u32]) -> Vec<u16> {
    let mut output = Vec::with_capacity(code_points.len());

    for &cp in code_points {
        if cp > 0xFFFF {
            let value = cp - 0x10000;
            output.push(0xD800 | (value >> 10) as u16);
            output.push(0xDC00 | (value & 0x3FF) as u16);
        } else {
            output.push(cp as u16);
        }
    }

    output
}
