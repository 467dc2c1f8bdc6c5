//! Domain and email label handling (RFC 3490 ToASCII / ToUnicode, minus
//! nameprep and validation).
//!
//! Input is split on `.` and each label is converted independently. Labels
//! that don't need conversion pass through untouched.

use crate::decode::decode;
use crate::encode::encode;
use crate::error::Result;

/// The ACE prefix marking a Punycode label.
pub const ACE_PREFIX: &str = "xn--";

/// Label separator.
const SEPARATOR: char = '.';

/// Convert a domain name or email address to its ASCII form.
///
/// Every label containing a character at or above U+007F is replaced by
/// `xn--` followed by its Punycode encoding.
///
/// # Examples
///
/// ```
/// use punycode::to_ascii;
///
/// assert_eq!(to_ascii("mañana.com").unwrap(), "xn--maana-pta.com");
/// assert_eq!(to_ascii("example.com").unwrap(), "example.com");
/// ```
pub fn to_ascii(domain: &str) -> Result<String> {
    map_labels(domain, |label| {
        if label.chars().any(|c| c >= '\u{7F}') {
            let encoded = encode(label)?;
            tracing::trace!(label, encoded = %encoded, "encoded label");
            Ok(format!("{}{}", ACE_PREFIX, encoded))
        } else {
            Ok(label.to_string())
        }
    })
}

/// Convert a domain name or email address to its Unicode form.
///
/// Every label starting with `xn--` (in any case) is decoded; the rest pass
/// through.
///
/// # Examples
///
/// ```
/// use punycode::to_unicode;
///
/// assert_eq!(to_unicode("xn--maana-pta.com").unwrap(), "mañana.com");
/// assert_eq!(to_unicode("example.com").unwrap(), "example.com");
/// ```
pub fn to_unicode(domain: &str) -> Result<String> {
    map_labels(domain, |label| match strip_ace_prefix(label) {
        Some(rest) => {
            let decoded = decode(&rest.to_ascii_lowercase())?;
            tracing::trace!(label, decoded = %decoded, "decoded label");
            Ok(decoded)
        }
        None => Ok(label.to_string()),
    })
}

/// Return the part after a case-insensitive `xn--` prefix.
fn strip_ace_prefix(label: &str) -> Option<&str> {
    let prefix = label.get(..ACE_PREFIX.len())?;
    if prefix.eq_ignore_ascii_case(ACE_PREFIX) {
        Some(&label[ACE_PREFIX.len()..])
    } else {
        None
    }
}

fn map_labels<F>(domain: &str, f: F) -> Result<String>
where
    F: FnMut(&str) -> Result<String>,
{
    if domain.is_empty() {
        return Ok(String::new());
    }

    let labels = domain
        .split(SEPARATOR)
        .map(f)
        .collect::<Result<Vec<_>>>()
        .inspect_err(|e| tracing::debug!(domain, error = %e, "label conversion failed"))?;

    Ok(labels.join("."))
}
