//! Punycode: Unicode to ASCII-compatible encoding for domain labels.
//!
//! Implements the Bootstring algorithm with the Punycode parameters from
//! RFC 3492, and the label-by-label `xn--` convention of RFC 3490 IDNA on
//! top of it. Nameprep, IDNA mapping tables and domain syntax checks are
//! left to the caller; this crate only transcodes characters.
//!
//! # Key Properties
//!
//! - Roundtrip: `decode(encode(s)) == s`
//! - Digits are emitted lowercase and decoded case-insensitively
//! - Every intermediate value is bounded by 2^31 - 1; exceeding it is an
//!   [`Error::Overflow`], never a wrapped result
//!
//! # Examples
//!
//! ```
//! use punycode::{decode, encode, to_ascii, to_unicode};
//!
//! assert_eq!(encode("mañana").unwrap(), "maana-pta");
//! assert_eq!(decode("maana-pta").unwrap(), "mañana");
//!
//! // Whole domains: only labels that need it are converted
//! assert_eq!(to_ascii("mañana.com").unwrap(), "xn--maana-pta.com");
//! assert_eq!(to_unicode("xn--maana-pta.com").unwrap(), "mañana.com");
//! assert_eq!(to_ascii("example.com").unwrap(), "example.com");
//! ```

mod bootstring;
mod decode;
mod encode;
mod error;
mod label;
pub mod raw;
pub mod ucs2;

pub use decode::{decode, decode_to_code_points, decode_utf16};
pub use encode::{encode, encode_code_points, encode_utf16};
pub use error::{Error, Result};
pub use label::{to_ascii, to_unicode, ACE_PREFIX};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
