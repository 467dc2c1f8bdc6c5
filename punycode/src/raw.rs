//! Codec entry points for untyped byte input.
//!
//! The `&str` functions at the crate root can't be handed anything but text.
//! These variants accept bytes from files, sockets or stdin, and reject
//! anything that isn't UTF-8 with [`Error::InvalidArgument`] before doing
//! any work.
//!
//! ```
//! use punycode::{raw, Error};
//!
//! assert_eq!(raw::to_ascii("mañana.com".as_bytes()).unwrap(), "xn--maana-pta.com");
//! assert_eq!(raw::decode(b"\xff\xfe"), Err(Error::InvalidArgument));
//! ```

use crate::error::{Error, Result};

/// View bytes as text, or fail with [`Error::InvalidArgument`].
pub fn as_text(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input).map_err(|e| {
        tracing::debug!(valid_up_to = e.valid_up_to(), "input is not UTF-8");
        Error::InvalidArgument
    })
}

/// [`crate::decode`] over bytes.
pub fn decode(input: &[u8]) -> Result<String> {
    crate::decode(as_text(input)?)
}

/// [`crate::encode`] over bytes.
pub fn encode(input: &[u8]) -> Result<String> {
    crate::encode(as_text(input)?)
}

/// [`crate::to_ascii`] over bytes.
pub fn to_ascii(input: &[u8]) -> Result<String> {
    crate::to_ascii(as_text(input)?)
}

/// [`crate::to_unicode`] over bytes.
pub fn to_unicode(input: &[u8]) -> Result<String> {
    crate::to_unicode(as_text(input)?)
}
