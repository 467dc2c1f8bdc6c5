//! Error types for the Punycode codec.

use thiserror::Error;

/// Errors that can occur while encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input bytes are not UTF-8 text.
    #[error("invalid argument: input is not text")]
    InvalidArgument,

    /// A surrogate code unit without its partner.
    #[error("unpaired surrogate at index {index}")]
    UnpairedSurrogate {
        /// Position of the offending unit in the UTF-16 input.
        index: usize,
    },

    /// The digit stream ended in the middle of a delta.
    #[error("malformed input: digit stream ended unexpectedly")]
    MalformedInput,

    /// An intermediate value exceeded 2^31 - 1, or a digit was out of range.
    #[error("overflow: input needs wider integers to process")]
    Overflow,

    /// A non-ASCII character before the last delimiter.
    #[error("illegal input >= 0x80 (not a basic code point): {0:?}")]
    NotBasic(char),

    /// Decoded to a value that is not a Unicode scalar value.
    #[error("invalid Unicode code point: {0:#x}")]
    InvalidCodePoint(u32),
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
