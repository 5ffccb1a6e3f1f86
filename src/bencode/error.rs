use thiserror::Error;

/// Decoding errors, each carrying the byte offset of the offending
/// construct in the source buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BencodeError {
    /// Input ended before the value being decoded was complete.
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEof(usize),

    /// Malformed integer (empty, leading zeros, `-0`, non-digits, or out of
    /// the 64-bit range).
    #[error("invalid integer at offset {offset}: {reason}")]
    InvalidInteger {
        offset: usize,
        reason: &'static str,
    },

    /// Malformed byte string length prefix.
    #[error("invalid string length at offset {0}")]
    InvalidStringLength(usize),

    /// A byte that cannot start a bencode value.
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { offset: usize, found: char },

    /// A dictionary key that is not a byte string.
    #[error("dictionary key at offset {0} is not a byte string")]
    InvalidDictKey(usize),

    /// Bytes remained after a buffer expected to hold a single value.
    #[error("trailing data after value at offset {0}")]
    TrailingData(usize),

    /// Recursion limit exceeded (max 64 levels).
    #[error("nesting too deep at offset {0}")]
    NestingTooDeep(usize),
}
