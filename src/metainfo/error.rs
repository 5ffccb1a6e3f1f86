use thiserror::Error;

use crate::bencode::BencodeError;

/// Errors that can occur when extracting metadata from a torrent file.
///
/// Every variant names the field or shape that failed; formatting to text
/// happens only through the `Display` impl.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetainfoError {
    /// The torrent file contains invalid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// The buffer did not hold exactly one top-level value.
    #[error("top-level value count is {0}, expected 1")]
    TopLevelCount(usize),

    /// A required field is missing from the torrent file.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field has the wrong bencode type.
    #[error("field \"{field}\" is not a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// The `piece length` field must be a positive integer.
    #[error("piece length must be positive, got {0}")]
    InvalidPieceLength(i64),

    /// The `pieces` byte string is not a whole number of 20-byte hashes.
    #[error("pieces length {0} is not a multiple of 20")]
    InvalidPiecesLength(usize),

    /// A file length was negative.
    #[error("file length must be non-negative, got {0}")]
    NegativeLength(i64),

    /// The file lengths sum past the 64-bit range.
    #[error("total length overflows 64 bits")]
    TotalLengthOverflow,

    /// The info hash has an invalid length (must be 20 bytes).
    #[error("invalid info hash length {0}, expected 20")]
    InvalidInfoHashLength(usize),
}
