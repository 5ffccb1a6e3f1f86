//! Bencode decoding ([BEP-3]).
//!
//! Bencode is the self-delimiting serialization format torrent files are
//! written in. This module parses a byte buffer into a tree of typed values
//! and records, for every node, the byte range it occupied in the source
//! buffer. The recorded spans are what make the info hash computable from
//! the original bytes rather than from a re-serialization.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ```
//! use swarmfile::bencode::{decode, decode_all};
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a dictionary and look up a key
//! let value = decode(b"d3:foo3:bare").unwrap();
//! assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
//!
//! // A buffer may hold several consecutive top-level values
//! let values = decode_all(b"i1e4:spam").unwrap();
//! assert_eq!(values.len(), 2);
//! ```
//!
//! ## Byte spans
//!
//! Every decoded value knows where it came from:
//!
//! ```
//! use swarmfile::bencode::decode;
//!
//! let data = b"d4:infod4:name4:testee";
//! let value = decode(data).unwrap();
//! let info = value.get(b"info").unwrap();
//!
//! // Re-slicing the buffer at the recorded span reproduces the exact
//! // encoded bytes of the subtree.
//! assert_eq!(info.span().slice(data), b"d4:name4:teste");
//! ```
//!
//! # Error Handling
//!
//! Decoding fails at the first malformed construct; every error names the
//! byte offset it was detected at:
//!
//! - [`BencodeError::UnexpectedEof`] - Input ended unexpectedly
//! - [`BencodeError::InvalidInteger`] - Malformed integer (e.g., leading zeros)
//! - [`BencodeError::InvalidStringLength`] - Malformed length prefix
//! - [`BencodeError::UnexpectedChar`] - Byte that cannot start a value
//! - [`BencodeError::InvalidDictKey`] - Dictionary key that is not a string
//! - [`BencodeError::NestingTooDeep`] - Recursion limit exceeded (max 64 levels)
//! - [`BencodeError::TrailingData`] - Extra data after a single value
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod error;
mod value;

pub use decode::{decode, decode_all};
pub use error::BencodeError;
pub use value::{Span, Value, ValueKind};

#[cfg(test)]
mod tests;
