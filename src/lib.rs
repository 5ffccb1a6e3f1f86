//! swarmfile - Torrent metadata ingestion
//!
//! This library decodes the bencode serialization format used by torrent
//! files and extracts a validated, immutable metadata record from the
//! decoded tree: piece hashes, file layout, tracker URLs, and the info
//! hash computed from the raw bytes of the info dictionary.
//!
//! The crate is purely computational: it receives a byte buffer and never
//! opens files or sockets itself. Independent loads may run on separate
//! threads with no coordination.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 bencode decoding with byte-span tracking
//! - [`metainfo`] - Torrent metadata extraction and the info hash
//! - [`util`] - Human-readable size formatting
//!
//! # Examples
//!
//! ```no_run
//! use swarmfile::Metainfo;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.torrent")?;
//! let torrent = Metainfo::from_bytes(&data, "example.torrent")?;
//! println!("{}", torrent);
//! # Ok(())
//! # }
//! ```

pub mod bencode;
pub mod metainfo;
pub mod util;

pub use bencode::{decode, decode_all, BencodeError, Span, Value, ValueKind};
pub use metainfo::{FileEntry, InfoHash, Metainfo, MetainfoError};
