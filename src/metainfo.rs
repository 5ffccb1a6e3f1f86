//! Torrent metainfo extraction ([BEP-3]).
//!
//! This module turns a decoded bencode tree into a validated, immutable
//! [`Metainfo`] record: display name, piece-hash table, per-file layout,
//! tracker URLs, and the info hash.
//!
//! # Overview
//!
//! A torrent file (`.torrent`) holds a single top-level dictionary:
//!
//! - **info** - Core torrent metadata (hashed to create the info hash)
//!   - `name` - Suggested file/directory name
//!   - `piece length` - Size of each piece in bytes
//!   - `pieces` - Concatenated SHA-1 hashes of each piece
//!   - `length` - Total size (single-file) OR `files` list (multi-file)
//! - **announce** - Primary tracker URL
//! - **announce-list** - Tracker tiers (BEP-12); preferred over `announce`
//! - **creation date** / **comment** / **created by** / **encoding** -
//!   Optional, each independently defaulted when absent or mistyped
//!
//! The info hash is the SHA-1 digest of the *raw bytes* the info dictionary
//! occupied in the source buffer, taken from the span the decoder recorded.
//! Re-encoding the decoded tree would produce a different digest whenever
//! the source's dictionary keys are not in canonical order, silently
//! breaking swarm identity, so no re-serialization is ever hashed.
//!
//! # Examples
//!
//! ```no_run
//! use swarmfile::metainfo::Metainfo;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.torrent")?;
//! let torrent = Metainfo::from_bytes(&data, "example.torrent")?;
//!
//! println!("Name: {}", torrent.name_lossy());
//! println!("Info hash: {}", torrent.info_hash);
//! println!("Total size: {} bytes", torrent.total_length);
//! println!("Pieces: {} of {} bytes", torrent.piece_count(), torrent.piece_length);
//!
//! for file in &torrent.files {
//!     println!("  {} ({} bytes)", file.path_lossy(), file.length);
//! }
//!
//! for tracker in &torrent.announce_urls {
//!     println!("Tracker: {}", String::from_utf8_lossy(tracker));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod info_hash;
mod torrent;

pub use error::MetainfoError;
pub use info_hash::InfoHash;
pub use torrent::{FileEntry, Metainfo};
