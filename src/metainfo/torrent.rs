use super::error::MetainfoError;
use super::info_hash::InfoHash;
use crate::bencode::{decode_all, Value};
use crate::util::pretty_size;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// A parsed torrent file.
///
/// Built once from the raw bytes of a `.torrent` file and immutable
/// afterwards. The info hash is computed during construction from the raw
/// byte span of the info dictionary and never recomputed.
///
/// # Examples
///
/// ```no_run
/// use swarmfile::metainfo::Metainfo;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = std::fs::read("example.torrent")?;
/// let metainfo = Metainfo::from_bytes(&data, "example.torrent")?;
///
/// println!("Torrent: {}", metainfo.name_lossy());
/// println!("Size: {} bytes", metainfo.total_length);
/// println!("Info hash: {}", metainfo.info_hash);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metainfo {
    /// Suggested name for the file or directory. Arbitrary bytes, not
    /// assumed to be valid UTF-8.
    pub name: Bytes,
    /// Number of bytes per piece.
    pub piece_length: u64,
    /// SHA-1 hash of each piece, in piece-index order.
    pub pieces: Vec<[u8; 20]>,
    /// Files in the torrent; a single entry for a single-file torrent.
    pub files: Vec<FileEntry>,
    /// Total size of all files combined.
    pub total_length: u64,
    /// The unique identifier for this torrent (SHA-1 of the raw info
    /// dictionary bytes).
    pub info_hash: InfoHash,
    /// Tracker URLs, flattened from `announce-list` or taken from
    /// `announce`; possibly empty.
    pub announce_urls: Vec<Bytes>,
    /// Unix timestamp when the torrent was created.
    pub creation_date: Option<i64>,
    /// Optional comment about the torrent.
    pub comment: Option<Bytes>,
    /// Name/version of the program that created the torrent.
    pub created_by: Option<Bytes>,
    /// Text encoding of string fields; `"UTF-8"` when absent.
    pub encoding: Bytes,
    /// Where this metadata was loaded from. Opaque; carried for callers.
    pub source: String,
}

/// A file within a torrent.
///
/// The first path segment is always the torrent's display name, so
/// multi-file torrents unpack under a single root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path segments, starting with the torrent name.
    pub path: Vec<Bytes>,
    /// Size of the file in bytes.
    pub length: u64,
}

impl FileEntry {
    /// The path joined with `/`, with non-UTF-8 segments replaced lossily.
    pub fn path_lossy(&self) -> String {
        self.path
            .iter()
            .map(|s| String::from_utf8_lossy(s))
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Metainfo {
    /// Parses a torrent file from raw bytes.
    ///
    /// `source` identifies where the bytes came from (a file path, a URL);
    /// it is stored on the record and otherwise uninterpreted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The data is not valid bencode
    /// - The buffer does not hold exactly one top-level dictionary
    /// - Required fields are missing or mistyped (info, name, piece length,
    ///   pieces, and one of length/files)
    /// - The pieces field length is not a multiple of 20
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swarmfile::metainfo::Metainfo;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let data = std::fs::read("example.torrent")?;
    /// let metainfo = Metainfo::from_bytes(&data, "example.torrent")?;
    /// println!("Name: {}", metainfo.name_lossy());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_bytes(data: &[u8], source: &str) -> Result<Self, MetainfoError> {
        let values = decode_all(data)?;
        Self::from_values(&values, data, source)
    }

    /// Extracts metadata from an already decoded value sequence.
    ///
    /// `data` must be the buffer the values were decoded from; the info
    /// hash is computed from the byte span the decoder recorded for the
    /// info dictionary, not from a re-serialization. Construction is
    /// all-or-nothing: no partially populated record is ever returned.
    pub fn from_values(
        values: &[Value],
        data: &[u8],
        source: &str,
    ) -> Result<Self, MetainfoError> {
        let root = match values {
            [root] => root,
            _ => return Err(MetainfoError::TopLevelCount(values.len())),
        };

        let main = root.as_dict().ok_or(MetainfoError::WrongType {
            field: "root",
            expected: "dictionary",
        })?;

        let info_value = main
            .get(b"info".as_slice())
            .ok_or(MetainfoError::MissingField("info"))?;
        let info = info_value.as_dict().ok_or(MetainfoError::WrongType {
            field: "info",
            expected: "dictionary",
        })?;

        let announce_urls = announce_urls(main);

        let name = info
            .get(b"name".as_slice())
            .ok_or(MetainfoError::MissingField("name"))?
            .as_bytes()
            .ok_or(MetainfoError::WrongType {
                field: "name",
                expected: "byte string",
            })?
            .clone();

        let piece_length = info
            .get(b"piece length".as_slice())
            .ok_or(MetainfoError::MissingField("piece length"))?
            .as_integer()
            .ok_or(MetainfoError::WrongType {
                field: "piece length",
                expected: "integer",
            })?;
        if piece_length <= 0 {
            return Err(MetainfoError::InvalidPieceLength(piece_length));
        }
        let piece_length = piece_length as u64;

        let pieces_bytes = info
            .get(b"pieces".as_slice())
            .ok_or(MetainfoError::MissingField("pieces"))?
            .as_bytes()
            .ok_or(MetainfoError::WrongType {
                field: "pieces",
                expected: "byte string",
            })?;

        if pieces_bytes.len() % 20 != 0 {
            return Err(MetainfoError::InvalidPiecesLength(pieces_bytes.len()));
        }

        let pieces: Vec<[u8; 20]> = pieces_bytes
            .chunks_exact(20)
            .map(|chunk| {
                let mut arr = [0u8; 20];
                arr.copy_from_slice(chunk);
                arr
            })
            .collect();

        let (files, total_length) = file_layout(info, &name)?;

        // Optional fields live in the main dictionary. Each one falls back
        // independently on absence or type mismatch.
        let creation_date = main
            .get(b"creation date".as_slice())
            .and_then(|v| v.as_integer());
        let comment = main
            .get(b"comment".as_slice())
            .and_then(|v| v.as_bytes())
            .cloned();
        let created_by = main
            .get(b"created by".as_slice())
            .and_then(|v| v.as_bytes())
            .cloned();
        let encoding = main
            .get(b"encoding".as_slice())
            .and_then(|v| v.as_bytes())
            .cloned()
            .unwrap_or_else(|| Bytes::from_static(b"UTF-8"));

        // The hash input is the exact byte span the info dictionary
        // occupied in the source buffer, never a re-encoding: a re-encoding
        // hashes different bytes whenever the source keys are not in
        // canonical order.
        let mut hasher = Sha1::new();
        hasher.update(info_value.span().slice(data));
        let info_hash = InfoHash::new(hasher.finalize().into());

        let metainfo = Self {
            name,
            piece_length,
            pieces,
            files,
            total_length,
            info_hash,
            announce_urls,
            creation_date,
            comment,
            created_by,
            encoding,
            source: source.to_string(),
        };

        tracing::debug!(
            "parsed torrent {} from {}: {} pieces, {} files, {} bytes",
            metainfo.info_hash,
            metainfo.source,
            metainfo.pieces.len(),
            metainfo.files.len(),
            metainfo.total_length,
        );

        Ok(metainfo)
    }

    /// The display name with non-UTF-8 bytes replaced lossily.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Piece count derived from the total length, `ceil(total / piece
    /// length)`.
    ///
    /// This is a reporting value; it is not cross-checked against the
    /// number of hashes in [`pieces`](Self::pieces), which a malformed
    /// input may contradict.
    pub fn piece_count(&self) -> u64 {
        self.total_length.div_ceil(self.piece_length)
    }

    /// The hash of one piece, by piece index.
    pub fn piece(&self, index: usize) -> Option<&[u8; 20]> {
        self.pieces.get(index)
    }

    /// True if the torrent describes a single file.
    pub fn is_single_file(&self) -> bool {
        self.files.len() == 1
    }

    /// Number of bytes a peer-wire bitfield for this torrent occupies,
    /// one bit per derived piece.
    pub fn bitfield_size(&self) -> usize {
        self.piece_count().div_ceil(8) as usize
    }
}

impl fmt::Display for Metainfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} pieces, {} files)",
            self.name_lossy(),
            pretty_size(self.total_length),
            self.pieces.len(),
            self.files.len(),
        )
    }
}

/// Resolves tracker URLs in priority order: a well-formed `announce-list`
/// wins, then the single `announce` key, then nothing. Neither being
/// present or usable is not an error.
fn announce_urls(main: &BTreeMap<Bytes, Value>) -> Vec<Bytes> {
    if let Some(urls) = flatten_announce_list(main.get(b"announce-list".as_slice())) {
        return urls;
    }

    if let Some(url) = main
        .get(b"announce".as_slice())
        .and_then(|v| v.as_bytes())
    {
        return vec![url.clone()];
    }

    Vec::new()
}

/// Flattens `announce-list` (a list of tiers, each a list of URL strings)
/// in outer-then-inner order. Any shape violation anywhere fails the whole
/// attempt so the caller falls back to `announce`.
fn flatten_announce_list(value: Option<&Value>) -> Option<Vec<Bytes>> {
    let tiers = value?.as_list()?;
    let mut urls = Vec::new();

    for tier in tiers {
        for url in tier.as_list()? {
            urls.push(url.as_bytes()?.clone());
        }
    }

    Some(urls)
}

/// Builds the file list and total length from the info dictionary. A
/// `length` key means a single-file torrent; otherwise a `files` list is
/// required. Exactly one of the two shapes applies.
fn file_layout(
    info: &BTreeMap<Bytes, Value>,
    name: &Bytes,
) -> Result<(Vec<FileEntry>, u64), MetainfoError> {
    if let Some(value) = info.get(b"length".as_slice()) {
        let length = value.as_integer().ok_or(MetainfoError::WrongType {
            field: "length",
            expected: "integer",
        })?;
        if length < 0 {
            return Err(MetainfoError::NegativeLength(length));
        }

        let file = FileEntry {
            path: vec![name.clone()],
            length: length as u64,
        };
        return Ok((vec![file], length as u64));
    }

    let list = info
        .get(b"files".as_slice())
        .ok_or(MetainfoError::MissingField("length or files"))?
        .as_list()
        .ok_or(MetainfoError::WrongType {
            field: "files",
            expected: "list",
        })?;

    let mut files = Vec::with_capacity(list.len());
    let mut total = 0u64;

    for entry in list {
        let dict = entry.as_dict().ok_or(MetainfoError::WrongType {
            field: "files entry",
            expected: "dictionary",
        })?;

        let length = dict
            .get(b"length".as_slice())
            .ok_or(MetainfoError::MissingField("file length"))?
            .as_integer()
            .ok_or(MetainfoError::WrongType {
                field: "file length",
                expected: "integer",
            })?;
        if length < 0 {
            return Err(MetainfoError::NegativeLength(length));
        }

        let segments = dict
            .get(b"path".as_slice())
            .ok_or(MetainfoError::MissingField("file path"))?
            .as_list()
            .ok_or(MetainfoError::WrongType {
                field: "file path",
                expected: "list",
            })?;

        let mut path = Vec::with_capacity(segments.len() + 1);
        path.push(name.clone());
        for segment in segments {
            path.push(
                segment
                    .as_bytes()
                    .ok_or(MetainfoError::WrongType {
                        field: "path segment",
                        expected: "byte string",
                    })?
                    .clone(),
            );
        }

        total = total
            .checked_add(length as u64)
            .ok_or(MetainfoError::TotalLengthOverflow)?;
        files.push(FileEntry {
            path,
            length: length as u64,
        });
    }

    Ok((files, total))
}
