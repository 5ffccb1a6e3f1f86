use bytes::Bytes;
use std::collections::BTreeMap;

/// The half-open byte range `[start, end)` a decoded value occupied in its
/// source buffer.
///
/// The range covers the whole encoding of the value, including its type or
/// length prefix and its terminator, so re-slicing the original buffer at
/// this range reproduces the exact encoded bytes. The metainfo layer relies
/// on this to hash the info dictionary as it appeared on the wire.
///
/// # Examples
///
/// ```
/// use swarmfile::bencode::decode;
///
/// let data = b"d3:foo3:bare";
/// let value = decode(data).unwrap();
/// let span = value.span();
/// assert_eq!(&data[span.start..span.end], data);
///
/// let inner = value.get(b"foo").unwrap().span();
/// assert_eq!(&data[inner.start..inner.end], b"3:bar");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Index of the first byte of the encoded value.
    pub start: usize,
    /// Index just past the last byte of the encoded value.
    pub end: usize,
}

impl Span {
    /// Re-slices the original buffer at this span.
    pub fn slice<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.start..self.end]
    }

    /// Length in bytes of the encoded value.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A decoded bencode value together with the byte range it was decoded from.
///
/// Bencode has four data types: integers, byte strings, lists, and
/// dictionaries. Values are produced only by [`decode`](super::decode) /
/// [`decode_all`](super::decode_all); the span always refers to the buffer
/// that was passed to the decoder.
///
/// # Examples
///
/// ```
/// use swarmfile::bencode::decode;
///
/// let value = decode(b"i42e").unwrap();
/// assert_eq!(value.as_integer(), Some(42));
///
/// let value = decode(b"d3:foo3:bare").unwrap();
/// assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    kind: ValueKind,
    span: Span,
}

/// The four bencode data types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A byte string (may or may not be valid UTF-8).
    Bytes(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary with byte string keys.
    ///
    /// Decoded key order is not retained; each key maps to exactly one
    /// value. A key repeated in the source overwrites the earlier entry
    /// (last wins).
    Dict(BTreeMap<Bytes, Value>),
}

impl Value {
    pub(super) fn new(kind: ValueKind, span: Span) -> Self {
        Value { kind, span }
    }

    /// The decoded value itself.
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// The byte range this value occupied in the source buffer.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the value as an integer, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use swarmfile::bencode::decode;
    ///
    /// assert_eq!(decode(b"i42e").unwrap().as_integer(), Some(42));
    /// assert_eq!(decode(b"4:spam").unwrap().as_integer(), None);
    /// ```
    pub fn as_integer(&self) -> Option<i64> {
        match &self.kind {
            ValueKind::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match &self.kind {
            ValueKind::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a valid UTF-8 byte
    /// string.
    ///
    /// Returns `None` if the value is not a byte string or if the bytes are
    /// not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Returns the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match &self.kind {
            ValueKind::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value as a dictionary reference, if it is one.
    pub fn as_dict(&self) -> Option<&BTreeMap<Bytes, Value>> {
        match &self.kind {
            ValueKind::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    ///
    /// Returns `None` if the value is not a dictionary or if the key is not
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use swarmfile::bencode::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
    /// assert_eq!(value.get(b"missing"), None);
    /// ```
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }
}
