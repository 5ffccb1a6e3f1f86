use super::error::BencodeError;
use super::value::{Span, Value, ValueKind};
use bytes::Bytes;
use std::collections::BTreeMap;

const MAX_DEPTH: usize = 64;

/// Decodes a buffer holding exactly one bencode value.
///
/// # Errors
///
/// Returns an error at the offending byte offset if the buffer is malformed,
/// or [`BencodeError::TrailingData`] if bytes remain after the value.
///
/// # Examples
///
/// ```
/// use swarmfile::bencode::decode;
///
/// let value = decode(b"l4:spami42ee").unwrap();
/// let list = value.as_list().unwrap();
/// assert_eq!(list.len(), 2);
///
/// assert!(decode(b"i42eextra").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let mut pos = 0;
    let value = decode_value(data, &mut pos, 0)?;

    if pos != data.len() {
        return Err(BencodeError::TrailingData(pos));
    }

    Ok(value)
}

/// Decodes all consecutive top-level values in a buffer.
///
/// A buffer may hold zero or more values back to back; an empty buffer
/// yields an empty sequence. Decoding fails at the first byte that cannot
/// start a valid value, so the whole buffer either decodes or errors.
///
/// # Examples
///
/// ```
/// use swarmfile::bencode::decode_all;
///
/// let values = decode_all(b"i1ei2e4:spam").unwrap();
/// assert_eq!(values.len(), 3);
///
/// assert!(decode_all(b"").unwrap().is_empty());
/// ```
pub fn decode_all(data: &[u8]) -> Result<Vec<Value>, BencodeError> {
    let mut pos = 0;
    let mut values = Vec::new();

    while pos < data.len() {
        values.push(decode_value(data, &mut pos, 0)?);
    }

    Ok(values)
}

fn decode_value(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    if depth > MAX_DEPTH {
        return Err(BencodeError::NestingTooDeep(*pos));
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(*pos));
    }

    let start = *pos;
    let kind = match data[*pos] {
        b'i' => decode_integer(data, pos),
        b'l' => decode_list(data, pos, depth),
        b'd' => decode_dict(data, pos, depth),
        b'0'..=b'9' => decode_bytes(data, pos),
        c => Err(BencodeError::UnexpectedChar {
            offset: *pos,
            found: c as char,
        }),
    }?;

    Ok(Value::new(kind, Span { start, end: *pos }))
}

fn decode_integer(data: &[u8], pos: &mut usize) -> Result<ValueKind, BencodeError> {
    let offset = *pos;
    *pos += 1;

    let start = *pos;
    while *pos < data.len() && data[*pos] != b'e' {
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(data.len()));
    }

    let text = &data[start..*pos];
    let invalid = |reason| BencodeError::InvalidInteger { offset, reason };

    let digits = match text.split_first() {
        None => return Err(invalid("empty")),
        Some((b'-', rest)) => rest,
        Some(_) => text,
    };

    if digits.is_empty() {
        return Err(invalid("no digits"));
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid("not a number"));
    }
    if text == b"-0" {
        return Err(invalid("negative zero"));
    }
    if digits.len() > 1 && digits[0] == b'0' {
        return Err(invalid("leading zero"));
    }

    let value: i64 = std::str::from_utf8(text)
        .map_err(|_| invalid("not a number"))?
        .parse()
        .map_err(|_| invalid("out of 64-bit range"))?;

    *pos += 1;
    Ok(ValueKind::Integer(value))
}

fn decode_bytes(data: &[u8], pos: &mut usize) -> Result<ValueKind, BencodeError> {
    let start = *pos;
    while *pos < data.len() && data[*pos].is_ascii_digit() {
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(data.len()));
    }

    // The length prefix is digits only; a sign or any other byte before
    // the ':' is malformed.
    if data[*pos] != b':' {
        return Err(BencodeError::InvalidStringLength(start));
    }

    let len: usize = std::str::from_utf8(&data[start..*pos])
        .map_err(|_| BencodeError::InvalidStringLength(start))?
        .parse()
        .map_err(|_| BencodeError::InvalidStringLength(start))?;

    *pos += 1;

    if data.len() - *pos < len {
        return Err(BencodeError::UnexpectedEof(data.len()));
    }

    let bytes = Bytes::copy_from_slice(&data[*pos..*pos + len]);
    *pos += len;

    Ok(ValueKind::Bytes(bytes))
}

fn decode_list(data: &[u8], pos: &mut usize, depth: usize) -> Result<ValueKind, BencodeError> {
    *pos += 1;
    let mut list = Vec::new();

    while *pos < data.len() && data[*pos] != b'e' {
        list.push(decode_value(data, pos, depth + 1)?);
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(data.len()));
    }

    *pos += 1;
    Ok(ValueKind::List(list))
}

fn decode_dict(data: &[u8], pos: &mut usize, depth: usize) -> Result<ValueKind, BencodeError> {
    *pos += 1;
    let mut dict = BTreeMap::new();

    while *pos < data.len() && data[*pos] != b'e' {
        let key_offset = *pos;
        let key = match decode_value(data, pos, depth + 1)?.kind() {
            ValueKind::Bytes(b) => b.clone(),
            _ => return Err(BencodeError::InvalidDictKey(key_offset)),
        };

        let value = decode_value(data, pos, depth + 1)?;
        // A repeated key overwrites the earlier entry (last wins).
        dict.insert(key, value);
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(data.len()));
    }

    *pos += 1;
    Ok(ValueKind::Dict(dict))
}
