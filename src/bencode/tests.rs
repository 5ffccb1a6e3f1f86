use bytes::Bytes;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap().as_integer(), Some(42));
    assert_eq!(decode(b"i-42e").unwrap().as_integer(), Some(-42));
    assert_eq!(decode(b"i0e").unwrap().as_integer(), Some(0));
    assert_eq!(
        decode(b"i9223372036854775807e").unwrap().as_integer(),
        Some(i64::MAX)
    );
}

#[test]
fn test_decode_integer_invalid() {
    assert!(matches!(
        decode(b"i-0e"),
        Err(BencodeError::InvalidInteger {
            offset: 0,
            reason: "negative zero"
        })
    ));
    assert!(matches!(
        decode(b"i03e"),
        Err(BencodeError::InvalidInteger {
            offset: 0,
            reason: "leading zero"
        })
    ));
    assert!(matches!(
        decode(b"ie"),
        Err(BencodeError::InvalidInteger {
            offset: 0,
            reason: "empty"
        })
    ));
    assert!(matches!(
        decode(b"i-e"),
        Err(BencodeError::InvalidInteger {
            offset: 0,
            reason: "no digits"
        })
    ));
    assert!(matches!(
        decode(b"i1x2e"),
        Err(BencodeError::InvalidInteger {
            reason: "not a number",
            ..
        })
    ));
    // One past i64::MAX
    assert!(matches!(
        decode(b"i9223372036854775808e"),
        Err(BencodeError::InvalidInteger {
            reason: "out of 64-bit range",
            ..
        })
    ));
}

#[test]
fn test_decode_bytes() {
    assert_eq!(
        decode(b"4:spam").unwrap().as_bytes(),
        Some(&Bytes::from_static(b"spam"))
    );
    assert_eq!(
        decode(b"0:").unwrap().as_bytes(),
        Some(&Bytes::from_static(b""))
    );
}

#[test]
fn test_decode_bytes_invalid() {
    // Truncated data
    assert!(matches!(
        decode(b"5:spam"),
        Err(BencodeError::UnexpectedEof(_))
    ));
    // Length prefix must be digits only, no sign
    assert!(matches!(
        decode(b"4+:abcd"),
        Err(BencodeError::InvalidStringLength(0))
    ));
    assert!(matches!(
        decode(b"+4:abcd"),
        Err(BencodeError::UnexpectedChar {
            offset: 0,
            found: '+'
        })
    ));
}

#[test]
fn test_decode_list() {
    let value = decode(b"l4:spami42ee").unwrap();
    let list = value.as_list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].as_str(), Some("spam"));
    assert_eq!(list[1].as_integer(), Some(42));
}

#[test]
fn test_decode_dict() {
    let value = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
    let dict = value.as_dict().unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(value.get(b"cow").and_then(|v| v.as_str()), Some("moo"));
    assert_eq!(value.get(b"spam").and_then(|v| v.as_str()), Some("eggs"));
}

#[test]
fn test_decode_dict_unsorted_keys() {
    // Keys out of byte-lexicographic order are accepted as-is
    let value = decode(b"d1:bi2e1:ai1ee").unwrap();
    assert_eq!(value.get(b"a").and_then(|v| v.as_integer()), Some(1));
    assert_eq!(value.get(b"b").and_then(|v| v.as_integer()), Some(2));
}

#[test]
fn test_decode_dict_duplicate_key_last_wins() {
    let value = decode(b"d1:ai1e1:ai2ee").unwrap();
    assert_eq!(value.get(b"a").and_then(|v| v.as_integer()), Some(2));
    assert_eq!(value.as_dict().unwrap().len(), 1);
}

#[test]
fn test_decode_dict_invalid() {
    // Non-string key
    assert!(matches!(
        decode(b"di1ei2ee"),
        Err(BencodeError::InvalidDictKey(1))
    ));
    // Key without a value
    assert!(matches!(
        decode(b"d3:fooe"),
        Err(BencodeError::UnexpectedChar { offset: 6, .. })
    ));
}

#[test]
fn test_decode_unterminated() {
    assert!(matches!(
        decode(b"l4:spam"),
        Err(BencodeError::UnexpectedEof(7))
    ));
    assert!(matches!(
        decode(b"d3:foo3:bar"),
        Err(BencodeError::UnexpectedEof(11))
    ));
    assert!(matches!(
        decode(b"i42"),
        Err(BencodeError::UnexpectedEof(3))
    ));
}

#[test]
fn test_decode_empty_input() {
    assert!(matches!(decode(b""), Err(BencodeError::UnexpectedEof(0))));
}

#[test]
fn test_trailing_data_error() {
    assert!(matches!(
        decode(b"i42eextra"),
        Err(BencodeError::TrailingData(4))
    ));
}

#[test]
fn test_decode_all_multiple_values() {
    let values = decode_all(b"i1ei2e4:spam").unwrap();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0].as_integer(), Some(1));
    assert_eq!(values[1].as_integer(), Some(2));
    assert_eq!(values[2].as_str(), Some("spam"));

    assert_eq!(values[0].span(), Span { start: 0, end: 3 });
    assert_eq!(values[1].span(), Span { start: 3, end: 6 });
    assert_eq!(values[2].span(), Span { start: 6, end: 12 });
}

#[test]
fn test_decode_all_empty_buffer() {
    assert!(decode_all(b"").unwrap().is_empty());
}

#[test]
fn test_decode_all_garbage_tail() {
    assert!(matches!(
        decode_all(b"i1ex"),
        Err(BencodeError::UnexpectedChar {
            offset: 3,
            found: 'x'
        })
    ));
}

#[test]
fn test_spans_cover_exact_encoding() {
    let data = b"d3:foo3:bar3:numi-7ee";
    let value = decode(data).unwrap();
    assert_eq!(value.span().slice(data), data.as_slice());

    let foo = value.get(b"foo").unwrap();
    assert_eq!(foo.span().slice(data), b"3:bar");

    let num = value.get(b"num").unwrap();
    assert_eq!(num.span().slice(data), b"i-7e");
    assert_eq!(num.span().len(), 4);
    assert!(!num.span().is_empty());
}

#[test]
fn test_spans_nested() {
    let data = b"ld3:keyi7eee";
    let value = decode(data).unwrap();
    assert_eq!(value.span(), Span { start: 0, end: 12 });

    let list = value.as_list().unwrap();
    let dict = &list[0];
    assert_eq!(dict.span().slice(data), b"d3:keyi7ee");
    assert_eq!(dict.get(b"key").unwrap().span().slice(data), b"i7e");
}

#[test]
fn test_nesting_too_deep() {
    let mut data = vec![b'l'; 100];
    data.extend(std::iter::repeat(b'e').take(100));
    assert!(matches!(
        decode(&data),
        Err(BencodeError::NestingTooDeep(_))
    ));

    // Moderate nesting is fine
    let mut data = vec![b'l'; 10];
    data.extend(std::iter::repeat(b'e').take(10));
    assert!(decode(&data).is_ok());
}

#[test]
fn test_value_accessors() {
    let value = decode(b"i42e").unwrap();
    assert_eq!(value.as_integer(), Some(42));
    assert!(value.as_bytes().is_none());
    assert!(matches!(value.kind(), ValueKind::Integer(42)));

    let value = decode(b"4:test").unwrap();
    assert_eq!(value.as_str(), Some("test"));
    assert!(value.as_integer().is_none());

    let value = decode(b"le").unwrap();
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());
}

#[test]
fn test_non_utf8_bytes() {
    let value = decode(b"2:\xff\xfe").unwrap();
    assert_eq!(value.as_bytes().map(|b| b.as_ref()), Some(&[0xff, 0xfe][..]));
    assert_eq!(value.as_str(), None);
}
