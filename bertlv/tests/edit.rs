use bertlv::{
    decode_hex, decode_length, edit_tlv_value, encode_length, parse_tlv, TagPath, TlvError,
};

#[test]
fn length_literals() {
    assert_eq!(encode_length(0), "00");
    assert_eq!(encode_length(0x7F), "7F");
    assert_eq!(encode_length(0x80), "8180");
    assert_eq!(encode_length(0x1234), "821234");
}

#[test]
fn length_round_trip() {
    let lengths = [
        0usize,
        5,
        127,
        128,
        255,
        256,
        4660,
        65535,
        65536,
        1 << 24,
        (1 << 32) - 1,
        1 << 32,
        1 << 40,
        usize::MAX,
    ];
    for n in lengths {
        let octets = decode_hex(&encode_length(n)).unwrap();
        assert_eq!(decode_length(&octets, 0).unwrap(), (n, octets.len()));
    }
}

#[test]
fn primitive_edit_same_size() {
    let output = edit_tlv_value("9F3303E0F8C8", "9F33", "010203").unwrap();
    assert_eq!(output, "9F3303010203");

    let stream = parse_tlv(&output).unwrap();
    assert_eq!(stream.elements()[0].value_hex(), "010203");
}

#[test]
fn nested_edit_same_size() {
    let output = edit_tlv_value("E0069F3303AABBCC", "E0:9F33", "010203").unwrap();
    assert_eq!(output, "E0069F3303010203");
}

#[test]
fn nested_edit_growth() {
    let output = edit_tlv_value("E0069F3303AABBCC", "E0:9F33", "01020304").unwrap();
    assert_eq!(output, "E0079F330401020304");

    let stream = parse_tlv(&output).unwrap();
    let parent = &stream.elements()[0];
    assert_eq!(parent.length(), 7);
    let path: TagPath = "E0:9F33".parse().unwrap();
    assert_eq!(stream.find(&path).unwrap().value_hex(), "01020304");
}

#[test]
fn idempotent_edit() {
    let inputs = [
        ("9F3303E0F8C8", "9F33", "E0F8C8"),
        ("E0069F3303AABBCC", "E0:9F33", "AABBCC"),
        ("E0069F3303AABBCC5A0112", "E0", "9F3303AABBCC"),
    ];
    for (raw, path, value) in inputs {
        assert_eq!(edit_tlv_value(raw, path, value).unwrap(), raw);
    }
}

#[test]
fn unrelated_top_level_untouched() {
    let second = "E1075F2004DEADBEEF";
    let raw = format!("E0069F3303AABBCC{}", second);
    let output = edit_tlv_value(&raw, "E0:9F33", "0102030405").unwrap();
    assert_eq!(output, format!("E0089F33050102030405{}", second));
}

#[test]
fn failure_kinds() {
    assert!(matches!(
        edit_tlv_value("E0069F3303AABBCC", "E0:9F34", "00"),
        Err(TlvError::TagNotFound(_))
    ));
    assert!(matches!(parse_tlv("9F3382"), Err(TlvError::TruncatedInput(_))));
    assert!(matches!(parse_tlv("9F3380"), Err(TlvError::MalformedLength(_))));
    assert!(matches!(parse_tlv("9F33 0"), Err(TlvError::InvalidHex(_))));
    assert!(matches!(
        edit_tlv_value("9F3303E0F8C8", "", "00"),
        Err(TlvError::InvalidPath(_))
    ));
}

#[test]
fn under_declared_parent_is_rejected() {
    // E0 declares 5 bytes around a 6-byte child; the stray CC has no length
    assert!(matches!(parse_tlv("E0059F3303AABBCC"), Err(TlvError::TruncatedInput(_))));
    assert!(matches!(
        edit_tlv_value("E0059F3303AABBCC", "E0:9F33", "01020304"),
        Err(TlvError::TruncatedInput(_))
    ));
}
