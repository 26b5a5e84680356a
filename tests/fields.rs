//! Field codec tests: one section per wire encoding, round-trips for the
//! fixed-width codecs, and the size-check failure modes.

use ofdproto::{DocumentRegistry, FieldCodec, ProtocolError, Value};
use rust_decimal_macros::dec;

fn empty_registry() -> DocumentRegistry {
    DocumentRegistry::default()
}

fn decode(codec: &FieldCodec, data: &[u8]) -> Result<Value, ProtocolError> {
    codec.decode(data, &empty_registry())
}

// --- Byte ---

#[test]
fn byte_roundtrip() {
    let codec = FieldCodec::Byte;
    for v in [0u8, 1, 0x7f, 0xff] {
        let encoded = codec.encode(&Value::Byte(v)).expect("encode");
        assert_eq!(encoded, vec![v]);
        assert_eq!(decode(&codec, &encoded).expect("decode"), Value::Byte(v));
    }
}

#[test]
fn byte_rejects_wrong_length() {
    assert_eq!(
        decode(&FieldCodec::Byte, &[1, 2]),
        Err(ProtocolError::SizeMismatch { expected: 1, actual: 2 })
    );
    assert_eq!(
        decode(&FieldCodec::Byte, &[]),
        Err(ProtocolError::SizeMismatch { expected: 1, actual: 0 })
    );
}

// --- U32 ---

#[test]
fn u32_roundtrip() {
    let codec = FieldCodec::U32;
    for v in [0u32, 7, 0xdead_beef, u32::MAX] {
        let encoded = codec.encode(&Value::U32(v)).expect("encode");
        assert_eq!(encoded.len(), 4);
        assert_eq!(decode(&codec, &encoded).expect("decode"), Value::U32(v));
    }
}

#[test]
fn u32_is_little_endian() {
    assert_eq!(
        decode(&FieldCodec::U32, &[0x07, 0x00, 0x00, 0x00]).expect("decode"),
        Value::U32(7)
    );
    assert_eq!(
        decode(&FieldCodec::U32, &[0x78, 0x56, 0x34, 0x12]).expect("decode"),
        Value::U32(0x1234_5678)
    );
}

#[test]
fn u32_rejects_wrong_length() {
    assert_eq!(
        decode(&FieldCodec::U32, &[1, 2, 3]),
        Err(ProtocolError::SizeMismatch { expected: 4, actual: 3 })
    );
}

// --- String (cp866) ---

#[test]
fn string_decodes_cp866() {
    let codec = FieldCodec::String { maxlen: 64 };
    let wire = [0x8a, 0xa0, 0xe1, 0xe1, 0xa8, 0xe0];
    assert_eq!(
        decode(&codec, &wire).expect("decode"),
        Value::String("Кассир".to_string())
    );
}

#[test]
fn string_empty_input_is_empty_string() {
    let codec = FieldCodec::String { maxlen: 64 };
    assert_eq!(
        decode(&codec, &[]).expect("decode"),
        Value::String(String::new())
    );
}

#[test]
fn string_roundtrip() {
    let codec = FieldCodec::String { maxlen: 64 };
    for s in ["", "ascii text", "Пряник", "ИТОГ: 100"] {
        let encoded = codec.encode(&Value::String(s.to_string())).expect("encode");
        assert_eq!(
            decode(&codec, &encoded).expect("decode"),
            Value::String(s.to_string())
        );
    }
}

#[test]
fn string_rejects_over_maxlen() {
    let codec = FieldCodec::String { maxlen: 4 };
    assert_eq!(
        decode(&codec, b"hello"),
        Err(ProtocolError::SizeExceeded { maxlen: 4, actual: 5 })
    );
}

#[test]
fn string_encode_rejects_non_cp866_text() {
    let codec = FieldCodec::String { maxlen: 64 };
    let err = codec.encode(&Value::String("日本語".to_string()));
    assert!(matches!(err, Err(ProtocolError::Encoding(_))));
}

// --- UnixTime ---

#[test]
fn unixtime_decodes_seconds_since_epoch() {
    let codec = FieldCodec::UnixTime;
    // 2016-12-08T17:37:44Z
    let decoded = decode(&codec, &[0x68, 0x9a, 0x49, 0x58]).expect("decode");
    let time = decoded.as_time().expect("time value");
    assert_eq!(time.timestamp(), 1_481_218_664);
}

#[test]
fn unixtime_roundtrip() {
    let codec = FieldCodec::UnixTime;
    for secs in [0u32, 100_000_000, 1_481_218_664, u32::MAX] {
        let encoded = codec
            .encode(&decode(&codec, &secs.to_le_bytes()).expect("decode"))
            .expect("encode");
        assert_eq!(encoded, secs.to_le_bytes());
    }
}

#[test]
fn unixtime_rejects_wrong_length() {
    assert_eq!(
        decode(&FieldCodec::UnixTime, &[0x68, 0x9a, 0x49]),
        Err(ProtocolError::SizeMismatch { expected: 4, actual: 3 })
    );
}

// --- VLN ---

#[test]
fn vln_reconstructs_padded_integer() {
    let codec = FieldCodec::Vln { maxlen: 8 };
    assert_eq!(decode(&codec, &[0x05]).expect("decode"), Value::U64(5));
    assert_eq!(
        decode(&codec, &[0xff, 0xff]).expect("decode"),
        Value::U64(0xffff)
    );
    assert_eq!(decode(&codec, &[]).expect("decode"), Value::U64(0));
    assert_eq!(
        decode(&codec, &[1, 2, 3, 4, 5, 6, 7, 8]).expect("decode"),
        Value::U64(0x0807_0605_0403_0201)
    );
}

#[test]
fn vln_rejects_over_maxlen() {
    let codec = FieldCodec::Vln { maxlen: 8 };
    assert_eq!(
        decode(&codec, &[0; 9]),
        Err(ProtocolError::SizeExceeded { maxlen: 8, actual: 9 })
    );
}

#[test]
fn vln_encodes_shortest_form() {
    let codec = FieldCodec::Vln { maxlen: 8 };
    assert_eq!(codec.encode(&Value::U64(0)).expect("encode"), Vec::<u8>::new());
    assert_eq!(codec.encode(&Value::U64(5)).expect("encode"), vec![0x05]);
    assert_eq!(
        codec.encode(&Value::U64(0xffff)).expect("encode"),
        vec![0xff, 0xff]
    );
    for v in [0u64, 1, 255, 256, 0xffff_ffff, u64::MAX] {
        let encoded = codec.encode(&Value::U64(v)).expect("encode");
        assert_eq!(decode(&codec, &encoded).expect("decode"), Value::U64(v));
    }
}

#[test]
fn vln_encode_respects_maxlen() {
    let codec = FieldCodec::Vln { maxlen: 2 };
    assert_eq!(
        codec.encode(&Value::U64(0x0001_0000)),
        Err(ProtocolError::SizeExceeded { maxlen: 2, actual: 3 })
    );
}

// --- FVLN ---

#[test]
fn fvln_decodes_exact_decimal() {
    let codec = FieldCodec::Fvln { maxlen: 8 };
    // exponent 2, mantissa 12345 -> 123.45
    assert_eq!(
        decode(&codec, &[0x02, 0x39, 0x30]).expect("decode"),
        Value::Decimal(dec!(123.45))
    );
    // exponent 0, mantissa 7 -> 7
    assert_eq!(
        decode(&codec, &[0x00, 0x07]).expect("decode"),
        Value::Decimal(dec!(7))
    );
    // exponent 3, mantissa 1 -> 0.001
    assert_eq!(
        decode(&codec, &[0x03, 0x01]).expect("decode"),
        Value::Decimal(dec!(0.001))
    );
    // negative exponent scales up: mantissa 5, exponent -2 -> 500
    assert_eq!(
        decode(&codec, &[0xfe, 0x05]).expect("decode"),
        Value::Decimal(dec!(500))
    );
}

#[test]
fn fvln_quantizes_to_exponent_places() {
    let codec = FieldCodec::Fvln { maxlen: 8 };
    // exponent 2, mantissa 1000 -> 10.00, scale preserved
    let decoded = decode(&codec, &[0x02, 0xe8, 0x03]).expect("decode");
    let d = decoded.as_decimal().expect("decimal");
    assert_eq!(d, dec!(10.00));
    assert_eq!(d.scale(), 2);
}

#[test]
fn fvln_empty_input_is_zero() {
    let codec = FieldCodec::Fvln { maxlen: 8 };
    assert_eq!(decode(&codec, &[]).expect("decode"), Value::Decimal(dec!(0)));
    // a lone exponent byte has a zero mantissa
    assert_eq!(
        decode(&codec, &[0x02]).expect("decode"),
        Value::Decimal(dec!(0.00))
    );
}

#[test]
fn fvln_rejects_over_maxlen() {
    let codec = FieldCodec::Fvln { maxlen: 5 };
    assert_eq!(
        decode(&codec, &[0x02, 1, 2, 3, 4, 5]),
        Err(ProtocolError::SizeExceeded { maxlen: 5, actual: 6 })
    );
}

#[test]
fn fvln_rejects_unrepresentable_exponent() {
    let codec = FieldCodec::Fvln { maxlen: 8 };
    // scale 100 is beyond exact-decimal range
    assert!(matches!(
        decode(&codec, &[100, 0x01]),
        Err(ProtocolError::Unrepresentable(_))
    ));
}

#[test]
fn fvln_encodes_exponent_and_mantissa() {
    let codec = FieldCodec::Fvln { maxlen: 8 };
    assert_eq!(
        codec.encode(&Value::Decimal(dec!(123.45))).expect("encode"),
        vec![0x02, 0x39, 0x30]
    );
    for d in [dec!(0), dec!(1.5), dec!(123.45), dec!(0.001), dec!(99999.99)] {
        let encoded = codec.encode(&Value::Decimal(d)).expect("encode");
        assert_eq!(decode(&codec, &encoded).expect("decode"), Value::Decimal(d));
    }
}

// --- STLV ---

#[test]
fn stlv_rejects_over_maxlen() {
    let codec = FieldCodec::Stlv { maxlen: 4 };
    assert_eq!(
        decode(&codec, &[0; 5]),
        Err(ProtocolError::SizeExceeded { maxlen: 4, actual: 5 })
    );
}

#[test]
fn stlv_encode_passes_payload_through() {
    let codec = FieldCodec::Stlv { maxlen: 32 };
    let payload = vec![0xf7, 0x03, 0x00, 0x00];
    assert_eq!(
        codec.encode(&Value::Bytes(payload.clone())).expect("encode"),
        payload
    );
}

// --- dispatch ---

#[test]
fn encode_rejects_mismatched_value_kind() {
    assert_eq!(
        FieldCodec::U32.encode(&Value::Byte(1)),
        Err(ProtocolError::TypeMismatch { expected: "U32" })
    );
    assert_eq!(
        FieldCodec::Vln { maxlen: 8 }.encode(&Value::String("5".into())),
        Err(ProtocolError::TypeMismatch { expected: "U64" })
    );
}

#[test]
fn declared_maxlen_is_reported() {
    assert_eq!(FieldCodec::Byte.maxlen(), 1);
    assert_eq!(FieldCodec::U32.maxlen(), 4);
    assert_eq!(FieldCodec::UnixTime.maxlen(), 4);
    assert_eq!(FieldCodec::String { maxlen: 64 }.maxlen(), 64);
    assert_eq!(FieldCodec::Vln { maxlen: 8 }.maxlen(), 8);
    assert_eq!(FieldCodec::Fvln { maxlen: 5 }.maxlen(), 5);
    assert_eq!(FieldCodec::Stlv { maxlen: 658 }.maxlen(), 658);
}
