//! Field codecs: the closed set of wire encodings for leaf and container
//! values.
//!
//! Each variant is immutable, carries its declared maximum payload size,
//! and decodes as a pure function of the input bytes (STLV additionally
//! reads the registry to resolve nested tags). Encoding emits the shortest
//! wire form; STLV encoding passes a pre-encoded payload through unchanged.

use crate::error::ProtocolError;
use crate::registry::DocumentRegistry;
use crate::tlv;
use crate::value::Value;
use byteorder::{ByteOrder, LittleEndian};
use chrono::DateTime;
use encoding_rs::IBM866;
use rust_decimal::Decimal;

/// Wire encoding of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCodec {
    /// 1-byte unsigned integer.
    Byte,
    /// 4-byte little-endian unsigned integer.
    U32,
    /// CP866 text of up to `maxlen` bytes.
    String { maxlen: usize },
    /// 4-byte little-endian seconds since the Unix epoch.
    UnixTime,
    /// Variable-length little-endian unsigned integer; trailing zero bytes
    /// are omitted on the wire.
    Vln { maxlen: usize },
    /// Signed exponent byte plus a VLN-style mantissa: mantissa * 10^-exp.
    Fvln { maxlen: usize },
    /// Nested TLV document.
    Stlv { maxlen: usize },
}

impl FieldCodec {
    /// Declared maximum payload size in bytes.
    pub fn maxlen(&self) -> usize {
        match self {
            FieldCodec::Byte => 1,
            FieldCodec::U32 | FieldCodec::UnixTime => 4,
            FieldCodec::String { maxlen }
            | FieldCodec::Vln { maxlen }
            | FieldCodec::Fvln { maxlen }
            | FieldCodec::Stlv { maxlen } => *maxlen,
        }
    }

    /// Decode a payload into a typed value.
    pub fn decode(&self, data: &[u8], registry: &DocumentRegistry) -> Result<Value, ProtocolError> {
        match self {
            FieldCodec::Byte => {
                expect_len(data, 1)?;
                Ok(Value::Byte(data[0]))
            }
            FieldCodec::U32 => {
                expect_len(data, 4)?;
                Ok(Value::U32(LittleEndian::read_u32(data)))
            }
            FieldCodec::String { maxlen } => {
                check_maxlen(data, *maxlen)?;
                if data.is_empty() {
                    return Ok(Value::String(String::new()));
                }
                let (text, _) = IBM866.decode_without_bom_handling(data);
                Ok(Value::String(text.into_owned()))
            }
            FieldCodec::UnixTime => {
                expect_len(data, 4)?;
                let secs = LittleEndian::read_u32(data);
                // Any u32 second count is within chrono's representable range.
                let time = DateTime::from_timestamp(i64::from(secs), 0).ok_or(
                    ProtocolError::Unrepresentable("timestamp outside datetime range"),
                )?;
                Ok(Value::Time(time))
            }
            FieldCodec::Vln { maxlen } => {
                check_maxlen(data, *maxlen)?;
                Ok(Value::U64(read_vln(data)?))
            }
            FieldCodec::Fvln { maxlen } => {
                check_maxlen(data, *maxlen)?;
                let exponent = data.first().map(|&b| b as i8).unwrap_or(0);
                let mantissa = read_vln(data.get(1..).unwrap_or(&[]))?;
                Ok(Value::Decimal(scaled_decimal(mantissa, exponent)?))
            }
            FieldCodec::Stlv { maxlen } => {
                check_maxlen(data, *maxlen)?;
                Ok(Value::Document(tlv::decode_document(data, registry)?))
            }
        }
    }

    /// Encode a value into its wire form.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, ProtocolError> {
        match (self, value) {
            (FieldCodec::Byte, Value::Byte(x)) => Ok(vec![*x]),
            (FieldCodec::U32, Value::U32(x)) => {
                let mut buf = [0u8; 4];
                LittleEndian::write_u32(&mut buf, *x);
                Ok(buf.to_vec())
            }
            (FieldCodec::String { maxlen }, Value::String(s)) => {
                let (bytes, _, had_errors) = IBM866.encode(s);
                if had_errors {
                    return Err(ProtocolError::Encoding(format!(
                        "text not representable in cp866: {:?}",
                        s
                    )));
                }
                let bytes = bytes.into_owned();
                check_maxlen(&bytes, *maxlen)?;
                Ok(bytes)
            }
            (FieldCodec::UnixTime, Value::Time(t)) => {
                let secs = u32::try_from(t.timestamp()).map_err(|_| {
                    ProtocolError::Unrepresentable("timestamp outside u32 seconds")
                })?;
                let mut buf = [0u8; 4];
                LittleEndian::write_u32(&mut buf, secs);
                Ok(buf.to_vec())
            }
            (FieldCodec::Vln { maxlen }, Value::U64(x)) => {
                let bytes = write_vln(*x);
                check_maxlen(&bytes, *maxlen)?;
                Ok(bytes)
            }
            (FieldCodec::Fvln { maxlen }, Value::Decimal(d)) => {
                if d.mantissa() < 0 {
                    return Err(ProtocolError::Unrepresentable(
                        "FVLN mantissa must be non-negative",
                    ));
                }
                let mantissa = u64::try_from(d.mantissa()).map_err(|_| {
                    ProtocolError::Unrepresentable("FVLN mantissa wider than 8 bytes")
                })?;
                let mut bytes = vec![d.scale() as u8];
                bytes.extend_from_slice(&write_vln(mantissa));
                check_maxlen(&bytes, *maxlen)?;
                Ok(bytes)
            }
            // Payload is assumed pre-encoded; no maxlen check on the write path.
            (FieldCodec::Stlv { .. }, Value::Bytes(b)) => Ok(b.clone()),
            (codec, _) => Err(ProtocolError::TypeMismatch {
                expected: codec.value_kind(),
            }),
        }
    }

    fn value_kind(&self) -> &'static str {
        match self {
            FieldCodec::Byte => "Byte",
            FieldCodec::U32 => "U32",
            FieldCodec::String { .. } => "String",
            FieldCodec::UnixTime => "Time",
            FieldCodec::Vln { .. } => "U64",
            FieldCodec::Fvln { .. } => "Decimal",
            FieldCodec::Stlv { .. } => "Bytes",
        }
    }
}

fn expect_len(data: &[u8], expected: usize) -> Result<(), ProtocolError> {
    if data.len() != expected {
        return Err(ProtocolError::SizeMismatch {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

fn check_maxlen(data: &[u8], maxlen: usize) -> Result<(), ProtocolError> {
    if data.len() > maxlen {
        return Err(ProtocolError::SizeExceeded {
            maxlen,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Reconstruct the full-width integer: the wire omits trailing zero bytes,
/// so pad at the high-order end up to 8 bytes. Empty input is 0.
fn read_vln(data: &[u8]) -> Result<u64, ProtocolError> {
    if data.len() > 8 {
        return Err(ProtocolError::Unrepresentable(
            "integer wider than 8 bytes",
        ));
    }
    let mut buf = [0u8; 8];
    buf[..data.len()].copy_from_slice(data);
    Ok(LittleEndian::read_u64(&buf))
}

/// Shortest little-endian form: trailing zero bytes stripped (0 is empty).
fn write_vln(value: u64) -> Vec<u8> {
    let mut buf = [0u8; 8];
    LittleEndian::write_u64(&mut buf, value);
    let used = 8 - buf.iter().rev().take_while(|&&b| b == 0).count();
    buf[..used].to_vec()
}

/// mantissa * 10^-exponent as an exact decimal, quantized to `exponent`
/// decimal places. Negative exponents scale the mantissa up instead.
fn scaled_decimal(mantissa: u64, exponent: i8) -> Result<Decimal, ProtocolError> {
    if exponent >= 0 {
        Decimal::try_from_i128_with_scale(i128::from(mantissa), exponent as u32).map_err(|_| {
            ProtocolError::Unrepresentable("FVLN exponent outside supported decimal range")
        })
    } else {
        let factor = 10i128
            .checked_pow(u32::from(exponent.unsigned_abs()))
            .ok_or(ProtocolError::Unrepresentable(
                "FVLN exponent outside supported decimal range",
            ))?;
        let scaled = i128::from(mantissa).checked_mul(factor).ok_or(
            ProtocolError::Unrepresentable("FVLN value overflows the decimal range"),
        )?;
        Decimal::try_from_i128_with_scale(scaled, 0).map_err(|_| {
            ProtocolError::Unrepresentable("FVLN value overflows the decimal range")
        })
    }
}
