//! Decoded document values (codec representation).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A single decoded field value (scalar or nested document).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(u8),
    U32(u32),
    /// VLN: variable-length unsigned integer.
    U64(u64),
    /// FVLN: exact fixed-point decimal.
    Decimal(Decimal),
    String(String),
    Time(DateTime<Utc>),
    /// Pre-encoded payload, accepted by the STLV encode pass-through.
    Bytes(Vec<u8>),
    /// Nested STLV document, attributes in wire order.
    Document(Vec<Attribute>),
}

/// One named entry of a decoded document. Duplicate names within one
/// container are legal and preserved in wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Value,
}

impl Value {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Byte(x) => Some(u64::from(*x)),
            Value::U32(x) => Some(u64::from(*x)),
            Value::U64(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Time(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&[Attribute]> {
        match self {
            Value::Document(d) => Some(d),
            _ => None,
        }
    }
}
