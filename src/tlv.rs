//! TLV document walking: raw sub-record iteration and registry-driven
//! recursive decode.
//!
//! Every sub-record is a 4-byte header `tag(u16 LE), length(u16 LE)`
//! followed by `length` payload bytes. A buffer is a document when the
//! records tile it exactly.

use crate::error::ProtocolError;
use crate::registry::DocumentRegistry;
use crate::value::Attribute;
use byteorder::{ByteOrder, LittleEndian};

/// Size of the (tag, length) sub-header in front of every record.
pub const RECORD_HEADER_LEN: usize = 4;

/// One raw sub-record: tag plus its undecoded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// Byte offset of the sub-header within the walked buffer.
    pub offset: usize,
    pub tag: u16,
    pub payload: &'a [u8],
}

/// Iterate raw `(tag, payload)` records without resolving tags.
pub fn records(data: &[u8]) -> Records<'_> {
    Records { data, offset: 0 }
}

/// Iterator returned by [`records`]. Yields [`ProtocolError::TruncatedRecord`]
/// once and stops if the buffer ends mid-header or mid-payload.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<RawRecord<'a>, ProtocolError>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset;
        if offset >= self.data.len() {
            return None;
        }
        let remaining = self.data.len() - offset;
        if remaining < RECORD_HEADER_LEN {
            self.offset = self.data.len();
            return Some(Err(ProtocolError::TruncatedRecord {
                offset,
                needed: RECORD_HEADER_LEN,
                available: remaining,
            }));
        }
        let tag = LittleEndian::read_u16(&self.data[offset..]);
        let length = LittleEndian::read_u16(&self.data[offset + 2..]) as usize;
        let start = offset + RECORD_HEADER_LEN;
        let available = self.data.len() - start;
        if available < length {
            self.offset = self.data.len();
            return Some(Err(ProtocolError::TruncatedRecord {
                offset,
                needed: length,
                available,
            }));
        }
        self.offset = start + length;
        Some(Ok(RawRecord {
            offset,
            tag,
            payload: &self.data[start..start + length],
        }))
    }
}

/// Decode a complete TLV buffer into named attributes, in wire order.
///
/// Each tag resolves through `registry`; STLV payloads recurse through this
/// function, bounded by the shrinking payload slices. Duplicate tags within
/// one container are preserved. Any malformed record aborts the whole
/// decode of the enclosing buffer.
pub fn decode_document(
    data: &[u8],
    registry: &DocumentRegistry,
) -> Result<Vec<Attribute>, ProtocolError> {
    let mut out = Vec::new();
    for record in records(data) {
        let record = record?;
        let spec = registry
            .get(record.tag)
            .ok_or(ProtocolError::UnknownTag(record.tag))?;
        let value = spec.codec.decode(record.payload, registry)?;
        out.push(Attribute {
            name: spec.name.clone(),
            value,
        });
    }
    Ok(out)
}
