//! Error taxonomy for header unpacking, field codecs, and document decoding.
//!
//! Malformed input is detected eagerly and propagated; a bad record aborts
//! the decode of its enclosing buffer with no partial result.

/// Errors surfaced to callers of the codec layers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// A fixed-width structure received a wrong-length buffer.
    #[error("size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// A variable-width payload is longer than its declared maximum.
    #[error("payload of {actual} bytes exceeds declared maximum of {maxlen}")]
    SizeExceeded { maxlen: usize, actual: usize },
    #[error("invalid protocol signature: {0:#010x}")]
    InvalidSignature(u32),
    #[error("invalid session protocol version: {0:#06x}")]
    InvalidSessionVersion(u16),
    #[error("invalid application protocol version: {0:#06x}")]
    InvalidAppVersion(u16),
    #[error("invalid message type: {0:#04x}")]
    InvalidMessageType(u8),
    #[error("invalid protocol version: {0}")]
    InvalidProtocolVersion(u8),
    /// TLV sub-record tag absent from the registry.
    #[error("unknown tag: {0}")]
    UnknownTag(u16),
    /// Buffer ended mid-sub-header or mid-payload.
    #[error("truncated record at offset {offset}: need {needed} bytes, {available} remain")]
    TruncatedRecord {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// Registry construction saw the same tag twice.
    #[error("duplicate tag in registry: {0}")]
    DuplicateTag(u16),
    /// Encode was handed the wrong `Value` variant for the codec.
    #[error("type mismatch: codec expects a {expected} value")]
    TypeMismatch { expected: &'static str },
    /// Text that cannot be represented in CP866.
    #[error("encoding error: {0}")]
    Encoding(String),
    /// Numeric value outside the wire or decimal range.
    #[error("value not representable: {0}")]
    Unrepresentable(&'static str),
}
