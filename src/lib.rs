//! # ofdproto — OFD fiscal exchange protocol codec
//!
//! Decodes the framed, checksum-protected binary stream a fiscal device
//! sends to its data operator (OFD): a 4-byte probe signature and a
//! 30-byte session header open the exchange, then each fiscal document
//! arrives as a 32-byte frame header plus a TLV body. Leaf values use
//! several wire encodings (1-byte and 4-byte integers, CP866 text, Unix
//! timestamps, variable-length integers and exact fixed-point decimals),
//! and documents nest through STLV containers.
//!
//! ## Layers
//!
//! - [`frame`]: probe signature, session header, frame header, with
//!   CRC-16/CCITT-FALSE validation over the protocol's exact header byte
//!   selection
//! - [`tlv`]: raw sub-record iteration and registry-driven document decode
//! - [`field`]: the closed set of leaf and container codecs
//! - [`registry`] / [`tags`]: the tag → (name, codec) mapping;
//!   [`tags::fiscal`] is the reference deployment table
//!
//! ## Usage
//!
//! ```no_run
//! use ofdproto::{decode_document, tags, FrameHeader};
//!
//! let registry = tags::fiscal();
//! # let buf: Vec<u8> = vec![];
//! let header = FrameHeader::unpack(&buf[..FrameHeader::SIZE])?;
//! let body = &buf[FrameHeader::SIZE..][..header.length as usize];
//! if header.verify_crc(body) {
//!     let document = decode_document(body, &registry)?;
//!     println!("{}", ofdproto::dump::document_to_dump(&document, 0));
//! }
//! # Ok::<(), ofdproto::ProtocolError>(())
//! ```
//!
//! All components are pure and synchronous; the registry is immutable and
//! safe to share across threads without locking.

pub mod crc;
pub mod dump;
pub mod error;
pub mod field;
pub mod frame;
pub mod registry;
pub mod tags;
pub mod tlv;
pub mod value;

pub use crc::crc16_ccitt_false;
pub use error::ProtocolError;
pub use field::FieldCodec;
pub use frame::{check_signature, FrameHeader, SessionHeader, SIGNATURE};
pub use registry::{DocumentRegistry, TagSpec};
pub use tlv::{decode_document, records, RawRecord, Records};
pub use value::{Attribute, Value};
