//! Session and frame headers: the fixed-width records framing every
//! exchange with the device.
//!
//! A session opens with a 4-byte probe signature and a 30-byte session
//! header; each document then arrives as a 32-byte frame header followed
//! by a TLV body of `length` bytes, checksummed with CRC-16/CCITT-FALSE.

use crate::crc::crc16_ccitt_false;
use crate::error::ProtocolError;
use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

/// 4-byte probe signature the device sends before the session header.
pub const SIGNATURE: [u8; 4] = [0x2a, 0x08, 0x41, 0x0a];

/// Validate a probe reply against [`SIGNATURE`].
pub fn check_signature(data: &[u8]) -> Result<(), ProtocolError> {
    if data.len() != SIGNATURE.len() {
        return Err(ProtocolError::SizeMismatch {
            expected: SIGNATURE.len(),
            actual: data.len(),
        });
    }
    if data != SIGNATURE.as_slice() {
        return Err(ProtocolError::InvalidSignature(LittleEndian::read_u32(data)));
    }
    Ok(())
}

/// Session handshake header, 30 bytes on the wire:
/// `magic(u32) pvers(u16) pvera(u16) device_id(16) length(u16) flags(u16) crc(u16)`,
/// all integers little-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHeader {
    pub device_id: [u8; 16],
    pub length: u16,
    pub flags: u16,
    pub crc: u16,
}

impl SessionHeader {
    pub const MAGIC: u32 = 0x0a41_082a;
    pub const SESSION_VERSION: u16 = 0xa281;
    pub const APP_VERSION: u16 = 0x0100;
    /// Wire size in bytes.
    pub const SIZE: usize = 30;

    /// Unpack and validate a session header buffer.
    ///
    /// Constants are checked in wire order: magic, then session protocol
    /// version, then application protocol version, each with its own error
    /// kind.
    pub fn unpack(data: &[u8]) -> Result<Self, ProtocolError> {
        if data.len() != Self::SIZE {
            return Err(ProtocolError::SizeMismatch {
                expected: Self::SIZE,
                actual: data.len(),
            });
        }
        let magic = LittleEndian::read_u32(&data[0..4]);
        if magic != Self::MAGIC {
            return Err(ProtocolError::InvalidSignature(magic));
        }
        let session_version = LittleEndian::read_u16(&data[4..6]);
        if session_version != Self::SESSION_VERSION {
            return Err(ProtocolError::InvalidSessionVersion(session_version));
        }
        let app_version = LittleEndian::read_u16(&data[6..8]);
        if app_version != Self::APP_VERSION {
            return Err(ProtocolError::InvalidAppVersion(app_version));
        }
        let mut device_id = [0u8; 16];
        device_id.copy_from_slice(&data[8..24]);
        Ok(SessionHeader {
            device_id,
            length: LittleEndian::read_u16(&data[24..26]),
            flags: LittleEndian::read_u16(&data[26..28]),
            crc: LittleEndian::read_u16(&data[28..30]),
        })
    }

    /// Serialize in wire order: the three constants, then the mutable fields.
    pub fn pack(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        LittleEndian::write_u32(&mut buf[0..4], Self::MAGIC);
        LittleEndian::write_u16(&mut buf[4..6], Self::SESSION_VERSION);
        LittleEndian::write_u16(&mut buf[6..8], Self::APP_VERSION);
        buf[8..24].copy_from_slice(&self.device_id);
        LittleEndian::write_u16(&mut buf[24..26], self.length);
        LittleEndian::write_u16(&mut buf[26..28], self.flags);
        LittleEndian::write_u16(&mut buf[28..30], self.crc);
        buf
    }
}

impl fmt::Display for SessionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SessionHeader(device_id=\"{}\", length={}, flags={:#b}, crc={})",
            String::from_utf8_lossy(&self.device_id),
            self.length,
            self.flags,
            self.crc
        )
    }
}

/// Frame header, 32 bytes on the wire in front of every document body:
/// `length(u16) crc(u16) msgtype(u8) doctype(u8) version(u8) extra1(2)
/// devnum(8) docnum(3) extra2(12)`, integers little-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    /// Body length in bytes.
    pub length: u16,
    /// Checksum over the header (minus its own two bytes) and the body.
    pub crc: u16,
    /// Fiscal document type.
    pub doctype: u8,
    pub extra1: [u8; 2],
    /// Fiscal storage serial number.
    pub devnum: [u8; 8],
    /// Fiscal document number.
    pub docnum: [u8; 3],
    pub extra2: [u8; 12],
}

impl FrameHeader {
    pub const MSGTYPE: u8 = 0xa5;
    pub const VERSION: u8 = 1;
    /// Wire size in bytes.
    pub const SIZE: usize = 32;

    /// Unpack and validate a frame header buffer. Checks the message type,
    /// then the protocol version.
    pub fn unpack(data: &[u8]) -> Result<Self, ProtocolError> {
        if data.len() != Self::SIZE {
            return Err(ProtocolError::SizeMismatch {
                expected: Self::SIZE,
                actual: data.len(),
            });
        }
        if data[4] != Self::MSGTYPE {
            return Err(ProtocolError::InvalidMessageType(data[4]));
        }
        if data[6] != Self::VERSION {
            return Err(ProtocolError::InvalidProtocolVersion(data[6]));
        }
        let mut extra1 = [0u8; 2];
        extra1.copy_from_slice(&data[7..9]);
        let mut devnum = [0u8; 8];
        devnum.copy_from_slice(&data[9..17]);
        let mut docnum = [0u8; 3];
        docnum.copy_from_slice(&data[17..20]);
        let mut extra2 = [0u8; 12];
        extra2.copy_from_slice(&data[20..32]);
        Ok(FrameHeader {
            length: LittleEndian::read_u16(&data[0..2]),
            crc: LittleEndian::read_u16(&data[2..4]),
            doctype: data[5],
            extra1,
            devnum,
            docnum,
            extra2,
        })
    }

    /// Serialize in wire order into exactly 32 bytes.
    pub fn pack(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        LittleEndian::write_u16(&mut buf[0..2], self.length);
        LittleEndian::write_u16(&mut buf[2..4], self.crc);
        buf[4] = Self::MSGTYPE;
        buf[5] = self.doctype;
        buf[6] = Self::VERSION;
        buf[7..9].copy_from_slice(&self.extra1);
        buf[9..17].copy_from_slice(&self.devnum);
        buf[17..20].copy_from_slice(&self.docnum);
        buf[20..32].copy_from_slice(&self.extra2);
        buf
    }

    /// Recompute the checksum over the packed `length` bytes, the header
    /// from `msgtype` through `extra2`, and `body`, and store it in `crc`.
    ///
    /// The crc field's own two bytes are the only header bytes excluded;
    /// deployed devices fix this exact byte selection.
    pub fn recalculate_crc(&mut self, body: &[u8]) {
        self.crc = self.compute_crc(body);
    }

    /// True when the stored crc matches the header+body checksum.
    pub fn verify_crc(&self, body: &[u8]) -> bool {
        self.crc == self.compute_crc(body)
    }

    fn compute_crc(&self, body: &[u8]) -> u16 {
        let pack = self.pack();
        let mut input = Vec::with_capacity(Self::SIZE - 2 + body.len());
        input.extend_from_slice(&pack[0..2]);
        input.extend_from_slice(&pack[4..]);
        input.extend_from_slice(body);
        crc16_ccitt_false(&input)
    }
}

impl fmt::Display for FrameHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FrameHeader(length={}, crc={}, msgtype={:#04x}, doctype={}, version={}, devnum=\"{}\", docnum={})",
            self.length,
            self.crc,
            Self::MSGTYPE,
            self.doctype,
            Self::VERSION,
            String::from_utf8_lossy(&self.devnum),
            hex_string(&self.docnum)
        )
    }
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
