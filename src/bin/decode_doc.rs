//! Decode a captured fiscal exchange and dump the document tree.
//!
//! Usage:
//!   decode_doc [OPTIONS] [FILE]
//!   decode_doc < capture.bin
//!
//! Options:
//!   --session, -s  Input starts with a 30-byte session header
//!   --tlv, -t      Input is a bare TLV body (no headers)
//!   --hex, -x      Input is hex text rather than raw bytes
//!
//! By default the input is one or more frames: a 32-byte header followed
//! by a body of `length` bytes each. If no file is given, reads stdin.

use anyhow::{bail, Context};
use ofdproto::{decode_document, dump, tags, FrameHeader, SessionHeader};
use std::io::Read;

fn take_flag(args: &mut Vec<String>, long: &str, short: &str) -> bool {
    if let Some(pos) = args.iter().position(|a| a == long || a == short) {
        args.remove(pos);
        true
    } else {
        false
    }
}

fn parse_hex(text: &str) -> anyhow::Result<Vec<u8>> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        bail!("hex input has an odd number of digits");
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).context("invalid hex digit"))
        .collect()
}

fn main() -> anyhow::Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let with_session = take_flag(&mut args, "--session", "-s");
    let tlv_only = take_flag(&mut args, "--tlv", "-t");
    let hex_input = take_flag(&mut args, "--hex", "-x");

    let raw = match args.as_slice() {
        [] => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).context("read stdin")?;
            buf
        }
        [path] => std::fs::read(path).with_context(|| format!("read {}", path))?,
        _ => bail!("expected at most one input file"),
    };
    let data = if hex_input {
        parse_hex(&String::from_utf8(raw).context("hex input is not text")?)?
    } else {
        raw
    };

    let registry = tags::fiscal();

    if tlv_only {
        let document = decode_document(&data, &registry)?;
        println!("{}", dump::document_to_dump(&document, 0));
        return Ok(());
    }

    let mut rest = data.as_slice();
    if with_session {
        if rest.len() < SessionHeader::SIZE {
            bail!(
                "input shorter than a session header ({} bytes)",
                SessionHeader::SIZE
            );
        }
        let session = SessionHeader::unpack(&rest[..SessionHeader::SIZE])?;
        println!("{}", session);
        rest = &rest[SessionHeader::SIZE..];
    }

    let mut frame_no = 0usize;
    while !rest.is_empty() {
        if rest.len() < FrameHeader::SIZE {
            bail!("trailing {} bytes are shorter than a frame header", rest.len());
        }
        let header = FrameHeader::unpack(&rest[..FrameHeader::SIZE])?;
        let body_len = header.length as usize;
        let after_header = &rest[FrameHeader::SIZE..];
        if after_header.len() < body_len {
            bail!(
                "frame {}: header declares a {}-byte body, {} bytes remain",
                frame_no,
                body_len,
                after_header.len()
            );
        }
        let body = &after_header[..body_len];
        println!("{}", header);
        if !header.verify_crc(body) {
            eprintln!("frame {}: crc mismatch (stored {:#06x})", frame_no, header.crc);
        }
        let document = decode_document(body, &registry)?;
        println!("{}", dump::document_to_dump(&document, 1));
        rest = &after_header[body_len..];
        frame_no += 1;
    }
    Ok(())
}
