//! Decoder fuzz target: feed arbitrary bytes to the TLV document decoder
//! and the header unpackers. They must not panic; every malformed input
//! returns Err.
//! Build with: cargo fuzz run tlv_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let registry = ofdproto::tags::fiscal();
    let _ = ofdproto::decode_document(data, &registry);
    let _ = ofdproto::FrameHeader::unpack(data);
    let _ = ofdproto::SessionHeader::unpack(data);
    let _ = ofdproto::check_signature(data);
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run tlv_fuzz");
}
