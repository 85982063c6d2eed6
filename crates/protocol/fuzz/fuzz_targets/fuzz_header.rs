#![no_main]

//! Fuzz target for file headers and length-prefixed byte runs.

use libfuzzer_sys::fuzz_target;
use protocol::FileKind;

fuzz_target!(|data: &[u8]| {
    for kind in [FileKind::Signature, FileKind::Delta] {
        let mut input = data;
        if protocol::read_header(&mut input, kind).is_ok() {
            if let Ok(len) = protocol::read_varint(&mut input) {
                let _ = protocol::read_bytes(&mut input, len);
            }
        }
    }
});
