#![no_main]

//! Fuzz target for variable-length integer decoding.
//!
//! Every decoder must reject arbitrary bytes with an error rather than
//! panicking, and anything that decodes must re-encode to exactly the bytes consumed.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = protocol::read_varint(&mut &data[..]);
    let _ = protocol::read_signed_varint(&mut &data[..]);

    if let Ok((value, remainder)) = protocol::decode_varint(data) {
        let consumed = data.len() - remainder.len();
        let mut encoded = Vec::new();
        protocol::encode_varint_to_vec(value, &mut encoded);
        assert_eq!(&encoded[..], &data[..consumed]);
    }
});
