//! Encodes a small document with the public helpers and reads it back.

use protocol::{
    FileKind, WireError, expect_end, read_bytes, read_header, read_signed_varint, read_u8,
    read_u32_le, read_varint, write_header, write_signed_varint, write_varint,
};

fn sample_document() -> Vec<u8> {
    let mut out = Vec::new();
    write_header(&mut out, FileKind::Delta).expect("header");
    write_varint(&mut out, 16).expect("chunk");
    write_signed_varint(&mut out, -15).expect("start");
    out.push(1);
    out.extend_from_slice(&0xfeed_beefu32.to_le_bytes());
    write_varint(&mut out, 3).expect("len");
    out.extend_from_slice(b"abc");
    out
}

#[test]
fn document_reads_back_field_by_field() {
    let bytes = sample_document();
    let mut input = bytes.as_slice();

    read_header(&mut input, FileKind::Delta).expect("header");
    assert_eq!(read_varint(&mut input).expect("chunk"), 16);
    assert_eq!(read_signed_varint(&mut input).expect("start"), -15);
    assert_eq!(read_u8(&mut input).expect("flag"), 1);
    assert_eq!(read_u32_le(&mut input).expect("checksum"), 0xfeed_beef);
    let len = read_varint(&mut input).expect("len");
    assert_eq!(read_bytes(&mut input, len).expect("bytes"), b"abc");
    expect_end(&mut input).expect("end");
}

#[test]
fn every_truncation_is_reported_as_malformed() {
    let bytes = sample_document();
    for cut in 0..bytes.len() {
        let mut input = &bytes[..cut];
        let result = (|| -> Result<(), WireError> {
            read_header(&mut input, FileKind::Delta)?;
            read_varint(&mut input)?;
            read_signed_varint(&mut input)?;
            read_u8(&mut input)?;
            read_u32_le(&mut input)?;
            let len = read_varint(&mut input)?;
            read_bytes(&mut input, len)?;
            Ok(())
        })();
        let err = result.expect_err("truncated document must fail");
        assert!(err.is_malformed(), "cut at {cut}: {err}");
    }
}
