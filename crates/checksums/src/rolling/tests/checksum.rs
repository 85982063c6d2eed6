use super::*;

#[test]
fn empty_window_reads_as_one() {
    let checksum = RollingChecksum::new(capacity(8));
    assert_eq!(checksum.value(), 1);
    assert_eq!(checksum.len(), 0);
    assert!(checksum.window_bytes().is_empty());
}

#[test]
fn init_matches_zlib_adler32() {
    let mut checksum = RollingChecksum::new(capacity(32));
    checksum.init(b"This is a test").expect("fits");
    assert_eq!(checksum.value(), 611517686);
    assert_eq!(checksum.window_bytes(), b"This is a test");
}

#[test]
fn ingest_matches_init() {
    let mut checksum = RollingChecksum::new(capacity(32));
    let mut last = 0;
    for &byte in b"This is a test" {
        last = checksum.ingest(byte);
    }
    assert_eq!(last, 611517686);
    assert_eq!(last, fresh_value(32, b"This is a test"));
}

#[test]
fn eject_removes_oldest_byte() {
    let mut checksum = RollingChecksum::new(capacity(32));
    checksum.init(b"aThis is a test").expect("fits");
    assert_eq!(checksum.eject(), Ok(b'a'));
    assert_eq!(checksum.value(), 611517686);
    assert_eq!(checksum.len(), 14);
}

#[test]
fn ejecting_everything_returns_to_initial_state() {
    let mut checksum = RollingChecksum::new(capacity(4));
    checksum.init(b"wxyz").expect("fits");
    for expected in b"wxyz" {
        assert_eq!(checksum.eject(), Ok(*expected));
    }
    assert_eq!(checksum.value(), 1);
    assert_eq!(checksum.eject(), Err(RollingError::EmptyWindow));
}

#[test]
fn ingest_into_full_window_slides() {
    let mut checksum = RollingChecksum::new(capacity(4));
    for &byte in b"hello world" {
        checksum.ingest(byte);
    }
    assert_eq!(checksum.len(), 4);
    assert_eq!(checksum.window_bytes(), b"orld");
    assert_eq!(checksum.value(), fresh_value(4, b"orld"));
}

#[test]
fn init_rejects_oversized_input() {
    let mut checksum = RollingChecksum::new(capacity(4));
    checksum.init(b"ab").expect("fits");
    let err = checksum.init(b"abcde").expect_err("too long");
    assert_eq!(
        err,
        RollingError::WindowOverflow {
            len: 5,
            capacity: 4
        }
    );
    assert_eq!(checksum.window_bytes(), b"ab");
}

#[test]
fn reset_clears_window_and_accumulators() {
    let mut checksum = RollingChecksum::new(capacity(8));
    checksum.init(b"rolling").expect("fits");
    checksum.reset();
    assert!(checksum.is_empty());
    assert_eq!(checksum.value(), 1);
    assert_eq!(checksum.ingest(b'r'), fresh_value(8, b"r"));
}

#[test]
fn large_bytes_wrap_modulus() {
    let data = vec![0xffu8; 4096];
    let mut checksum = RollingChecksum::new(capacity(4096));
    checksum.init(&data).expect("fits");
    assert_eq!(checksum.digest(), RollingDigest::from_bytes(&data));

    for _ in 0..100 {
        checksum.eject().expect("non-empty");
    }
    assert_eq!(checksum.value(), fresh_value(4096, &data[100..]));
}

#[test]
fn digest_reports_window_length() {
    let mut checksum = RollingChecksum::new(capacity(16));
    checksum.init(b"abc").expect("fits");
    let digest = checksum.digest();
    assert_eq!(digest.len(), 3);
    assert_eq!(digest.value(), checksum.value());
    assert_eq!(u32::from(digest.sum1()), checksum.value() & 0xffff);
}
