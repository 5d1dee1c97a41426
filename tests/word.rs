use pretty_assertions::assert_eq;

use mips_rs::{read_word, Error, WordSource};

#[test]
fn exactly_four_bytes() {
    assert_eq!(read_word(&[0x00, 0x22, 0x18, 0x20], 0), Ok(0x0022_1820));
}

#[test]
fn three_bytes_is_out_of_bounds() {
    assert_eq!(read_word(&[1, 2, 3], 0), Err(Error::OutOfBounds { offset: 0, len: 3 }));
}

#[test]
fn last_word_and_one_past() {
    let buf = [0u8, 0, 0, 1, 0xff, 0xff, 0xff, 0xff];
    assert_eq!(read_word(&buf, 4), Ok(0xffff_ffff));
    assert_eq!(read_word(&buf, 8), Err(Error::OutOfBounds { offset: 8, len: 8 }));
}

#[test]
fn misaligned_offset_is_invalid() {
    let buf = [0u8; 8];
    assert!(matches!(read_word(&buf, 2), Err(Error::InvalidArgument { .. })));
}

#[test]
fn slices_are_word_sources() {
    let buf: &[u8] = &[0xde, 0xad, 0xbe, 0xef];
    assert_eq!(buf.word_at(0), Ok(0xdead_beef));
    assert_eq!(buf.word_count(), 1);
}
