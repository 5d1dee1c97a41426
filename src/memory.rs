use crate::error::{Error, Result};

/// Word size in bytes. Every instruction occupies exactly one word.
pub const WORD_BYTES: usize = 4;

/// Reads the big-endian word at `offset`.
///
/// `offset` must be word-aligned and leave at least four bytes in `buf`.
pub fn read_word(buf: &[u8], offset: usize) -> Result<u32> {
    if offset % WORD_BYTES != 0 {
        return Err(Error::invalid_argument(format!(
            "offset {offset:#x} is not word aligned"
        )));
    }
    let end = offset
        .checked_add(WORD_BYTES)
        .filter(|&end| end <= buf.len())
        .ok_or(Error::OutOfBounds { offset, len: buf.len() })?;
    let b = &buf[offset..end];
    Ok(u32::from(b[0]) << 24 | u32::from(b[1]) << 16 | u32::from(b[2]) << 8 | u32::from(b[3]))
}

/// Anything that can hand out instruction words from a byte buffer.
pub trait WordSource {
    fn bytes(&self) -> &[u8];

    fn word_at(&self, offset: usize) -> Result<u32> {
        read_word(self.bytes(), offset)
    }

    /// Number of words, counting a trailing partial word.
    fn word_count(&self) -> usize {
        self.bytes().len().div_ceil(WORD_BYTES)
    }
}

impl WordSource for [u8] {
    fn bytes(&self) -> &[u8] {
        self
    }
}

impl WordSource for Vec<u8> {
    fn bytes(&self) -> &[u8] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_significant_byte_first() {
        let buf = [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0];
        assert_eq!(read_word(&buf, 0).unwrap(), 0x1234_5678);
        assert_eq!(read_word(&buf, 4).unwrap(), 0x9abc_def0);
    }

    #[test]
    fn offset_overflow_is_out_of_bounds() {
        let buf = [0u8; 4];
        assert!(matches!(
            read_word(&buf, usize::MAX - 3),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn word_count_rounds_up() {
        let v = vec![0u8; 9];
        assert_eq!(v.word_count(), 3);
        assert_eq!(v.word_at(4).unwrap(), 0);
    }
}
