use anyhow::Result;
use std::path::Path;

use mips_rs::{Section, WordSource};

#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Section>,
}

pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    let seg = Section { name: "text".into(), base, bytes: payload.to_vec() };
    Ok(Image { segments: vec![seg] })
}

fn find(img: &Image, addr: u32) -> Option<(&Section, usize)> {
    img.segments.iter().find_map(|s| {
        let off = addr.checked_sub(s.base)? as usize;
        (off < s.bytes.len()).then_some((s, off))
    })
}

pub fn read_u8(img: &Image, addr: u32) -> Option<u8> {
    find(img, addr).map(|(s, off)| s.bytes[off])
}

/// Big-endian word at `addr`; `None` when unmapped, truncated or misaligned.
pub fn read_word_at(img: &Image, addr: u32) -> Option<u32> {
    let (s, off) = find(img, addr)?;
    s.word_at(off).ok()
}

pub fn is_mapped(img: &Image, addr: u32) -> bool {
    find(img, addr).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loader_maps_skip_and_len() {
        let path = std::env::temp_dir().join("_mips_disasm_model.bin");
        std::fs::write(&path, [0u8, 1, 2, 3, 4, 5, 6, 7]).unwrap();
        let img = load_raw_bin(&path, 0x1000_0000, 2, Some(5)).unwrap();
        assert_eq!(img.segments.len(), 1);
        let s = &img.segments[0];
        assert_eq!(s.base, 0x1000_0000);
        assert_eq!(s.bytes, vec![2, 3, 4, 5, 6]);
        assert_eq!(read_word_at(&img, 0x1000_0000), Some(0x0203_0405));
        assert_eq!(read_word_at(&img, 0x1000_0004), None);
        assert_eq!(read_word_at(&img, 0x1000_0001), None);
        assert_eq!(read_u8(&img, 0x1000_0004), Some(6));
        assert!(!is_mapped(&img, 0x0fff_ffff));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn loader_rejects_oversized_skip() {
        let path = std::env::temp_dir().join("_mips_disasm_skip.bin");
        std::fs::write(&path, [0u8; 4]).unwrap();
        assert!(load_raw_bin(&path, 0, 5, None).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
