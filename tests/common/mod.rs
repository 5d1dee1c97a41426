#![allow(dead_code)]

pub fn enc_r(rs: u32, rt: u32, rd: u32, shamt: u32, funct: u32) -> u32 {
    ((rs & 0x1F) << 21) | ((rt & 0x1F) << 16) | ((rd & 0x1F) << 11) | ((shamt & 0x1F) << 6) | (funct & 0x3F)
}

pub fn enc_i(op: u32, rs: u32, rt: u32, imm: u32) -> u32 {
    ((op & 0x3F) << 26) | ((rs & 0x1F) << 21) | ((rt & 0x1F) << 16) | (imm & 0xFFFF)
}

pub fn enc_j(addr: u32) -> u32 {
    (2 << 26) | (addr & 0x03FF_FFFF)
}

pub fn be_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}
