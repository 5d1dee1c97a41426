use serde::Serialize;

use crate::error::Result;
use crate::registers::reg_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    R,
    I,
    J,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OpKind {
    Add,
    Sub,
    Shift,
    Jump,
    Branch,
}

/// Register operand role within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    S,
    T,
    D,
}

/// Per-format view of the bit fields of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "format")]
pub enum Fields {
    R { rs: u8, rt: u8, rd: u8, shamt: u8, funct: u8 },
    I { rs: u8, rt: u8, imm: u16 },
    J { addr: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub raw: u32,
    pub format: Format,
    pub kind: OpKind,
    pub mnemonic: &'static str,
}

// Field accessors read straight from the raw word; which ones are meaningful
// depends on `format`.
impl Decoded {
    pub fn opcode(&self) -> u8 {
        (self.raw >> 26) as u8
    }
    pub fn rs(&self) -> u8 {
        ((self.raw >> 21) & 0x1F) as u8
    }
    pub fn rt(&self) -> u8 {
        ((self.raw >> 16) & 0x1F) as u8
    }
    pub fn rd(&self) -> u8 {
        ((self.raw >> 11) & 0x1F) as u8
    }
    pub fn shamt(&self) -> u8 {
        ((self.raw >> 6) & 0x1F) as u8
    }
    pub fn funct(&self) -> u8 {
        (self.raw & 0x3F) as u8
    }
    pub fn imm(&self) -> u16 {
        (self.raw & 0xFFFF) as u16
    }
    pub fn addr(&self) -> u32 {
        self.raw & 0x03FF_FFFF
    }

    pub fn fields(&self) -> Fields {
        match self.format {
            Format::R => Fields::R {
                rs: self.rs(),
                rt: self.rt(),
                rd: self.rd(),
                shamt: self.shamt(),
                funct: self.funct(),
            },
            Format::I => Fields::I { rs: self.rs(), rt: self.rt(), imm: self.imm() },
            Format::J => Fields::J { addr: self.addr() },
        }
    }

    pub fn reg(&self, role: Role) -> Result<&'static str> {
        let index = match role {
            Role::S => self.rs(),
            Role::T => self.rt(),
            Role::D => self.rd(),
        };
        reg_name(index)
    }
}

pub trait Decoder {
    fn decode(&self, raw32: u32) -> Result<Decoded>;
}
