use crate::decoder::{Format, OpKind};

/// One row of an opcode or funct table.
#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub code: u8,
    pub kind: OpKind,
    pub mnemonic: &'static str,
}

const fn desc(code: u8, kind: OpKind, mnemonic: &'static str) -> InstrDesc {
    InstrDesc { code, kind, mnemonic }
}

/// Opcode → format. Opcodes not listed here are unrecognized.
pub const FORMATS: &[(u8, Format)] = &[
    (0, Format::R),
    (2, Format::J),
    (4, Format::I),
    (5, Format::I),
    (8, Format::I),
    (9, Format::I),
];

/// R format, keyed by funct.
pub const R_TABLE: &[InstrDesc] = &[
    desc(32, OpKind::Add, "add"),
    desc(33, OpKind::Add, "addu"),
    desc(34, OpKind::Sub, "sub"),
    desc(35, OpKind::Sub, "subu"),
    desc(0, OpKind::Shift, "sll"),
    desc(2, OpKind::Shift, "srl"),
    desc(8, OpKind::Jump, "jr"),
];

/// I format, keyed by opcode.
pub const I_TABLE: &[InstrDesc] = &[
    desc(8, OpKind::Add, "addi"),
    desc(9, OpKind::Add, "addiu"),
    desc(4, OpKind::Branch, "beq"),
    desc(5, OpKind::Branch, "bne"),
];

/// J format has a single operation.
pub const J_DESC: InstrDesc = desc(2, OpKind::Jump, "j");

pub fn format_of(opcode: u8) -> Option<Format> {
    FORMATS.iter().find(|(op, _)| *op == opcode).map(|&(_, f)| f)
}

pub fn lookup(table: &[InstrDesc], code: u8) -> Option<&InstrDesc> {
    table.iter().find(|d| d.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tables_have_unique_keys() {
        for table in [R_TABLE, I_TABLE] {
            let codes: HashSet<u8> = table.iter().map(|d| d.code).collect();
            assert_eq!(codes.len(), table.len());
        }
        let ops: HashSet<u8> = FORMATS.iter().map(|(op, _)| *op).collect();
        assert_eq!(ops.len(), FORMATS.len());
    }

    #[test]
    fn every_i_format_opcode_has_an_entry() {
        for &(op, f) in FORMATS {
            if f == Format::I {
                assert!(lookup(I_TABLE, op).is_some(), "opcode {op}");
            }
        }
        assert_eq!(format_of(J_DESC.code), Some(Format::J));
    }
}
