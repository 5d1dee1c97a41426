pub mod decoder;
pub mod disasm;
pub mod error;
pub mod instructions;
pub mod memory;
pub mod registers;
pub mod section;

pub mod isa {
    pub mod mips; // R/I/J subset: add(u), sub(u), sll, srl, jr, addi(u), beq, bne, j
}

pub use decoder::{Decoded, Decoder, Fields, Format, OpKind, Role};
pub use disasm::{fmt_decoded, render_all, render_with, DumpConfig};
pub use error::{Error, Result};
pub use isa::mips::MipsDecoder;
pub use memory::{read_word, WordSource};
pub use section::{decode_words, decode_words_par, Listing, Section};
