use tracing::{debug, trace};

use crate::decoder::{Decoded, Decoder, Format};
use crate::error::{Error, Result};
use crate::instructions::{format_of, lookup, InstrDesc, I_TABLE, J_DESC, R_TABLE};

/// Decoder for the R/I/J integer subset.
///
/// Classification happens in two steps: the opcode picks the format, then the
/// format picks which table resolves kind and mnemonic (funct for R, opcode
/// for I, nothing for J).
#[derive(Debug, Default, Clone, Copy)]
pub struct MipsDecoder;

impl MipsDecoder {
    pub fn new() -> Self {
        Self
    }

    fn resolve(format: Format, raw32: u32) -> Result<&'static InstrDesc> {
        let opcode = (raw32 >> 26) as u8;
        match format {
            Format::R => {
                let funct = (raw32 & 0x3F) as u8;
                lookup(R_TABLE, funct).ok_or(Error::UnsupportedFunct { funct, word: raw32 })
            }
            // format_of only yields I for opcodes present in I_TABLE
            Format::I => lookup(I_TABLE, opcode)
                .ok_or(Error::UnrecognizedFormat { opcode, word: raw32 }),
            Format::J => Ok(&J_DESC),
        }
    }
}

impl Decoder for MipsDecoder {
    fn decode(&self, raw32: u32) -> Result<Decoded> {
        let opcode = (raw32 >> 26) as u8;
        let decoded = format_of(opcode)
            .ok_or(Error::UnrecognizedFormat { opcode, word: raw32 })
            .and_then(|format| {
                let desc = Self::resolve(format, raw32)?;
                Ok(Decoded { raw: raw32, format, kind: desc.kind, mnemonic: desc.mnemonic })
            });
        match &decoded {
            Ok(d) => trace!(word = raw32, mnemonic = d.mnemonic, "decoded"),
            Err(e) => debug!(word = raw32, error = %e, "decode failed"),
        }
        decoded
    }
}
