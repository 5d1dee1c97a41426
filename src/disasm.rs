use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decoder::{Decoded, Format, OpKind, Role};
use crate::error::{Error, Result};

/// Layout knobs for multi-line listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// Prefix written before every instruction line.
    pub indent: String,
    /// Emit the `section "<label>":` line.
    pub header: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self { indent: String::new(), header: true }
    }
}

/// Renders one instruction as `<mnemonic> <operands>`.
pub fn fmt_decoded(d: &Decoded) -> Result<String> {
    let s = |role| d.reg(role);
    let operands = match (d.format, d.kind) {
        (Format::R, OpKind::Add | OpKind::Sub) => {
            format!("${}, ${}, ${}", s(Role::S)?, s(Role::T)?, s(Role::D)?)
        }
        (Format::R, OpKind::Shift) => format!("${}, ${}, {}", s(Role::S)?, s(Role::T)?, d.shamt()),
        (Format::R, OpKind::Jump) => format!("${}", s(Role::S)?),
        (Format::I, OpKind::Add) => format!("${}, ${}, {:x}", s(Role::S)?, s(Role::T)?, d.imm()),
        (Format::I, OpKind::Branch) => format!("${}, ${}, {:x}", s(Role::T)?, s(Role::S)?, d.imm()),
        (Format::J, OpKind::Jump) => format!("{:x}", d.addr()),
        (format, kind) => return Err(Error::UnhandledTemplate { format, kind }),
    };
    Ok(format!("{} {}", d.mnemonic, operands))
}

/// Renders a labelled listing with the default layout.
pub fn render_all(instrs: &[Decoded], label: &str) -> Result<String> {
    render_with(instrs, label, &DumpConfig::default())
}

/// Renders a listing; stops at the first instruction that has no template.
pub fn render_with(instrs: &[Decoded], label: &str, cfg: &DumpConfig) -> Result<String> {
    let mut out = String::new();
    if cfg.header {
        let _ = writeln!(out, "section \"{label}\":");
    }
    for (index, d) in instrs.iter().enumerate() {
        let line = fmt_decoded(d).map_err(|e| e.at(index))?;
        let _ = writeln!(out, "{}{}", cfg.indent, line);
    }
    debug!(label, count = instrs.len(), "rendered listing");
    Ok(out)
}
