//! Instruction Disassembler for the custom encodings.
//!
//! Converts a decoded [`Insn`] into a human-readable mnemonic string for
//! filter output, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```ignore
//! use xqdis_core::isa::decode::{decode, Insn};
//! use xqdis_core::isa::insn::InsnWidth;
//!
//! let insn = decode(InsnWidth::W16, 0xB8F2)?;
//! assert_eq!(insn.to_string(), "cm.push {ra, s0-s11}, -0");
//! ```

use std::fmt;

use crate::config::DisasmConfig;
use crate::isa::decode::Insn;
use crate::isa::zcmp::constants::SPIMM_SCALE;

/// ABI register names for x0–x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the name for an integer register index.
#[inline]
fn xreg(idx: u8, numeric: bool) -> String {
    if numeric {
        return format!("x{idx}");
    }
    REG_NAMES
        .get(usize::from(idx))
        .map_or_else(|| "x??".to_string(), |name| (*name).to_string())
}

/// Renders a CM.PUSH register-list selector.
///
/// Selector 15 names `{ra, s0-s11}` directly; there is no `{ra, s0-s10}`
/// list in the encoding.
fn reg_list(urlist: u8) -> String {
    match urlist {
        4 => "{ra}".to_string(),
        5 => "{ra, s0}".to_string(),
        6..=14 => format!("{{ra, s0-s{}}}", urlist - 5),
        15 => "{ra, s0-s11}".to_string(),
        _ => "{reserved}".to_string(),
    }
}

/// Disassembles a decoded instruction into a mnemonic string.
///
/// Register operands use ABI names unless `config.numeric_regs` asks for
/// raw `x{n}` form.
pub fn disassemble(insn: &Insn, config: &DisasmConfig) -> String {
    match *insn {
        Insn::CmPush { urlist, spimm } => {
            format!(
                "cm.push {}, -{}",
                reg_list(urlist),
                u32::from(spimm) * SPIMM_SCALE
            )
        }
        Insn::Insbi {
            rd,
            imm,
            shift,
            width,
        } => format!(
            "xqci.insbi {}, {imm:#x}, {shift:#x}, {width:#x}",
            xreg(rd, config.numeric_regs)
        ),
        Insn::ELi { rd, imm } => {
            format!("xqci.e.li {}, {imm:#x}", xreg(rd, config.numeric_regs))
        }
        Insn::Custom64 => "custom64".to_string(),
    }
}

impl fmt::Display for Insn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&disassemble(self, &DisasmConfig::default()))
    }
}
