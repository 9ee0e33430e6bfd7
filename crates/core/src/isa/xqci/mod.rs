//! Xqci Vendor Extension.
//!
//! Recognition logic for the two vendor instructions the smoke fixture
//! carries:
//!
//! - `xqci.insbi` (32-bit): insert a 5-bit immediate into a bit field of
//!   `rd`, given a shift and a field width.
//! - `xqci.e.li` (48-bit): load a full 32-bit immediate into `rd`.
//!
//! Encodings that carry the right major opcode but violate a fixed field
//! or write `x0` are rejected rather than guessed at.

/// Fixed-field masks and match values for the vendor encodings.
pub mod constants;

use self::constants::{ELI_IMM_SHIFT, ELI_MASK, ELI_MATCH, INSBI_MASK, INSBI_MATCH};
use crate::isa::decode::Insn;
use crate::isa::insn::InstructionBits;

/// Decodes a 32-bit encoding as XQCI.INSBI.
///
/// Layout: `00 width[29:25] shift[24:20] imm[19:15] 001 rd[11:7] 0001011`,
/// with `rd != 0`. Returns `None` when the encoding does not match.
pub fn decode_insbi(inst: u32) -> Option<Insn> {
    if inst & INSBI_MASK != INSBI_MATCH {
        return None;
    }
    let rd = inst.rd();
    if rd == 0 {
        return None;
    }
    Some(Insn::Insbi {
        rd,
        imm: ((inst >> 15) & 0x1F) as u8,
        shift: ((inst >> 20) & 0x1F) as u8,
        width: ((inst >> 25) & 0x1F) as u8,
    })
}

/// Decodes a 48-bit encoding as XQCI.E.LI.
///
/// Layout: `imm[47:16] 0000 rd[11:7] 0011111`, with `rd != 0`. Returns
/// `None` when the encoding does not match.
pub fn decode_eli(inst: u64) -> Option<Insn> {
    if inst & ELI_MASK != ELI_MATCH {
        return None;
    }
    let rd = ((inst >> 7) & 0x1F) as u8;
    if rd == 0 {
        return None;
    }
    Some(Insn::ELi {
        rd,
        imm: (inst >> ELI_IMM_SHIFT) as u32,
    })
}
