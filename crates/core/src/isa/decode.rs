//! Width-Dispatched Instruction Decoding.
//!
//! Entry point turning a reassembled encoding value into an [`Insn`].
//! Dispatch is by width: each width has exactly one accepted custom
//! encoding family, so an unmatched value is an error, not a fallback.

use crate::error::DecodeError;
use crate::isa::insn::{self, InsnWidth};
use crate::isa::{xqci, zcmp};

/// The single accepted 64-bit encoding.
///
/// This pattern has no architectural meaning; it exists to prove the
/// toolchain round-trips an 8-byte instruction. Bits 6-0 carry the
/// standard 64-bit length encoding (`0111111`).
pub const CUSTOM64_ENCODING: u64 = 0x0020_0020_0940_003F;

/// A decoded custom instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insn {
    /// CM.PUSH: save the selected register list and adjust the stack.
    CmPush {
        /// Register-list selector (4..=15).
        urlist: u8,
        /// Additional stack adjustment in 16-byte steps.
        spimm: u8,
    },

    /// XQCI.INSBI: insert a 5-bit immediate into a bit field of `rd`.
    Insbi {
        /// Destination register (never `x0`).
        rd: u8,
        /// Immediate to insert.
        imm: u8,
        /// Bit position of the field.
        shift: u8,
        /// Width of the field.
        width: u8,
    },

    /// XQCI.E.LI: load a full 32-bit immediate into `rd`.
    ELi {
        /// Destination register (never `x0`).
        rd: u8,
        /// Immediate value (encoding bits 47-16).
        imm: u32,
    },

    /// The 8-byte smoke-test encoding; no operands.
    Custom64,
}

/// Decodes a reassembled encoding value of the given width.
///
/// The value's low parcel must agree with the standard length-encoding
/// bits for the claimed width; this catches parcel-order mistakes in the
/// caller before they turn into nonsense decodes.
///
/// # Errors
///
/// [`DecodeError::WidthMismatch`] when the length bits disagree with
/// `width`, [`DecodeError::Unrecognized`] when no custom encoding of that
/// width matches.
pub fn decode(width: InsnWidth, bits: u64) -> Result<Insn, DecodeError> {
    let encoded = InsnWidth::from_low_bits(bits as u16);
    if encoded != Some(width) {
        return Err(DecodeError::WidthMismatch {
            claimed: width,
            encoded,
        });
    }

    let insn = match width {
        InsnWidth::W16 => zcmp::decode_push(bits as u16),
        InsnWidth::W32 => xqci::decode_insbi(bits as u32),
        InsnWidth::W48 => xqci::decode_eli(bits),
        InsnWidth::W64 => (bits == CUSTOM64_ENCODING).then_some(Insn::Custom64),
    };
    insn.ok_or(DecodeError::Unrecognized { width, bits })
}

/// Decodes from listing-order parcels.
///
/// Convenience wrapper over [`insn::from_parcels`] and [`decode`] for
/// callers that start from a parsed listing line.
///
/// # Errors
///
/// Propagates reassembly and decode failures unchanged.
pub fn decode_parcels(width: InsnWidth, parcels: &[u16]) -> Result<Insn, DecodeError> {
    decode(width, insn::from_parcels(width, parcels)?)
}
