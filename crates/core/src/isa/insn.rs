//! Instruction widths, parcels, and field extraction.
//!
//! RISC-V instructions are stored as a sequence of 16-bit parcels, and the
//! low bits of the first parcel encode the total instruction length. This
//! module provides the width type used everywhere in the crate, the parcel
//! reassembly rules for listing output, and bit extraction for the 32-bit
//! custom format.

use std::fmt;

use crate::error::DecodeError;

/// Size of one instruction parcel in bytes.
pub const PARCEL_BYTES: usize = 2;

/// Bit mask for extracting the major opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;

/// Encoded instruction width in bytes.
///
/// The fixture exercises exactly these four widths; anything else is
/// rejected before decoding starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsnWidth {
    /// 2-byte (compressed) encoding.
    W16,
    /// 4-byte (standard) encoding.
    W32,
    /// 6-byte (extended) encoding.
    W48,
    /// 8-byte (extended) encoding.
    W64,
}

impl InsnWidth {
    /// Constructs a width from a byte count.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnsupportedWidth`] for any count other than
    /// 2, 4, 6, or 8.
    pub fn from_bytes(bytes: usize) -> Result<Self, DecodeError> {
        match bytes {
            2 => Ok(Self::W16),
            4 => Ok(Self::W32),
            6 => Ok(Self::W48),
            8 => Ok(Self::W64),
            other => Err(DecodeError::UnsupportedWidth(other)),
        }
    }

    /// Derives the width from the standard length-encoding bits of the
    /// first (lowest-addressed) parcel.
    ///
    /// Returns `None` for the reserved (>= 80-bit) forms.
    pub fn from_low_bits(parcel: u16) -> Option<Self> {
        if parcel & 0b11 != 0b11 {
            Some(Self::W16)
        } else if parcel & 0b1_1100 != 0b1_1100 {
            Some(Self::W32)
        } else if parcel & 0b11_1111 == 0b01_1111 {
            Some(Self::W48)
        } else if parcel & 0b111_1111 == 0b011_1111 {
            Some(Self::W64)
        } else {
            None
        }
    }

    /// Width in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            Self::W16 => 2,
            Self::W32 => 4,
            Self::W48 => 6,
            Self::W64 => 8,
        }
    }

    /// Width in 16-bit parcels.
    pub const fn parcels(self) -> usize {
        self.bytes() / PARCEL_BYTES
    }
}

impl fmt::Display for InsnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bytes() * 8)
    }
}

/// Reassembles an encoding value from listing-order parcels.
///
/// Disassembler listings print 4-byte instructions (and each half of an
/// 8-byte instruction) as one 8-hex-digit group, so the parcel order there
/// is high-half first within a group while groups follow memory order.
/// 6-byte instructions print as three 4-hex groups in plain memory order.
/// The rules below undo that layout:
///
/// * 2 bytes: `p0`
/// * 4 bytes: `p0 << 16 | p1`
/// * 6 bytes: `p0 | p1 << 16 | p2 << 32`
/// * 8 bytes: `(p0 << 16 | p1) | (p2 << 16 | p3) << 32`
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] when fewer parcels are supplied than
/// the width requires. Extra parcels are ignored.
pub fn from_parcels(width: InsnWidth, parcels: &[u16]) -> Result<u64, DecodeError> {
    if parcels.len() < width.parcels() {
        return Err(DecodeError::Truncated {
            width,
            got: parcels.len(),
        });
    }
    let p = |i: usize| u64::from(parcels[i]);
    Ok(match width {
        InsnWidth::W16 => p(0),
        InsnWidth::W32 => p(0) << 16 | p(1),
        InsnWidth::W48 => p(0) | p(1) << 16 | p(2) << 32,
        InsnWidth::W64 => p(0) << 16 | p(1) | p(2) << 48 | p(3) << 32,
    })
}

/// Trait for extracting 32-bit-format instruction fields.
///
/// Only the fields the custom 32-bit encoding actually uses are provided;
/// extension-specific operand fields are extracted by their own decoders.
pub trait InstructionBits {
    /// Extracts the major opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> u8;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> 7) & RD_MASK) as u8
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }
}
