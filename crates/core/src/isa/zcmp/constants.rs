//! Zcmp Push/Pop Extension Constants.
//!
//! Defines the fixed fields of the 16-bit CM.PUSH encoding and the
//! register-list selector range.

/// Fixed-field mask for CM.PUSH: bits 15-8 and the quadrant bits 1-0.
pub const PUSH_MASK: u16 = 0xFF03;

/// Match value for CM.PUSH under [`PUSH_MASK`] (`10111000 .... .. 10`).
pub const PUSH_MATCH: u16 = 0xB802;

/// Smallest valid register-list selector ({ra} only).
pub const URLIST_MIN: u8 = 4;

/// Largest register-list selector ({ra, s0-s11}).
pub const URLIST_MAX: u8 = 15;

/// Stack adjustment granularity in bytes per spimm step.
pub const SPIMM_SCALE: u32 = 16;
