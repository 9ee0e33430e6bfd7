//! Xqci Vendor Extension Constants.
//!
//! Defines the fixed-field masks and match values for the vendor encodings.
//! Both instructions keep their operand fields free and pin everything
//! else, so recognition is a single mask-and-compare.

/// Major opcode used by the 32-bit vendor instructions (custom-0).
pub const OP_CUSTOM0: u32 = 0b000_1011;

/// funct3 selecting INSBI within the custom-0 opcode.
pub const F3_INSBI: u32 = 0b001;

/// Fixed-field mask for XQCI.INSBI: bits 31-30, funct3, and the opcode.
pub const INSBI_MASK: u32 = 0xC000_707F;

/// Match value for XQCI.INSBI under [`INSBI_MASK`].
pub const INSBI_MATCH: u32 = 0x0000_100B;

/// Fixed-field mask for XQCI.E.LI: bits 15-12 and the 48-bit length bits.
pub const ELI_MASK: u64 = 0xF07F;

/// Match value for XQCI.E.LI under [`ELI_MASK`].
pub const ELI_MATCH: u64 = 0x001F;

/// Low bit of the E.LI immediate field (bits 47-16).
pub const ELI_IMM_SHIFT: u32 = 16;
