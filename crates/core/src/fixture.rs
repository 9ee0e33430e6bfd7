//! The Canonical Smoke Program.
//!
//! Six raw directives of every supported width, in a fixed order, followed
//! by a trivial arithmetic exit status. Assembling this program and
//! finding the exact bytes in the output is the whole point: it proves a
//! toolchain accepts the custom encodings and places them verbatim.
//!
//! The table, offsets, and exit arithmetic are load-bearing constants;
//! nothing here may drift without breaking downstream byte checks.

use crate::emit::Emitter;
use crate::isa::decode::CUSTOM64_ENCODING;
use crate::isa::insn::InsnWidth;

/// One raw-emission request: a width and the exact bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Directive {
    /// Encoding width.
    pub width: InsnWidth,
    /// Bit pattern, right-aligned.
    pub bits: u64,
}

impl Directive {
    /// The little-endian byte encoding of this directive.
    pub fn encoding(&self) -> Vec<u8> {
        self.bits.to_le_bytes()[..self.width.bytes()].to_vec()
    }
}

/// The six directives in source order.
pub const DIRECTIVES: [Directive; 6] = [
    Directive {
        width: InsnWidth::W64,
        bits: CUSTOM64_ENCODING,
    },
    Directive {
        width: InsnWidth::W48,
        bits: 0x0000_1000_0000_021F, // xqci.e.li
    },
    Directive {
        width: InsnWidth::W32,
        bits: 0x084F_940B, // xqci.insbi
    },
    Directive {
        width: InsnWidth::W16,
        bits: 0xB8F2, // cm.push
    },
    Directive {
        width: InsnWidth::W32,
        bits: 0x084F_940B, // xqci.insbi
    },
    Directive {
        width: InsnWidth::W16,
        bits: 0xB8F2, // cm.push
    },
];

/// Byte offset of each directive within the image.
pub const OFFSETS: [usize; 6] = [0, 8, 14, 18, 20, 24];

/// Total image length in bytes.
pub const IMAGE_LEN: usize = 26;

/// First operand of the exit arithmetic.
pub const EXIT_A: i32 = 0;

/// Second operand of the exit arithmetic.
pub const EXIT_C: i32 = 32;

/// The program's exit status: `EXIT_A * EXIT_C`.
///
/// Always zero; the value has no meaning beyond "process completed".
pub const fn exit_code() -> i32 {
    EXIT_A * EXIT_C
}

/// The exact byte sequence the directives assemble to.
///
/// Each directive is emitted little-endian at its [`OFFSETS`] position;
/// there is no padding between directives.
pub fn image() -> Vec<u8> {
    let mut emitter = Emitter::new();
    for directive in &DIRECTIVES {
        // The table is static and well-formed; emission cannot fail.
        if let Err(err) = emitter.emit(directive.width, directive.bits) {
            unreachable!("fixture directive table: {err}");
        }
    }
    emitter.into_bytes()
}

/// The directive listing as assembler text, one `.insn` line per entry.
pub fn render_asm() -> String {
    let mut out = String::new();
    for directive in &DIRECTIVES {
        out.push_str(&format!(
            ".insn {}, {:#x}\n",
            directive.width.bytes(),
            directive.bits
        ));
    }
    out
}
