//! Raw-Directive Emission Buffer.
//!
//! The toolchain boundary the fixture leans on is a directive that takes a
//! bit-width and a literal bit pattern and places that exact pattern at
//! the current code-emission location, without interpretation. [`Emitter`]
//! is that facility: an append-only buffer with the two checks a real
//! assembler applies — the pattern must fit its width, and instruction
//! emission must stay parcel-aligned.

use crate::error::EmitError;
use crate::isa::insn::{InsnWidth, PARCEL_BYTES};

/// Append-only code-emission buffer.
#[derive(Clone, Debug, Default)]
pub struct Emitter {
    buf: Vec<u8>,
}

impl Emitter {
    /// Creates an empty buffer at offset zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current emission offset in bytes.
    pub fn offset(&self) -> usize {
        self.buf.len()
    }

    /// Places `bits` at the current offset as a little-endian encoding of
    /// the given width.
    ///
    /// # Errors
    ///
    /// [`EmitError::Overflow`] when `bits` has set bits above the width,
    /// [`EmitError::Misaligned`] when the current offset is not on a
    /// 16-bit parcel boundary.
    pub fn emit(&mut self, width: InsnWidth, bits: u64) -> Result<(), EmitError> {
        let bytes = width.bytes();
        if bytes < 8 && bits >> (bytes * 8) != 0 {
            return Err(EmitError::Overflow { width, bits });
        }
        if self.buf.len() % PARCEL_BYTES != 0 {
            return Err(EmitError::Misaligned {
                offset: self.buf.len(),
            });
        }
        self.buf.extend_from_slice(&bits.to_le_bytes()[..bytes]);
        Ok(())
    }

    /// Appends raw bytes with no width or alignment checks.
    ///
    /// Data emitted this way can leave the buffer misaligned; the next
    /// [`emit`](Self::emit) will refuse until alignment is restored.
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Borrows the emitted bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the emitter, yielding the emitted bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
