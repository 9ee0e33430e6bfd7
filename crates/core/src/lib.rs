//! Xqci custom-instruction toolchain library.
//!
//! This crate implements the pieces needed to exercise and read back vendor
//! (Xqci) instruction encodings a stock disassembler does not know:
//! 1. **ISA:** Width/parcel handling and decoding for the custom 16/32/48/64-bit encodings.
//! 2. **Disassembly:** Mnemonic rendering for decoded instructions.
//! 3. **Emission:** A raw-directive buffer that places exact bit patterns at code offsets.
//! 4. **Fixture:** The canonical six-directive smoke program and its byte image.
//! 5. **Filter:** Rewriting of `<unknown>` lines in objdump listings.
//! 6. **Check:** Locating the fixture image inside a built artifact.

/// Artifact verification (fixture byte image lookup in ELF or raw files).
pub mod check;
/// Library configuration (disassembly and filter options).
pub mod config;
/// Raw-directive emission buffer.
pub mod emit;
/// Error types for decoding, emission, line parsing, and checking.
pub mod error;
/// Objdump listing filter (rewrites lines the toolchain could not decode).
pub mod filter;
/// The canonical smoke program: directive table, byte image, exit code.
pub mod fixture;
/// Instruction set definitions (widths, parcels, Xqci, Zcmp, decode, disasm).
pub mod isa;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Decoded custom instruction; produced by `isa::decode::decode`.
pub use crate::isa::decode::Insn;
/// Decode failure type returned throughout the ISA layer.
pub use crate::error::DecodeError;
