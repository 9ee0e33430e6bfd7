//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains width handling, parcel reassembly, and decoding logic for the
//! custom encodings the smoke fixture exercises, organized by extension.
//!
//! # Extensions
//!
//! * `xqci`: Vendor extension (32-bit `xqci.insbi`, 48-bit `xqci.e.li`).
//! * `zcmp`: Code-size-reduction push/pop instructions (16-bit `cm.push`).
//!
//! The single accepted 64-bit encoding has no extension of its own; it
//! lives with the top-level decoder.

/// Width-dispatched decoding into the [`decode::Insn`] instruction type.
pub mod decode;

/// Instruction disassembler for filter output and test diagnostics.
pub mod disasm;

/// Instruction widths, length encoding, parcels, and field extraction.
pub mod insn;

/// Vendor extension encodings (XQCI.INSBI, XQCI.E.LI).
pub mod xqci;

/// Code-size-reduction extension encodings (CM.PUSH).
pub mod zcmp;
