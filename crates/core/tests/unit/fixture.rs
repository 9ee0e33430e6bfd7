//! Canonical Fixture Tests.
//!
//! Verifies the load-bearing properties of the smoke program: every
//! directive's exact bytes at its exact offset, the image length, the
//! exit arithmetic, the assembler rendering, and the decode round-trip
//! back to the expected mnemonics.

use pretty_assertions::assert_eq;

use xqdis_core::fixture::{self, DIRECTIVES, IMAGE_LEN, OFFSETS};
use xqdis_core::isa::decode::decode;

// ══════════════════════════════════════════════════════════
// 1. Byte image
// ══════════════════════════════════════════════════════════

#[test]
fn image_length() {
    assert_eq!(fixture::image().len(), IMAGE_LEN);
    assert_eq!(
        IMAGE_LEN,
        DIRECTIVES.iter().map(|d| d.width.bytes()).sum::<usize>()
    );
}

#[test]
fn image_bytes_at_offsets() {
    let image = fixture::image();
    for (directive, offset) in DIRECTIVES.iter().zip(OFFSETS) {
        let got = &image[offset..offset + directive.width.bytes()];
        assert_eq!(
            got,
            directive.encoding(),
            "directive at offset {offset} must appear verbatim"
        );
    }
}

#[test]
fn image_exact_bytes() {
    assert_eq!(
        fixture::image(),
        vec![
            // .insn 8, 0x2000200940003f
            0x3F, 0x00, 0x40, 0x09, 0x20, 0x00, 0x20, 0x00,
            // .insn 6, 0x10000000021f
            0x1F, 0x02, 0x00, 0x00, 0x00, 0x10,
            // .insn 4, 0x84f940b
            0x0B, 0x94, 0x4F, 0x08,
            // .insn 2, 0xb8f2
            0xF2, 0xB8,
            // .insn 4, 0x84f940b
            0x0B, 0x94, 0x4F, 0x08,
            // .insn 2, 0xb8f2
            0xF2, 0xB8,
        ]
    );
}

#[test]
fn offsets_are_cumulative_widths() {
    let mut offset = 0;
    for (directive, expected) in DIRECTIVES.iter().zip(OFFSETS) {
        assert_eq!(offset, expected);
        offset += directive.width.bytes();
    }
    assert_eq!(offset, IMAGE_LEN);
}

// ══════════════════════════════════════════════════════════
// 2. Exit arithmetic
// ══════════════════════════════════════════════════════════

#[test]
fn exit_code_is_zero() {
    assert_eq!(fixture::exit_code(), 0);
    assert_eq!(fixture::EXIT_A * fixture::EXIT_C, 0);
}

// ══════════════════════════════════════════════════════════
// 3. Assembler rendering
// ══════════════════════════════════════════════════════════

#[test]
fn render_asm_lists_every_directive() {
    let asm = fixture::render_asm();
    let lines: Vec<&str> = asm.lines().collect();
    assert_eq!(
        lines,
        vec![
            ".insn 8, 0x2000200940003f",
            ".insn 6, 0x10000000021f",
            ".insn 4, 0x84f940b",
            ".insn 2, 0xb8f2",
            ".insn 4, 0x84f940b",
            ".insn 2, 0xb8f2",
        ]
    );
}

// ══════════════════════════════════════════════════════════
// 4. Decode round-trip
// ══════════════════════════════════════════════════════════

#[test]
fn directives_round_trip_to_mnemonics() {
    let expected = [
        "custom64",
        "xqci.e.li",
        "xqci.insbi",
        "cm.push",
        "xqci.insbi",
        "cm.push",
    ];
    for (directive, mnemonic) in DIRECTIVES.iter().zip(expected) {
        let insn = decode(directive.width, directive.bits)
            .unwrap_or_else(|e| panic!("fixture directive must decode: {e}"));
        let text = insn.to_string();
        assert!(
            text.starts_with(mnemonic),
            "expected '{mnemonic}', got '{text}'"
        );
    }
}
