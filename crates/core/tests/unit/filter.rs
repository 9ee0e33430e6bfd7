//! Listing-Filter Tests.
//!
//! Verifies that undecoded listing lines are rewritten in place, that the
//! prefix (address and byte field) is preserved verbatim, and that every
//! malformed or undecodable line passes through untouched.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use rstest::rstest;

use xqdis_core::config::Config;
use xqdis_core::filter::{rewrite_line, run};

fn default_config() -> Config {
    Config::default()
}

// ══════════════════════════════════════════════════════════
// 1. Rewriting
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(
    "      10: b8f2          <unknown>",
    "      10: b8f2          cm.push {ra, s0-s11}, -0"
)]
#[case(
    "      14: 084f940b      <unknown>",
    "      14: 084f940b      xqci.insbi s0, 0x1f, 0x4, 0x4"
)]
#[case(
    "       8: 021f 0000 1000  <unknown>",
    "       8: 021f 0000 1000  xqci.e.li tp, 0x10000000"
)]
#[case(
    "       0: 0940003f 00200020      <unknown>",
    "       0: 0940003f 00200020      custom64"
)]
fn rewrites_undecoded_lines(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(rewrite_line(line, &default_config()), expected);
}

#[test]
fn rewrite_preserves_prefix_verbatim() {
    let line = "\t4:\tb8f2    \t<unknown>";
    assert_eq!(
        rewrite_line(line, &default_config()),
        "\t4:\tb8f2    \tcm.push {ra, s0-s11}, -0"
    );
}

// ══════════════════════════════════════════════════════════
// 2. Pass-through
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("fixture.o:\tfile format elf32-littleriscv")]
#[case("0000000000000000 <main>:")]
#[case("      18: 1141          addi sp, sp, -16")]
#[case("")]
fn lines_without_marker_pass_through(#[case] line: &str) {
    assert_eq!(rewrite_line(line, &default_config()), line);
}

#[rstest]
#[case("      1c: zzzz          <unknown>")] // non-hex group
#[case("      1c: 0b 94         <unknown>")] // bad group length
#[case("      1c: ffff          <unknown>")] // reserved length bits
#[case("      1c: 021f 0000     <unknown>")] // parcel order contradicts width
#[case("      1c:               <unknown>")] // empty byte field
#[case("b8f2 <unknown>")] // no address separator
fn unparseable_lines_pass_through(#[case] line: &str) {
    assert_eq!(rewrite_line(line, &default_config()), line);
}

// ══════════════════════════════════════════════════════════
// 3. Configuration
// ══════════════════════════════════════════════════════════

#[test]
fn custom_marker() {
    let mut config = Config::default();
    config.filter.marker = "<undecoded>".to_string();

    assert_eq!(
        rewrite_line("  10: b8f2  <undecoded>", &config),
        "  10: b8f2  cm.push {ra, s0-s11}, -0"
    );
    // The default marker is no longer special.
    let line = "  10: b8f2  <unknown>";
    assert_eq!(rewrite_line(line, &config), line);
}

#[test]
fn numeric_register_names() {
    let mut config = Config::default();
    config.disasm.numeric_regs = true;

    assert_eq!(
        rewrite_line("  14: 084f940b  <unknown>", &config),
        "  14: 084f940b  xqci.insbi x8, 0x1f, 0x4, 0x4"
    );
}

// ══════════════════════════════════════════════════════════
// 4. Streaming
// ══════════════════════════════════════════════════════════

#[test]
fn run_rewrites_a_whole_listing() {
    let listing = "\
0000000000000000 <main>:
       0: 0940003f 00200020      <unknown>
       8: 021f 0000 1000  <unknown>
      14: 084f940b      <unknown>
      18: b8f2          <unknown>
";
    let expected = "\
0000000000000000 <main>:
       0: 0940003f 00200020      custom64
       8: 021f 0000 1000  xqci.e.li tp, 0x10000000
      14: 084f940b      xqci.insbi s0, 0x1f, 0x4, 0x4
      18: b8f2          cm.push {ra, s0-s11}, -0
";

    let mut output = Vec::new();
    run(Cursor::new(listing), &mut output, &default_config())
        .unwrap_or_else(|e| panic!("stream rewrite failed: {e}"));
    assert_eq!(String::from_utf8_lossy(&output), expected);
}
