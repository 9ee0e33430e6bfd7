//! Objdump Listing Filter.
//!
//! A disassembler without vendor-extension support prints an `<unknown>`
//! marker for encodings it cannot name, leaving only the raw byte groups.
//! This module rewrites such lines in place: the byte groups are parsed
//! back into parcels, decoded, and the marker is replaced with the real
//! mnemonic. Everything else — and every line that fails to parse or
//! decode — passes through untouched.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::Config;
use crate::error::LineError;
use crate::isa::decode::decode_parcels;
use crate::isa::disasm::disassemble;
use crate::isa::insn::InsnWidth;

/// Rewrites one listing line.
///
/// Lines without the configured marker are returned unchanged. Lines with
/// the marker are expected to look like `addr: <hex groups> <marker>`;
/// when parsing or decoding fails the line is also returned unchanged and
/// the reason is logged at debug level.
pub fn rewrite_line(line: &str, config: &Config) -> String {
    let Some(marker_idx) = line.find(config.filter.marker.as_str()) else {
        return line.to_string();
    };
    match rewrite(line, marker_idx, config) {
        Ok(rewritten) => rewritten,
        Err(why) => {
            debug!(%why, line, "leaving listing line untouched");
            line.to_string()
        }
    }
}

/// Streams `input` to `output`, rewriting each line.
///
/// # Errors
///
/// Propagates read and write failures; rewrite failures never surface
/// here (the affected line passes through).
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, config: &Config) -> io::Result<()> {
    for line in input.lines() {
        writeln!(output, "{}", rewrite_line(&line?, config))?;
    }
    Ok(())
}

/// Parses and decodes the byte field, then splices the mnemonic in.
fn rewrite(line: &str, marker_idx: usize, config: &Config) -> Result<String, LineError> {
    let head = &line[..marker_idx];
    let colon = head.find(':').ok_or(LineError::NoAddress)?;
    let (bytes, parcels) = parse_groups(&head[colon + 1..])?;
    let width = InsnWidth::from_bytes(bytes)?;
    let insn = decode_parcels(width, &parcels)?;
    Ok(format!("{head}{}", disassemble(&insn, &config.disasm)))
}

/// Parses whitespace-separated hex groups into listing-order parcels.
///
/// An 8-hex-digit group contributes two parcels (high half first, as
/// printed); a 4-digit group contributes one. Returns the total byte
/// count alongside the parcels.
fn parse_groups(field: &str) -> Result<(usize, Vec<u16>), LineError> {
    let mut parcels = Vec::new();
    let mut bytes = 0;
    for group in field.split_whitespace() {
        let bad = || LineError::BadHexGroup(group.to_string());
        match group.len() {
            8 => {
                parcels.push(u16::from_str_radix(&group[..4], 16).map_err(|_| bad())?);
                parcels.push(u16::from_str_radix(&group[4..], 16).map_err(|_| bad())?);
                bytes += 4;
            }
            4 => {
                parcels.push(u16::from_str_radix(group, 16).map_err(|_| bad())?);
                bytes += 2;
            }
            _ => return Err(bad()),
        }
    }
    if parcels.is_empty() {
        return Err(LineError::EmptyEncoding);
    }
    Ok((bytes, parcels))
}
