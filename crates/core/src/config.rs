//! Configuration for disassembly and filtering.
//!
//! This module defines the configuration structures used to parameterize
//! output rendering and listing rewriting. It provides:
//! 1. **Defaults:** Baseline constants (the undecoded-line marker).
//! 2. **Structures:** Hierarchical config for the disassembler and the filter.
//!
//! Configuration is supplied as JSON by the CLI (`--config`) or via
//! `Config::default()`.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Marker a disassembler prints on lines it could not decode.
    pub const MARKER: &str = "<unknown>";
}

/// Root configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Disassembler output options.
    pub disasm: DisasmConfig,
    /// Listing-filter options.
    pub filter: FilterConfig,
}

/// Disassembler output options.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DisasmConfig {
    /// Print raw `x{n}` register names instead of ABI names.
    pub numeric_regs: bool,
}

/// Listing-filter options.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Needle that marks an undecoded listing line.
    pub marker: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            marker: defaults::MARKER.to_string(),
        }
    }
}
