//! Error definitions for the Xqci toolchain library.
//!
//! This module defines the failure types surfaced by the library. It provides:
//! 1. **Decode errors:** Unsupported widths, short parcel runs, and unmatched encodings.
//! 2. **Emission errors:** Patterns that do not fit their width and misaligned placement.
//! 3. **Line errors:** Malformed listing lines seen by the objdump filter.
//! 4. **Check errors:** Fixture byte patterns missing from a built artifact.

use thiserror::Error;

use crate::isa::insn::InsnWidth;

/// Errors produced while decoding a custom instruction encoding.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The byte count is none of the four supported widths (2, 4, 6, 8).
    #[error("unsupported instruction width: {0} bytes")]
    UnsupportedWidth(usize),

    /// Fewer 16-bit parcels were supplied than the width requires.
    #[error("truncated {width} encoding: got {got} parcels")]
    Truncated {
        /// Width the caller claimed.
        width: InsnWidth,
        /// Parcels actually supplied.
        got: usize,
    },

    /// The low parcel's length-encoding bits disagree with the claimed width.
    #[error("width mismatch: claimed {claimed}, length bits say {encoded:?}")]
    WidthMismatch {
        /// Width derived from the parcel count.
        claimed: InsnWidth,
        /// Width implied by the standard length-encoding bits, if any.
        encoded: Option<InsnWidth>,
    },

    /// The bits match no custom encoding of the given width.
    #[error("unrecognized {width} encoding {bits:#x}")]
    Unrecognized {
        /// Claimed instruction width.
        width: InsnWidth,
        /// Reassembled encoding value.
        bits: u64,
    },
}

/// Errors produced by the raw-directive emission buffer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EmitError {
    /// The bit pattern has set bits above the requested width.
    #[error("pattern {bits:#x} does not fit in a {width} encoding")]
    Overflow {
        /// Requested instruction width.
        width: InsnWidth,
        /// Offending bit pattern.
        bits: u64,
    },

    /// The emission offset is not aligned to a 16-bit parcel boundary.
    #[error("emission offset {offset:#x} is not parcel-aligned")]
    Misaligned {
        /// Offset at which emission was attempted.
        offset: usize,
    },
}

/// Errors produced while parsing one line of a disassembler listing.
///
/// The filter treats every variant as "leave the line untouched"; these
/// exist for diagnostics, not control flow visible to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LineError {
    /// No `addr:` separator before the undecoded marker.
    #[error("no address separator before the marker")]
    NoAddress,

    /// The byte field between the address and the marker is empty.
    #[error("empty encoding field")]
    EmptyEncoding,

    /// A hex group is not 4 or 8 digits of hexadecimal.
    #[error("bad hex group `{0}`")]
    BadHexGroup(String),

    /// The reassembled encoding failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Errors produced while checking a built artifact for the fixture image.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckError {
    /// One directive's encoding appears nowhere in the artifact.
    #[error("directive {index} ({width}, {bits:#x}) not found in artifact")]
    DirectiveMissing {
        /// Zero-based index into the fixture directive table.
        index: usize,
        /// Width of the missing directive.
        width: InsnWidth,
        /// Bit pattern of the missing directive.
        bits: u64,
    },

    /// Every directive appears somewhere, but not as one contiguous image.
    #[error("all directives present but not contiguous")]
    NotContiguous,
}
