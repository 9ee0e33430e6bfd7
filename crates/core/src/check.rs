//! Artifact Verification.
//!
//! After a toolchain assembles the smoke program, the built artifact must
//! contain the six directive encodings verbatim and back to back. This
//! module locates that image: in the text sections when the artifact is a
//! readable ELF, or by scanning the whole file otherwise.

use object::{File, Object, ObjectSection, SectionKind};
use tracing::debug;

use crate::error::CheckError;
use crate::fixture::{self, DIRECTIVES};

/// Where the fixture image was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Byte offset of the image, relative to the named section (ELF) or
    /// to the start of the file (raw scan).
    pub offset: usize,
    /// Section the image was found in, when the artifact is an ELF.
    pub section: Option<String>,
}

/// Checks a built artifact for the fixture byte image.
///
/// # Errors
///
/// [`CheckError::DirectiveMissing`] when some directive's encoding appears
/// nowhere in the artifact; [`CheckError::NotContiguous`] when every
/// directive appears but the directives were not placed back to back.
pub fn check_bytes(data: &[u8]) -> Result<Report, CheckError> {
    let image = fixture::image();

    if let Ok(elf) = File::parse(data) {
        for section in elf.sections() {
            if section.kind() != SectionKind::Text {
                continue;
            }
            let Ok(contents) = section.data() else {
                continue;
            };
            if let Some(offset) = find(contents, &image) {
                return Ok(Report {
                    offset,
                    section: section.name().ok().map(String::from),
                });
            }
        }
        debug!("image not in any text section, diagnosing over the whole file");
        return Err(diagnose(data));
    }

    match find(data, &image) {
        Some(offset) => Ok(Report {
            offset,
            section: None,
        }),
        None => Err(diagnose(data)),
    }
}

/// Names the first directive whose encoding is absent, or reports a
/// contiguity failure when each is individually present.
fn diagnose(data: &[u8]) -> CheckError {
    for (index, directive) in DIRECTIVES.iter().enumerate() {
        if find(data, &directive.encoding()).is_none() {
            return CheckError::DirectiveMissing {
                index,
                width: directive.width,
                bits: directive.bits,
            };
        }
    }
    CheckError::NotContiguous
}

/// First position of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
