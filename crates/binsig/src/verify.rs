//! One verification pass: map, locate, digest, compare.

use std::env;
use std::path::Path;

use tracing::debug;

use binsig_elf::find_section;

use crate::digest::{DIGEST_LEN, ExclusionRange, digest_with_exclusion};
use crate::image::MappedImage;
use crate::sigslot::SIGNATURE_SECTION;
use crate::{Error, Result};

/// Result of comparing a computed digest against the embedded reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Match,
    Mismatch,
}

/// Compute the digest of the executable image at `path`, excluding its
/// signature section if present.
///
/// The mapping lives only for the duration of this call and is released
/// on every exit path.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, stat'ed, or mapped, if
/// the image is not a well-formed native ELF64 container, or if the
/// signature section's span does not fit inside the file.
pub fn compute_digest(path: &Path) -> Result<[u8; DIGEST_LEN]> {
    let image = MappedImage::open(path)?;
    let exclusion = signature_range(&image)?;
    Ok(digest_with_exclusion(&image, exclusion))
}

/// Compute the digest of the running process's own on-disk image.
///
/// # Errors
///
/// As [`compute_digest`], plus an error if the executable's path cannot
/// be resolved.
pub fn self_digest() -> Result<[u8; DIGEST_LEN]> {
    let path = env::current_exe().map_err(Error::SelfPath)?;
    compute_digest(&path)
}

/// Byte-for-byte comparison of computed and reference digests.
#[must_use]
pub fn verify(computed: &[u8; DIGEST_LEN], reference: &[u8; DIGEST_LEN]) -> Outcome {
    if computed == reference {
        Outcome::Match
    } else {
        Outcome::Mismatch
    }
}

/// Locate the signature section and validate its span against the image.
///
/// A missing section yields `None` and the whole file gets hashed. A
/// present section whose span does not fit the file means the image is
/// corrupt and is reported as an error.
fn signature_range(image: &[u8]) -> Result<Option<ExclusionRange>> {
    let Some(range) = find_section(image, SIGNATURE_SECTION)? else {
        debug!(
            section = SIGNATURE_SECTION,
            "signature section absent, hashing entire file"
        );
        return Ok(None);
    };

    let len = image.len() as u64;
    let fits = range
        .offset
        .checked_add(range.size)
        .is_some_and(|end| end <= len);
    if !fits {
        return Err(Error::RangeOutOfBounds {
            offset: range.offset,
            size: range.size,
            len,
        });
    }

    debug!(
        offset = range.offset,
        size = range.size,
        "excluding signature section"
    );
    Ok(Some(ExclusionRange {
        offset: range.offset as usize,
        size: range.size as usize,
    }))
}
