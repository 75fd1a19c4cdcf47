//! Exclusion-aware SHA-512 digest.

use sha2::{Digest, Sha512};

/// Digest length in bytes (SHA-512).
pub const DIGEST_LEN: usize = 64;

/// Chunk size for the streaming pass. Only affects where the hash input
/// is split, never the digest value.
const CHUNK_SIZE: usize = 1024;

/// Contiguous byte span removed from the hash input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExclusionRange {
    pub offset: usize,
    pub size: usize,
}

impl ExclusionRange {
    /// One past the last excluded offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset.saturating_add(self.size)
    }
}

/// SHA-512 over `image` with `exclusion` removed from the input.
///
/// Streams the image in fixed-size chunks. A chunk that would straddle
/// the start of the excluded span is clipped so the hash input stops
/// exactly at the span start; the cursor then jumps over the span in one
/// step. The result equals hashing `image` with the excluded bytes
/// physically deleted. `None` and a zero-size range both hash the entire
/// image.
#[must_use]
pub fn digest_with_exclusion(image: &[u8], exclusion: Option<ExclusionRange>) -> [u8; DIGEST_LEN] {
    // A zero-size range excludes nothing; dropping it here keeps the skip
    // rule below from re-triggering at the span start without advancing.
    let bounds = exclusion
        .filter(|range| range.size > 0)
        .map(|range| (range.offset, range.end()));

    let mut hasher = Sha512::new();
    let mut pos = 0;
    while pos < image.len() {
        // At or inside the excluded span: jump past it without hashing.
        if let Some((start, end)) = bounds {
            if pos >= start && pos < end {
                pos = end;
                continue;
            }
        }

        let mut chunk = CHUNK_SIZE.min(image.len() - pos);
        // Clip a chunk that would straddle the span start.
        if let Some((start, _)) = bounds {
            if pos < start {
                chunk = chunk.min(start - pos);
            }
        }

        hasher.update(&image[pos..pos + chunk]);
        pos += chunk;
    }

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&hasher.finalize());
    digest
}
