//! Verifier errors.

use thiserror::Error;

/// Verification errors.
///
/// The I/O variants name the failing operation; that name is what ends
/// up in the diagnostic on stderr.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot resolve own executable path: {0}")]
    SelfPath(#[source] std::io::Error),
    #[error("open failed: {0}")]
    Open(#[source] std::io::Error),
    #[error("stat failed: {0}")]
    Stat(#[source] std::io::Error),
    #[error("cannot map zero-length file")]
    EmptyFile,
    #[error("mmap failed: {0}")]
    Map(#[from] nix::Error),
    #[error("ELF error: {0}")]
    Elf(#[from] binsig_elf::ElfError),
    #[error("section range [{offset:#x}, +{size:#x}) exceeds file length {len:#x}")]
    RangeOutOfBounds { offset: u64, size: u64, len: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
