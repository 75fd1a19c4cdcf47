//! Minimal ELF64 section lookup for self-verifying binaries.
//!
//! This is deliberately not a general ELF parser: no symbols, no
//! relocations, no dynamic section. The only query it answers is "where
//! does the section with this name live in the file", which is all a
//! self-integrity check needs.
//!
//! The image handed to this crate is always the running process's own
//! on-disk file, never untrusted input. Parsing is still bounds-checked
//! so that a corrupted self-image surfaces as an error instead of
//! undefined behavior.

mod constants;
mod file;
mod header;

pub use constants::*;
pub use file::*;
pub use header::*;

use thiserror::Error;

/// ELF parsing errors.
#[derive(Error, Debug)]
pub enum ElfError {
    #[error("ELF data too small")]
    TooSmall,
    #[error("Invalid ELF magic number")]
    InvalidMagic,
    #[error("Unsupported ELF class: {0}")]
    UnsupportedClass(u8),
    #[error("ELF data encoding does not match host endianness")]
    EndianMismatch,
    #[error("Section header out of bounds")]
    SectionOutOfBounds,
    #[error("Section name string out of bounds")]
    StringOutOfBounds,
}

pub type Result<T> = std::result::Result<T, ElfError>;
