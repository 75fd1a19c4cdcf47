//! binsig - self-integrity verification for ELF binaries.
//!
//! A binary linked with this crate carries a reserved 64-byte `.hashsig`
//! section. At build time an external signer writes the SHA-512 digest of
//! the binary (computed with the `.hashsig` bytes themselves excluded)
//! into that section. At runtime the binary maps its own on-disk image,
//! recomputes the digest with the same exclusion, and compares the two.
//!
//! # Example
//!
//! ```ignore
//! use binsig::{Outcome, reference_digest, self_digest, verify};
//!
//! let computed = self_digest()?;
//! match verify(&computed, &reference_digest()) {
//!     Outcome::Match => println!("ok"),
//!     Outcome::Mismatch => println!("tampered"),
//! }
//! ```

// Re-export from sub-crates
pub use binsig_elf::{ElfError, SectionRange, find_section};

mod digest;
mod error;
mod image;
mod sigslot;
mod verify;

pub use digest::*;
pub use error::*;
pub use image::*;
pub use sigslot::*;
pub use verify::*;
