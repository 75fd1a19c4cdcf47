//! ELF specification constants.

// ELF identification
pub const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];
pub const ELF_CLASS_64: u8 = 2;
pub const ELF_DATA_LSB: u8 = 1;
pub const ELF_DATA_MSB: u8 = 2;

/// Data encoding of the host, as an `e_ident[EI_DATA]` value.
#[cfg(target_endian = "little")]
pub const ELF_DATA_NATIVE: u8 = ELF_DATA_LSB;
#[cfg(target_endian = "big")]
pub const ELF_DATA_NATIVE: u8 = ELF_DATA_MSB;

// Fixed ELF64 layout sizes
pub const EHDR64_SIZE: usize = 64;
pub const SHDR64_SIZE: usize = 64;

/// Reserved "no section" index (`SHN_UNDEF`).
pub const SHN_UNDEF: u16 = 0;
