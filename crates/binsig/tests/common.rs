//! Shared fixture builder: synthetic native ELF64 images with real
//! section bytes on disk.

use binsig_elf::{EHDR64_SIZE, ELF_CLASS_64, ELF_DATA_NATIVE, ELF_MAGIC, SHDR64_SIZE};

/// A named section whose bytes are physically present in the image.
pub struct FixtureSection {
    pub name: &'static str,
    pub data: Vec<u8>,
}

/// Append one ELF64 section header to `buf`.
fn push_shdr(buf: &mut Vec<u8>, name: u32, offset: u64, size: u64) {
    buf.extend_from_slice(&name.to_ne_bytes());
    buf.extend_from_slice(&0u32.to_ne_bytes()); // sh_type
    buf.extend_from_slice(&0u64.to_ne_bytes()); // flags
    buf.extend_from_slice(&0u64.to_ne_bytes()); // addr
    buf.extend_from_slice(&offset.to_ne_bytes());
    buf.extend_from_slice(&size.to_ne_bytes());
    buf.extend_from_slice(&0u32.to_ne_bytes()); // link
    buf.extend_from_slice(&0u32.to_ne_bytes()); // info
    buf.extend_from_slice(&0u64.to_ne_bytes()); // addralign
    buf.extend_from_slice(&0u64.to_ne_bytes()); // entsize
}

/// Build an ELF64 image whose section header table describes the given
/// sections, with each section's bytes physically present after the
/// table. Returns the image and the file offset of each section's data,
/// in input order.
#[must_use]
pub fn build_image(sections: &[FixtureSection]) -> (Vec<u8>, Vec<u64>) {
    // String table: leading NUL, then each name, then ".shstrtab".
    let mut strtab = vec![0u8];
    let mut name_offsets = Vec::new();
    for section in sections {
        name_offsets.push(strtab.len() as u32);
        strtab.extend_from_slice(section.name.as_bytes());
        strtab.push(0);
    }
    let shstrtab_name = strtab.len() as u32;
    strtab.extend_from_slice(b".shstrtab");
    strtab.push(0);

    let strtab_offset = EHDR64_SIZE;
    let shoff = strtab_offset + strtab.len();
    let shnum = sections.len() + 2; // null entry + sections + .shstrtab
    let data_start = shoff + shnum * SHDR64_SIZE;

    let mut data_offsets = Vec::new();
    let mut cursor = data_start as u64;
    for section in sections {
        data_offsets.push(cursor);
        cursor += section.data.len() as u64;
    }

    let mut buf = Vec::new();
    buf.extend_from_slice(&ELF_MAGIC);
    buf.push(ELF_CLASS_64);
    buf.push(ELF_DATA_NATIVE);
    buf.push(1); // version
    buf.push(0); // abi
    buf.push(0); // abi version
    buf.extend_from_slice(&[0u8; 7]); // padding
    buf.extend_from_slice(&2u16.to_ne_bytes()); // e_type (EXEC)
    buf.extend_from_slice(&0u16.to_ne_bytes()); // machine
    buf.extend_from_slice(&1u32.to_ne_bytes()); // version
    buf.extend_from_slice(&0u64.to_ne_bytes()); // entry
    buf.extend_from_slice(&0u64.to_ne_bytes()); // phoff
    buf.extend_from_slice(&(shoff as u64).to_ne_bytes());
    buf.extend_from_slice(&0u32.to_ne_bytes()); // flags
    buf.extend_from_slice(&(EHDR64_SIZE as u16).to_ne_bytes());
    buf.extend_from_slice(&0u16.to_ne_bytes()); // phentsize
    buf.extend_from_slice(&0u16.to_ne_bytes()); // phnum
    buf.extend_from_slice(&(SHDR64_SIZE as u16).to_ne_bytes());
    buf.extend_from_slice(&(shnum as u16).to_ne_bytes());
    buf.extend_from_slice(&((shnum - 1) as u16).to_ne_bytes()); // shstrndx
    assert_eq!(buf.len(), EHDR64_SIZE);

    buf.extend_from_slice(&strtab);

    push_shdr(&mut buf, 0, 0, 0); // null entry
    for ((section, name_offset), data_offset) in
        sections.iter().zip(&name_offsets).zip(&data_offsets)
    {
        push_shdr(&mut buf, *name_offset, *data_offset, section.data.len() as u64);
    }
    push_shdr(
        &mut buf,
        shstrtab_name,
        strtab_offset as u64,
        strtab.len() as u64,
    );
    assert_eq!(buf.len(), data_start);

    for section in sections {
        buf.extend_from_slice(&section.data);
    }

    (buf, data_offsets)
}
