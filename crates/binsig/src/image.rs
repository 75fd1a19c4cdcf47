//! Read-only mapping of an executable image.

use std::ffi::c_void;
use std::fs::File;
use std::num::NonZeroUsize;
use std::ops::Deref;
use std::path::Path;
use std::ptr::NonNull;
use std::slice;

use nix::sys::mman::{MapFlags, ProtFlags, mmap, munmap};

use crate::{Error, Result};

/// A file mapped read-only for the duration of one verification pass.
///
/// The descriptor used to establish the mapping is closed before `open`
/// returns; the mapping itself is released in `Drop`, so every exit path
/// unmaps exactly once.
pub struct MappedImage {
    ptr: NonNull<c_void>,
    len: usize,
}

impl MappedImage {
    /// Open `path` and map its entire content `PROT_READ`/`MAP_PRIVATE`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the failing operation if the file cannot
    /// be opened, stat'ed, or mapped. A zero-length file cannot be
    /// mapped and reports [`Error::EmptyFile`].
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(Error::Open)?;
        let size = file.metadata().map_err(Error::Stat)?.len();
        let len = NonZeroUsize::new(size as usize).ok_or(Error::EmptyFile)?;

        let ptr = unsafe {
            mmap(
                None,
                len,
                ProtFlags::PROT_READ,
                MapFlags::MAP_PRIVATE,
                &file,
                0,
            )?
        };

        // `file` drops here; the mapping keeps the pages alive.
        Ok(Self {
            ptr,
            len: len.get(),
        })
    }

    /// The mapped bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr().cast::<u8>(), self.len) }
    }

    /// Length of the mapping (equals the file size at open time).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for MappedImage {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes()
    }
}

impl Drop for MappedImage {
    fn drop(&mut self) {
        unsafe {
            let _ = munmap(self.ptr, self.len);
        }
    }
}

// MappedImage is Send but not Sync (contains raw pointer)
unsafe impl Send for MappedImage {}
