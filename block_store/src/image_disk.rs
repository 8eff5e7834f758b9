//! # Image Disk
//!
//! A read-only block device backed by a disk image file on the host.

use crate::block_device::{check_read, BlockDevice, BlockError, BLOCK_SIZE};
use log::{debug, warn};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// File-backed block device
///
/// The image is opened read-only. Its block count is the file length divided
/// by BLOCK_SIZE; a trailing partial block is not addressable.
#[derive(Debug)]
pub struct ImageDisk {
    file: File,
    path: PathBuf,
    block_count: u64,
}

impl ImageDisk {
    /// Opens an existing image file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BlockError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        let block_count = len / BLOCK_SIZE as u64;

        if len % BLOCK_SIZE as u64 != 0 {
            warn!(
                "image {} is {} bytes, ignoring trailing {} bytes",
                path.display(),
                len,
                len % BLOCK_SIZE as u64
            );
        }
        debug!("opened image {} ({} blocks)", path.display(), block_count);

        Ok(Self {
            file,
            path: path.to_path_buf(),
            block_count,
        })
    }

    /// Path of the backing image
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlockDevice for ImageDisk {
    fn block_count(&self) -> u64 {
        self.block_count
    }

    fn read_block(&mut self, block_idx: u64, buffer: &mut [u8]) -> Result<(), BlockError> {
        check_read(block_idx, self.block_count, buffer)?;
        self.file
            .seek(SeekFrom::Start(block_idx * BLOCK_SIZE as u64))?;
        self.file.read_exact(&mut buffer[..BLOCK_SIZE])?;
        Ok(())
    }
}
