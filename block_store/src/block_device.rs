/// Block device abstraction for disk images
///
/// Provides a minimal read-only block device API over fixed-size blocks.
/// The browser never writes; `RamDisk` still accepts writes so that tests and
/// demos can lay out an image in memory.
use std::io;
use thiserror::Error;

/// Fixed block size of the disk image format (512 bytes)
pub const BLOCK_SIZE: usize = 512;

/// One block worth of bytes
pub type Block = [u8; BLOCK_SIZE];

/// Block device errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BlockError {
    /// Block index out of bounds
    #[error("block {block} out of bounds (device has {count} blocks)")]
    OutOfBounds { block: u64, count: u64 },

    /// Caller buffer smaller than one block
    #[error("invalid block size")]
    InvalidSize,

    /// Underlying storage failure
    #[error("{0}")]
    Io(io::ErrorKind),
}

impl From<io::Error> for BlockError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.kind())
    }
}

/// Block device trait
///
/// Implementers provide block-level reads of BLOCK_SIZE byte blocks.
pub trait BlockDevice {
    /// Get the total number of blocks on this device
    fn block_count(&self) -> u64;

    /// Get the block size (should always be BLOCK_SIZE)
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Read a block into the provided buffer
    ///
    /// # Arguments
    /// * `block_idx` - Block index to read
    /// * `buffer` - Buffer to read into (must be at least BLOCK_SIZE bytes)
    ///
    /// # Errors
    /// Returns `BlockError::OutOfBounds` if block_idx >= block_count()
    /// Returns `BlockError::Io` on storage failure
    /// Returns `BlockError::InvalidSize` if buffer is too small
    fn read_block(&mut self, block_idx: u64, buffer: &mut [u8]) -> Result<(), BlockError>;
}

impl<D: BlockDevice + ?Sized> BlockDevice for &mut D {
    fn block_count(&self) -> u64 {
        (**self).block_count()
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn read_block(&mut self, block_idx: u64, buffer: &mut [u8]) -> Result<(), BlockError> {
        (**self).read_block(block_idx, buffer)
    }
}

/// Reads one block into a fresh buffer
pub fn read_block<D: BlockDevice + ?Sized>(
    device: &mut D,
    block_idx: u64,
) -> Result<Block, BlockError> {
    let mut block = [0u8; BLOCK_SIZE];
    device.read_block(block_idx, &mut block)?;
    Ok(block)
}

/// Checks bounds and buffer size before a read
pub(crate) fn check_read(block_idx: u64, count: u64, buffer: &[u8]) -> Result<(), BlockError> {
    if block_idx >= count {
        return Err(BlockError::OutOfBounds {
            block: block_idx,
            count,
        });
    }
    if buffer.len() < BLOCK_SIZE {
        return Err(BlockError::InvalidSize);
    }
    Ok(())
}

/// RAM disk - an in-memory block device
///
/// Useful for testing and for building sample images.
#[derive(Debug, Clone)]
pub struct RamDisk {
    blocks: Vec<Block>,
}

impl RamDisk {
    /// Create a new zero-filled RAM disk with the specified number of blocks
    pub fn new(block_count: usize) -> Self {
        Self {
            blocks: vec![[0u8; BLOCK_SIZE]; block_count],
        }
    }

    /// Create a RAM disk from a raw image
    ///
    /// A trailing partial block is zero-padded.
    pub fn from_image(image: &[u8]) -> Self {
        let blocks = image
            .chunks(BLOCK_SIZE)
            .map(|chunk| {
                let mut block = [0u8; BLOCK_SIZE];
                block[..chunk.len()].copy_from_slice(chunk);
                block
            })
            .collect();
        Self { blocks }
    }

    /// Write a block from the provided buffer
    pub fn write_block(&mut self, block_idx: u64, buffer: &[u8]) -> Result<(), BlockError> {
        check_read(block_idx, self.block_count(), buffer)?;
        self.blocks[block_idx as usize].copy_from_slice(&buffer[..BLOCK_SIZE]);
        Ok(())
    }

    /// Flattens the disk back into a raw image
    pub fn to_image(&self) -> Vec<u8> {
        self.blocks.iter().flat_map(|b| b.iter().copied()).collect()
    }
}

impl BlockDevice for RamDisk {
    fn block_count(&self) -> u64 {
        self.blocks.len() as u64
    }

    fn read_block(&mut self, block_idx: u64, buffer: &mut [u8]) -> Result<(), BlockError> {
        check_read(block_idx, self.block_count(), buffer)?;
        buffer[..BLOCK_SIZE].copy_from_slice(&self.blocks[block_idx as usize]);
        Ok(())
    }
}
