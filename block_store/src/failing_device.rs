//! # Failing Block Device
//!
//! A BlockDevice wrapper that injects read errors.
//! Lets tests drive the browser's I/O error paths without a damaged image.

use crate::block_device::{BlockDevice, BlockError};
use std::io;

/// When injected failures happen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Never fail (passthrough)
    Never,
    /// Every read fails once this many reads have been attempted
    AfterReads(usize),
    /// Reads of these blocks fail
    OnBlocks(Vec<u64>),
}

/// Wrapper around a BlockDevice that fails reads according to a policy
pub struct FailingBlockDevice<D: BlockDevice> {
    inner: D,
    policy: FailurePolicy,
    error: BlockError,
    attempts: usize,
    failures: usize,
}

impl<D: BlockDevice> FailingBlockDevice<D> {
    /// Wraps `inner`; injected failures are `BlockError::Io(ErrorKind::Other)`
    pub fn new(inner: D, policy: FailurePolicy) -> Self {
        Self {
            inner,
            policy,
            error: BlockError::Io(io::ErrorKind::Other),
            attempts: 0,
            failures: 0,
        }
    }

    /// Uses `error` for injected failures
    pub fn with_error(mut self, error: BlockError) -> Self {
        self.error = error;
        self
    }

    /// Number of reads that were failed on purpose
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Get the underlying device (for inspection)
    pub fn inner(&self) -> &D {
        &self.inner
    }

    fn should_fail(&self, block_idx: u64) -> bool {
        match &self.policy {
            FailurePolicy::Never => false,
            FailurePolicy::AfterReads(n) => self.attempts >= *n,
            FailurePolicy::OnBlocks(blocks) => blocks.contains(&block_idx),
        }
    }
}

impl<D: BlockDevice> BlockDevice for FailingBlockDevice<D> {
    fn block_count(&self) -> u64 {
        self.inner.block_count()
    }

    fn read_block(&mut self, block_idx: u64, buffer: &mut [u8]) -> Result<(), BlockError> {
        let fail = self.should_fail(block_idx);
        self.attempts += 1;

        if fail {
            self.failures += 1;
            return Err(self.error);
        }
        self.inner.read_block(block_idx, buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RamDisk, BLOCK_SIZE};

    const IO_FAILURE: BlockError = BlockError::Io(io::ErrorKind::Other);

    #[test]
    fn test_never_passes_through() {
        let mut failing = FailingBlockDevice::new(RamDisk::new(4), FailurePolicy::Never);
        let mut buffer = [0u8; BLOCK_SIZE];

        for block in 0..4 {
            assert!(failing.read_block(block, &mut buffer).is_ok());
        }
        assert_eq!(failing.failures(), 0);
    }

    #[test]
    fn test_after_reads() {
        let mut failing = FailingBlockDevice::new(RamDisk::new(10), FailurePolicy::AfterReads(2));
        let mut buffer = [0u8; BLOCK_SIZE];

        assert!(failing.read_block(0, &mut buffer).is_ok());
        assert!(failing.read_block(1, &mut buffer).is_ok());
        assert_eq!(failing.read_block(0, &mut buffer), Err(IO_FAILURE));
        assert_eq!(failing.read_block(1, &mut buffer), Err(IO_FAILURE));
        assert_eq!(failing.failures(), 2);
    }

    #[test]
    fn test_on_blocks() {
        let mut failing =
            FailingBlockDevice::new(RamDisk::new(10), FailurePolicy::OnBlocks(vec![2, 5]));
        let mut buffer = [0u8; BLOCK_SIZE];

        assert!(failing.read_block(0, &mut buffer).is_ok());
        assert_eq!(failing.read_block(2, &mut buffer), Err(IO_FAILURE));
        assert!(failing.read_block(3, &mut buffer).is_ok());
        assert_eq!(failing.read_block(5, &mut buffer), Err(IO_FAILURE));
        assert_eq!(failing.read_block(2, &mut buffer), Err(IO_FAILURE));
    }

    #[test]
    fn test_custom_error() {
        let mut failing = FailingBlockDevice::new(RamDisk::new(3), FailurePolicy::OnBlocks(vec![1]))
            .with_error(BlockError::Io(io::ErrorKind::UnexpectedEof));
        let mut buffer = [0u8; BLOCK_SIZE];

        assert_eq!(
            failing.read_block(1, &mut buffer),
            Err(BlockError::Io(io::ErrorKind::UnexpectedEof))
        );
    }

    #[test]
    fn test_inner_errors_pass_through() {
        let mut failing = FailingBlockDevice::new(RamDisk::new(1), FailurePolicy::Never);
        let mut buffer = [0u8; BLOCK_SIZE];

        assert!(matches!(
            failing.read_block(9, &mut buffer),
            Err(BlockError::OutOfBounds { .. })
        ));
        assert_eq!(failing.failures(), 0);
        assert_eq!(failing.inner().block_count(), 1);
    }
}
