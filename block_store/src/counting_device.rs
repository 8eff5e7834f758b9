//! # Counting Block Device
//!
//! A BlockDevice wrapper that records I/O statistics for end-of-session reporting.

use crate::block_device::{BlockDevice, BlockError};
use core::fmt;

/// Read statistics gathered by a [`CountingDevice`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoStats {
    /// Successful block reads
    pub reads: u64,
    /// Reads that returned an error
    pub failed_reads: u64,
    /// Bytes delivered by successful reads
    pub bytes_read: u64,
}

impl fmt::Display for IoStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Blocks read: {}, failed reads: {}, bytes read: {}",
            self.reads, self.failed_reads, self.bytes_read
        )
    }
}

/// Wrapper around a BlockDevice that counts reads
pub struct CountingDevice<D: BlockDevice> {
    inner: D,
    stats: IoStats,
}

impl<D: BlockDevice> CountingDevice<D> {
    /// Wraps a device with zeroed counters
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            stats: IoStats::default(),
        }
    }

    /// Statistics gathered so far
    pub fn stats(&self) -> IoStats {
        self.stats
    }

    /// Get the underlying device (for inspection)
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Unwraps the underlying device
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: BlockDevice> BlockDevice for CountingDevice<D> {
    fn block_count(&self) -> u64 {
        self.inner.block_count()
    }

    fn block_size(&self) -> usize {
        self.inner.block_size()
    }

    fn read_block(&mut self, block_idx: u64, buffer: &mut [u8]) -> Result<(), BlockError> {
        match self.inner.read_block(block_idx, buffer) {
            Ok(()) => {
                self.stats.reads += 1;
                self.stats.bytes_read += self.inner.block_size() as u64;
                Ok(())
            }
            Err(err) => {
                self.stats.failed_reads += 1;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RamDisk, BLOCK_SIZE};

    #[test]
    fn test_counts_successful_reads() {
        let mut device = CountingDevice::new(RamDisk::new(4));
        let mut buffer = [0u8; BLOCK_SIZE];

        device.read_block(0, &mut buffer).unwrap();
        device.read_block(3, &mut buffer).unwrap();

        assert_eq!(
            device.stats(),
            IoStats {
                reads: 2,
                failed_reads: 0,
                bytes_read: 2 * BLOCK_SIZE as u64,
            }
        );
    }

    #[test]
    fn test_counts_failed_reads() {
        let mut device = CountingDevice::new(RamDisk::new(1));
        let mut buffer = [0u8; BLOCK_SIZE];

        assert!(device.read_block(5, &mut buffer).is_err());
        assert_eq!(device.stats().failed_reads, 1);
        assert_eq!(device.stats().reads, 0);
    }

    #[test]
    fn test_stats_display() {
        let stats = IoStats {
            reads: 3,
            failed_reads: 1,
            bytes_read: 1536,
        };
        assert_eq!(
            stats.to_string(),
            "Blocks read: 3, failed reads: 1, bytes read: 1536"
        );
    }

    #[test]
    fn test_into_inner() {
        let device = CountingDevice::new(RamDisk::new(7));
        assert_eq!(device.inner().block_count(), 7);
        assert_eq!(device.into_inner().block_count(), 7);
    }
}
