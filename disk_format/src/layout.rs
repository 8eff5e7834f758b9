//! On-disk layout constants and decode errors

use block_store::BLOCK_SIZE;
use thiserror::Error;

/// Block holding the disk label
pub const LABEL_BLOCK: u16 = 0;

/// Block holding the allocation table
pub const TABLE_BLOCK: u16 = 1;

/// Block holding the root directory
pub const ROOT_BLOCK: u16 = 2;

/// Size of one directory record in bytes
pub const RECORD_SIZE: usize = 32;

/// Records per directory block
pub const RECORDS_PER_BLOCK: usize = BLOCK_SIZE / RECORD_SIZE;

/// Length of the raw name field of a directory record
pub const NAME_LEN: usize = 24;

/// Number of 16-bit entries in the allocation table
pub const TABLE_ENTRIES: usize = BLOCK_SIZE / 2;

/// Errors raised while decoding raw blocks
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Allocation table buffer shorter than one block
    #[error("malformed allocation table: expected {expected} bytes, got {actual}")]
    MalformedTable { expected: usize, actual: usize },

    /// Directory block buffer shorter than one block
    #[error("malformed directory block: expected {expected} bytes, got {actual}")]
    MalformedBlock { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fits_block() {
        assert_eq!(RECORDS_PER_BLOCK, 16);
        assert_eq!(TABLE_ENTRIES, 256);
        assert_eq!(RECORD_SIZE * RECORDS_PER_BLOCK, BLOCK_SIZE);
        assert_eq!(2 + 2 + 4 + NAME_LEN, RECORD_SIZE);
    }
}
