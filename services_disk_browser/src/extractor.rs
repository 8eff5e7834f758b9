//! File extraction
//!
//! Reads exactly one block per file. The record's size field is not used to
//! bound the output; content ends at the first null byte of the block, so
//! files larger than one block are truncated.

use crate::operations::NavigationError;
use block_store::{read_block, BlockDevice};
use disk_format::{resolve, DirectoryBlock, FileContent};
use log::debug;

/// Resolves `name` in `directory` and returns the displayable file contents
pub fn read_file<D: BlockDevice + ?Sized>(
    device: &mut D,
    name: &str,
    directory: &DirectoryBlock,
) -> Result<FileContent, NavigationError> {
    let block = resolve(name, directory)
        .ok_or_else(|| NavigationError::FileNotFound(name.to_string()))?;

    debug!("read {:?} from block {}", name, block);
    let raw = read_block(device, block as u64)?;
    Ok(FileContent::decode(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::load_directory;
    use block_store::{FailingBlockDevice, FailurePolicy, RamDisk, BLOCK_SIZE};
    use disk_format::{DirectoryRecord, ImageBuilder, RecordKind};

    fn root(disk: &mut RamDisk) -> DirectoryBlock {
        load_directory(disk, 2).unwrap()
    }

    #[test]
    fn test_read_hello_world() {
        let mut disk = ImageBuilder::new(16)
            .file(2, "readme.txt", 7, b"hello world")
            .build();
        let dir = root(&mut disk);

        let content = read_file(&mut disk, "readme.txt", &dir).unwrap();
        assert_eq!(content.as_str(), "hello world");
    }

    #[test]
    fn test_missing_file() {
        let mut disk = ImageBuilder::new(8).build();
        let dir = root(&mut disk);

        assert_eq!(
            read_file(&mut disk, "ghost", &dir),
            Err(NavigationError::FileNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_size_field_does_not_bound_output() {
        let mut disk = ImageBuilder::new(16)
            .record(2, 0, DirectoryRecord::new(RecordKind::FileChunk, 9, 3, "short"))
            .raw_block(9, b"longer than three")
            .build();
        let dir = root(&mut disk);

        let content = read_file(&mut disk, "short", &dir).unwrap();
        assert_eq!(content.as_str(), "longer than three");
    }

    #[test]
    fn test_only_one_block_is_read() {
        let mut big = vec![b'a'; BLOCK_SIZE];
        big.extend_from_slice(b"second block");
        let mut disk = ImageBuilder::new(16)
            .record(2, 0, DirectoryRecord::new(RecordKind::FileChunk, 9, big.len() as u32, "big"))
            .raw_block(9, &big)
            .raw_block(10, b"second block")
            .build();
        let dir = root(&mut disk);

        let content = read_file(&mut disk, "big", &dir).unwrap();
        assert_eq!(content.len(), BLOCK_SIZE);
        assert!(!content.as_str().contains("second"));
    }

    #[test]
    fn test_io_failure_propagates() {
        let disk = ImageBuilder::new(16)
            .file(2, "readme.txt", 7, b"hello")
            .build();
        let mut failing = FailingBlockDevice::new(disk, FailurePolicy::OnBlocks(vec![7]));
        let dir = load_directory(&mut failing, 2).unwrap();

        let result = read_file(&mut failing, "readme.txt", &dir);
        assert!(matches!(result, Err(NavigationError::Io(_))));
    }

    #[test]
    fn test_empty_name_is_not_found() {
        let mut disk = ImageBuilder::new(16)
            .record(2, 0, DirectoryRecord::new(RecordKind::FileChunk, 9, 4, ""))
            .raw_block(9, b"anon")
            .build();
        let dir = root(&mut disk);

        assert_eq!(
            read_file(&mut disk, "", &dir),
            Err(NavigationError::FileNotFound(String::new()))
        );
    }
}
