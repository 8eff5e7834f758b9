//! Image builder
//!
//! Lays out a small disk image in memory. Used by tests and the demo; the
//! browser itself never writes.
//!
//! ```
//! use disk_format::ImageBuilder;
//!
//! let disk = ImageBuilder::new(16)
//!     .label("DEMO")
//!     .directory(2, "docs", 5)
//!     .file(5, "readme.txt", 7, b"hello world")
//!     .build();
//! ```

use crate::alloc_table::{AllocationEntry, AllocationTable};
use crate::directory::{DirectoryBlock, DirectoryRecord, RecordKind};
use crate::layout::{LABEL_BLOCK, ROOT_BLOCK, TABLE_BLOCK};
use block_store::{Block, RamDisk, BLOCK_SIZE};
use std::collections::BTreeMap;

/// Builder for in-memory disk images
#[derive(Debug, Clone)]
pub struct ImageBuilder {
    blocks: Vec<Block>,
    table: AllocationTable,
    directories: BTreeMap<u16, DirectoryBlock>,
}

impl ImageBuilder {
    /// Starts an image with an empty label and an empty root directory
    ///
    /// # Panics
    /// Panics if `block_count` leaves no room for the root directory.
    pub fn new(block_count: usize) -> Self {
        assert!(
            block_count > ROOT_BLOCK as usize,
            "image needs at least {} blocks",
            ROOT_BLOCK + 1
        );

        let table = AllocationTable::from_entries([
            AllocationEntry::DiskLabel,
            AllocationEntry::TableBlock,
            AllocationEntry::InUse,
        ]);

        let mut directories = BTreeMap::new();
        directories.insert(ROOT_BLOCK, DirectoryBlock::empty());

        Self {
            blocks: vec![[0u8; BLOCK_SIZE]; block_count],
            table,
            directories,
        }
    }

    /// Sets the disk label
    pub fn label(self, label: &str) -> Self {
        self.raw_block(LABEL_BLOCK, label.as_bytes())
    }

    /// Adds a subdirectory record to `parent` and an empty directory at `block`
    ///
    /// # Panics
    /// Panics if `parent` or `block` is outside the image, or `parent` is full.
    pub fn directory(mut self, parent: u16, name: &str, block: u16) -> Self {
        self.check_block(block);
        self.append(
            parent,
            DirectoryRecord::new(RecordKind::Directory, block, 0, name),
            0,
        );
        self.directories.entry(block).or_default();
        self.table.set(block as usize, AllocationEntry::InUse);
        self
    }

    /// Adds a file record to `parent` and writes `contents` into `block`
    ///
    /// The size field records the full length; only one block is stored.
    /// Outside the root a file never takes slot 0, since a block whose first
    /// record is a file is not accepted as a directory. Use
    /// [`ImageBuilder::record`] to put a file in slot 0 deliberately.
    ///
    /// # Panics
    /// Panics if `parent` or `block` is outside the image, or `parent` is full.
    pub fn file(mut self, parent: u16, name: &str, block: u16, contents: &[u8]) -> Self {
        self.check_block(block);
        let first_slot = if parent == ROOT_BLOCK { 0 } else { 1 };
        self.append(
            parent,
            DirectoryRecord::new(RecordKind::FileChunk, block, contents.len() as u32, name),
            first_slot,
        );
        self.table.set(block as usize, AllocationEntry::InUse);
        self.raw_block(block, contents)
    }

    /// Places a record in a specific slot of a directory block
    ///
    /// # Panics
    /// Panics if `block` is outside the image or `slot >= RECORDS_PER_BLOCK`.
    pub fn record(mut self, block: u16, slot: usize, record: DirectoryRecord) -> Self {
        self.check_block(block);
        self.directories
            .entry(block)
            .or_default()
            .set_record(slot, record);
        self
    }

    /// Writes raw bytes at the start of a block (zero-filled after)
    ///
    /// # Panics
    /// Panics if `block` is outside the image.
    pub fn raw_block(mut self, block: u16, bytes: &[u8]) -> Self {
        let target = &mut self.blocks[block as usize];
        let len = bytes.len().min(BLOCK_SIZE);
        target.fill(0);
        target[..len].copy_from_slice(&bytes[..len]);
        self
    }

    /// Replaces the allocation table
    pub fn table(mut self, table: AllocationTable) -> Self {
        self.table = table;
        self
    }

    /// Produces the raw image bytes
    pub fn into_image(self) -> Vec<u8> {
        self.build().to_image()
    }

    /// Produces a RAM disk holding the image
    pub fn build(self) -> RamDisk {
        let mut blocks = self.blocks;
        blocks[TABLE_BLOCK as usize] = self.table.encode();
        for (block, directory) in &self.directories {
            blocks[*block as usize] = directory.encode();
        }

        let image: Vec<u8> = blocks.iter().flat_map(|b| b.iter().copied()).collect();
        RamDisk::from_image(&image)
    }

    fn check_block(&self, block: u16) {
        assert!(
            (block as usize) < self.blocks.len(),
            "block {} is outside the image ({} blocks)",
            block,
            self.blocks.len()
        );
    }

    fn append(&mut self, parent: u16, record: DirectoryRecord, first_slot: usize) {
        self.check_block(parent);
        let directory = self.directories.entry(parent).or_default();
        let slot = directory
            .records()
            .iter()
            .enumerate()
            .skip(first_slot)
            .find(|(_, r)| r.kind == RecordKind::Unused)
            .map(|(slot, _)| slot)
            .unwrap_or_else(|| panic!("directory block {} is full", parent));
        directory.set_record(slot, record);
    }
}
