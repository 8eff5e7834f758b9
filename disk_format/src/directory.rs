//! Directory blocks and their records
//!
//! A directory block is 16 fixed 32-byte records:
//!
//! | offset | size | field       |
//! |--------|------|-------------|
//! | 0      | 2    | kind        |
//! | 2      | 2    | block ref   |
//! | 4      | 4    | size        |
//! | 8      | 24   | raw name    |
//!
//! All integers are little-endian. Fields are read at fixed offsets after a
//! length check; the block is never reinterpreted in place.

use crate::layout::{FormatError, NAME_LEN, RECORDS_PER_BLOCK, RECORD_SIZE};
use crate::name::sanitize_name;
use block_store::BLOCK_SIZE;
use log::trace;

/// Kind tag of a directory record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Free slot (0x0000)
    Unused,
    /// Subdirectory (0x0002)
    Directory,
    /// File data block (0x0003)
    FileChunk,
    /// Any other tag, preserved for inspection
    Unknown(u16),
}

impl RecordKind {
    /// Decodes a raw 16-bit kind tag
    pub fn from_code(code: u16) -> Self {
        match code {
            0x0000 => Self::Unused,
            0x0002 => Self::Directory,
            0x0003 => Self::FileChunk,
            other => Self::Unknown(other),
        }
    }

    /// Raw 16-bit kind tag
    pub fn code(self) -> u16 {
        match self {
            Self::Unused => 0x0000,
            Self::Directory => 0x0002,
            Self::FileChunk => 0x0003,
            Self::Unknown(code) => code,
        }
    }

    /// Whether this kind is shown to users
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Directory | Self::FileChunk)
    }
}

/// A raw directory record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryRecord {
    pub kind: RecordKind,
    pub block_ref: u16,
    /// File size in bytes; only meaningful for `FileChunk`
    pub size: u32,
    /// Raw name bytes, null padded, not necessarily null terminated
    pub name: [u8; NAME_LEN],
}

impl DirectoryRecord {
    /// An unused slot
    pub const UNUSED: Self = Self {
        kind: RecordKind::Unused,
        block_ref: 0,
        size: 0,
        name: [0; NAME_LEN],
    };

    /// Creates a record, copying at most NAME_LEN bytes of `name`
    pub fn new(kind: RecordKind, block_ref: u16, size: u32, name: &str) -> Self {
        let mut raw = [0u8; NAME_LEN];
        let len = name.len().min(NAME_LEN);
        raw[..len].copy_from_slice(&name.as_bytes()[..len]);
        Self {
            kind,
            block_ref,
            size,
            name: raw,
        }
    }

    /// Decodes one record from exactly RECORD_SIZE bytes
    fn decode(bytes: &[u8]) -> Self {
        let mut name = [0u8; NAME_LEN];
        name.copy_from_slice(&bytes[8..8 + NAME_LEN]);
        Self {
            kind: RecordKind::from_code(u16::from_le_bytes([bytes[0], bytes[1]])),
            block_ref: u16::from_le_bytes([bytes[2], bytes[3]]),
            size: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            name,
        }
    }

    /// Encodes the record into its 32-byte on-disk form
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        out[0..2].copy_from_slice(&self.kind.code().to_le_bytes());
        out[2..4].copy_from_slice(&self.block_ref.to_le_bytes());
        out[4..8].copy_from_slice(&self.size.to_le_bytes());
        out[8..].copy_from_slice(&self.name);
        out
    }

    /// Display/lookup form of the name
    pub fn sanitized_name(&self) -> String {
        sanitize_name(&self.name)
    }
}

/// A record as seen by listings and lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleEntry {
    /// Slot index within the block (0..16)
    pub slot: usize,
    pub kind: RecordKind,
    pub block_ref: u16,
    pub size: u32,
    /// Sanitized name
    pub name: String,
}

/// A decoded directory block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryBlock {
    records: [DirectoryRecord; RECORDS_PER_BLOCK],
}

impl DirectoryBlock {
    /// A block with every slot unused (an empty directory)
    pub fn empty() -> Self {
        Self {
            records: [DirectoryRecord::UNUSED; RECORDS_PER_BLOCK],
        }
    }

    /// Decodes a directory block
    ///
    /// Bytes beyond the first block are ignored. No record is rejected here;
    /// filtering happens in [`DirectoryBlock::visible_entries`].
    pub fn decode(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() < BLOCK_SIZE {
            return Err(FormatError::MalformedBlock {
                expected: BLOCK_SIZE,
                actual: bytes.len(),
            });
        }

        let mut records = [DirectoryRecord::UNUSED; RECORDS_PER_BLOCK];
        for (record, raw) in records
            .iter_mut()
            .zip(bytes[..BLOCK_SIZE].chunks_exact(RECORD_SIZE))
        {
            *record = DirectoryRecord::decode(raw);
        }
        Ok(Self { records })
    }

    /// Encodes the block into its on-disk form
    pub fn encode(&self) -> [u8; BLOCK_SIZE] {
        let mut block = [0u8; BLOCK_SIZE];
        for (raw, record) in block.chunks_exact_mut(RECORD_SIZE).zip(&self.records) {
            raw.copy_from_slice(&record.encode());
        }
        block
    }

    /// All 16 records in slot order, unused slots included
    pub fn records(&self) -> &[DirectoryRecord] {
        &self.records
    }

    /// Record in slot 0
    pub fn first_record(&self) -> &DirectoryRecord {
        &self.records[0]
    }

    /// Replaces a slot
    ///
    /// # Panics
    /// Panics if `slot >= RECORDS_PER_BLOCK`.
    pub fn set_record(&mut self, slot: usize, record: DirectoryRecord) {
        self.records[slot] = record;
    }

    /// Index of the first unused slot, if any
    pub fn first_free_slot(&self) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.kind == RecordKind::Unused)
    }

    /// Lazily yields the directories and files of this block in slot order
    ///
    /// Unused slots are skipped. Records with an unrecognized kind are skipped
    /// too (treated as corrupt, not as an error). The iterator borrows the
    /// block, so calling this again restarts from slot 0.
    pub fn visible_entries(&self) -> impl Iterator<Item = VisibleEntry> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(|(slot, record)| {
                if let RecordKind::Unknown(code) = record.kind {
                    trace!("skipping slot {} with unknown kind {:#06x}", slot, code);
                }
                record.kind.is_visible()
            })
            .map(|(slot, record)| VisibleEntry {
                slot,
                kind: record.kind,
                block_ref: record.block_ref,
                size: record.size,
                name: record.sanitized_name(),
            })
    }
}

impl Default for DirectoryBlock {
    fn default() -> Self {
        Self::empty()
    }
}
