//! Allocation table (block 1)
//!
//! The table is decoded once at startup and kept for diagnostics. Navigation
//! never consults it, and file reads do not follow chains through it.

use crate::layout::{FormatError, TABLE_ENTRIES};
use block_store::BLOCK_SIZE;

/// One allocation table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocationEntry {
    /// Block holds the disk label (0x0000)
    DiskLabel,
    /// Block holds the allocation table (0x0001)
    TableBlock,
    /// Block is in use (0xFEFE)
    InUse,
    /// Block is free (0xFFFF)
    Unallocated,
    /// Any other code, preserved as-is
    Unknown(u16),
}

impl AllocationEntry {
    /// Decodes a raw 16-bit code
    pub fn from_code(code: u16) -> Self {
        match code {
            0x0000 => Self::DiskLabel,
            0x0001 => Self::TableBlock,
            0xFEFE => Self::InUse,
            0xFFFF => Self::Unallocated,
            other => Self::Unknown(other),
        }
    }

    /// Raw 16-bit code of this entry
    pub fn code(self) -> u16 {
        match self {
            Self::DiskLabel => 0x0000,
            Self::TableBlock => 0x0001,
            Self::InUse => 0xFEFE,
            Self::Unallocated => 0xFFFF,
            Self::Unknown(code) => code,
        }
    }
}

/// Per-kind entry counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationSummary {
    pub disk_label: usize,
    pub table_block: usize,
    pub in_use: usize,
    pub unallocated: usize,
    pub unknown: usize,
}

/// Decoded allocation table
///
/// Always holds exactly `BLOCK_SIZE / 2` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationTable {
    entries: Vec<AllocationEntry>,
}

impl AllocationTable {
    /// Decodes the table from the raw bytes of block 1
    ///
    /// Bytes beyond the first block are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() < BLOCK_SIZE {
            return Err(FormatError::MalformedTable {
                expected: BLOCK_SIZE,
                actual: bytes.len(),
            });
        }

        let entries = bytes[..BLOCK_SIZE]
            .chunks_exact(2)
            .map(|pair| AllocationEntry::from_code(u16::from_le_bytes([pair[0], pair[1]])))
            .collect::<Vec<_>>();
        debug_assert_eq!(entries.len(), TABLE_ENTRIES);

        Ok(Self { entries })
    }

    /// All entries in block order
    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    /// Entry for a block, if within the table
    pub fn get(&self, block: usize) -> Option<AllocationEntry> {
        self.entries.get(block).copied()
    }

    /// Number of entries (always TABLE_ENTRIES)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts entries by kind
    pub fn summary(&self) -> AllocationSummary {
        let mut summary = AllocationSummary::default();
        for entry in &self.entries {
            match entry {
                AllocationEntry::DiskLabel => summary.disk_label += 1,
                AllocationEntry::TableBlock => summary.table_block += 1,
                AllocationEntry::InUse => summary.in_use += 1,
                AllocationEntry::Unallocated => summary.unallocated += 1,
                AllocationEntry::Unknown(_) => summary.unknown += 1,
            }
        }
        summary
    }

    /// Encodes the table back into one block
    pub fn encode(&self) -> [u8; BLOCK_SIZE] {
        let mut block = [0u8; BLOCK_SIZE];
        for (slot, entry) in block.chunks_exact_mut(2).zip(&self.entries) {
            slot.copy_from_slice(&entry.code().to_le_bytes());
        }
        block
    }

    /// Builds a table from entries, padding with `Unallocated` or truncating to TABLE_ENTRIES
    pub fn from_entries(entries: impl IntoIterator<Item = AllocationEntry>) -> Self {
        let mut entries: Vec<_> = entries.into_iter().take(TABLE_ENTRIES).collect();
        entries.resize(TABLE_ENTRIES, AllocationEntry::Unallocated);
        Self { entries }
    }

    /// Replaces the entry for one block
    pub(crate) fn set(&mut self, block: usize, entry: AllocationEntry) {
        if let Some(slot) = self.entries.get_mut(block) {
            *slot = entry;
        }
    }
}
