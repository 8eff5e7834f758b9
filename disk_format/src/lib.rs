//! # Disk Format
//!
//! This crate interprets the raw blocks of a flat disk image.
//!
//! ## Layout
//!
//! - Block 0: disk label (printable ASCII, no other structure)
//! - Block 1: allocation table, 256 little-endian 16-bit codes
//! - Block 2: root directory
//! - Any directory block: 16 records of 32 bytes
//!
//! ## Design
//!
//! - Every decoder takes a byte slice, checks its length and reads named
//!   fields at fixed offsets
//! - Decoding is best-effort: unknown codes are kept, not rejected
//! - Names and file contents are sanitized for display, not round-tripped

pub mod alloc_table;
pub mod builder;
pub mod content;
pub mod directory;
pub mod label;
pub mod layout;
pub mod name;
pub mod resolver;

pub use alloc_table::{AllocationEntry, AllocationSummary, AllocationTable};
pub use builder::ImageBuilder;
pub use content::FileContent;
pub use directory::{DirectoryBlock, DirectoryRecord, RecordKind, VisibleEntry};
pub use label::DiskLabel;
pub use layout::{
    FormatError, LABEL_BLOCK, NAME_LEN, RECORDS_PER_BLOCK, RECORD_SIZE, ROOT_BLOCK, TABLE_BLOCK,
    TABLE_ENTRIES,
};
pub use name::{is_printable, sanitize_name};
pub use resolver::{resolve, resolve_entry};
