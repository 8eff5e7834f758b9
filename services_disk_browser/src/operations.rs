//! Browser operations
//!
//! This module defines the operations provided by the disk browser service.

use block_store::BlockError;
use disk_format::{AllocationTable, DiskLabel, FileContent, FormatError, VisibleEntry};
use thiserror::Error;

/// Errors that can occur during browser operations
///
/// Lookup errors carry the name that was asked for. Every error leaves the
/// navigation state exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No directory or file of that name in the current directory
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    /// Name resolved, but the target block does not look like a directory
    #[error("{0} is not a directory")]
    NotADirectory(String),

    /// No entry of that name to read
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Block could not be decoded
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Block store failure, passed through unmodified
    #[error("I/O error: {0}")]
    Io(#[from] BlockError),
}

/// Browser operations trait
///
/// This trait defines the operations a session can perform on a disk image.
pub trait DiskOperations {
    /// List the current directory
    ///
    /// Returns visible entries in slot order.
    fn list(&mut self) -> Result<Vec<VisibleEntry>, NavigationError>;

    /// Change directory
    ///
    /// `".."` moves to the parent; at the root it does nothing.
    fn change_dir(&mut self, name: &str) -> Result<(), NavigationError>;

    /// Read a file from the current directory
    fn read_file(&mut self, name: &str) -> Result<FileContent, NavigationError>;

    /// Path of the current directory, `/` at the root
    fn current_path(&self) -> String;

    /// Disk label read at startup
    fn label(&self) -> &DiskLabel;

    /// Allocation table read at startup (diagnostics only)
    fn allocation_table(&self) -> &AllocationTable;
}
