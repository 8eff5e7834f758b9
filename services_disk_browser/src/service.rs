//! Disk browser service implementation
//!
//! This module provides the service that owns a block device for the
//! duration of a session and implements the browser operations on it.

use crate::extractor;
use crate::navigator::Navigator;
use crate::operations::{DiskOperations, NavigationError};
use block_store::{read_block, BlockDevice};
use disk_format::{
    AllocationTable, DiskLabel, FileContent, VisibleEntry, LABEL_BLOCK, TABLE_BLOCK,
};
use log::{debug, info};

/// The Disk Browser Service
///
/// Reads the label and allocation table once when opened, then serves
/// navigation and reads from the owned device. Dropping the service releases
/// the device.
pub struct DiskBrowser<D: BlockDevice> {
    device: D,
    label: DiskLabel,
    table: AllocationTable,
    navigator: Navigator,
}

impl<D: BlockDevice> DiskBrowser<D> {
    /// Opens a browser over `device`, positioned at the root directory
    pub fn open(mut device: D) -> Result<Self, NavigationError> {
        let label = DiskLabel::decode(&read_block(&mut device, LABEL_BLOCK as u64)?);
        let table = AllocationTable::decode(&read_block(&mut device, TABLE_BLOCK as u64)?)?;

        let summary = table.summary();
        info!(
            "opened disk {:?}: {} blocks, {} in use, {} free",
            label.as_str(),
            device.block_count(),
            summary.in_use,
            summary.unallocated
        );
        if summary.unknown > 0 {
            debug!("allocation table has {} unknown codes", summary.unknown);
        }

        Ok(Self {
            device,
            label,
            table,
            navigator: Navigator::new(),
        })
    }

    /// The navigator (read-only)
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The owned device
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Ends the session and hands the device back
    pub fn into_device(self) -> D {
        self.device
    }
}

impl<D: BlockDevice> DiskOperations for DiskBrowser<D> {
    fn list(&mut self) -> Result<Vec<VisibleEntry>, NavigationError> {
        let directory = self.navigator.current_directory(&mut self.device)?;
        Ok(directory.visible_entries().collect())
    }

    fn change_dir(&mut self, name: &str) -> Result<(), NavigationError> {
        self.navigator.enter(&mut self.device, name)
    }

    fn read_file(&mut self, name: &str) -> Result<FileContent, NavigationError> {
        let directory = self.navigator.current_directory(&mut self.device)?;
        extractor::read_file(&mut self.device, name, &directory)
    }

    fn current_path(&self) -> String {
        self.navigator.current_path()
    }

    fn label(&self) -> &DiskLabel {
        &self.label
    }

    fn allocation_table(&self) -> &AllocationTable {
        &self.table
    }
}
