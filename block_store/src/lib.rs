//! # Block Store
//!
//! This crate defines the block device layer the disk browser reads from.
//!
//! ## Philosophy
//!
//! **Storage is a collaborator, not part of the filesystem logic.**
//!
//! The browser only needs "give me block N". Everything that knows about
//! files, RAM or fault injection lives behind the [`BlockDevice`] trait.
//!
//! ## Devices
//!
//! - [`RamDisk`]: in-memory blocks, used by tests and demos
//! - [`ImageDisk`]: read-only view of a disk image file
//! - [`CountingDevice`]: wrapper gathering [`IoStats`]
//! - [`FailingBlockDevice`]: wrapper injecting read failures

pub mod block_device;
pub mod counting_device;
pub mod failing_device;
pub mod image_disk;

pub use block_device::{read_block, Block, BlockDevice, BlockError, RamDisk, BLOCK_SIZE};
pub use counting_device::{CountingDevice, IoStats};
pub use failing_device::{FailingBlockDevice, FailurePolicy};
pub use image_disk::ImageDisk;
