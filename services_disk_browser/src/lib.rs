//! # Disk Browser Service
//!
//! This service provides directory navigation and file reads over a disk image.
//!
//! ## Philosophy
//!
//! - Navigation state is an explicit value, owned by one navigator
//! - Every operation either fully succeeds or leaves the state untouched
//! - Errors are reported to the caller; none of them ends a session
//! - The image is only ever read
//!
//! ## Operations
//!
//! - `list()`: List the current directory
//! - `change_dir(name)`: Enter a subdirectory, `..` for the parent
//! - `read_file(name)`: Read one file block as displayable text
//! - `current_path()`: Path of the current directory

pub mod extractor;
pub mod navigator;
pub mod operations;
pub mod service;

pub use extractor::read_file;
pub use navigator::{looks_like_directory, Frame, NavigationState, Navigator, PARENT_DIR};
pub use operations::{DiskOperations, NavigationError};
pub use service::DiskBrowser;
