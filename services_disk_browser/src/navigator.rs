//! Navigation state machine
//!
//! The navigator tracks which directory block is being viewed and how to get
//! back to the root. It owns no device; every call that needs block data takes
//! the device explicitly, so several navigators can browse one image
//! independently.

use crate::operations::NavigationError;
use block_store::{read_block, BlockDevice};
use disk_format::{resolve, DirectoryBlock, RecordKind, ROOT_BLOCK};
use log::debug;

/// Name that moves to the parent directory
pub const PARENT_DIR: &str = "..";

/// One level above the current directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Block of the parent directory
    pub block: u16,
    /// Name used to enter the child from that parent
    pub name: String,
}

/// Current location plus the way back up
///
/// Invariant: `ancestors` is empty exactly when `current_block` is the root
/// reached without descending; the root block is never pushed for itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_block: u16,
    pub ancestors: Vec<Frame>,
}

impl NavigationState {
    /// State positioned at the root directory
    pub fn at_root() -> Self {
        Self {
            current_block: ROOT_BLOCK,
            ancestors: Vec::new(),
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::at_root()
    }
}

/// Directory-validity heuristic
///
/// The format has no directory header, so a block is taken to be a directory
/// when its first slot is a `Directory` record or `Unused` (an empty
/// directory). This is approximate: an empty directory and a zeroed foreign
/// block look the same, and a directory whose first child happens to be a
/// file is rejected.
pub fn looks_like_directory(block: &DirectoryBlock) -> bool {
    matches!(
        block.first_record().kind,
        RecordKind::Directory | RecordKind::Unused
    )
}

/// Reads and decodes a directory block
pub fn load_directory<D: BlockDevice + ?Sized>(
    device: &mut D,
    block: u16,
) -> Result<DirectoryBlock, NavigationError> {
    let raw = read_block(device, block as u64)?;
    Ok(DirectoryBlock::decode(&raw)?)
}

/// Navigator over one disk image
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavigationState,
}

impl Navigator {
    /// Creates a navigator at the root directory
    pub fn new() -> Self {
        Self {
            state: NavigationState::at_root(),
        }
    }

    /// Current navigation state
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Block of the directory being viewed
    pub fn current_block(&self) -> u16 {
        self.state.current_block
    }

    /// Whether the navigator is at the root
    pub fn is_at_root(&self) -> bool {
        self.state.ancestors.is_empty()
    }

    /// Number of levels below the root
    pub fn depth(&self) -> usize {
        self.state.ancestors.len()
    }

    /// Reads and decodes the directory being viewed
    pub fn current_directory<D: BlockDevice + ?Sized>(
        &self,
        device: &mut D,
    ) -> Result<DirectoryBlock, NavigationError> {
        load_directory(device, self.state.current_block)
    }

    /// Moves into `name`, or to the parent when `name` is `".."`
    ///
    /// Either both the stack and the current block change, or nothing does:
    /// all reads and checks happen before the state is touched.
    pub fn enter<D: BlockDevice + ?Sized>(
        &mut self,
        device: &mut D,
        name: &str,
    ) -> Result<(), NavigationError> {
        if name == PARENT_DIR {
            self.leave();
            return Ok(());
        }

        let current = self.current_directory(device)?;
        let candidate = resolve(name, &current)
            .ok_or_else(|| NavigationError::DirectoryNotFound(name.to_string()))?;

        let target = load_directory(device, candidate)?;
        if !looks_like_directory(&target) {
            return Err(NavigationError::NotADirectory(name.to_string()));
        }

        debug!(
            "enter {:?}: block {} -> {}",
            name, self.state.current_block, candidate
        );
        self.state.ancestors.push(Frame {
            block: self.state.current_block,
            name: name.to_string(),
        });
        self.state.current_block = candidate;
        Ok(())
    }

    /// Moves to the parent directory; does nothing at the root
    pub fn leave(&mut self) {
        if let Some(frame) = self.state.ancestors.pop() {
            debug!(
                "leave: block {} -> {}",
                self.state.current_block, frame.block
            );
            self.state.current_block = frame.block;
        }
    }

    /// Returns to the root directory
    pub fn reset(&mut self) {
        self.state = NavigationState::at_root();
    }

    /// Path built from the names used to descend, `/` at the root
    pub fn current_path(&self) -> String {
        if self.state.ancestors.is_empty() {
            return "/".to_string();
        }
        self.state
            .ancestors
            .iter()
            .fold(String::new(), |mut path, frame| {
                path.push('/');
                path.push_str(&frame.name);
                path
            })
    }
}
