//! Name lookup within a directory block

use crate::directory::{DirectoryBlock, VisibleEntry};

/// Finds the first visible entry whose sanitized name equals `name`
///
/// Matching is exact and case-sensitive. The format does not enforce unique
/// names; when duplicates exist the lowest slot wins. An empty name never
/// matches, in line with listings hiding entries whose name sanitizes to
/// nothing.
pub fn resolve_entry(name: &str, directory: &DirectoryBlock) -> Option<VisibleEntry> {
    if name.is_empty() {
        return None;
    }
    directory.visible_entries().find(|entry| entry.name == name)
}

/// Resolves `name` to the block number its record points at
pub fn resolve(name: &str, directory: &DirectoryBlock) -> Option<u16> {
    resolve_entry(name, directory).map(|entry| entry.block_ref)
}
