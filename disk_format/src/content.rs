//! File content decoding
//!
//! Contents are display-oriented: the block is cut at the first null byte and
//! anything that is not printable ASCII, newline, tab or carriage return is
//! dropped. This is lossy by design of the format, not a byte-exact read.

use crate::name::is_printable;
use core::fmt;

/// Displayable contents of a single file block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileContent(String);

impl FileContent {
    /// Decodes the raw bytes of a file block
    pub fn decode(bytes: &[u8]) -> Self {
        let text = bytes
            .iter()
            .take_while(|&&b| b != 0)
            .filter(|&&b| is_printable(b) || matches!(b, b'\n' | b'\t' | b'\r'))
            .map(|&b| b as char)
            .collect();
        Self(text)
    }

    /// Content as text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes after sanitization
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing displayable was found
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the content and returns its text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
