//! Disk label (block 0)

use crate::name::sanitize_name;
use core::fmt;

/// Human-readable label stored in block 0
///
/// Block 0 has no structure beyond this: the label is the printable prefix of
/// the block, ending at the first null or non-printable byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiskLabel(String);

impl DiskLabel {
    /// Decodes a label from the raw bytes of block 0
    pub fn decode(bytes: &[u8]) -> Self {
        Self(sanitize_name(bytes))
    }

    /// The label text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
