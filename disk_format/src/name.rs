//! Display sanitization of raw on-disk bytes

/// Returns true for bytes the browser will display (printable ASCII, space included)
pub fn is_printable(byte: u8) -> bool {
    byte.is_ascii_graphic() || byte == b' '
}

/// Sanitizes a raw name field
///
/// Keeps the leading run of printable ASCII bytes and stops at the first null
/// or non-printable byte. A name with an embedded control byte is therefore
/// truncated for display and lookup; the stored bytes are untouched.
///
/// # Examples
///
/// ```
/// use disk_format::sanitize_name;
///
/// assert_eq!(sanitize_name(b"docs\0\0\0"), "docs");
/// assert_eq!(sanitize_name(b"ab\x07cd"), "ab");
/// ```
pub fn sanitize_name(raw: &[u8]) -> String {
    raw.iter()
        .take_while(|&&b| is_printable(b))
        .map(|&b| b as char)
        .collect()
}
