//! NUL-byte sniffing for binary content

/// Number of leading bytes inspected when classifying content
pub const BINARY_SNIFF_LEN: usize = 512;

/// Check if content is likely binary by looking for a NUL byte
///
/// Only the first [`BINARY_SNIFF_LEN`] bytes are inspected, so the cost is
/// constant regardless of file size.
pub fn is_binary_content(content: &[u8]) -> bool {
    let head = &content[..content.len().min(BINARY_SNIFF_LEN)];
    head.contains(&0)
}
