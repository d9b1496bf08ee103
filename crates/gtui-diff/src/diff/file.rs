//! Whole-file diff orchestration

use super::binary::is_binary_content;
use super::render::{render_diff, split_lines};
use super::{DiffResult, DiffStats, ADDED_PREFIX};
use std::path::PathBuf;

/// Content shown in place of a diff for binary files
pub const BINARY_PLACEHOLDER: &str = "[Binary file]";

/// Diff a file given raw content buffers
///
/// `old_content` is `None` for untracked files or files missing from the
/// last commit; every line of the new content is then an addition.
/// Only the new content is sniffed for binary data.
///
/// Binary stats differ between the two cases: a new binary file counts
/// one addition, a changed binary file counts one modification.
pub fn diff_file(
    path: impl Into<PathBuf>,
    old_content: Option<&[u8]>,
    new_content: &[u8],
) -> DiffResult {
    let path = path.into();

    match old_content {
        None => diff_new_file(path, new_content),
        Some(old) => {
            if is_binary_content(new_content) {
                return binary_result(
                    path,
                    DiffStats {
                        modified: 1,
                        ..DiffStats::default()
                    },
                );
            }

            let old = String::from_utf8_lossy(old);
            let new = String::from_utf8_lossy(new_content);
            let (content, stats) = render_diff(&old, &new);

            DiffResult {
                path,
                is_binary: false,
                content,
                stats,
            }
        }
    }
}

/// Diff a file given text content
pub fn compute_diff(
    path: impl Into<PathBuf>,
    old_content: Option<&str>,
    new_content: &str,
) -> DiffResult {
    diff_file(path, old_content.map(str::as_bytes), new_content.as_bytes())
}

fn diff_new_file(path: PathBuf, content: &[u8]) -> DiffResult {
    if is_binary_content(content) {
        return binary_result(
            path,
            DiffStats {
                added: 1,
                ..DiffStats::default()
            },
        );
    }

    let text = String::from_utf8_lossy(content);
    let lines = split_lines(&text);

    let mut rendered = String::with_capacity(text.len() + lines.len() * 3);
    for line in &lines {
        rendered.push_str(ADDED_PREFIX);
        rendered.push_str(line);
        rendered.push('\n');
    }

    DiffResult {
        path,
        is_binary: false,
        content: rendered,
        stats: DiffStats {
            added: lines.len(),
            deleted: 0,
            modified: 0,
        },
    }
}

fn binary_result(path: PathBuf, stats: DiffStats) -> DiffResult {
    DiffResult {
        path,
        is_binary: true,
        content: BINARY_PLACEHOLDER.to_string(),
        stats,
    }
}
