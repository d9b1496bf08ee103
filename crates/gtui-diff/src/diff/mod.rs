//! Line-based diff engine
//!
//! Computes the per-file diff shown next to the staging list: binary
//! sniffing, greedy line matching, and `"+ "`/`"- "`/`"  "` rendering
//! with change statistics.

mod binary;
mod file;
mod matcher;
mod render;

pub use binary::{is_binary_content, BINARY_SNIFF_LEN};
pub use file::{compute_diff, diff_file, BINARY_PLACEHOLDER};
pub use matcher::{find_matches, LineMatch};
pub use render::{render_diff, split_lines};

use std::path::PathBuf;

/// Prefix for a line only present in the new content
pub const ADDED_PREFIX: &str = "+ ";
/// Prefix for a line only present in the old content
pub const DELETED_PREFIX: &str = "- ";
/// Prefix for an unchanged line
pub const CONTEXT_PREFIX: &str = "  ";

/// Change counters for a single diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Lines only present in the new content
    pub added: usize,
    /// Lines only present in the old content
    pub deleted: usize,
    /// `added + deleted` for rendered diffs
    pub modified: usize,
}

impl DiffStats {
    /// Whether the diff records no added or deleted lines
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.deleted == 0
    }
}

/// Complete diff for one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Path of the file, as handed in by the caller
    pub path: PathBuf,
    /// Content was classified as binary; `content` holds a placeholder
    pub is_binary: bool,
    /// Rendered diff text, one prefixed line per row
    pub content: String,
    /// Change statistics
    pub stats: DiffStats,
}

impl DiffResult {
    /// Iterate over the rendered rows without their trailing newline
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stats_is_empty() {
        assert!(DiffStats::default().is_empty());
        assert!(DiffStats {
            modified: 1,
            ..DiffStats::default()
        }
        .is_empty());
        assert!(!DiffStats {
            added: 1,
            deleted: 0,
            modified: 1
        }
        .is_empty());
    }

    #[test]
    fn test_result_lines() {
        let result = compute_diff("f", Some("a\nb"), "a\nc");
        let rows: Vec<&str> = result.lines().collect();
        assert_eq!(rows, vec!["  a", "- b", "+ c"]);
    }

    fn text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "", "x y"]), 0..12)
            .prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn prop_diff_is_deterministic(old in text(), new in text()) {
            let first = compute_diff("f", Some(old.as_str()), &new);
            let second = compute_diff("f", Some(old.as_str()), &new);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_identical_content_is_all_context(content in text()) {
            let result = compute_diff("f", Some(content.as_str()), &content);
            prop_assert_eq!(result.stats, DiffStats::default());

            let expected: String = split_lines(&content)
                .iter()
                .map(|line| format!("{}{}\n", CONTEXT_PREFIX, line))
                .collect();
            prop_assert_eq!(result.content, expected);
        }

        #[test]
        fn prop_matches_strictly_increase(old in text(), new in text()) {
            let old_lines = split_lines(&old);
            let new_lines = split_lines(&new);
            let matches = find_matches(&old_lines, &new_lines);

            for pair in matches.windows(2) {
                prop_assert!(pair[0].old_index < pair[1].old_index);
                prop_assert!(pair[0].new_index < pair[1].new_index);
            }
            for m in &matches {
                prop_assert_eq!(old_lines[m.old_index], new_lines[m.new_index]);
            }
        }

        #[test]
        fn prop_every_line_is_accounted_for(old in text(), new in text()) {
            let (_, stats) = render_diff(&old, &new);
            let matched = find_matches(&split_lines(&old), &split_lines(&new)).len();

            prop_assert_eq!(stats.deleted + matched, split_lines(&old).len());
            prop_assert_eq!(stats.added + matched, split_lines(&new).len());
            prop_assert_eq!(stats.modified, stats.added + stats.deleted);
        }

        #[test]
        fn prop_nul_in_sniff_window_is_binary(
            prefix in prop::collection::vec(1u8.., 0..BINARY_SNIFF_LEN),
            old in text(),
        ) {
            let mut content = prefix;
            content.push(0);
            let result = diff_file("f", Some(old.as_bytes()), &content);
            prop_assert!(result.is_binary);
            prop_assert_eq!(result.content, BINARY_PLACEHOLDER);
        }
    }
}
