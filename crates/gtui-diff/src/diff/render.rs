//! Rendering matched lines into prefixed diff text

use super::matcher::find_matches;
use super::{DiffStats, ADDED_PREFIX, CONTEXT_PREFIX, DELETED_PREFIX};

/// Split content into lines on `'\n'`
///
/// A final newline leaves a trailing empty line, as a plain split would.
/// Empty content has no lines at all.
pub fn split_lines(content: &str) -> Vec<&str> {
    if content.is_empty() {
        Vec::new()
    } else {
        content.split('\n').collect()
    }
}

/// Accumulates prefixed rows and the counters that go with them
#[derive(Default)]
struct DiffWriter {
    out: String,
    stats: DiffStats,
}

impl DiffWriter {
    fn push(&mut self, prefix: &str, line: &str) {
        self.out.push_str(prefix);
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn deleted(&mut self, lines: &[&str]) {
        for line in lines {
            self.push(DELETED_PREFIX, line);
        }
        self.stats.deleted += lines.len();
    }

    fn added(&mut self, lines: &[&str]) {
        for line in lines {
            self.push(ADDED_PREFIX, line);
        }
        self.stats.added += lines.len();
    }

    fn context(&mut self, line: &str) {
        self.push(CONTEXT_PREFIX, line);
    }

    fn finish(mut self) -> (String, DiffStats) {
        self.stats.modified = self.stats.added + self.stats.deleted;
        (self.out, self.stats)
    }
}

/// Render a diff between two text contents
///
/// Each match block emits its pending deletions, then pending additions,
/// then the matched line as context. Lines left after the last match are
/// flushed the same way.
pub fn render_diff(old_content: &str, new_content: &str) -> (String, DiffStats) {
    let old_lines = split_lines(old_content);
    let new_lines = split_lines(new_content);
    let matches = find_matches(&old_lines, &new_lines);

    let mut writer = DiffWriter::default();
    let mut old_idx = 0;
    let mut new_idx = 0;

    for m in &matches {
        writer.deleted(&old_lines[old_idx..m.old_index]);
        writer.added(&new_lines[new_idx..m.new_index]);
        writer.context(old_lines[m.old_index]);
        old_idx = m.old_index + 1;
        new_idx = m.new_index + 1;
    }

    writer.deleted(&old_lines[old_idx..]);
    writer.added(&new_lines[new_idx..]);

    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_keeps_trailing_empty() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines("a"), vec!["a"]);
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec!["", ""]);
    }

    #[test]
    fn test_identical_content_is_all_context() {
        let (text, stats) = render_diff("a\nb\nc", "a\nb\nc");
        assert_eq!(text, "  a\n  b\n  c\n");
        assert_eq!(stats, DiffStats::default());
    }

    #[test]
    fn test_pure_addition() {
        let (text, stats) = render_diff("", "a\nb\nc");
        assert_eq!(text, "+ a\n+ b\n+ c\n");
        assert_eq!(
            stats,
            DiffStats {
                added: 3,
                deleted: 0,
                modified: 3
            }
        );
    }

    #[test]
    fn test_pure_deletion() {
        let (text, stats) = render_diff("a\nb\nc", "");
        assert_eq!(text, "- a\n- b\n- c\n");
        assert_eq!(
            stats,
            DiffStats {
                added: 0,
                deleted: 3,
                modified: 3
            }
        );
    }

    #[test]
    fn test_mixed_change() {
        let (text, stats) = render_diff("a\nb\nc", "a\nx\nc");
        assert_eq!(text, "  a\n- b\n+ x\n  c\n");
        assert_eq!(
            stats,
            DiffStats {
                added: 1,
                deleted: 1,
                modified: 2
            }
        );
    }

    #[test]
    fn test_duplicate_lines_leave_one_deleted() {
        let (text, stats) = render_diff("x\nx\nx", "x\nx");
        assert_eq!(text, "  x\n  x\n- x\n");
        assert_eq!(stats.deleted, 1);
        assert_eq!(stats.added, 0);
    }

    #[test]
    fn test_tail_flush_deletes_before_adds() {
        let (text, _) = render_diff("a\nold1\nold2", "a\nnew1");
        assert_eq!(text, "  a\n- old1\n- old2\n+ new1\n");
    }

    #[test]
    fn test_trailing_newline_change() {
        let (text, stats) = render_diff("a", "a\n");
        assert_eq!(text, "  a\n+ \n");
        assert_eq!(stats.added, 1);
    }

    #[test]
    fn test_both_empty() {
        let (text, stats) = render_diff("", "");
        assert!(text.is_empty());
        assert_eq!(stats, DiffStats::default());
    }
}
