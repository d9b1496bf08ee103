//! Formatting diffs for a fixed-width panel
//!
//! Turns a [`DiffResult`] into rows tagged by kind and cut to the panel
//! width. Styling goes through an explicit [`DiffPalette`]; nothing here
//! touches the terminal.

use crate::config::{DiffPalette, DisplayConfig};
use crate::diff::{DiffResult, DiffStats};
use crate::truncate::{truncate_path, truncate_text};
use ratatui::style::Style;
use ratatui::text::Line;

/// Shown when no diff has been loaded
pub const NO_DIFF_MESSAGE: &str = "No diff available";
/// Shown in place of a binary diff
pub const BINARY_MESSAGE: &str = "Binary file differences not shown";
/// Summary for a diff without added or deleted lines
pub const NO_CHANGES_MESSAGE: &str = "No changes";

/// Kind of a displayed row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Line only in the new content
    Added,
    /// Line only in the old content
    Deleted,
    /// Unchanged line
    Context,
    /// Placeholder message
    Notice,
    /// Empty row
    Blank,
}

impl LineKind {
    fn of(row: &str) -> LineKind {
        match row.chars().next() {
            None => LineKind::Blank,
            Some('+') => LineKind::Added,
            Some('-') => LineKind::Deleted,
            Some(_) => LineKind::Context,
        }
    }

    /// Style for this kind of row
    pub fn style(&self, palette: &DiffPalette) -> Style {
        match self {
            LineKind::Added => Style::default().fg(palette.added).bg(palette.added_bg),
            LineKind::Deleted => Style::default().fg(palette.deleted).bg(palette.deleted_bg),
            LineKind::Context => Style::default().fg(palette.context),
            LineKind::Notice => Style::default().fg(palette.notice),
            LineKind::Blank => Style::default(),
        }
    }
}

/// A row ready to be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub kind: LineKind,
    pub text: String,
}

impl DisplayLine {
    fn notice(text: &str) -> Self {
        DisplayLine {
            kind: LineKind::Notice,
            text: text.to_string(),
        }
    }

    /// Convert to a styled ratatui line
    pub fn to_line(&self, palette: &DiffPalette) -> Line<'static> {
        Line::styled(self.text.clone(), self.kind.style(palette))
    }
}

/// Format a diff for a panel `width` columns wide
pub fn display_lines(
    diff: Option<&DiffResult>,
    width: usize,
    config: &DisplayConfig,
) -> Vec<DisplayLine> {
    let Some(diff) = diff else {
        return vec![DisplayLine::notice(NO_DIFF_MESSAGE)];
    };
    if diff.is_binary {
        return vec![DisplayLine::notice(BINARY_MESSAGE)];
    }

    let max = config.row_width(width);
    diff.content
        .split('\n')
        .map(|row| DisplayLine {
            kind: LineKind::of(row),
            text: if row.is_empty() {
                String::new()
            } else {
                truncate_text(row, max, &config.ellipsis)
            },
        })
        .collect()
}

/// One-line summary of diff statistics
pub fn stats_summary(stats: Option<&DiffStats>) -> String {
    match stats {
        Some(stats) if !stats.is_empty() => format!(
            "{} insertions(+), {} deletions(-)",
            stats.added, stats.deleted
        ),
        _ => NO_CHANGES_MESSAGE.to_string(),
    }
}

/// Shorten a file path for the status list
pub fn display_path(path: &str, config: &DisplayConfig) -> String {
    truncate_path(path, config.path_max, config.path_prefix, config.path_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_diff;
    use ratatui::style::Color;

    #[test]
    fn test_no_diff() {
        let lines = display_lines(None, 80, &DisplayConfig::default());
        assert_eq!(lines, vec![DisplayLine::notice(NO_DIFF_MESSAGE)]);
    }

    #[test]
    fn test_binary_diff() {
        let diff = compute_diff("a.bin", None, "\0\0");
        let lines = display_lines(Some(&diff), 80, &DisplayConfig::default());
        assert_eq!(lines, vec![DisplayLine::notice(BINARY_MESSAGE)]);
    }

    #[test]
    fn test_line_kinds() {
        let diff = compute_diff("f", Some("a\nb\n"), "a\nx\n");
        let kinds: Vec<LineKind> = display_lines(Some(&diff), 80, &DisplayConfig::default())
            .into_iter()
            .map(|l| l.kind)
            .collect();
        // "  a", "- b", "+ x", "  ", then the row after the final newline
        assert_eq!(
            kinds,
            vec![
                LineKind::Context,
                LineKind::Deleted,
                LineKind::Added,
                LineKind::Context,
                LineKind::Blank,
            ]
        );
    }

    #[test]
    fn test_rows_are_truncated_to_width() {
        let long = "x".repeat(200);
        let diff = compute_diff("f", None, &long);
        let config = DisplayConfig::default();
        let lines = display_lines(Some(&diff), 40, &config);

        assert_eq!(lines[0].kind, LineKind::Added);
        assert_eq!(lines[0].text.chars().count(), config.row_width(40));
        assert!(lines[0].text.ends_with("..."));
    }

    #[test]
    fn test_narrow_panel_uses_min_width() {
        let diff = compute_diff("f", None, &"y".repeat(50));
        let lines = display_lines(Some(&diff), 5, &DisplayConfig::default());
        assert_eq!(lines[0].text.chars().count(), 15);
    }

    #[test]
    fn test_stats_summary() {
        assert_eq!(stats_summary(None), NO_CHANGES_MESSAGE);
        assert_eq!(stats_summary(Some(&DiffStats::default())), NO_CHANGES_MESSAGE);

        let stats = DiffStats {
            added: 3,
            deleted: 1,
            modified: 4,
        };
        assert_eq!(stats_summary(Some(&stats)), "3 insertions(+), 1 deletions(-)");
    }

    #[test]
    fn test_binary_modification_summary_is_no_changes() {
        let diff = compute_diff("a.bin", Some("old"), "\0");
        assert_eq!(stats_summary(Some(&diff.stats)), NO_CHANGES_MESSAGE);
    }

    #[test]
    fn test_display_path() {
        let config = DisplayConfig::default();
        assert_eq!(display_path("src/main.rs", &config), "src/main.rs");

        let long = format!("{}/file.rs", "deep".repeat(20));
        let shown = display_path(&long, &config);
        assert_eq!(shown.chars().count(), 60);
        assert!(shown.starts_with("deepdeep"));
        assert!(shown.ends_with("/file.rs"));
        assert!(shown.contains("..."));
    }

    #[test]
    fn test_to_line_applies_palette() {
        let palette = DiffPalette::default();
        let line = DisplayLine {
            kind: LineKind::Deleted,
            text: "- gone".to_string(),
        }
        .to_line(&palette);

        assert_eq!(line.style.fg, Some(Color::Red));
        assert_eq!(line.style.bg, Some(Color::Rgb(40, 0, 0)));
    }
}
