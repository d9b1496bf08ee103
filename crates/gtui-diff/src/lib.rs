//! gtui-diff - Diff engine for the gtui staging view
//!
//! This crate computes the per-file diff shown next to the list of changed
//! files while staging, plus the helpers used to fit it into a panel.
//!
//! # Features
//!
//! - Binary detection by NUL-byte sniffing of the first 512 bytes
//! - Greedy, order-preserving line matching
//! - `"+ "` / `"- "` / `"  "` rendering with added/deleted counts
//! - Character-safe text and path truncation
//! - Debouncing of diff requests driven by list navigation
//!
//! # Example
//!
//! ```
//! use gtui_diff::compute_diff;
//!
//! let diff = compute_diff("src/lib.rs", Some("a\nb\nc"), "a\nx\nc");
//! assert_eq!(diff.content, "  a\n- b\n+ x\n  c\n");
//! assert_eq!(diff.stats.modified, 2);
//! ```

pub mod config;
pub mod diff;
pub mod display;
pub mod error;
pub mod schedule;
pub mod source;
pub mod truncate;

pub use config::{DiffPalette, DisplayConfig, EngineConfig, ScheduleConfig};
pub use diff::{
    compute_diff, diff_file, find_matches, is_binary_content, render_diff, DiffResult, DiffStats,
    LineMatch, BINARY_PLACEHOLDER,
};
pub use display::{display_lines, display_path, stats_summary, DisplayLine, LineKind};
pub use error::{EngineError, EngineResult};
pub use schedule::{DiffScheduler, DiffTicket};
pub use source::{diff_path, ContentSource, MemorySource};
pub use truncate::{truncate_path, truncate_text};
