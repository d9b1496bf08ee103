//! Greedy line matching
//!
//! Pairs identical lines between the old and new content. Matching is
//! first-fit rather than an optimal longest common subsequence: each old
//! line takes the earliest identical new line after the previous match.
//! On heavily reordered input this can produce a longer edit script than
//! an LCS solver would.

use std::collections::HashMap;

/// An old line paired with an identical new line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch {
    /// Index into the old lines
    pub old_index: usize,
    /// Index into the new lines
    pub new_index: usize,
}

/// Find matching lines between two line sequences
///
/// The returned matches are strictly increasing in both `old_index` and
/// `new_index`. Duplicate lines pair left to right.
pub fn find_matches(old_lines: &[&str], new_lines: &[&str]) -> Vec<LineMatch> {
    if old_lines.is_empty() || new_lines.is_empty() {
        return Vec::new();
    }

    // Positions are pushed in order, so each list is ascending
    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, &line) in new_lines.iter().enumerate() {
        positions.entry(line).or_default().push(i);
    }

    let mut matches = Vec::new();
    let mut next_new = 0;

    for (old_index, line) in old_lines.iter().enumerate() {
        let Some(candidates) = positions.get(line) else {
            continue;
        };

        let at = candidates.partition_point(|&p| p < next_new);
        if let Some(&new_index) = candidates.get(at) {
            matches.push(LineMatch {
                old_index,
                new_index,
            });
            next_new = new_index + 1;
        }
    }

    tracing::trace!(
        "matched {} of {} old lines against {} new lines",
        matches.len(),
        old_lines.len(),
        new_lines.len()
    );

    matches
}
