//! Text and path truncation for fixed-width panels
//!
//! Lengths are counted in characters, so a cut never lands inside a
//! multi-byte UTF-8 sequence.

const PATH_ELLIPSIS: &str = "...";

fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn last_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

/// Truncate text to `max_length` characters, ending in `ellipsis`
///
/// At least one character of the original text is kept, so a
/// `max_length` smaller than the ellipsis yields one character plus the
/// ellipsis rather than an empty string.
pub fn truncate_text(text: &str, max_length: usize, ellipsis: &str) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let keep = max_length.saturating_sub(ellipsis.chars().count()).max(1);
    format!("{}{}", take_chars(text, keep), ellipsis)
}

/// Truncate a path to `max_length` characters with a middle ellipsis
///
/// Keeps up to `prefix_chars` leading and `suffix_chars` trailing
/// characters. When both do not fit, they shrink proportionally. The
/// result never exceeds `max_length`.
pub fn truncate_path(
    path: &str,
    max_length: usize,
    prefix_chars: usize,
    suffix_chars: usize,
) -> String {
    let len = path.chars().count();
    if len <= max_length {
        return path.to_string();
    }

    let ellipsis_len = PATH_ELLIPSIS.len();
    if max_length <= ellipsis_len {
        return take_chars(path, max_length).to_string();
    }

    let available = max_length - ellipsis_len;
    let requested = prefix_chars.saturating_add(suffix_chars);
    let (mut prefix, mut suffix) = if requested > available {
        let prefix = (prefix_chars as u128 * available as u128 / requested as u128) as usize;
        (prefix, available - prefix)
    } else {
        (prefix_chars, suffix_chars)
    };

    prefix = prefix.min(len);
    suffix = suffix.min(len - prefix);

    format!(
        "{}{}{}",
        take_chars(path, prefix),
        PATH_ELLIPSIS,
        last_chars(path, suffix)
    )
}
