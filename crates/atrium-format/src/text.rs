//! Text truncation for constrained layouts.

use unicode_segmentation::UnicodeSegmentation;

/// Marker appended to truncated text.
const ELLIPSIS: &str = "...";

/// Truncate `text` to at most `max_len` visible characters, appending
/// `"..."` when anything was cut.
///
/// Length is counted in grapheme clusters, not bytes or code points: an
/// emoji or a combining sequence counts as one character and is never
/// split in half. Text whose cluster count is within `max_len` is
/// returned unchanged; `max_len == 0` yields just the marker for
/// non-empty input.
///
/// # Example
///
/// ```
/// use atrium_format::truncate;
///
/// assert_eq!(truncate("hello", 10), "hello");
/// assert_eq!(truncate("hello world", 5), "hello...");
/// assert_eq!(truncate("", 0), "");
/// ```
pub fn truncate(text: &str, max_len: usize) -> String {
    let mut clusters = text.grapheme_indices(true);
    match clusters.nth(max_len) {
        // The cluster after the limit exists, so something must be cut.
        Some((cut_at, _)) => format!("{}{ELLIPSIS}", &text[..cut_at]),
        None => text.to_string(),
    }
}
