//! Sentence-joining rules for narration text.
//!
//! Everything the player reads back from a command is a single flowing
//! sentence assembled from segments. The joining rules below are fixed
//! formatting rules for the shipped (English) phrasing.

/// Prefix placed before the list of reachable locations.
pub const EXITS_PREFIX: &str = "you can go to - ";
/// Prefix placed before the list of pending quests.
pub const QUESTS_PREFIX: &str = "you need to ";
/// Connective used between the final two entries of a list.
pub const AND: &str = " and ";

/// Join narration segments into one sentence.
///
/// Empty segments are skipped. Non-empty segments are separated by `", "`,
/// except that the last segment is preceded by `". "`. Nothing is emitted
/// in front of the first non-empty segment.
pub fn join_segments(segments: &[&str]) -> String {
    let mut out = String::new();
    let last = segments.len().saturating_sub(1);
    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(if i == last { ". " } else { ", " });
        }
        out.push_str(segment);
    }
    out
}

/// Join list entries with commas, using [`AND`] between the final pair.
///
/// ```
/// use ramble_engine::narration::join_with_and;
///
/// assert_eq!(join_with_and(&["a"]), "a");
/// assert_eq!(join_with_and(&["a", "b", "c"]), "a, b and c");
/// ```
pub fn join_with_and<S: AsRef<str>>(entries: &[S]) -> String {
    match entries {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(AsRef::as_ref).collect();
            format!("{}{AND}{}", head.join(", "), last.as_ref())
        },
    }
}
