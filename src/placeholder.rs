use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Name the template ships with
pub const PLACEHOLDER: &str = "rtla";

// Literal, case-sensitive match of the placeholder
static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&regex::escape(PLACEHOLDER)).unwrap());

/// Check whether a name or text contains the placeholder
pub fn contains_placeholder(text: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(text)
}

/// Replace the first occurrence of the placeholder in a path segment.
///
/// Returns `None` when the segment does not contain the placeholder.
pub fn replace_first(segment: &str, replacement: &str) -> Option<String> {
    if !contains_placeholder(segment) {
        return None;
    }

    Some(
        PLACEHOLDER_REGEX
            .replacen(segment, 1, NoExpand(replacement))
            .into_owned(),
    )
}

/// Replace every occurrence of the placeholder in `text`.
///
/// Returns the rewritten text and the number of occurrences replaced.
pub fn replace_all(text: &str, replacement: &str) -> (String, usize) {
    let occurrences = PLACEHOLDER_REGEX.find_iter(text).count();
    if occurrences == 0 {
        return (text.to_string(), 0);
    }

    let rewritten = PLACEHOLDER_REGEX
        .replace_all(text, NoExpand(replacement))
        .into_owned();

    (rewritten, occurrences)
}
