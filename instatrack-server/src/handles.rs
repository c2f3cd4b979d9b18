use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Separators accepted between handles in free-text input
/// Matches: newlines, commas, semicolons and runs of whitespace
static SEPARATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,;]+").expect("Failed to compile handle separator regex"));

/// Normalize a single handle
///
/// Trims whitespace, strips leading `@` characters and lowercases the result.
/// Returns `None` when nothing is left.
pub fn normalize_handle(raw: &str) -> Option<String> {
    let handle = raw.trim().trim_start_matches('@').trim();
    if handle.is_empty() {
        None
    } else {
        Some(handle.to_lowercase())
    }
}

/// Normalize a list of handles, dropping blanks and duplicates
///
/// Entries may hold several handles separated by newlines, commas or
/// semicolons. The first occurrence of each handle wins, so input order is kept.
///
/// # Examples
///
/// ```
/// use instatrack_server::handles::normalize_handles;
/// let handles = normalize_handles(["@example_brand\ncompetitor_one, competitor_two"]);
/// assert_eq!(handles, vec!["example_brand", "competitor_one", "competitor_two"]);
/// ```
pub fn normalize_handles<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();

    raw.into_iter()
        .flat_map(|entry| {
            SEPARATOR_REGEX
                .split(entry.as_ref())
                .filter_map(normalize_handle)
                .collect::<Vec<_>>()
        })
        .filter(|handle| seen.insert(handle.clone()))
        .collect()
}
