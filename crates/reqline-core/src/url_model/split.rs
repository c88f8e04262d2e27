//! Split a string on the earliest of several delimiters.

/// Splits `s` at the earliest occurrence of any char in `delims`.
///
/// Returns `(before, after, Some(delim))`, or `(s, "", None)` when no delimiter
/// occurs (including when `delims` is empty). Scans once regardless of how many
/// delimiters are given.
pub fn split_first<'a>(s: &'a str, delims: &[char]) -> (&'a str, &'a str, Option<char>) {
    match s.char_indices().find(|(_, c)| delims.contains(c)) {
        Some((idx, delim)) => (&s[..idx], &s[idx + delim.len_utf8()..], Some(delim)),
        None => (s, "", None),
    }
}
