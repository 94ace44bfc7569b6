//! Line-level parsing for `key = value` settings files.

/// What: Check if a line carries no setting (blank or comment).
///
/// Details:
/// - Comment lines start with `#`, `//`, or `;` after trimming.
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Normalise a settings key.
///
/// Output:
/// - Lowercase key with `.`, `-`, and spaces replaced by `_`.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if matches!(c, '.' | '-' | ' ') { '_' } else { c })
        .collect()
}

/// What: Remove a trailing ` #` or ` //` comment from a value.
///
/// Details:
/// - Only a marker preceded by whitespace counts, so URLs keep their `//` and `#fragment`.
#[must_use]
pub fn strip_inline_comment(value: &str) -> &str {
    let mut end = value.len();
    for marker in [" #", "\t#", " //", "\t//"] {
        if let Some(idx) = value.find(marker) {
            end = end.min(idx);
        }
    }
    value[..end].trim()
}

/// What: Parse one settings line.
///
/// Output:
/// - `Some((normalised_key, value))`, or `None` for blank lines, comments, and lines
///   without `=`.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    if skip_comment_or_empty(line) {
        return None;
    }
    let (key, value) = line.trim().split_once('=')?;
    let key = normalize_key(key);
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(value.trim()).to_string()))
}
