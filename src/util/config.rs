//! Configuration file parsing utilities.
//!
//! `settings.conf` is a flat `key = value` file; these helpers keep the line
//! handling in one place.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Drop a trailing ` # comment` from a value.
///
/// Details:
/// - Only a `#` preceded by whitespace starts a comment, so URLs with
///   fragments such as `https://x.so/#top` survive.
#[must_use]
pub fn strip_inline_comment(value: &str) -> &str {
    let bytes = value.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#' && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return value[..i].trim_end();
        }
    }
    value.trim_end()
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=`; the key is lower-cased with `-` and spaces
///   normalized to `_`; the value is trimmed and stripped of inline comments.
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.trim().split_once('=')?;
    let key = key.trim().to_lowercase().replace(['-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(value.trim()).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# locale = so"));
        assert!(skip_comment_or_empty("; old"));
        assert!(!skip_comment_or_empty("locale = so"));
    }

    #[test]
    /// What: Keys are normalized and inline comments dropped
    fn parse_key_value_normalizes() {
        assert_eq!(
            parse_key_value("Admin-Secret = hunter2 # change me"),
            Some(("admin_secret".into(), "hunter2".into()))
        );
        assert_eq!(
            parse_key_value("public_url=https://x.so/#top"),
            Some(("public_url".into(), "https://x.so/#top".into()))
        );
        assert_eq!(parse_key_value("no equals sign"), None);
        assert_eq!(parse_key_value(" = value"), None);
    }
}
