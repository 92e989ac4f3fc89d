//! Input URL normalization.

/// Trim `raw` and prefix `http://` unless it already starts with `http:` or
/// `https:`.
///
/// The prefix check is a plain string test: nothing is lowercased or parsed.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http:") || trimmed.starts_with("https:") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}
