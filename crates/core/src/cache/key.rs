//! Cache key derivation.

/// Length in bytes of a title cache key.
pub const TITLE_KEY_LEN: usize = 16;

/// Key for the title namespace: the MD5 digest of the exact URL string.
///
/// No normalization happens here; callers must hand the same string to
/// reads and writes.
pub fn title_key(url: &str) -> [u8; TITLE_KEY_LEN] {
    md5::compute(url.as_bytes()).0
}

/// Hostname of `url`, used as the key of the favicon namespace.
///
/// Ports and IPv6 brackets are stripped. Returns `None` if the URL does not
/// parse or has no host.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url)
        .inspect_err(|e| tracing::debug!(url, error = %e, "unparseable url"))
        .ok()?;
    let host = parsed.host_str()?.trim_start_matches('[').trim_end_matches(']');
    if host.is_empty() { None } else { Some(host.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_key_stability() {
        assert_eq!(title_key("http://example.com"), title_key("http://example.com"));
    }

    #[test]
    fn test_title_key_is_exact() {
        assert_ne!(title_key("http://example.com"), title_key("http://example.com/"));
        assert_ne!(title_key("http://example.com"), title_key(" http://example.com"));
    }

    #[test]
    fn test_title_key_known_digest() {
        let key = title_key("");
        assert_eq!(key.len(), TITLE_KEY_LEN);
        assert_eq!(key[..4], [0xd4, 0x1d, 0x8c, 0xd9]);
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("http://example.com/path?q=1").as_deref(), Some("example.com"));
        assert_eq!(host_of("https://foo.com:8443/bar").as_deref(), Some("foo.com"));
        assert_eq!(host_of("http://[::1]:8080/").as_deref(), Some("::1"));
    }

    #[test]
    fn test_host_of_invalid() {
        assert_eq!(host_of("not a url"), None);
        assert_eq!(host_of("mailto:someone@example.com"), None);
    }
}
