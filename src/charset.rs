//! Character encoding detection for byte-oriented input
//!
//! The byte-oriented entry point ([`Sanitizer::sanitize_bytes`]) accepts
//! documents whose encoding is unknown. Detection follows a three-level
//! cascade:
//!
//! 1. **Content-Type header**: `charset` parameter, when the caller has one
//! 2. **HTML meta tags**: `<meta charset>` or `<meta http-equiv="Content-Type">`
//! 3. **Default to UTF-8** when both fail
//!
//! [`Sanitizer::sanitize_bytes`]: crate::Sanitizer::sanitize_bytes

use regex::Regex;
use std::sync::OnceLock;

/// Default charset when detection fails
const DEFAULT_CHARSET: &str = "UTF-8";

/// Maximum bytes to scan for meta charset tags
const META_SCAN_LIMIT: usize = 1024;

/// Detect character encoding using the three-level cascade
///
/// Always returns a charset name, defaulting to `"UTF-8"` when neither the
/// Content-Type header nor the document declares one.
///
/// # Examples
///
/// ```rust
/// use markup_sanitizer::charset::detect_charset;
///
/// let charset = detect_charset(Some("text/html; charset=ISO-8859-1"), b"<p>..</p>");
/// assert_eq!(charset, "ISO-8859-1");
///
/// let html = b"<html><head><meta charset=\"UTF-8\"></head></html>";
/// assert_eq!(detect_charset(None, html), "UTF-8");
///
/// assert_eq!(detect_charset(None, b"<p>No charset</p>"), "UTF-8");
/// ```
pub fn detect_charset(content_type: Option<&str>, html: &[u8]) -> String {
    if let Some(ct) = content_type
        && let Some(charset) = extract_charset_from_content_type(ct)
    {
        return normalize_charset(&charset);
    }

    if let Some(charset) = extract_charset_from_html(html) {
        return normalize_charset(&charset);
    }

    DEFAULT_CHARSET.to_string()
}

/// Extract the charset parameter from a Content-Type header value
///
/// Handles `charset=VALUE`, `charset="VALUE"`, missing whitespace, and
/// additional parameters after the charset.
pub fn extract_charset_from_content_type(content_type: &str) -> Option<String> {
    static CHARSET_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    let regex =
        CHARSET_REGEX.get_or_init(|| Regex::new(r#"(?i)charset\s*=\s*"?([^";,\s]+)"?"#).ok());
    let regex = regex.as_ref()?;

    regex
        .captures(content_type)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract a charset declaration from HTML meta tags
///
/// Supports the HTML5 form (`<meta charset="UTF-8">`) and the HTML4 form
/// (`<meta http-equiv="Content-Type" content="text/html; charset=UTF-8">`).
/// Only the first [`META_SCAN_LIMIT`] bytes are scanned; charset meta tags
/// are required to appear early in the document.
pub fn extract_charset_from_html(html: &[u8]) -> Option<String> {
    let scan_limit = std::cmp::min(html.len(), META_SCAN_LIMIT);
    // Lossy conversion is fine for meta tag detection
    let html_str = String::from_utf8_lossy(&html[..scan_limit]);

    static HTML5_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    let html5_regex =
        HTML5_REGEX.get_or_init(|| Regex::new(r#"(?i)<meta\s+charset\s*=\s*"?([^";>\s]+)"?"#).ok());
    let html5_regex = html5_regex.as_ref()?;

    if let Some(caps) = html5_regex.captures(&html_str)
        && let Some(m) = caps.get(1)
    {
        return Some(m.as_str().to_string());
    }

    static HTML4_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    let html4_regex = HTML4_REGEX.get_or_init(|| {
        Regex::new(
            r#"(?i)<meta\s+http-equiv\s*=\s*"?Content-Type"?\s+content\s*=\s*"?[^">]*charset\s*=\s*([^";>\s]+)"?"#,
        )
        .ok()
    });
    let html4_regex = html4_regex.as_ref()?;

    if let Some(caps) = html4_regex.captures(&html_str)
        && let Some(m) = caps.get(1)
    {
        return Some(m.as_str().to_string());
    }

    None
}

/// Normalize a charset name to uppercase
pub fn normalize_charset(charset: &str) -> String {
    charset.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_charset_from_content_type_basic() {
        assert_eq!(
            extract_charset_from_content_type("text/html; charset=UTF-8"),
            Some("UTF-8".to_string())
        );
    }

    #[test]
    fn test_extract_charset_from_content_type_quoted() {
        assert_eq!(
            extract_charset_from_content_type("text/html; charset=\"ISO-8859-1\""),
            Some("ISO-8859-1".to_string())
        );
    }

    #[test]
    fn test_extract_charset_from_content_type_no_space() {
        assert_eq!(
            extract_charset_from_content_type("text/html;charset=UTF-8"),
            Some("UTF-8".to_string())
        );
    }

    #[test]
    fn test_extract_charset_from_content_type_case_insensitive() {
        assert_eq!(
            extract_charset_from_content_type("text/html; CHARSET=utf-8"),
            Some("utf-8".to_string())
        );
    }

    #[test]
    fn test_extract_charset_from_content_type_missing() {
        assert_eq!(extract_charset_from_content_type("text/html"), None);
    }

    #[test]
    fn test_extract_charset_from_html_meta5() {
        let html = b"<html><head><meta charset=\"UTF-8\"></head></html>";
        assert_eq!(extract_charset_from_html(html), Some("UTF-8".to_string()));
    }

    #[test]
    fn test_extract_charset_from_html_meta4() {
        let html =
            b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-1\">";
        assert_eq!(
            extract_charset_from_html(html),
            Some("ISO-8859-1".to_string())
        );
    }

    #[test]
    fn test_extract_charset_from_html_none() {
        assert_eq!(extract_charset_from_html(b"<p>No charset</p>"), None);
    }

    #[test]
    fn test_extract_charset_ignores_meta_after_scan_limit() {
        let mut html = vec![b' '; 2048];
        html.extend_from_slice(b"<meta charset=\"ISO-8859-1\">");
        assert_eq!(extract_charset_from_html(&html), None);
    }

    #[test]
    fn test_detect_charset_priority() {
        // Content-Type header wins over the meta tag
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head></html>";
        assert_eq!(
            detect_charset(Some("text/html; charset=UTF-8"), html),
            "UTF-8"
        );
    }

    #[test]
    fn test_detect_charset_default() {
        assert_eq!(detect_charset(None, b"<p>Hello</p>"), "UTF-8");
    }

    #[test]
    fn test_normalize_charset() {
        assert_eq!(normalize_charset("utf-8"), "UTF-8");
        assert_eq!(normalize_charset("windows-1252"), "WINDOWS-1252");
    }
}
