//! HTML5 parsing using html5ever
//!
//! This module is the boundary to the external parser collaborator: it turns
//! raw bytes into an rcdom tree that the [`DomVisitor`](crate::DomVisitor)
//! consumes. html5ever implements the WHATWG parsing algorithm, so malformed
//! markup is recovered the same way browsers recover it and parsing itself
//! essentially never fails; the failures this module reports are encoding
//! failures, which the sanitizer treats as "sanitize to empty output".
//!
//! # Configuration
//!
//! - **Scripting**: disabled (scripts are parsed as inert text, never run)
//! - **Tree builder**: RcDom, reference-counted nodes
//! - **Charset**: detected via [`crate::charset`], transcoded with
//!   encoding_rs before parsing

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::RcDom;
use std::borrow::Cow;

use crate::charset::detect_charset;
use crate::error::SanitizeError;

/// Parse HTML bytes into a DOM tree with charset detection
///
/// The charset cascade is Content-Type parameter, then meta tags, then
/// UTF-8. Input that is invalid for the detected charset is rejected with
/// [`SanitizeError::EncodingError`] rather than decoded lossily: silently
/// replacing bytes in untrusted markup has a history of smuggling markup
/// past filters.
///
/// # Examples
///
/// ```rust
/// use markup_sanitizer::parser::parse_html_with_charset;
///
/// let dom = parse_html_with_charset(b"<p>Hello</p>", None).expect("parses");
///
/// // ISO-8859-1 content is transcoded before parsing
/// let dom = parse_html_with_charset(b"<p>Caf\xE9</p>", Some("text/html; charset=ISO-8859-1"))
///     .expect("transcodes");
/// ```
pub fn parse_html_with_charset(
    html: &[u8],
    content_type: Option<&str>,
) -> Result<RcDom, SanitizeError> {
    if html.is_empty() {
        return Err(SanitizeError::InvalidInput(
            "HTML input is empty".to_string(),
        ));
    }

    let detected_charset = detect_charset(content_type, html);

    // html5ever's `one()` expects UTF-8, so non-UTF-8 inputs must be
    // transcoded according to the detected charset first.
    let utf8_str = decode_html_to_utf8(html, &detected_charset)?;

    let dom = parse_document(RcDom::default(), Default::default()).one(utf8_str.as_ref());

    Ok(dom)
}

fn decode_html_to_utf8<'a>(
    html: &'a [u8],
    detected_charset: &str,
) -> Result<Cow<'a, str>, SanitizeError> {
    if detected_charset.eq_ignore_ascii_case("UTF-8") {
        return std::str::from_utf8(html).map(Cow::Borrowed).map_err(|e| {
            SanitizeError::EncodingError(format!(
                "Invalid UTF-8 at byte position {}: {}",
                e.valid_up_to(),
                e
            ))
        });
    }

    let encoding =
        encoding_rs::Encoding::for_label(detected_charset.as_bytes()).ok_or_else(|| {
            SanitizeError::EncodingError(format!("Unsupported charset '{}'", detected_charset))
        })?;

    encoding
        .decode_without_bom_handling_and_without_replacement(html)
        .ok_or_else(|| {
            SanitizeError::EncodingError(format!(
                "Invalid byte sequence for charset '{}'",
                detected_charset
            ))
        })
}

/// Parse HTML bytes into a DOM tree
///
/// Convenience wrapper around [`parse_html_with_charset`] with no
/// Content-Type header, relying on meta tags or the UTF-8 default.
pub fn parse_html(html: &[u8]) -> Result<RcDom, SanitizeError> {
    parse_html_with_charset(html, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_html() {
        assert!(parse_html(b"<html><body><p>Hello</p></body></html>").is_ok());
    }

    #[test]
    fn test_parse_malformed_html() {
        // Missing closing tags are recovered per the HTML5 algorithm
        assert!(parse_html(b"<div><p>Hello").is_ok());
    }

    #[test]
    fn test_parse_fragment() {
        assert!(parse_html(b"<p>Content</p>").is_ok());
    }

    #[test]
    fn test_parse_empty_input() {
        match parse_html(b"") {
            Err(SanitizeError::InvalidInput(_)) => (),
            other => panic!("Expected InvalidInput, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_parse_invalid_utf8() {
        match parse_html(b"\xFF\xFE<p>Invalid</p>") {
            Err(SanitizeError::EncodingError(_)) => (),
            other => panic!("Expected EncodingError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_parse_unknown_charset() {
        let result = parse_html_with_charset(b"<p>Hi</p>", Some("text/html; charset=x-nope"));
        match result {
            Err(SanitizeError::EncodingError(msg)) => {
                assert!(msg.contains("Unsupported charset"));
            }
            other => panic!("Expected EncodingError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_parse_iso_8859_1_transcodes() {
        // 0xE9 is "é" in ISO-8859-1 and invalid UTF-8
        let result = parse_html_with_charset(b"<p>Caf\xE9</p>", Some("text/html; charset=ISO-8859-1"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_misnested_tags() {
        assert!(parse_html(b"<b><i>text</b></i>").is_ok());
    }

    #[test]
    fn test_parse_entities_and_unicode() {
        assert!(parse_html(b"<p>&lt;tag&gt; &amp; \xE2\x9C\x93</p>").is_ok());
    }
}
