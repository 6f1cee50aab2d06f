//! Public sanitize entry point
//!
//! Wires the parser, the traversal engine, and the serializer together
//! behind an infallible string-in/string-out API. All per-document failure
//! paths (invalid encoding, parse failure, depth overflow) degrade to an
//! empty string: untrusted input must never make the boundary throw, and
//! partial output is never returned.

use std::borrow::Cow;

use crate::builder::SanitizerBuilder;
use crate::config::SanitizerConfig;
use crate::error::{ConfigError, SanitizeError};
use crate::extension::default_extensions;
use crate::parser::parse_html_with_charset;
use crate::visitor::DomVisitor;

/// An assembled, immutable sanitizer
///
/// Logically immutable after assembly: one instance may be shared and
/// invoked concurrently from multiple threads. Every sanitize call
/// allocates its own cursor and output tree; no state is shared across
/// invocations.
pub struct Sanitizer {
    dom_visitor: DomVisitor,
}

impl Sanitizer {
    pub(crate) fn new(dom_visitor: DomVisitor) -> Self {
        Self { dom_visitor }
    }

    /// Create a sanitizer with every built-in policy bundle registered
    ///
    /// Only the bundles named in `config.extensions` are enabled; the rest
    /// are merely available. Misconfiguration fails here, eagerly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use markup_sanitizer::{Sanitizer, SanitizerConfig};
    ///
    /// let sanitizer = Sanitizer::create(&SanitizerConfig::default()).unwrap();
    /// assert_eq!(
    ///     sanitizer.sanitize("<p onclick=\"alert(1)\">Hello</p>"),
    ///     "<p>Hello</p>"
    /// );
    /// ```
    pub fn create(config: &SanitizerConfig) -> Result<Self, ConfigError> {
        let mut builder = SanitizerBuilder::new();
        for extension in default_extensions() {
            builder.register_extension(extension);
        }
        builder.build(config)
    }

    /// Sanitize an HTML string
    ///
    /// Embedded NUL characters are stripped before parsing. Any internal
    /// failure yields `""`.
    pub fn sanitize(&self, html: &str) -> String {
        let html: Cow<'_, str> = if html.contains('\0') {
            Cow::Owned(html.replace('\0', ""))
        } else {
            Cow::Borrowed(html)
        };
        self.sanitize_inner(html.as_bytes(), None)
            .unwrap_or_default()
    }

    /// Sanitize raw bytes of unknown encoding
    ///
    /// The charset is detected from the optional Content-Type value, the
    /// document's meta tags, or defaults to UTF-8; bytes invalid for the
    /// detected charset yield `""` rather than a lossy decode.
    pub fn sanitize_bytes(&self, html: &[u8], content_type: Option<&str>) -> String {
        let html: Cow<'_, [u8]> = if html.contains(&0) {
            Cow::Owned(html.iter().copied().filter(|&b| b != 0).collect())
        } else {
            Cow::Borrowed(html)
        };
        self.sanitize_inner(&html, content_type).unwrap_or_default()
    }

    fn sanitize_inner(
        &self,
        html: &[u8],
        content_type: Option<&str>,
    ) -> Result<String, SanitizeError> {
        let dom = parse_html_with_charset(html, content_type)?;
        let document = self.dom_visitor.visit(&dom.document)?;
        Ok(document.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_sanitizer() -> Sanitizer {
        Sanitizer::create(&SanitizerConfig::default()).expect("default config builds")
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(default_sanitizer().sanitize(""), "");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(default_sanitizer().sanitize("Hello world"), "Hello world");
    }

    #[test]
    fn test_nul_characters_stripped() {
        assert_eq!(
            default_sanitizer().sanitize("<p>He\0llo</p>"),
            "<p>Hello</p>"
        );
    }

    #[test]
    fn test_invalid_bytes_degrade_to_empty() {
        let sanitizer = default_sanitizer();
        assert_eq!(sanitizer.sanitize_bytes(b"<p>\xFF\xFEHello</p>", None), "");
    }

    #[test]
    fn test_bytes_with_charset_transcodes() {
        let sanitizer = default_sanitizer();
        assert_eq!(
            sanitizer.sanitize_bytes(b"<p>Caf\xE9</p>", Some("text/html; charset=ISO-8859-1")),
            "<p>Café</p>"
        );
    }

    #[test]
    fn test_depth_overflow_degrades_to_empty() {
        let config = SanitizerConfig {
            max_input_depth: 4,
            ..Default::default()
        };
        let sanitizer = Sanitizer::create(&config).unwrap();
        // document > html > body already uses depth 2; this nests past 4
        assert_eq!(sanitizer.sanitize("<div><div><div>deep</div></div></div>"), "");
        assert_eq!(sanitizer.sanitize("flat"), "flat");
    }

    #[test]
    fn test_shared_across_threads() {
        let sanitizer = std::sync::Arc::new(default_sanitizer());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sanitizer = sanitizer.clone();
                std::thread::spawn(move || {
                    sanitizer.sanitize(&format!("<p>thread {}</p><script>x</script>", i))
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("<p>thread {}</p>", i));
        }
    }
}
