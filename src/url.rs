//! Attribute value sanitizers for URL-carrying attributes
//!
//! Tag visitors delegate revalidation of `href`/`src`/`cite` values to a
//! [`UrlSanitizer`]. The sanitizer is rule-agnostic: the same type is
//! configured differently for anchors (relative references allowed, mailto
//! permitted) and for resource references like images and iframes (absolute
//! http/https or scheme-relative only).
//!
//! Parsing goes through the `url` crate, which applies WHATWG URL
//! normalization before we look at the scheme. That matters: inputs like
//! `"java\tscript:alert(1)"` normalize to the `javascript` scheme and are
//! rejected here, where a naive prefix check would let them through.
//!
//! Accepted values are returned as given, not re-serialized, so an
//! allow-listed URL round-trips byte-identically through sanitization. Only
//! the `force_https` upgrade rewrites the value, and it touches nothing but
//! the scheme.

use url::Url;

/// Validates and optionally rewrites a single URL attribute value
#[derive(Debug, Clone)]
pub struct UrlSanitizer {
    /// Lowercase schemes accepted for absolute URLs
    allowed_schemes: Vec<String>,
    /// When set, the URL host must equal an entry or be a subdomain of one
    allowed_hosts: Option<Vec<String>>,
    /// Rewrite `http:` to `https:` instead of keeping it
    force_https: bool,
    /// Accept scheme-less relative references (same-origin)
    allow_relative: bool,
}

impl UrlSanitizer {
    pub fn new(
        allowed_schemes: Vec<String>,
        allowed_hosts: Option<Vec<String>>,
        force_https: bool,
        allow_relative: bool,
    ) -> Self {
        Self {
            allowed_schemes,
            allowed_hosts,
            force_https,
            allow_relative,
        }
    }

    /// Validate a raw attribute value
    ///
    /// Returns the value to emit, or `None` to reject the attribute.
    pub fn sanitize(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        // Scheme-relative form: validate against https, emit unchanged
        if let Some(rest) = trimmed.strip_prefix("//") {
            if rest.is_empty() {
                return None;
            }
            let parsed = Url::parse(&format!("https:{}", trimmed)).ok()?;
            if !self.scheme_allowed("http") && !self.scheme_allowed("https") {
                return None;
            }
            self.check_host(&parsed)?;
            return Some(trimmed.to_string());
        }

        match Url::parse(trimmed) {
            Ok(parsed) => {
                if !self.scheme_allowed(parsed.scheme()) {
                    return None;
                }
                self.check_host(&parsed)?;
                if self.force_https && parsed.scheme() == "http" {
                    // Replace everything up to the first colon; the raw
                    // prefix may differ in case from the parsed scheme
                    let colon = trimmed.find(':')?;
                    return Some(format!("https{}", &trimmed[colon..]));
                }
                Some(trimmed.to_string())
            }
            Err(url::ParseError::RelativeUrlWithoutBase) if self.allow_relative => {
                Some(trimmed.to_string())
            }
            Err(_) => None,
        }
    }

    fn scheme_allowed(&self, scheme: &str) -> bool {
        self.allowed_schemes.iter().any(|s| s == scheme)
    }

    /// `Some(())` when the host passes the allow-list, `None` otherwise
    fn check_host(&self, url: &Url) -> Option<()> {
        let Some(allowed) = &self.allowed_hosts else {
            return Some(());
        };
        let host = url.host_str()?.to_ascii_lowercase();
        allowed
            .iter()
            .any(|a| {
                let a = a.to_ascii_lowercase();
                host == a || host.ends_with(&format!(".{}", a))
            })
            .then_some(())
    }
}
