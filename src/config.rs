//! Typed sanitizer configuration
//!
//! Per-rule options are explicit structs with named fields and documented
//! defaults; callers override selectively with struct-update syntax:
//!
//! ```rust
//! use markup_sanitizer::config::{IframeConfig, SanitizerConfig};
//!
//! let config = SanitizerConfig {
//!     extensions: vec!["basic".to_string(), "iframe".to_string()],
//!     iframe: IframeConfig {
//!         allowed_hosts: Some(vec!["youtube.com".to_string()]),
//!         force_https: true,
//!     },
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```
//!
//! Unknown option keys are unrepresentable by construction. Everything that
//! *can* be invalid (host entries, scheme names, the depth bound) is
//! validated eagerly at assembly time: a misconfiguration aborts `build()`
//! and is never deferred to a per-document sanitize call.

use crate::error::ConfigError;
use crate::url::UrlSanitizer;
use crate::visitor::DEFAULT_MAX_DEPTH;

/// Top-level configuration consumed by the builder
#[derive(Debug, Clone)]
pub struct SanitizerConfig {
    /// Names of the policy bundles to enable, in registration order
    pub extensions: Vec<String>,
    /// Options for the `a` rule (basic bundle)
    pub anchor: AnchorConfig,
    /// Options for the `img` rule (image bundle)
    pub image: ImageConfig,
    /// Options for the `iframe` rule (iframe bundle)
    pub iframe: IframeConfig,
    /// Maximum input nesting depth before the call degrades to empty output
    pub max_input_depth: usize,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["basic".to_string()],
            anchor: AnchorConfig::default(),
            image: ImageConfig::default(),
            iframe: IframeConfig::default(),
            max_input_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SanitizerConfig {
    /// Eagerly validate every option
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for name in &self.extensions {
            // A bundle enabled twice would register every rule twice and
            // each copy would emit its own output element
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::InvalidOption {
                    option: "extensions".to_string(),
                    message: format!("'{}' is enabled more than once", name),
                });
            }
        }
        validate_hosts("anchor.allowed_hosts", &self.anchor.allowed_hosts)?;
        validate_hosts("image.allowed_hosts", &self.image.allowed_hosts)?;
        validate_hosts("iframe.allowed_hosts", &self.iframe.allowed_hosts)?;
        validate_schemes("anchor.allowed_schemes", &self.anchor.allowed_schemes)?;
        if self.max_input_depth == 0 {
            return Err(ConfigError::InvalidOption {
                option: "max_input_depth".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Options for the anchor (`a`) rule
#[derive(Debug, Clone)]
pub struct AnchorConfig {
    /// Hosts `href` may point at; `None` allows any host
    pub allowed_hosts: Option<Vec<String>>,
    /// Schemes `href` may use (relative references are always accepted)
    pub allowed_schemes: Vec<String>,
    /// Rewrite `http:` hrefs to `https:`
    pub force_https: bool,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: None,
            allowed_schemes: vec![
                "http".to_string(),
                "https".to_string(),
                "mailto".to_string(),
            ],
            force_https: false,
        }
    }
}

impl AnchorConfig {
    pub(crate) fn url_sanitizer(&self) -> UrlSanitizer {
        UrlSanitizer::new(
            self.allowed_schemes.clone(),
            self.allowed_hosts.clone(),
            self.force_https,
            true,
        )
    }
}

/// Options for the image (`img`) rule
#[derive(Debug, Clone, Default)]
pub struct ImageConfig {
    /// Hosts `src` may point at; `None` allows any host
    pub allowed_hosts: Option<Vec<String>>,
    /// Additionally accept `data:` URIs for inline images
    pub allow_data_uri: bool,
    /// Rewrite `http:` sources to `https:`
    pub force_https: bool,
}

impl ImageConfig {
    pub(crate) fn url_sanitizer(&self) -> UrlSanitizer {
        let mut schemes = vec!["http".to_string(), "https".to_string()];
        if self.allow_data_uri {
            schemes.push("data".to_string());
        }
        UrlSanitizer::new(schemes, self.allowed_hosts.clone(), self.force_https, false)
    }
}

/// Options for the iframe rule
#[derive(Debug, Clone, Default)]
pub struct IframeConfig {
    /// Hosts `src` may point at; `None` allows any host
    pub allowed_hosts: Option<Vec<String>>,
    /// Rewrite `http:` sources to `https:`
    pub force_https: bool,
}

impl IframeConfig {
    pub(crate) fn url_sanitizer(&self) -> UrlSanitizer {
        UrlSanitizer::new(
            vec!["http".to_string(), "https".to_string()],
            self.allowed_hosts.clone(),
            self.force_https,
            false,
        )
    }
}

fn validate_hosts(option: &str, hosts: &Option<Vec<String>>) -> Result<(), ConfigError> {
    let Some(hosts) = hosts else {
        return Ok(());
    };
    for host in hosts {
        if host.is_empty() {
            return Err(ConfigError::InvalidOption {
                option: option.to_string(),
                message: "host entries must not be empty".to_string(),
            });
        }
        if host.contains([':', '/']) || host.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidOption {
                option: option.to_string(),
                message: format!("'{}' is not a bare host name", host),
            });
        }
    }
    Ok(())
}

fn validate_schemes(option: &str, schemes: &[String]) -> Result<(), ConfigError> {
    if schemes.is_empty() {
        return Err(ConfigError::InvalidOption {
            option: option.to_string(),
            message: "at least one scheme is required".to_string(),
        });
    }
    for scheme in schemes {
        let mut chars = scheme.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_lowercase())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "+-.".contains(c));
        if !valid {
            return Err(ConfigError::InvalidOption {
                option: option.to_string(),
                message: format!("'{}' is not a valid lowercase scheme name", scheme),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SanitizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_host_with_scheme() {
        let config = SanitizerConfig {
            iframe: IframeConfig {
                allowed_hosts: Some(vec!["https://youtube.com".to_string()]),
                force_https: false,
            },
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::InvalidOption { option, .. }) => {
                assert_eq!(option, "iframe.allowed_hosts");
            }
            other => panic!("Expected InvalidOption, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_host_entry() {
        let config = SanitizerConfig {
            image: ImageConfig {
                allowed_hosts: Some(vec![String::new()]),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_uppercase_scheme() {
        let config = SanitizerConfig {
            anchor: AnchorConfig {
                allowed_schemes: vec!["HTTPS".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_scheme_list() {
        let config = SanitizerConfig {
            anchor: AnchorConfig {
                allowed_schemes: vec![],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_extension_names() {
        let config = SanitizerConfig {
            extensions: vec!["basic".to_string(), "basic".to_string()],
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::InvalidOption { option, .. }) => {
                assert_eq!(option, "extensions");
            }
            other => panic!("Expected InvalidOption, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_depth() {
        let config = SanitizerConfig {
            max_input_depth: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
