//! Error types for sanitization and sanitizer assembly

use std::fmt;

/// Errors that can occur while sanitizing a single document
///
/// These are expected outcomes of untrusted input, not defects. None of them
/// cross the public [`Sanitizer::sanitize`](crate::Sanitizer::sanitize)
/// boundary: the whole call degrades to an empty string instead.
#[derive(Debug)]
pub enum SanitizeError {
    /// HTML parsing failed
    ParseError(String),
    /// Input bytes are invalid for the detected character encoding
    EncodingError(String),
    /// Input exceeds a structural limit (e.g. nesting depth)
    InvalidInput(String),
}

impl fmt::Display for SanitizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanitizeError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            SanitizeError::EncodingError(msg) => write!(f, "Encoding error: {}", msg),
            SanitizeError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for SanitizeError {}

/// Errors raised while assembling a sanitizer from configuration
///
/// Unlike [`SanitizeError`], these are fatal and surface immediately from
/// [`SanitizerBuilder::build`](crate::SanitizerBuilder::build); a
/// misconfigured sanitizer is never constructed.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An enabled extension name does not match any registered extension
    UnknownExtension(String),
    /// A configuration value failed validation
    InvalidOption {
        /// Dotted path of the offending option (e.g. `iframe.allowed_hosts`)
        option: String,
        /// Why the value was rejected
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownExtension(name) => {
                write!(f, "Unknown extension: {}", name)
            }
            ConfigError::InvalidOption { option, message } => {
                write!(f, "Invalid option '{}': {}", option, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
