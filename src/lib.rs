//! Whitelist-based HTML sanitizer
//!
//! Sanitizes untrusted HTML by rebuilding it from a parsed DOM into a new,
//! policy-constrained output tree and serializing that tree back to text.
//! Nothing from the input survives unless an explicitly registered rule
//! copied it over: tags outside the whitelist are unwrapped (their children
//! still visited), attributes outside a rule's whitelist are dropped, and
//! URL-carrying attribute values are revalidated before they are kept.
//!
//! # Architecture
//!
//! - `parser` / `charset`: html5ever parsing with charset detection
//! - `dom`: the sanitized output tree and its serializer
//! - `cursor`: per-invocation traversal state
//! - `visitor`: the `NodeVisitor` contract and the traversal engine
//! - `visitors`: the built-in rule strategies (tag, text, drop)
//! - `url`: attribute value sanitizers for URL-carrying attributes
//! - `extension`: policy bundles (basic, list, image, code, table, iframe,
//!   extra)
//! - `config` / `builder` / `sanitizer`: typed configuration, rule-set
//!   assembly, and the public entry point
//!
//! # Usage
//!
//! ```rust
//! use markup_sanitizer::{Sanitizer, SanitizerConfig};
//!
//! let sanitizer = Sanitizer::create(&SanitizerConfig::default()).unwrap();
//! let output = sanitizer.sanitize("<p>Hi <script>alert(1)</script>there</p>");
//! assert_eq!(output, "<p>Hi there</p>");
//! ```
//!
//! # Security posture
//!
//! Unknown tags are unwrapped, not deleted: their text content survives.
//! Removing a subtree therefore always requires a positively matching
//! suppression rule (`script` and `style` ship enabled). Dropping a rule
//! from a bundle never silently deletes user content, and conversely a new
//! dangerous tag must be explicitly suppressed, not merely left unlisted.

pub mod builder;
pub mod charset;
pub mod config;
pub mod cursor;
pub mod dom;
pub mod error;
pub mod extension;
pub mod parser;
pub mod sanitizer;
pub mod url;
pub mod visitor;
pub mod visitors;

// Re-export main types for convenience
pub use builder::SanitizerBuilder;
pub use config::{AnchorConfig, IframeConfig, ImageConfig, SanitizerConfig};
pub use cursor::Cursor;
pub use dom::{NodeData, NodeId, SanitizedDocument};
pub use error::{ConfigError, SanitizeError};
pub use extension::Extension;
pub use sanitizer::Sanitizer;
pub use url::UrlSanitizer;
pub use visitor::{DomVisitor, NodeVisitor};
