//! Policy bundles: named, ordered sets of tag rules shipped together
//!
//! Each bundle implements [`Extension`] and contributes an ordered list of
//! node visitors at assembly time. The builder concatenates bundles in the
//! order the configuration enables them; that order becomes the engine's
//! registration order. Per-rule options come from the typed structs in
//! [`crate::config`].

use crate::config::SanitizerConfig;
use crate::url::UrlSanitizer;
use crate::visitor::NodeVisitor;

pub mod basic;
pub mod code;
pub mod extra;
pub mod iframe;
pub mod image;
pub mod list;
pub mod table;

pub use basic::BasicExtension;
pub use code::CodeExtension;
pub use extra::ExtraExtension;
pub use iframe::IframeExtension;
pub use image::ImageExtension;
pub use list::ListExtension;
pub use table::TableExtension;

/// A policy bundle registrable with the builder
pub trait Extension: Send + Sync {
    /// Name the configuration refers to this bundle by
    fn name(&self) -> &'static str;

    /// Construct this bundle's node visitors, in rule order
    fn create_node_visitors(&self, config: &SanitizerConfig) -> Vec<Box<dyn NodeVisitor>>;
}

/// All built-in bundles, in the default registration order
pub fn default_extensions() -> Vec<Box<dyn Extension>> {
    vec![
        Box::new(BasicExtension),
        Box::new(ListExtension),
        Box::new(ImageExtension),
        Box::new(CodeExtension),
        Box::new(TableExtension),
        Box::new(IframeExtension),
        Box::new(ExtraExtension),
    ]
}

/// Sanitizer for `cite`-style citation attributes
///
/// Absolute http/https or relative references; no host restriction.
pub(crate) fn citation_sanitizer() -> UrlSanitizer {
    UrlSanitizer::new(
        vec!["http".to_string(), "https".to_string()],
        None,
        false,
        true,
    )
}
