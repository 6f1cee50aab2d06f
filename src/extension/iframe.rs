//! Iframe tag
//!
//! The attribute whitelist covers the common embed providers (the `allow`
//! and `allowfullscreen` entries exist for YouTube embeds). A rejected
//! `src` drops only the attribute; the element itself is kept. The parsed
//! content of an iframe is raw fallback text and is swallowed, never
//! re-emitted.

use crate::config::SanitizerConfig;
use crate::extension::Extension;
use crate::visitor::NodeVisitor;
use crate::visitors::TagVisitor;

pub struct IframeExtension;

impl Extension for IframeExtension {
    fn name(&self) -> &'static str {
        "iframe"
    }

    fn create_node_visitors(&self, config: &SanitizerConfig) -> Vec<Box<dyn NodeVisitor>> {
        vec![Box::new(
            TagVisitor::new(
                "iframe",
                &[
                    "src",
                    "width",
                    "height",
                    "frameborder",
                    "title",
                    "allow",
                    "allowfullscreen",
                ],
            )
            .with_url_attribute("src", config.iframe.url_sanitizer(), false)
            .drop_children(),
        )]
    }
}
