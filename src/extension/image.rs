//! Image tag
//!
//! `src` is the rule's load-bearing attribute: an image whose source is
//! rejected (or missing) is dropped entirely rather than emitted without
//! one. The sanitizer accepts absolute http/https sources, optionally
//! `data:` URIs, restricted to the configured host allow-list.

use crate::config::SanitizerConfig;
use crate::extension::Extension;
use crate::visitor::NodeVisitor;
use crate::visitors::TagVisitor;

pub struct ImageExtension;

impl Extension for ImageExtension {
    fn name(&self) -> &'static str {
        "image"
    }

    fn create_node_visitors(&self, config: &SanitizerConfig) -> Vec<Box<dyn NodeVisitor>> {
        vec![Box::new(
            TagVisitor::void("img", &["src", "alt", "title"]).with_url_attribute(
                "src",
                config.image.url_sanitizer(),
                true,
            ),
        )]
    }
}
