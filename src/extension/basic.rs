//! Baseline text-formatting tags
//!
//! The only bundle enabled by default. Anchors revalidate `href` through
//! the configurable anchor sanitizer; quotation tags keep a sanitized
//! `cite`; everything else is a plain container with no attributes.

use crate::config::SanitizerConfig;
use crate::extension::{Extension, citation_sanitizer};
use crate::visitor::NodeVisitor;
use crate::visitors::TagVisitor;

pub struct BasicExtension;

impl Extension for BasicExtension {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn create_node_visitors(&self, config: &SanitizerConfig) -> Vec<Box<dyn NodeVisitor>> {
        vec![
            Box::new(
                TagVisitor::new("a", &["href", "title"]).with_url_attribute(
                    "href",
                    config.anchor.url_sanitizer(),
                    false,
                ),
            ),
            Box::new(TagVisitor::new("b", &[])),
            Box::new(
                TagVisitor::new("blockquote", &["cite"]).with_url_attribute(
                    "cite",
                    citation_sanitizer(),
                    false,
                ),
            ),
            Box::new(TagVisitor::void("br", &[])),
            Box::new(TagVisitor::new("div", &[])),
            Box::new(
                TagVisitor::new("del", &["cite", "datetime"]).with_url_attribute(
                    "cite",
                    citation_sanitizer(),
                    false,
                ),
            ),
            Box::new(TagVisitor::new("em", &[])),
            Box::new(TagVisitor::new("figcaption", &[])),
            Box::new(TagVisitor::new("figure", &[])),
            Box::new(TagVisitor::new("h1", &[])),
            Box::new(TagVisitor::new("h2", &[])),
            Box::new(TagVisitor::new("h3", &[])),
            Box::new(TagVisitor::new("h4", &[])),
            Box::new(TagVisitor::new("h5", &[])),
            Box::new(TagVisitor::new("h6", &[])),
            Box::new(TagVisitor::new("i", &[])),
            Box::new(TagVisitor::new("p", &[])),
            Box::new(
                TagVisitor::new("q", &["cite"]).with_url_attribute(
                    "cite",
                    citation_sanitizer(),
                    false,
                ),
            ),
            Box::new(TagVisitor::new("small", &[])),
            Box::new(TagVisitor::new("span", &[])),
            Box::new(TagVisitor::new("strong", &[])),
            Box::new(TagVisitor::new("sub", &[])),
            Box::new(TagVisitor::new("sup", &[])),
            Box::new(TagVisitor::new("u", &[])),
        ]
    }
}
