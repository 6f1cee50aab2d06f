//! Code tags
//!
//! `class` is kept on `code` so language hints (`language-rust`) survive.

use crate::config::SanitizerConfig;
use crate::extension::Extension;
use crate::visitor::NodeVisitor;
use crate::visitors::TagVisitor;

pub struct CodeExtension;

impl Extension for CodeExtension {
    fn name(&self) -> &'static str {
        "code"
    }

    fn create_node_visitors(&self, _config: &SanitizerConfig) -> Vec<Box<dyn NodeVisitor>> {
        vec![
            Box::new(TagVisitor::new("code", &["class"])),
            Box::new(TagVisitor::new("pre", &[])),
        ]
    }
}
