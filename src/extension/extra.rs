//! Assorted less common tags

use crate::config::SanitizerConfig;
use crate::extension::Extension;
use crate::visitor::NodeVisitor;
use crate::visitors::TagVisitor;

pub struct ExtraExtension;

impl Extension for ExtraExtension {
    fn name(&self) -> &'static str {
        "extra"
    }

    fn create_node_visitors(&self, _config: &SanitizerConfig) -> Vec<Box<dyn NodeVisitor>> {
        vec![
            Box::new(TagVisitor::new("abbr", &["title"])),
            Box::new(TagVisitor::void("hr", &[])),
            Box::new(TagVisitor::new("rp", &[])),
            Box::new(TagVisitor::new("rt", &[])),
            Box::new(TagVisitor::new("ruby", &[])),
            Box::new(TagVisitor::new("details", &[])),
            Box::new(TagVisitor::new("summary", &[])),
        ]
    }
}
