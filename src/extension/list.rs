//! List tags

use crate::config::SanitizerConfig;
use crate::extension::Extension;
use crate::visitor::NodeVisitor;
use crate::visitors::TagVisitor;

pub struct ListExtension;

impl Extension for ListExtension {
    fn name(&self) -> &'static str {
        "list"
    }

    fn create_node_visitors(&self, _config: &SanitizerConfig) -> Vec<Box<dyn NodeVisitor>> {
        vec![
            Box::new(TagVisitor::new("dd", &[])),
            Box::new(TagVisitor::new("dl", &[])),
            Box::new(TagVisitor::new("dt", &[])),
            Box::new(TagVisitor::new("li", &[])),
            Box::new(TagVisitor::new("ol", &[])),
            Box::new(TagVisitor::new("ul", &[])),
        ]
    }
}
