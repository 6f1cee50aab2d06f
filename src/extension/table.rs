//! Table tags
//!
//! Row and cell rules are context-sensitive: `tr` only matches with a
//! `table` ancestor in the output tree and `td`/`th` only inside a `tr`.
//! Outside that context they unwrap like any unmatched tag, so stray cell
//! markup cannot fabricate table structure.

use crate::config::SanitizerConfig;
use crate::extension::Extension;
use crate::visitor::NodeVisitor;
use crate::visitors::TagVisitor;

pub struct TableExtension;

impl Extension for TableExtension {
    fn name(&self) -> &'static str {
        "table"
    }

    fn create_node_visitors(&self, _config: &SanitizerConfig) -> Vec<Box<dyn NodeVisitor>> {
        vec![
            Box::new(TagVisitor::new("table", &[])),
            Box::new(TagVisitor::new("caption", &[]).inside("table")),
            Box::new(TagVisitor::new("thead", &[]).inside("table")),
            Box::new(TagVisitor::new("tbody", &[]).inside("table")),
            Box::new(TagVisitor::new("tfoot", &[]).inside("table")),
            Box::new(TagVisitor::new("tr", &[]).inside("table")),
            Box::new(TagVisitor::new("td", &["colspan", "rowspan"]).inside("tr")),
            Box::new(TagVisitor::new("th", &["colspan", "rowspan"]).inside("tr")),
        ]
    }
}
