//! Node visitor contract and the depth-first traversal engine
//!
//! The engine walks the parsed input tree once, in document order. At every
//! input node it runs all registered visitors whose `supports` predicate
//! holds, in registration order, then recurses into the children
//! **unconditionally**, then replays the matched visitors in exact reverse
//! order for `leave_node`.
//!
//! Unconditional recursion is the load-bearing policy decision of the whole
//! sanitizer: an input node with no matching visitor contributes nothing to
//! the output, but its children are still visited and may still produce
//! output. Unknown and disallowed tags are therefore *unwrapped*, not
//! deleted. The flip side is that a tag whose entire subtree must vanish
//! (script, style) needs a visitor that positively matches it and opens a
//! suppressed output node; omitting a rule never removes content.
//!
//! # Enter/leave symmetry
//!
//! The matched visitor indices are recorded during the enter pass and
//! replayed reversed on the way out, instead of re-evaluating `supports`.
//! Re-evaluation would mis-pair enters and leaves for cursor-sensitive
//! predicates, because by leave time the cursor has moved. Recording also
//! means the engine keeps no derived shared state (such as a lazily
//! reversed visitor list), so an assembled [`DomVisitor`] is immutable and
//! safe to share across threads; every `visit` call allocates its own
//! cursor and output tree.

use markup5ever_rcdom::{Handle, NodeData};

use crate::cursor::Cursor;
use crate::dom::SanitizedDocument;
use crate::error::SanitizeError;

/// Default maximum input nesting depth
///
/// Prevents stack exhaustion from adversarially nested markup. Exceeding
/// the limit aborts the sanitize call, which degrades to empty output.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// One per-tag (or per-concern) sanitization rule
///
/// Implementations must be stateless between invocations: the engine may be
/// shared across threads and calls every method through `&self`.
pub trait NodeVisitor: Send + Sync {
    /// Pure predicate deciding whether this visitor handles `node`
    ///
    /// Typically a tag-name comparison; may also consult the cursor (e.g.
    /// a table-row rule requiring a `table` ancestor in the output tree).
    fn supports(&self, node: &Handle, cursor: &Cursor) -> bool;

    /// Called on entry, before the node's children are visited
    ///
    /// A structural rule builds its output element here, attaches it at the
    /// cursor's attachment point, and pushes the cursor onto it.
    fn enter_node(&self, node: &Handle, cursor: &mut Cursor);

    /// Called on exit, after the node's children were visited
    ///
    /// Rules that pushed the cursor in [`enter_node`](Self::enter_node) pop
    /// it here. Rules that open no container keep the default no-op.
    fn leave_node(&self, _node: &Handle, _cursor: &mut Cursor) {}
}

/// The traversal engine: an immutable, ordered set of node visitors
pub struct DomVisitor {
    visitors: Vec<Box<dyn NodeVisitor>>,
    max_depth: usize,
}

impl DomVisitor {
    /// Wrap an ordered visitor list into an engine
    ///
    /// Registration order is enter order; leave order is its exact reverse.
    pub fn new(visitors: Vec<Box<dyn NodeVisitor>>, max_depth: usize) -> Self {
        Self {
            visitors,
            max_depth,
        }
    }

    /// Walk the input tree and build the sanitized output document
    pub fn visit(&self, root: &Handle) -> Result<SanitizedDocument, SanitizeError> {
        let mut cursor = Cursor::new();
        self.visit_node(root, &mut cursor, 0)?;
        debug_assert_eq!(cursor.node, cursor.document.root());
        Ok(cursor.document)
    }

    fn visit_node(
        &self,
        node: &Handle,
        cursor: &mut Cursor,
        depth: usize,
    ) -> Result<(), SanitizeError> {
        if depth > self.max_depth {
            return Err(SanitizeError::InvalidInput(format!(
                "Nesting depth exceeds limit of {}",
                self.max_depth
            )));
        }

        let mut matched = Vec::new();
        for (index, visitor) in self.visitors.iter().enumerate() {
            if visitor.supports(node, cursor) {
                visitor.enter_node(node, cursor);
                matched.push(index);
            }
        }

        // Children are visited whether or not any visitor matched: unknown
        // tags unwrap instead of deleting their contents
        for child in node.children.borrow().iter() {
            self.visit_node(child, cursor, depth + 1)?;
        }

        for &index in matched.iter().rev() {
            self.visitors[index].leave_node(node, cursor);
        }

        Ok(())
    }
}

/// Tag name of an element node, `None` for any other node kind
pub fn element_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Raw value of the named attribute on an element node
pub fn get_attribute(node: &Handle, attribute: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == attribute)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}
