//! Mutable traversal state for one sanitize invocation

use crate::dom::{NodeId, SanitizedDocument};

/// Tracks where in the output tree new nodes currently attach
///
/// A cursor is created fresh for every sanitize invocation and owns the
/// [`SanitizedDocument`] being built. `node` starts at the document root;
/// a visitor that opens a container sets it to the new node (push) in
/// `enter_node` and restores it to the parent (pop) in `leave_node`.
pub struct Cursor {
    /// The output tree under construction
    pub document: SanitizedDocument,
    /// Current attachment point for new children
    pub node: NodeId,
}

impl Cursor {
    /// Create a cursor positioned at the root of a fresh document
    pub fn new() -> Self {
        let document = SanitizedDocument::new();
        let node = document.root();
        Self { document, node }
    }

    /// Pop the attachment point back to its parent
    ///
    /// No-op at the document root; a visitor pairing its pushes and pops
    /// correctly never reaches that case.
    pub fn pop(&mut self) {
        if let Some(parent) = self.document.parent(self.node) {
            self.node = parent;
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
