//! Sanitized output tree and its serializer
//!
//! The sanitizer never mutates the parsed input tree. Node visitors rebuild
//! the document into a [`SanitizedDocument`], and only what a visitor
//! explicitly attached is ever rendered. The tree is arena-backed: nodes
//! live in a flat `Vec` and reference each other by [`NodeId`], so the
//! parent back-reference used during traversal is a plain non-owning index
//! and cannot create an ownership cycle.
//!
//! # Rendering
//!
//! [`SanitizedDocument::render`] serializes the tree in document order.
//! Attribute values and text payloads are stored raw and escaped here, at
//! the output boundary, for their respective contexts. Void elements
//! self-close; attributes render in insertion order; empty attribute values
//! render as bare names (`allowfullscreen` rather than `allowfullscreen=""`).

/// Index of a node inside a [`SanitizedDocument`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// Payload of a sanitized node
#[derive(Debug)]
pub enum NodeData {
    /// The distinguished root: no tag name, only children
    Document,
    /// An allow-listed element rebuilt by a tag visitor
    Element {
        /// Lowercase tag name
        tag: &'static str,
        /// Attribute name/value pairs, insertion order, unique keys
        attributes: Vec<(&'static str, String)>,
        /// Void elements render self-closing and take no children
        void: bool,
    },
    /// A raw text payload, escaped at render time
    Text(String),
    /// A positively suppressed subtree: renders nothing, children included
    Suppressed,
}

#[derive(Debug)]
struct SanitizedNode {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The output tree produced by one sanitize invocation
#[derive(Debug)]
pub struct SanitizedDocument {
    nodes: Vec<SanitizedNode>,
}

impl SanitizedDocument {
    /// Create an empty document containing only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![SanitizedNode {
                data: NodeData::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The document root
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attach a new element as the last child of `parent`
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &'static str,
        attributes: Vec<(&'static str, String)>,
        void: bool,
    ) -> NodeId {
        self.push_node(
            parent,
            NodeData::Element {
                tag,
                attributes,
                void,
            },
        )
    }

    /// Attach a text node as the last child of `parent`
    pub fn append_text(&mut self, parent: NodeId, text: String) -> NodeId {
        self.push_node(parent, NodeData::Text(text))
    }

    /// Attach a suppressed container as the last child of `parent`
    ///
    /// Anything the traversal attaches beneath it is swallowed at render
    /// time. Used by the script/style drop visitors.
    pub fn append_suppressed(&mut self, parent: NodeId) -> NodeId {
        self.push_node(parent, NodeData::Suppressed)
    }

    fn push_node(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SanitizedNode {
            data,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Parent of `id`, `None` for the root
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Payload of `id`
    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    /// Whether `id` or any of its ancestors is an element named `tag`
    ///
    /// Used by context-sensitive visitors (e.g. `tr` requires a `table`
    /// somewhere up the output tree).
    pub fn has_ancestor_element(&self, id: NodeId, tag: &str) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if let NodeData::Element { tag: t, .. } = &self.nodes[node.0].data
                && *t == tag
            {
                return true;
            }
            current = self.nodes[node.0].parent;
        }
        false
    }

    /// Serialize the document back to HTML text
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(256);
        for &child in &self.nodes[0].children {
            self.render_node(child, &mut output);
        }
        output
    }

    fn render_node(&self, id: NodeId, output: &mut String) {
        let node = &self.nodes[id.0];
        match &node.data {
            NodeData::Document => {
                for &child in &node.children {
                    self.render_node(child, output);
                }
            }
            NodeData::Element {
                tag,
                attributes,
                void,
            } => {
                output.push('<');
                output.push_str(tag);
                for (name, value) in attributes {
                    output.push(' ');
                    output.push_str(name);
                    if !value.is_empty() {
                        output.push_str("=\"");
                        escape_attribute(value, output);
                        output.push('"');
                    }
                }
                if *void {
                    output.push_str(" />");
                } else {
                    output.push('>');
                    for &child in &node.children {
                        self.render_node(child, output);
                    }
                    output.push_str("</");
                    output.push_str(tag);
                    output.push('>');
                }
            }
            NodeData::Text(text) => {
                escape_text(text, output);
            }
            NodeData::Suppressed => {
                // Subtree dropped wholesale
            }
        }
    }
}

impl Default for SanitizedDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a text payload for the element content context
fn escape_text(text: &str, output: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(ch),
        }
    }
}

/// Escape an attribute value for the double-quoted attribute context
fn escape_attribute(value: &str, output: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            _ => output.push(ch),
        }
    }
}
