//! Built-in node visitor strategies
//!
//! Three strategies cover every rule the policy bundles ship:
//!
//! - [`TagVisitor`] rebuilds an allow-listed element, copying only
//!   whitelisted attributes and revalidating URL-carrying ones
//! - [`TextVisitor`] copies text payloads into the current attachment point
//! - [`DropVisitor`] positively matches a tag and swallows its whole
//!   subtree, descendant text included
//!
//! Bundles instantiate these with per-tag data instead of defining one type
//! per tag; the set of strategies is closed and dispatch goes through the
//! [`NodeVisitor`] trait object list held by the engine.

use markup5ever_rcdom::{Handle, NodeData};

use crate::cursor::Cursor;
use crate::url::UrlSanitizer;
use crate::visitor::{NodeVisitor, element_name, get_attribute};

struct UrlAttribute {
    name: &'static str,
    sanitizer: UrlSanitizer,
    load_bearing: bool,
}

/// Generic structural tag rule
///
/// Matches one tag name, copies whitelisted attributes in input order, and
/// opens an output container for the node's children (unless the tag is
/// void). At most one attribute may be URL-carrying; its raw value goes
/// through a [`UrlSanitizer`] and is dropped on rejection. A *load-bearing*
/// URL attribute drops the whole element instead; the children are still
/// visited by the engine, per the unwrap policy.
pub struct TagVisitor {
    tag: &'static str,
    allowed_attributes: &'static [&'static str],
    void: bool,
    required_ancestor: Option<&'static str>,
    url_attribute: Option<UrlAttribute>,
    drop_children: bool,
}

impl TagVisitor {
    /// A container element keeping the given attributes
    pub fn new(tag: &'static str, allowed_attributes: &'static [&'static str]) -> Self {
        Self {
            tag,
            allowed_attributes,
            void: false,
            required_ancestor: None,
            url_attribute: None,
            drop_children: false,
        }
    }

    /// A void element: renders self-closing, never pushes the cursor
    pub fn void(tag: &'static str, allowed_attributes: &'static [&'static str]) -> Self {
        Self {
            void: true,
            ..Self::new(tag, allowed_attributes)
        }
    }

    /// Emit the element but swallow everything parsed inside it
    ///
    /// For raw-text elements like `iframe`: their parsed content is inert
    /// fallback text that must not leak into the output, where it would be
    /// re-escaped on every subsequent sanitize pass.
    pub fn drop_children(mut self) -> Self {
        assert!(!self.void, "void tags have no children to drop");
        self.drop_children = true;
        self
    }

    /// Require an element named `ancestor` on the output path to the root
    ///
    /// Without it the rule does not match and the tag unwraps.
    pub fn inside(mut self, ancestor: &'static str) -> Self {
        self.required_ancestor = Some(ancestor);
        self
    }

    /// Declare `name` as this rule's URL-carrying attribute
    ///
    /// `load_bearing` elements are dropped entirely when the sanitizer
    /// rejects (or the input lacks) the value; otherwise only the attribute
    /// is dropped.
    pub fn with_url_attribute(
        mut self,
        name: &'static str,
        sanitizer: UrlSanitizer,
        load_bearing: bool,
    ) -> Self {
        // A declined enter must not desynchronize the cursor stack, so
        // load-bearing is restricted to void (non-pushing) rules
        assert!(
            self.void || !load_bearing,
            "load-bearing URL attributes require a void tag"
        );
        self.url_attribute = Some(UrlAttribute {
            name,
            sanitizer,
            load_bearing,
        });
        self
    }
}

impl NodeVisitor for TagVisitor {
    fn supports(&self, node: &Handle, cursor: &Cursor) -> bool {
        element_name(node) == Some(self.tag)
            && self
                .required_ancestor
                .is_none_or(|ancestor| cursor.document.has_ancestor_element(cursor.node, ancestor))
    }

    fn enter_node(&self, node: &Handle, cursor: &mut Cursor) {
        let mut sanitized_url = None;
        if let Some(url_attr) = &self.url_attribute {
            sanitized_url = get_attribute(node, url_attr.name)
                .and_then(|value| url_attr.sanitizer.sanitize(&value));
            if url_attr.load_bearing && sanitized_url.is_none() {
                // Element skipped entirely; leave_node stays a no-op
                return;
            }
        }

        let mut attributes: Vec<(&'static str, String)> = Vec::new();
        if let NodeData::Element { attrs, .. } = &node.data {
            for attr in attrs.borrow().iter() {
                let name = attr.name.local.as_ref();
                let Some(&allowed) = self.allowed_attributes.iter().find(|&&a| a == name) else {
                    continue;
                };
                if attributes.iter().any(|(existing, _)| *existing == allowed) {
                    continue;
                }
                let value = match &self.url_attribute {
                    Some(url_attr) if url_attr.name == allowed => match sanitized_url.take() {
                        Some(value) => value,
                        // Rejected URL: drop this one attribute, keep the node
                        None => continue,
                    },
                    _ => attr.value.to_string(),
                };
                attributes.push((allowed, value));
            }
        }

        let id = cursor
            .document
            .append_element(cursor.node, self.tag, attributes, self.void);
        if !self.void {
            cursor.node = if self.drop_children {
                cursor.document.append_suppressed(id)
            } else {
                id
            };
        }
    }

    fn leave_node(&self, _node: &Handle, cursor: &mut Cursor) {
        if !self.void {
            cursor.pop();
            if self.drop_children {
                cursor.pop();
            }
        }
    }
}

/// Always-matching text rule
///
/// Copies the raw payload of every text node into the current attachment
/// point; escaping happens at render time. Without this rule registered,
/// all text is lost even though structural tags unwrap correctly.
pub struct TextVisitor;

impl NodeVisitor for TextVisitor {
    fn supports(&self, node: &Handle, _cursor: &Cursor) -> bool {
        matches!(node.data, NodeData::Text { .. })
    }

    fn enter_node(&self, node: &Handle, cursor: &mut Cursor) {
        if let NodeData::Text { contents } = &node.data {
            cursor
                .document
                .append_text(cursor.node, contents.borrow().to_string());
        }
    }
}

/// Subtree suppression rule
///
/// Matches one tag name and opens a suppressed output node, so everything
/// the traversal attaches beneath it (including descendant text picked up
/// by [`TextVisitor`]) vanishes at render time. This is the only way to
/// remove content: leaving a tag unhandled merely unwraps it.
pub struct DropVisitor {
    tag: &'static str,
}

impl DropVisitor {
    pub fn new(tag: &'static str) -> Self {
        Self { tag }
    }
}

impl NodeVisitor for DropVisitor {
    fn supports(&self, node: &Handle, _cursor: &Cursor) -> bool {
        element_name(node) == Some(self.tag)
    }

    fn enter_node(&self, _node: &Handle, cursor: &mut Cursor) {
        cursor.node = cursor.document.append_suppressed(cursor.node);
    }

    fn leave_node(&self, _node: &Handle, cursor: &mut Cursor) {
        cursor.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_html;
    use crate::visitor::{DEFAULT_MAX_DEPTH, DomVisitor};

    fn http_sanitizer() -> UrlSanitizer {
        UrlSanitizer::new(
            vec!["http".to_string(), "https".to_string()],
            None,
            false,
            false,
        )
    }

    fn run(visitors: Vec<Box<dyn NodeVisitor>>, html: &str) -> String {
        let engine = DomVisitor::new(visitors, DEFAULT_MAX_DEPTH);
        let dom = parse_html(html.as_bytes()).unwrap();
        engine.visit(&dom.document).unwrap().render()
    }

    #[test]
    fn test_tag_visitor_rebuilds_element() {
        let output = run(
            vec![Box::new(TagVisitor::new("p", &[])), Box::new(TextVisitor)],
            "<p>Hello</p>",
        );
        assert_eq!(output, "<p>Hello</p>");
    }

    #[test]
    fn test_tag_visitor_drops_unlisted_attributes() {
        let output = run(
            vec![Box::new(TagVisitor::new("p", &["title"])), Box::new(TextVisitor)],
            "<p title=\"t\" onclick=\"alert(1)\" class=\"x\">Hi</p>",
        );
        assert_eq!(output, "<p title=\"t\">Hi</p>");
    }

    #[test]
    fn test_unmatched_tag_unwraps() {
        let output = run(
            vec![Box::new(TagVisitor::new("em", &[])), Box::new(TextVisitor)],
            "<unknown>Hello <em>there</em></unknown>",
        );
        assert_eq!(output, "Hello <em>there</em>");
    }

    #[test]
    fn test_drop_visitor_swallows_subtree() {
        let output = run(
            vec![Box::new(DropVisitor::new("script")), Box::new(TextVisitor)],
            "<p>keep</p><script>alert(1)</script>",
        );
        assert_eq!(output, "keep");
    }

    #[test]
    fn test_void_tag_renders_self_closing() {
        let output = run(vec![Box::new(TagVisitor::void("br", &[]))], "a<br>b");
        assert_eq!(output, "<br />");
    }

    #[test]
    fn test_url_attribute_rejection_drops_attribute_only() {
        let visitor =
            TagVisitor::new("a", &["href", "title"]).with_url_attribute("href", http_sanitizer(), false);
        let output = run(
            vec![Box::new(visitor), Box::new(TextVisitor)],
            "<a href=\"javascript:alert(1)\" title=\"t\">x</a>",
        );
        assert_eq!(output, "<a title=\"t\">x</a>");
    }

    #[test]
    fn test_load_bearing_url_rejection_drops_element() {
        let visitor =
            TagVisitor::void("img", &["src", "alt"]).with_url_attribute("src", http_sanitizer(), true);
        let output = run(
            vec![Box::new(visitor)],
            "<img src=\"javascript:alert(1)\" alt=\"a\">",
        );
        assert_eq!(output, "");
    }

    #[test]
    fn test_load_bearing_url_missing_drops_element() {
        let visitor =
            TagVisitor::void("img", &["src", "alt"]).with_url_attribute("src", http_sanitizer(), true);
        let output = run(vec![Box::new(visitor)], "<img alt=\"a\">");
        assert_eq!(output, "");
    }

    #[test]
    fn test_url_attribute_kept_in_input_position() {
        let visitor = TagVisitor::void("img", &["src", "alt"])
            .with_url_attribute("src", http_sanitizer(), true);
        let output = run(
            vec![Box::new(visitor)],
            "<img alt=\"a\" src=\"https://example.com/i.png\">",
        );
        assert_eq!(output, "<img alt=\"a\" src=\"https://example.com/i.png\" />");
    }

    #[test]
    fn test_drop_children_emits_empty_element() {
        let visitor = TagVisitor::new("iframe", &["width"]).drop_children();
        let output = run(
            vec![Box::new(visitor), Box::new(TextVisitor)],
            "<iframe width=\"10\">fallback</iframe>",
        );
        assert_eq!(output, "<iframe width=\"10\"></iframe>");
    }

    #[test]
    #[should_panic(expected = "no children")]
    fn test_drop_children_requires_container() {
        let _ = TagVisitor::void("br", &[]).drop_children();
    }

    #[test]
    fn test_required_ancestor_gates_match() {
        let visitors: Vec<Box<dyn NodeVisitor>> = vec![
            Box::new(TagVisitor::new("table", &[])),
            Box::new(TagVisitor::new("tr", &[]).inside("table")),
            Box::new(TagVisitor::new("td", &[]).inside("tr")),
            Box::new(TextVisitor),
        ];
        let output = run(
            visitors,
            "<table><tbody><tr><td>cell</td></tr></tbody></table>",
        );
        // tbody has no rule here and unwraps; tr/td still match through it
        assert_eq!(output, "<table><tr><td>cell</td></tr></table>");
    }

    #[test]
    #[should_panic(expected = "load-bearing")]
    fn test_load_bearing_requires_void() {
        let _ = TagVisitor::new("iframe", &["src"]).with_url_attribute(
            "src",
            http_sanitizer(),
            true,
        );
    }
}
