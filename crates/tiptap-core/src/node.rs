//! Document nodes and marks
//!
//! These follow the JSON shape produced by tiptap's `editor.getJSON()`:
//!
//! ```json
//! { "type": "paragraph", "content": [
//!     { "type": "text", "text": "hi", "marks": [{ "type": "bold" }] }
//! ] }
//! ```
//!
//! Only `type` is mandatory. Every other field is optional and unknown fields
//! are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attrs::{str_attr, Attrs, HeadingLevel};
use crate::types::{MarkType, NodeType};
use crate::Result;

/// One structural unit of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Which handler applies to this node
    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Type-specific parameters (heading level, code language, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,

    /// Ordered child nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Node>>,

    /// Marks wrapping this node's output, innermost first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<Mark>>,

    /// Text payload of `text` nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Node {
    /// Create a node with no attributes, content or marks
    pub fn new(node_type: impl Into<NodeType>) -> Self {
        Self {
            node_type: node_type.into(),
            attrs: None,
            content: None,
            marks: None,
            text: None,
        }
    }

    /// Create a text node
    pub fn text(content: &str) -> Self {
        Self {
            text: Some(content.to_string()),
            ..Self::new(NodeType::Text)
        }
    }

    /// Parse a node from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert an already parsed JSON value into a node
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize back to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.content.iter().flat_map(|c| c.iter())
    }

    /// Get all marks in encounter order
    pub fn marks(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter().flat_map(|m| m.iter())
    }

    /// A node without children, whether `content` is absent or empty
    pub fn is_leaf(&self) -> bool {
        self.content.as_ref().map_or(true, |c| c.is_empty())
    }

    /// A paragraph with no content, which renders as a line break
    pub fn is_empty_paragraph(&self) -> bool {
        self.node_type == NodeType::Paragraph && self.is_leaf()
    }

    /// Check if a mark of the given type is attached
    pub fn has_mark(&self, mark_type: &MarkType) -> bool {
        self.marks().any(|m| &m.mark_type == mark_type)
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.as_ref()?.get(name)
    }

    /// Get a string attribute by name
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        str_attr(self.attrs.as_ref(), name)
    }

    /// The `level` of a heading, if present and within 1..=6
    pub fn heading_level(&self) -> Option<HeadingLevel> {
        HeadingLevel::from_value(self.attr("level")?)
    }

    /// The `language` of a code block; empty strings count as absent
    pub fn language(&self) -> Option<&str> {
        self.attr_str("language").filter(|l| !l.is_empty())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.content.get_or_insert_with(Vec::new).push(child);
    }

    /// Attach a mark after the existing ones
    pub fn add_mark(&mut self, mark: Mark) {
        self.marks.get_or_insert_with(Vec::new).push(mark);
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) {
        self.attrs
            .get_or_insert_with(Attrs::new)
            .insert(name.to_string(), value.into());
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.add_mark(mark);
        self
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in self.children() {
            child.collect_text(out);
        }
    }
}

/// An inline annotation wrapping a node's output.
///
/// A mark never stands alone; it only appears in a node's `marks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub mark_type: MarkType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,
}

impl Mark {
    pub fn new(mark_type: impl Into<MarkType>) -> Self {
        Self {
            mark_type: mark_type.into(),
            attrs: None,
        }
    }

    /// Create a link mark pointing at `href`
    pub fn link(href: &str) -> Self {
        Self::new(MarkType::Link).with_attr("href", href)
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attrs
            .get_or_insert_with(Attrs::new)
            .insert(name.to_string(), value.into());
        self
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.as_ref()?.get(name)
    }

    /// Target of a link mark
    pub fn href(&self) -> Option<&str> {
        str_attr(self.attrs.as_ref(), "href")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_node() {
        let node = Node::from_json(r#"{"type":"doc"}"#).unwrap();
        assert_eq!(node, Node::new(NodeType::Doc));
        assert!(node.is_leaf());
    }

    #[test]
    fn test_parse_nested_document() {
        let node = Node::from_value(json!({
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [{
                    "type": "text",
                    "text": "hello",
                    "marks": [{ "type": "bold" }, { "type": "link", "attrs": { "href": "https://x" } }]
                }]
            }]
        }))
        .unwrap();

        let expected = Node::new(NodeType::Doc).with_child(
            Node::new(NodeType::Paragraph).with_child(
                Node::text("hello")
                    .with_mark(Mark::new(MarkType::Bold))
                    .with_mark(Mark::link("https://x")),
            ),
        );
        assert_eq!(node, expected);
    }

    #[test]
    fn test_missing_type_is_rejected() {
        let err = Node::from_json(r#"{"content":[]}"#).unwrap_err();
        let DocumentError::Json(inner) = err;
        assert!(inner.to_string().contains("type"));
    }

    #[test]
    fn test_mark_missing_type_is_rejected() {
        let result = Node::from_value(json!({
            "type": "text",
            "text": "x",
            "marks": [{ "attrs": { "href": "https://x" } }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_and_nulls_are_tolerated() {
        let node = Node::from_value(json!({
            "type": "bad-type",
            "attrs": null,
            "content": null,
            "id": 42
        }))
        .unwrap();
        assert_eq!(node.node_type, NodeType::Other("bad-type".to_string()));
        assert!(node.attrs.is_none());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_empty_paragraph() {
        assert!(Node::new(NodeType::Paragraph).is_empty_paragraph());

        let mut explicit_empty = Node::new(NodeType::Paragraph);
        explicit_empty.content = Some(Vec::new());
        assert!(explicit_empty.is_empty_paragraph());

        let filled = Node::new(NodeType::Paragraph).with_child(Node::text("x"));
        assert!(!filled.is_empty_paragraph());
        assert!(!Node::new(NodeType::Doc).is_empty_paragraph());
    }

    #[test]
    fn test_typed_attrs() {
        let heading = Node::new(NodeType::Heading).with_attr("level", 2);
        assert_eq!(heading.heading_level().map(|l| l.get()), Some(2));

        let code = Node::new(NodeType::CodeBlock).with_attr("language", "rust");
        assert_eq!(code.language(), Some("rust"));

        let no_lang = Node::new(NodeType::CodeBlock).with_attr("language", "");
        assert_eq!(no_lang.language(), None);

        assert_eq!(Mark::link("https://example.com").href(), Some("https://example.com"));
        assert_eq!(Mark::new(MarkType::Link).href(), None);
    }

    #[test]
    fn test_text_content() {
        let doc = Node::new(NodeType::Doc)
            .with_child(Node::new(NodeType::Paragraph).with_child(Node::text("Hello ")))
            .with_child(Node::new(NodeType::Paragraph).with_child(Node::text("World")));
        assert_eq!(doc.text_content(), "Hello World");
    }

    #[test]
    fn test_has_mark() {
        let text = Node::text("x").with_mark(Mark::new(MarkType::Code));
        assert!(text.has_mark(&MarkType::Code));
        assert!(!text.has_mark(&MarkType::Bold));
    }

    #[test]
    fn test_to_json_skips_absent_fields() {
        let node = Node::new(NodeType::HardBreak);
        assert_eq!(node.to_json().unwrap(), r#"{"type":"hardBreak"}"#);
    }
}
