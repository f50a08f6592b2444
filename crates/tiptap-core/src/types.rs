//! Node and mark type tags
//!
//! Both enumerations cover the closed set of types the tiptap starter kit
//! emits, plus an `Other` variant carrying any tag outside that set so that
//! documents from newer editors still load.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `type` tag of a document node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    /// Root document container (`doc`)
    Doc,
    /// Text run (`text`)
    Text,
    /// Paragraph (`paragraph`)
    Paragraph,
    /// Heading with a `level` attribute (`heading`)
    Heading,
    /// Hard line break (`hardBreak`)
    HardBreak,
    /// Unordered list (`bulletList`)
    BulletList,
    /// Ordered list, optional `start` attribute (`orderedList`)
    OrderedList,
    /// Item of either list kind (`listItem`)
    ListItem,
    /// Code block with a `language` attribute (`codeBlock`)
    CodeBlock,
    /// Thematic break (`horizontalRule`)
    HorizontalRule,
    /// Block quote (`blockquote`)
    Blockquote,
    /// Any tag outside the known set
    Other(String),
}

impl NodeType {
    /// All known node types, in declaration order
    pub fn known() -> [NodeType; 11] {
        [
            NodeType::Doc,
            NodeType::Text,
            NodeType::Paragraph,
            NodeType::Heading,
            NodeType::HardBreak,
            NodeType::BulletList,
            NodeType::OrderedList,
            NodeType::ListItem,
            NodeType::CodeBlock,
            NodeType::HorizontalRule,
            NodeType::Blockquote,
        ]
    }

    /// The wire name of this type
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Doc => "doc",
            NodeType::Text => "text",
            NodeType::Paragraph => "paragraph",
            NodeType::Heading => "heading",
            NodeType::HardBreak => "hardBreak",
            NodeType::BulletList => "bulletList",
            NodeType::OrderedList => "orderedList",
            NodeType::ListItem => "listItem",
            NodeType::CodeBlock => "codeBlock",
            NodeType::HorizontalRule => "horizontalRule",
            NodeType::Blockquote => "blockquote",
            NodeType::Other(name) => name,
        }
    }

    /// Check if this is one of the known types
    pub fn is_known(&self) -> bool {
        !matches!(self, NodeType::Other(_))
    }
}

impl From<&str> for NodeType {
    fn from(value: &str) -> Self {
        match value {
            "doc" => NodeType::Doc,
            "text" => NodeType::Text,
            "paragraph" => NodeType::Paragraph,
            "heading" => NodeType::Heading,
            "hardBreak" => NodeType::HardBreak,
            "bulletList" => NodeType::BulletList,
            "orderedList" => NodeType::OrderedList,
            "listItem" => NodeType::ListItem,
            "codeBlock" => NodeType::CodeBlock,
            "horizontalRule" => NodeType::HorizontalRule,
            "blockquote" => NodeType::Blockquote,
            other => NodeType::Other(other.to_string()),
        }
    }
}

impl From<String> for NodeType {
    fn from(value: String) -> Self {
        match NodeType::from(value.as_str()) {
            NodeType::Other(_) => NodeType::Other(value),
            known => known,
        }
    }
}

impl From<NodeType> for String {
    fn from(value: NodeType) -> Self {
        match value {
            NodeType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` tag of a mark
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarkType {
    Bold,
    Italic,
    Underline,
    Strike,
    /// Inline code
    Code,
    /// Hyperlink with an `href` attribute
    Link,
    /// Any tag outside the known set
    Other(String),
}

impl MarkType {
    /// All known mark types, in declaration order
    pub fn known() -> [MarkType; 6] {
        [
            MarkType::Bold,
            MarkType::Italic,
            MarkType::Underline,
            MarkType::Strike,
            MarkType::Code,
            MarkType::Link,
        ]
    }

    /// The wire name of this type
    pub fn as_str(&self) -> &str {
        match self {
            MarkType::Bold => "bold",
            MarkType::Italic => "italic",
            MarkType::Underline => "underline",
            MarkType::Strike => "strike",
            MarkType::Code => "code",
            MarkType::Link => "link",
            MarkType::Other(name) => name,
        }
    }

    /// Check if this is one of the known types
    pub fn is_known(&self) -> bool {
        !matches!(self, MarkType::Other(_))
    }
}

impl From<&str> for MarkType {
    fn from(value: &str) -> Self {
        match value {
            "bold" => MarkType::Bold,
            "italic" => MarkType::Italic,
            "underline" => MarkType::Underline,
            "strike" => MarkType::Strike,
            "code" => MarkType::Code,
            "link" => MarkType::Link,
            other => MarkType::Other(other.to_string()),
        }
    }
}

impl From<String> for MarkType {
    fn from(value: String) -> Self {
        match MarkType::from(value.as_str()) {
            MarkType::Other(_) => MarkType::Other(value),
            known => known,
        }
    }
}

impl From<MarkType> for String {
    fn from(value: MarkType) -> Self {
        match value {
            MarkType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MarkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_names_round_trip() {
        for ty in NodeType::known() {
            assert_eq!(NodeType::from(ty.as_str()), ty);
            assert!(ty.is_known());
        }
    }

    #[test]
    fn test_unknown_node_type() {
        let ty = NodeType::from("bad-type");
        assert_eq!(ty, NodeType::Other("bad-type".to_string()));
        assert_eq!(ty.as_str(), "bad-type");
        assert!(!ty.is_known());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(NodeType::from("hardBreak"), NodeType::HardBreak);
        assert!(!NodeType::from("hardbreak").is_known());
        assert!(!MarkType::from("Bold").is_known());
    }

    #[test]
    fn test_mark_type_serde() {
        let ty: MarkType = serde_json::from_str("\"link\"").unwrap();
        assert_eq!(ty, MarkType::Link);
        assert_eq!(serde_json::to_string(&ty).unwrap(), "\"link\"");

        let other: MarkType = serde_json::from_str("\"textStyle\"").unwrap();
        assert_eq!(other.to_string(), "textStyle");
    }
}
