//! HTML element tree produced by the bundled HTML handler set.
//!
//! This is a small, owned stand-in for a UI toolkit's element type: handlers
//! build it bottom-up and [`HtmlNode::to_html`] turns the finished tree into
//! markup.

use std::fmt;

use crate::utilities::{escape_html_attr, escape_html_text, is_void};

/// One node of rendered HTML output
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HtmlNode {
    /// Renders nothing; the neutral element for unhandled types
    #[default]
    Empty,

    /// Escaped text
    Text(String),

    /// Children without a wrapping tag
    Fragment(Vec<HtmlNode>),

    /// A tag with attributes and children
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<HtmlNode>,
    },
}

impl HtmlNode {
    /// Create an element without attributes
    pub fn element(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element {
            tag: tag.to_lowercase(),
            attrs: Vec::new(),
            children,
        }
    }

    /// Create an element with attributes
    pub fn element_with_attrs(tag: &str, attrs: Vec<(&str, &str)>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element {
            tag: tag.to_lowercase(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children,
        }
    }

    /// Create a text node
    pub fn text(content: &str) -> Self {
        HtmlNode::Text(content.to_string())
    }

    pub fn fragment(children: Vec<HtmlNode>) -> Self {
        HtmlNode::Fragment(children)
    }

    /// Check if this node renders no markup at all
    pub fn is_empty(&self) -> bool {
        match self {
            HtmlNode::Empty => true,
            HtmlNode::Text(_) | HtmlNode::Element { .. } => false,
            HtmlNode::Fragment(children) => children.iter().all(|c| c.is_empty()),
        }
    }

    /// Tag name of an element node
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            HtmlNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        let HtmlNode::Element { attrs, .. } = self else {
            return None;
        };
        attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Direct children of an element or fragment
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Element { children, .. } | HtmlNode::Fragment(children) => children.as_slice(),
            HtmlNode::Empty | HtmlNode::Text(_) => &[],
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            HtmlNode::Text(text) => text.clone(),
            _ => self.children().iter().map(|c| c.text_content()).collect(),
        }
    }

    /// Serialize to an HTML string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Empty => {}
            HtmlNode::Text(text) => out.push_str(&escape_html_text(text)),
            HtmlNode::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
            HtmlNode::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    if !value.is_empty() {
                        out.push_str("=\"");
                        out.push_str(&escape_html_attr(value));
                        out.push('"');
                    }
                }
                out.push('>');

                if is_void(tag) {
                    return;
                }

                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_html() {
        let a = HtmlNode::element_with_attrs(
            "a",
            vec![("href", "https://example.com")],
            vec![HtmlNode::text("Link")],
        );
        assert_eq!(a.to_html(), "<a href=\"https://example.com\">Link</a>");
    }

    #[test]
    fn test_void_element_html() {
        assert_eq!(HtmlNode::element("br", Vec::new()).to_html(), "<br>");
        assert_eq!(HtmlNode::element("HR", Vec::new()).to_html(), "<hr>");
    }

    #[test]
    fn test_escaping() {
        let p = HtmlNode::element_with_attrs(
            "p",
            vec![("title", "a \"b\"")],
            vec![HtmlNode::text("1 < 2 & 3")],
        );
        assert_eq!(p.to_html(), "<p title=\"a &quot;b&quot;\">1 &lt; 2 &amp; 3</p>");
    }

    #[test]
    fn test_fragment_and_empty() {
        let frag = HtmlNode::fragment(vec![
            HtmlNode::text("a"),
            HtmlNode::Empty,
            HtmlNode::element("b", vec![HtmlNode::text("c")]),
        ]);
        assert_eq!(frag.to_html(), "a<b>c</b>");
        assert_eq!(frag.text_content(), "ac");
        assert!(!frag.is_empty());

        assert!(HtmlNode::default().is_empty());
        assert!(HtmlNode::fragment(vec![HtmlNode::Empty]).is_empty());
        assert_eq!(HtmlNode::Empty.to_html(), "");
    }

    #[test]
    fn test_attr_lookup() {
        let el = HtmlNode::element_with_attrs("a", vec![("href", "x")], Vec::new());
        assert_eq!(el.attr("HREF"), Some("x"));
        assert_eq!(el.attr("title"), None);
        assert_eq!(el.tag_name(), Some("a"));
        assert_eq!(HtmlNode::text("t").tag_name(), None);
    }
}
