//! Handler registry for node and mark rendering.

#[cfg(feature = "markdown")]
mod commonmark;
mod handler;
#[cfg(feature = "html")]
mod html;

#[cfg(feature = "markdown")]
pub use commonmark::{markdown_handlers, render_markdown, HeadingStyle, MarkdownOptions};
pub use handler::{MarkHandler, MarkRenderFn, NodeHandler, NodeRenderFn};
#[cfg(feature = "html")]
pub use html::{html_handlers, render_html};

use std::fmt;

use indexmap::IndexMap;
use tiptap_core::{Mark, MarkType, Node, NodeType};

/// Heading level used by the bundled handler sets when `attrs.level` is
/// missing or out of range
#[cfg(any(feature = "html", feature = "markdown"))]
pub(crate) const DEFAULT_HEADING_LEVEL: u8 = 3;

/// Maps node and mark types to the functions that render them.
///
/// A type without an entry is unhandled: the renderer logs it and moves on.
pub struct Handlers<E> {
    nodes: IndexMap<NodeType, NodeHandler<E>>,
    marks: IndexMap<MarkType, MarkHandler<E>>,
}

impl<E> Handlers<E> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            marks: IndexMap::new(),
        }
    }

    /// Register a node handler, replacing any previous one for the type
    pub fn insert_node(&mut self, node_type: impl Into<NodeType>, handler: NodeHandler<E>) {
        self.nodes.insert(node_type.into(), handler);
    }

    /// Register a mark handler, replacing any previous one for the type
    pub fn insert_mark(&mut self, mark_type: impl Into<MarkType>, handler: MarkHandler<E>) {
        self.marks.insert(mark_type.into(), handler);
    }

    /// Register a node render function
    pub fn add_node<F>(&mut self, node_type: impl Into<NodeType>, render: F) -> &mut Self
    where
        F: Fn(&Node, Vec<E>) -> E + Send + Sync + 'static,
    {
        self.insert_node(node_type, NodeHandler::new(render));
        self
    }

    /// Register a mark render function
    pub fn add_mark<F>(&mut self, mark_type: impl Into<MarkType>, wrap: F) -> &mut Self
    where
        F: Fn(&Mark, E) -> E + Send + Sync + 'static,
    {
        self.insert_mark(mark_type, MarkHandler::new(wrap));
        self
    }

    /// Builder form of [`Handlers::add_node`]
    pub fn node<F>(mut self, node_type: impl Into<NodeType>, render: F) -> Self
    where
        F: Fn(&Node, Vec<E>) -> E + Send + Sync + 'static,
    {
        self.add_node(node_type, render);
        self
    }

    /// Builder form of [`Handlers::add_mark`]
    pub fn mark<F>(mut self, mark_type: impl Into<MarkType>, wrap: F) -> Self
    where
        F: Fn(&Mark, E) -> E + Send + Sync + 'static,
    {
        self.add_mark(mark_type, wrap);
        self
    }

    /// Remove a node handler, returning whether one was registered
    pub fn remove_node(&mut self, node_type: &NodeType) -> bool {
        self.nodes.shift_remove(node_type).is_some()
    }

    /// Remove a mark handler, returning whether one was registered
    pub fn remove_mark(&mut self, mark_type: &MarkType) -> bool {
        self.marks.shift_remove(mark_type).is_some()
    }

    /// Merge another registry into this one; its entries win on conflict
    pub fn extend(&mut self, other: Handlers<E>) {
        self.nodes.extend(other.nodes);
        self.marks.extend(other.marks);
    }

    /// Find the handler for a node type
    pub fn for_node(&self, node_type: &NodeType) -> Option<&NodeHandler<E>> {
        self.nodes.get(node_type)
    }

    /// Find the handler for a mark type
    pub fn for_mark(&self, mark_type: &MarkType) -> Option<&MarkHandler<E>> {
        self.marks.get(mark_type)
    }

    /// Registered node types, in registration order
    pub fn node_types(&self) -> impl Iterator<Item = &NodeType> {
        self.nodes.keys()
    }

    /// Registered mark types, in registration order
    pub fn mark_types(&self) -> impl Iterator<Item = &MarkType> {
        self.marks.keys()
    }

    /// Known node types with no registered handler
    pub fn missing_node_types(&self) -> Vec<NodeType> {
        NodeType::known()
            .into_iter()
            .filter(|t| !self.nodes.contains_key(t))
            .collect()
    }

    /// Known mark types with no registered handler
    pub fn missing_mark_types(&self) -> Vec<MarkType> {
        MarkType::known()
            .into_iter()
            .filter(|t| !self.marks.contains_key(t))
            .collect()
    }

    /// Whether every known node and mark type has a handler
    pub fn is_complete(&self) -> bool {
        self.missing_node_types().is_empty() && self.missing_mark_types().is_empty()
    }
}

impl<E> Default for Handlers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Handlers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .field("marks", &self.marks.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn named(name: &'static str) -> impl Fn(&Node, Vec<String>) -> String + Send + Sync {
        move |_, _| name.to_string()
    }

    #[test]
    fn test_lookup() {
        let handlers = Handlers::new()
            .node(NodeType::Doc, named("doc"))
            .mark(MarkType::Bold, |_, content: String| format!("**{}**", content));

        let doc = Node::new(NodeType::Doc);
        let rendered = handlers
            .for_node(&NodeType::Doc)
            .map(|h| h.render(&doc, Vec::new()));
        assert_eq!(rendered.as_deref(), Some("doc"));

        let bold = Mark::new(MarkType::Bold);
        let wrapped = handlers
            .for_mark(&MarkType::Bold)
            .map(|h| h.wrap(&bold, "x".to_string()));
        assert_eq!(wrapped.as_deref(), Some("**x**"));

        assert!(handlers.for_node(&NodeType::Paragraph).is_none());
        assert!(handlers.for_mark(&MarkType::Link).is_none());
    }

    #[test]
    fn test_custom_type_registration() {
        let handlers = Handlers::new().node("mention", named("@someone"));
        let ty = NodeType::Other("mention".to_string());
        assert!(handlers.for_node(&ty).is_some());
        assert!(handlers.for_node(&NodeType::Other("emoji".to_string())).is_none());
    }

    #[test]
    fn test_later_registration_wins() {
        let mut handlers = Handlers::new().node(NodeType::Text, named("first"));
        handlers.add_node(NodeType::Text, named("second"));

        let node = Node::text("x");
        let out = handlers.for_node(&NodeType::Text).map(|h| h.render(&node, Vec::new()));
        assert_eq!(out.as_deref(), Some("second"));
        assert_eq!(handlers.node_types().count(), 1);
    }

    #[test]
    fn test_extend_overrides() {
        let mut base = Handlers::new()
            .node(NodeType::Doc, named("base-doc"))
            .node(NodeType::Text, named("base-text"));
        base.extend(Handlers::new().node(NodeType::Text, named("override")));

        let node = Node::text("x");
        let doc = base.for_node(&NodeType::Doc).map(|h| h.render(&node, Vec::new()));
        let text = base.for_node(&NodeType::Text).map(|h| h.render(&node, Vec::new()));
        assert_eq!(doc.as_deref(), Some("base-doc"));
        assert_eq!(text.as_deref(), Some("override"));
    }

    #[test]
    fn test_remove() {
        let mut handlers = Handlers::new()
            .node(NodeType::Doc, named("doc"))
            .mark(MarkType::Code, |_, c: String| c);
        assert!(handlers.remove_node(&NodeType::Doc));
        assert!(!handlers.remove_node(&NodeType::Doc));
        assert!(handlers.remove_mark(&MarkType::Code));
        assert!(handlers.for_node(&NodeType::Doc).is_none());
    }

    #[test]
    fn test_missing_types() {
        let handlers = Handlers::new()
            .node(NodeType::Doc, named("doc"))
            .node(NodeType::Text, named("text"))
            .node("mention", named("mention"))
            .mark(MarkType::Bold, |_, c: String| c);

        let missing_nodes = handlers.missing_node_types();
        assert_eq!(missing_nodes.len(), NodeType::known().len() - 2);
        assert!(!missing_nodes.contains(&NodeType::Doc));
        assert!(missing_nodes.contains(&NodeType::HardBreak));

        assert_eq!(
            handlers.missing_mark_types(),
            vec![
                MarkType::Italic,
                MarkType::Underline,
                MarkType::Strike,
                MarkType::Code,
                MarkType::Link,
            ]
        );
        assert!(!handlers.is_complete());
    }

    #[test]
    fn test_complete_registry() {
        let mut handlers: Handlers<String> = Handlers::new();
        for ty in NodeType::known() {
            handlers.add_node(ty, named("n"));
        }
        for ty in MarkType::known() {
            handlers.add_mark(ty, |_, c| c);
        }
        assert!(handlers.is_complete());
    }

    #[test]
    fn test_debug_lists_registered_types() {
        let handlers = Handlers::new()
            .node(NodeType::Paragraph, named("p"))
            .mark(MarkType::Link, |_, c: String| c);
        let debug = format!("{:?}", handlers);
        assert!(debug.contains("Paragraph"));
        assert!(debug.contains("Link"));
    }
}
