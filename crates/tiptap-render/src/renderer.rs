//! Renderer - walks a document tree and dispatches to the handler registry.

use serde_json::Value;
use tiptap_core::{Node, NodeType};
use tracing::{info, warn};

use crate::handlers::Handlers;
use crate::Result;

/// Nesting depth past which subtrees are dropped
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Nodes nested deeper than this are replaced by the neutral element
    pub max_depth: usize,

    /// Render paragraphs without content through the `hardBreak` handler
    pub empty_paragraph_as_break: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            empty_paragraph_as_break: true,
        }
    }
}

/// Renders documents into `E` using a handler registry.
///
/// `E::default()` is the neutral element: it stands in for any node whose
/// type has no handler.
pub struct Renderer<E> {
    options: RenderOptions,
    handlers: Handlers<E>,
}

impl<E: Default> Renderer<E> {
    /// Create a renderer with default options
    pub fn new(handlers: Handlers<E>) -> Self {
        Self {
            options: RenderOptions::default(),
            handlers,
        }
    }

    /// Create a renderer with custom options
    pub fn with_options(handlers: Handlers<E>, options: RenderOptions) -> Self {
        Self { options, handlers }
    }

    /// Render a node and all its descendants
    pub fn render(&self, node: &Node) -> E {
        Walker {
            handlers: &self.handlers,
            options: &self.options,
        }
        .render_node(node, 0)
    }

    /// Parse a JSON document and render it
    pub fn render_json(&self, json: &str) -> Result<E> {
        let node = Node::from_json(json)?;
        Ok(self.render(&node))
    }

    /// Convert a parsed JSON value into a document and render it
    pub fn render_value(&self, value: Value) -> Result<E> {
        let node = Node::from_value(value)?;
        Ok(self.render(&node))
    }

    /// Get the handler registry
    pub fn handlers(&self) -> &Handlers<E> {
        &self.handlers
    }

    /// Get mutable access to the handler registry
    pub fn handlers_mut(&mut self) -> &mut Handlers<E> {
        &mut self.handlers
    }

    /// Get the current options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }
}

/// Render a node with a borrowed registry and default options
pub fn render<E: Default>(node: &Node, handlers: &Handlers<E>) -> E {
    let options = RenderOptions::default();
    Walker {
        handlers,
        options: &options,
    }
    .render_node(node, 0)
}

/// One render pass over a tree
struct Walker<'a, E> {
    handlers: &'a Handlers<E>,
    options: &'a RenderOptions,
}

impl<E: Default> Walker<'_, E> {
    fn render_node(&self, node: &Node, depth: usize) -> E {
        if depth > self.options.max_depth {
            warn!(
                depth,
                node_type = %node.node_type,
                "maximum render depth exceeded, skipping subtree"
            );
            return E::default();
        }

        let Some(handler) = self.handlers.for_node(&node.node_type) else {
            info!(node_type = %node.node_type, ?node, "missing node type");
            return E::default();
        };

        // Empty paragraphs take the line break handler but keep their own node.
        let handler = if self.options.empty_paragraph_as_break && node.is_empty_paragraph() {
            match self.handlers.for_node(&NodeType::HardBreak) {
                Some(line_break) => line_break,
                None => {
                    info!(node_type = %NodeType::HardBreak, ?node, "missing node type");
                    return E::default();
                }
            }
        } else {
            handler
        };

        let children: Vec<E> = node
            .children()
            .map(|child| self.render_node(child, depth + 1))
            .collect();

        let rendered = handler.render(node, children);
        self.wrap_marks(node, rendered)
    }

    /// First mark ends up innermost, last mark outermost
    fn wrap_marks(&self, node: &Node, rendered: E) -> E {
        node.marks()
            .fold(rendered, |inner, mark| match self.handlers.for_mark(&mark.mark_type) {
                Some(handler) => handler.wrap(mark, inner),
                None => {
                    info!(mark_type = %mark.mark_type, ?mark, "missing mark type");
                    inner
                }
            })
    }
}
