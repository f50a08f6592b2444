//! Node and mark handler types.

use tiptap_core::{Mark, Node};

/// Render function for a node: receives the node and its already rendered children
pub type NodeRenderFn<E> = Box<dyn Fn(&Node, Vec<E>) -> E + Send + Sync>;

/// Render function for a mark: receives the mark and the content it wraps
pub type MarkRenderFn<E> = Box<dyn Fn(&Mark, E) -> E + Send + Sync>;

/// Turns a node plus its rendered children into one output element
pub struct NodeHandler<E> {
    render: NodeRenderFn<E>,
}

impl<E> NodeHandler<E> {
    /// Create a new node handler
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Node, Vec<E>) -> E + Send + Sync + 'static,
    {
        Self {
            render: Box::new(render),
        }
    }

    /// Apply this handler
    pub fn render(&self, node: &Node, children: Vec<E>) -> E {
        (self.render)(node, children)
    }
}

/// Wraps already rendered content in the output for a mark
pub struct MarkHandler<E> {
    wrap: MarkRenderFn<E>,
}

impl<E> MarkHandler<E> {
    /// Create a new mark handler
    pub fn new<F>(wrap: F) -> Self
    where
        F: Fn(&Mark, E) -> E + Send + Sync + 'static,
    {
        Self {
            wrap: Box::new(wrap),
        }
    }

    /// Apply this handler
    pub fn wrap(&self, mark: &Mark, content: E) -> E {
        (self.wrap)(mark, content)
    }
}
