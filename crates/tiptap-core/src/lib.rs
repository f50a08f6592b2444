//! tiptap-core - document model for tiptap JSON
//!
//! This crate defines the node and mark shapes of a tiptap (ProseMirror)
//! document and the closed sets of type names a renderer dispatches on. It is
//! used by `tiptap-render`, which walks the tree and hands every node and
//! mark to a registered handler.
//!
//! # Architecture
//!
//! ```text
//! JSON ──serde──▶ ┌──────────────┐
//!                 │ Node / Mark  │ ──▶ tiptap-render ──▶ output tree
//! builders ──────▶│    tree      │
//!                 └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use tiptap_core::{Mark, MarkType, Node, NodeType};
//!
//! let doc = Node::from_json(r#"{
//!     "type": "doc",
//!     "content": [{ "type": "text", "text": "hello", "marks": [{ "type": "bold" }] }]
//! }"#).unwrap();
//!
//! let built = Node::new(NodeType::Doc)
//!     .with_child(Node::text("hello").with_mark(Mark::new(MarkType::Bold)));
//!
//! assert_eq!(doc, built);
//! ```

mod attrs;
mod node;
mod types;

pub use attrs::{Attrs, HeadingLevel};
pub use node::{Mark, Node};
pub use types::{MarkType, NodeType};

/// Error type for document model operations
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The input was not valid JSON or lacked a mandatory `type` field
    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocumentError>;
