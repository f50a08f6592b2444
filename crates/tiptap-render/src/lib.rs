//! # tiptap-render
//!
//! Render tiptap (ProseMirror) JSON documents into any output type.
//!
//! The renderer walks the document tree depth-first and hands every node to
//! the handler registered for its type, together with the already rendered
//! children. Marks attached to a node then wrap that output one after the
//! other, so the first mark ends up innermost.
//!
//! ## Design
//!
//! The renderer knows nothing about the output it builds. A [`Handlers`]
//! registry supplies one function per node and mark type:
//!
//! - **Toolkit agnostic**: the output is any `E: Default`, whether HTML
//!   elements, Markdown strings or native widgets
//! - **Forgiving**: types without a handler are logged and render as
//!   `E::default()` instead of failing the whole document
//! - **Empty paragraphs**: a paragraph without content renders through the
//!   `hardBreak` handler
//!
//! ## Example (custom handlers)
//!
//! ```rust
//! use tiptap_render::{Handlers, MarkType, Node, NodeType, Renderer};
//!
//! let handlers = Handlers::new()
//!     .node(NodeType::Doc, |_, children: Vec<String>| children.concat())
//!     .node(NodeType::Text, |node, _| node.text.clone().unwrap_or_default())
//!     .mark(MarkType::Bold, |_, content| format!("<b>{}</b>", content));
//!
//! let renderer = Renderer::new(handlers);
//! let output = renderer
//!     .render_json(r#"{"type":"doc","content":[{"type":"text","text":"hi","marks":[{"type":"bold"}]}]}"#)
//!     .unwrap();
//! assert_eq!(output, "<b>hi</b>");
//! ```
//!
//! ## Example (HTML)
//!
//! ```rust
//! # #[cfg(feature = "html")]
//! # {
//! let html = tiptap_render::render_html(
//!     r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"Hello"}]}]}"#,
//! )
//! .unwrap();
//! assert_eq!(html, "<p><span>Hello</span></p>");
//! # }
//! ```

#[cfg(feature = "html")]
mod element;
mod handlers;
mod renderer;
mod utilities;

#[cfg(feature = "html")]
pub use element::HtmlNode;
#[cfg(feature = "html")]
pub use handlers::{html_handlers, render_html};
#[cfg(feature = "markdown")]
pub use handlers::{markdown_handlers, render_markdown, HeadingStyle, MarkdownOptions};
pub use handlers::{Handlers, MarkHandler, MarkRenderFn, NodeHandler, NodeRenderFn};
pub use renderer::{render, RenderOptions, Renderer, DEFAULT_MAX_DEPTH};
pub use tiptap_core::{Attrs, DocumentError, HeadingLevel, Mark, MarkType, Node, NodeType};

/// Error type for render operations
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Document(#[from] DocumentError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
