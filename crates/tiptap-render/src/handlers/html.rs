//! Handler set producing plain HTML tags.

use tiptap_core::{Mark, MarkType, Node, NodeType};

use super::{Handlers, DEFAULT_HEADING_LEVEL};
use crate::element::HtmlNode;
use crate::renderer::Renderer;
use crate::Result;

/// Create handlers for every known node and mark type
pub fn html_handlers() -> Handlers<HtmlNode> {
    Handlers::new()
        // Marks
        .mark(MarkType::Link, link)
        .mark(MarkType::Bold, wrap_in("b"))
        .mark(MarkType::Italic, wrap_in("i"))
        .mark(MarkType::Underline, wrap_in("u"))
        .mark(MarkType::Strike, wrap_in("s"))
        .mark(MarkType::Code, wrap_in("code"))
        // Nodes
        .node(NodeType::Doc, |_, children| HtmlNode::fragment(children))
        .node(NodeType::Text, |node, _| {
            HtmlNode::element("span", vec![HtmlNode::text(node.text.as_deref().unwrap_or(""))])
        })
        .node(NodeType::Paragraph, tag("p"))
        .node(NodeType::Heading, heading)
        .node(NodeType::HardBreak, |_, _| HtmlNode::element("br", Vec::new()))
        .node(NodeType::BulletList, tag("ul"))
        .node(NodeType::OrderedList, ordered_list)
        .node(NodeType::ListItem, tag("li"))
        .node(NodeType::CodeBlock, code_block)
        .node(NodeType::HorizontalRule, |_, _| HtmlNode::element("hr", Vec::new()))
        .node(NodeType::Blockquote, tag("blockquote"))
}

/// Render a tiptap JSON document straight to an HTML string
pub fn render_html(json: &str) -> Result<String> {
    let renderer = Renderer::new(html_handlers());
    Ok(renderer.render_json(json)?.to_html())
}

fn tag(name: &'static str) -> impl Fn(&Node, Vec<HtmlNode>) -> HtmlNode + Send + Sync {
    move |_, children| HtmlNode::element(name, children)
}

fn wrap_in(name: &'static str) -> impl Fn(&Mark, HtmlNode) -> HtmlNode + Send + Sync {
    move |_, content| HtmlNode::element(name, vec![content])
}

fn heading(node: &Node, children: Vec<HtmlNode>) -> HtmlNode {
    let level = node
        .heading_level()
        .map_or(DEFAULT_HEADING_LEVEL, |l| l.get());
    HtmlNode::element(&format!("h{}", level), children)
}

fn ordered_list(node: &Node, children: Vec<HtmlNode>) -> HtmlNode {
    match node.attr("start").and_then(|v| v.as_u64()) {
        Some(start) if start != 1 => {
            let start = start.to_string();
            HtmlNode::element_with_attrs("ol", vec![("start", start.as_str())], children)
        }
        _ => HtmlNode::element("ol", children),
    }
}

fn code_block(node: &Node, children: Vec<HtmlNode>) -> HtmlNode {
    let code = match node.language() {
        Some(language) => {
            let class = format!("language-{}", language);
            HtmlNode::element_with_attrs("code", vec![("class", class.as_str())], children)
        }
        None => HtmlNode::element("code", children),
    };
    HtmlNode::element("pre", vec![code])
}

fn link(mark: &Mark, content: HtmlNode) -> HtmlNode {
    let mut attrs = Vec::with_capacity(3);
    if let Some(href) = mark.href() {
        attrs.push(("href", href));
    }
    attrs.push(("target", "_blank"));
    attrs.push(("rel", "noreferrer"));
    HtmlNode::element_with_attrs("a", attrs, vec![content])
}
