//! CommonMark handler set rendering documents to Markdown strings.

use tiptap_core::{MarkType, NodeType};

use super::{Handlers, MarkHandler, NodeHandler, DEFAULT_HEADING_LEVEL};
use crate::renderer::Renderer;
use crate::utilities::{collapse_newlines, escape_markdown, indent_continuation};
use crate::Result;

/// Heading style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingStyle {
    /// Use setext-style headings (underlined with = or -)
    /// Only works for levels 1 and 2, falls back to ATX for 3-6
    #[default]
    Setext,
    /// Use ATX-style headings (prefixed with #)
    Atx,
}

/// Options for Markdown output
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Heading style (setext or atx)
    pub heading_style: HeadingStyle,

    /// Horizontal rule string
    pub hr: String,

    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Fence string for code blocks
    pub fence: String,

    /// Emphasis delimiter
    pub em_delimiter: char,

    /// Strong delimiter
    pub strong_delimiter: String,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::Setext,
            hr: "* * *".to_string(),
            bullet_list_marker: '*',
            fence: "```".to_string(),
            em_delimiter: '_',
            strong_delimiter: "**".to_string(),
        }
    }
}

/// Create handlers for every known node and mark type
pub fn markdown_handlers(options: &MarkdownOptions) -> Handlers<String> {
    let mut handlers = Handlers::new();

    handlers.insert_node(NodeType::Doc, doc_handler());
    handlers.insert_node(NodeType::Text, text_handler());
    handlers.insert_node(NodeType::Paragraph, paragraph_handler());
    handlers.insert_node(NodeType::HardBreak, hard_break_handler());
    handlers.insert_node(NodeType::Heading, heading_handler(options));
    handlers.insert_node(NodeType::Blockquote, blockquote_handler());
    handlers.insert_node(NodeType::BulletList, bullet_list_handler(options));
    handlers.insert_node(NodeType::OrderedList, ordered_list_handler());
    handlers.insert_node(NodeType::ListItem, list_item_handler());
    handlers.insert_node(NodeType::CodeBlock, code_block_handler(options));
    handlers.insert_node(NodeType::HorizontalRule, horizontal_rule_handler(options));

    handlers.insert_mark(MarkType::Bold, delimited(&options.strong_delimiter));
    handlers.insert_mark(MarkType::Italic, delimited(&options.em_delimiter.to_string()));
    handlers.insert_mark(MarkType::Strike, delimited("~~"));
    // CommonMark has no underline syntax
    handlers.insert_mark(MarkType::Underline, MarkHandler::new(|_, content: String| content));
    handlers.insert_mark(MarkType::Code, code_handler());
    handlers.insert_mark(MarkType::Link, link_handler());

    handlers
}

/// Render a tiptap JSON document straight to Markdown
pub fn render_markdown(json: &str, options: &MarkdownOptions) -> Result<String> {
    Renderer::new(markdown_handlers(options)).render_json(json)
}

fn doc_handler() -> NodeHandler<String> {
    NodeHandler::new(|_, children: Vec<String>| collapse_newlines(&children.concat()))
}

fn text_handler() -> NodeHandler<String> {
    NodeHandler::new(|node, _| {
        let text = node.text.as_deref().unwrap_or("");
        // Code spans are literal, so their text must stay unescaped
        if node.has_mark(&MarkType::Code) {
            text.to_string()
        } else {
            escape_markdown(text)
        }
    })
}

fn paragraph_handler() -> NodeHandler<String> {
    NodeHandler::new(|_, children: Vec<String>| format!("\n\n{}\n\n", children.concat().trim()))
}

fn hard_break_handler() -> NodeHandler<String> {
    NodeHandler::new(|_, _| "  \n".to_string())
}

fn heading_handler(options: &MarkdownOptions) -> NodeHandler<String> {
    let style = options.heading_style;
    NodeHandler::new(move |node, children: Vec<String>| {
        let level = node
            .heading_level()
            .map_or(DEFAULT_HEADING_LEVEL, |l| l.get());

        let content = children.concat();
        let content = content.trim();
        if content.is_empty() {
            return String::new();
        }

        match style {
            HeadingStyle::Setext if level <= 2 => {
                let underline = if level == 1 { "=" } else { "-" };
                format!(
                    "\n\n{}\n{}\n\n",
                    content,
                    underline.repeat(content.chars().count())
                )
            }
            _ => format!("\n\n{} {}\n\n", "#".repeat(usize::from(level)), content),
        }
    })
}

fn blockquote_handler() -> NodeHandler<String> {
    NodeHandler::new(|_, children: Vec<String>| {
        let content = collapse_newlines(&children.concat());
        let content = content.trim();
        if content.is_empty() {
            return String::new();
        }
        let quoted: Vec<String> = content
            .lines()
            .map(|line| {
                if line.is_empty() {
                    ">".to_string()
                } else {
                    format!("> {}", line)
                }
            })
            .collect();
        format!("\n\n{}\n\n", quoted.join("\n"))
    })
}

fn bullet_list_handler(options: &MarkdownOptions) -> NodeHandler<String> {
    let prefix = format!("{}   ", options.bullet_list_marker);
    NodeHandler::new(move |_, children: Vec<String>| {
        let items: Vec<String> = children
            .into_iter()
            .map(|item| format!("{}{}", prefix, item))
            .collect();
        list_block(&items)
    })
}

fn ordered_list_handler() -> NodeHandler<String> {
    NodeHandler::new(|node, children: Vec<String>| {
        let start = node.attr("start").and_then(|v| v.as_u64()).unwrap_or(1);
        let items: Vec<String> = children
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let n = start.saturating_add(i as u64);
                format!("{}.  {}", n, item)
            })
            .collect();
        list_block(&items)
    })
}

fn list_block(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!("\n\n{}\n\n", items.join("\n"))
}

fn list_item_handler() -> NodeHandler<String> {
    NodeHandler::new(|_, children: Vec<String>| {
        let content = collapse_newlines(&children.concat());
        indent_continuation(content.trim(), "    ")
    })
}

fn code_block_handler(options: &MarkdownOptions) -> NodeHandler<String> {
    let fence = options.fence.clone();
    NodeHandler::new(move |node, _| {
        // Children are escaped text runs; the block needs the raw source
        let code = node.text_content();
        format!(
            "\n\n{}{}\n{}\n{}\n\n",
            fence,
            node.language().unwrap_or(""),
            code.trim_end_matches('\n'),
            fence
        )
    })
}

fn horizontal_rule_handler(options: &MarkdownOptions) -> NodeHandler<String> {
    let hr = options.hr.clone();
    NodeHandler::new(move |_, _| format!("\n\n{}\n\n", hr))
}

fn delimited(delimiter: &str) -> MarkHandler<String> {
    let delimiter = delimiter.to_string();
    MarkHandler::new(move |_, content: String| {
        if content.trim().is_empty() {
            return content;
        }
        format!("{}{}{}", delimiter, content, delimiter)
    })
}

fn code_handler() -> MarkHandler<String> {
    MarkHandler::new(|_, content: String| {
        if content.is_empty() {
            return content;
        }

        // Count backticks needed
        let max_consecutive_backticks = content
            .chars()
            .fold((0, 0), |(max, current), c| {
                if c == '`' {
                    (max.max(current + 1), current + 1)
                } else {
                    (max, 0)
                }
            })
            .0;

        let backticks = "`".repeat(max_consecutive_backticks + 1);

        let needs_space = content.starts_with('`') || content.ends_with('`');

        if needs_space {
            format!("{} {} {}", backticks, content, backticks)
        } else {
            format!("{}{}{}", backticks, content, backticks)
        }
    })
}

fn link_handler() -> MarkHandler<String> {
    MarkHandler::new(|mark, content: String| {
        let Some(href) = mark.href().map(str::trim).filter(|h| !h.is_empty()) else {
            return content;
        };

        let title_part = mark
            .attr("title")
            .and_then(|t| t.as_str())
            .map(|t| format!(" \"{}\"", t))
            .unwrap_or_default();

        format!("[{}]({}{})", content, href, title_part)
    })
}
