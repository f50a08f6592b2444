//! Escaping and whitespace helpers shared by the bundled handler sets.
#![cfg_attr(not(all(feature = "html", feature = "markdown")), allow(dead_code))]

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "source", "track", "wbr",
];

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Escape text content for HTML output
pub fn escape_html_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape an HTML attribute value
pub fn escape_html_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape markdown special characters in text.
///
/// A line that opens with digits and a dot followed by whitespace would start
/// an ordered list, so that dot is escaped too.
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    // Some(true) once a line so far holds only (at least one) digit
    let mut leading_digits: Option<bool> = Some(false);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' | '*' | '_' | '[' | ']' | '#' | '+' | '-' | '!' | '`' | '~' => {
                result.push('\\');
                result.push(c);
            }
            '.' if leading_digits == Some(true)
                && chars.peek().map_or(true, |next| next.is_whitespace()) =>
            {
                result.push_str("\\.");
            }
            _ => result.push(c),
        }

        leading_digits = match c {
            '\n' => Some(false),
            '0'..='9' => leading_digits.map(|_| true),
            _ => None,
        };
    }

    result
}

/// Trim surrounding newlines and cap runs of newlines at two
pub fn collapse_newlines(output: &str) -> String {
    let trimmed = output.trim_matches('\n');

    let mut newline_count = 0;
    let mut result = String::with_capacity(trimmed.len());

    for c in trimmed.chars() {
        if c == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push(c);
            }
        } else {
            newline_count = 0;
            result.push(c);
        }
    }

    result
}

/// Indent every non-empty line after the first
pub fn indent_continuation(content: &str, indent: &str) -> String {
    let mut result = String::with_capacity(content.len());
    for (i, line) in content.split('\n').enumerate() {
        if i > 0 {
            result.push('\n');
            if !line.is_empty() {
                result.push_str(indent);
            }
        }
        result.push_str(line);
    }
    result
}
