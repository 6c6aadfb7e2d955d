//! Convert a Node tree to Markdown text
//!
//! A depth-first, pre-order walk that appends one line per emitted block to a
//! buffer owned by a single [`convert`] call. Headings, paragraphs and list
//! items are flattened to plain text; blockquotes recurse with a deeper
//! `> ` prefix; anything unrecognised is descended into transparently.

use crate::node::{Element, Node};

/// Tags with a dedicated emission rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Heading(usize),
    Paragraph,
    UnorderedList,
    OrderedList,
    BlockQuote,
    Image,
    Anchor,
    Style,
    Other,
}

impl Tag {
    fn from_name(name: &str) -> Self {
        match name {
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "p" => Tag::Paragraph,
            "ul" => Tag::UnorderedList,
            "ol" => Tag::OrderedList,
            "blockquote" => Tag::BlockQuote,
            "img" => Tag::Image,
            "a" => Tag::Anchor,
            "style" => Tag::Style,
            _ => Tag::Other,
        }
    }
}

/// Convert an article body tree to Markdown.
///
/// Never fails: unknown elements are walked through and missing attributes
/// become empty strings. Lines are joined with `\n`; blank entries act as
/// block separators, so the output may end with newlines.
pub fn convert(root: &Node) -> String {
    let mut lines = Vec::new();
    walk(root, "", &mut lines);
    tracing::trace!(lines = lines.len(), "converted node tree");
    lines.join("\n")
}

fn walk(node: &Node, prefix: &str, lines: &mut Vec<String>) {
    match node {
        Node::Text(text) => {
            let text = text.trim();
            if !text.is_empty() {
                lines.push(format!("{prefix}{text}"));
            }
        }
        Node::Element(element) => walk_element(element, prefix, lines),
    }
}

fn walk_element(element: &Element, prefix: &str, lines: &mut Vec<String>) {
    match Tag::from_name(&element.tag) {
        // Block lines carry the quote prefix too, so quoted headings stay quoted.
        Tag::Heading(level) => {
            let text = element.flattened_text();
            if !text.is_empty() {
                lines.push(format!("{prefix}{} {text}", "#".repeat(level)));
                lines.push(String::new());
            }
        }

        Tag::Paragraph => {
            let text = element.flattened_text();
            if !text.is_empty() {
                lines.push(format!("{prefix}{text}"));
                lines.push(String::new());
            }
        }

        Tag::UnorderedList => push_list(element, prefix, lines, |_| "- ".to_string()),

        Tag::OrderedList => push_list(element, prefix, lines, |index| format!("{index}. ")),

        Tag::BlockQuote => {
            let nested = format!("{prefix}> ");
            for child in element.children() {
                walk(child, &nested, lines);
            }
            lines.push(String::new());
        }

        Tag::Image => {
            let alt = element.attr_or_empty("alt");
            let src = element.attr_or_empty("src");
            lines.push(format!("{prefix}![{alt}]({src})"));
            lines.push(String::new());
        }

        Tag::Anchor => {
            let text = element.flattened_text();
            if !text.is_empty() {
                let href = element.attr_or_empty("href");
                lines.push(format!("{prefix}[{text}]({href})"));
            }
        }

        Tag::Style => {}

        Tag::Other => {
            for child in element.children() {
                walk(child, prefix, lines);
            }
        }
    }
}

/// Emit one line per direct `li` child, then a blank separator. Empty items
/// are skipped but keep their ordinal.
fn push_list<F>(list: &Element, prefix: &str, lines: &mut Vec<String>, marker: F)
where
    F: Fn(usize) -> String,
{
    for (index, item) in list.child_elements_named("li").enumerate() {
        let text = item.flattened_text();
        if !text.is_empty() {
            lines.push(format!("{prefix}{}{text}", marker(index + 1)));
        }
    }
    lines.push(String::new());
}
