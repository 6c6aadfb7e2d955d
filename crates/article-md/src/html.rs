//! HTML parsing support.
//!
//! Lowers `scraper` documents into the [`Node`] structure used by the
//! converter. Comments, doctypes and processing instructions are dropped.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a Node tree rooted at the synthetic `html` element.
///
/// # Example
///
/// ```rust
/// use article_md::{convert, parse_html};
///
/// let node = parse_html("<h2>Hello <em>World</em></h2>");
/// assert_eq!(convert(&node), "## HelloWorld\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    from_element(document.root_element())
}

/// Parse a full HTML document into a Node tree rooted at `html`.
pub fn parse_document(html: &str) -> Node {
    let document = Html::parse_document(html);
    from_element(document.root_element())
}

/// Convert a scraper ElementRef and its subtree to our Node structure
pub fn from_element(element: ElementRef) -> Node {
    let mut node = Node::element(element.value().name());
    for (name, value) in element.value().attrs() {
        node.set_attr(name, value);
    }

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(from_element(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
