//! Parser-agnostic DOM node structure for article conversion.
//!
//! Any HTML parser can lower its output into this tree; the converter only
//! ever reads it. The `html` feature ships an adapter for `scraper`.

use indexmap::IndexMap;

/// A node in an already-parsed document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Raw character data. Has no children.
    Text(String),
    /// An element with a tag name, attributes and ordered children.
    Element(Element),
}

/// An element node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name, always lowercase
    pub tag: String,

    /// Attributes keyed by lowercase name, in source order
    pub attributes: IndexMap<String, String>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element {
            tag: tag_name.to_lowercase(),
            ..Default::default()
        })
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Borrow the element payload, if any
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Get the tag name. Text nodes have none.
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag.as_str())
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element()?.attr(name)
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.as_element().into_iter().flat_map(|e| e.children.iter())
    }

    /// Add a child node. Text nodes cannot hold children, so this is a no-op for them.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Set an attribute, replacing an existing value of the same name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Node::Element(element) = self {
            element
                .attributes
                .insert(name.to_lowercase(), value.to_string());
        }
    }

    /// Get all text content from this node and descendants, untouched
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }

    /// Get the flattened text of this node, see [`Element::flattened_text`]
    pub fn flattened_text(&self) -> String {
        match self {
            Node::Text(text) => text.trim().to_string(),
            Node::Element(element) => element.flattened_text(),
        }
    }
}

impl Element {
    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    /// Get an attribute value, or an empty string when it is absent
    pub fn attr_or_empty(&self, name: &str) -> &str {
        self.attr(name).unwrap_or_default()
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Direct element children with the given tag, no descent
    pub fn child_elements_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.element_children().filter(move |e| e.tag == tag)
    }

    /// Concatenate all descendant text as-is
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Concatenate every descendant text fragment after trimming it.
    ///
    /// Empty fragments are dropped and no separator is inserted, so
    /// `<p>Hello <b>World</b></p>` flattens to `HelloWorld`. Text inside
    /// `style` elements never contributes.
    pub fn flattened_text(&self) -> String {
        let mut out = String::new();
        self.push_fragments(&mut out);
        out
    }

    fn push_fragments(&self, out: &mut String) {
        if self.tag == "style" {
            return;
        }
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text.trim()),
                Node::Element(element) => element.push_fragments(out),
            }
        }
    }
}
