//! Markup tree built by the compiler and serialized to HTML.
//!
//! Generated markup is assembled as nodes rather than string concatenation so
//! caller-provided values (style strings, width tokens, slot content) are
//! escaped on the way out and can never open or close elements.

use serde_json::{Map, Value, json};
use std::fmt;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta", "wbr"];

/// Elements whose text children are emitted verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["style", "script"];

/// A node in the generated markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with ordered attributes and child nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value of the same name.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let attr_name = name.into();
        let attr_value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(key, _)| *key == attr_name) {
            existing.1 = attr_value;
        } else {
            self.attrs.push((attr_name, attr_value));
        }
        self
    }

    /// Append one child.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Value of the named attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the `class` attribute lists `class_name`.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|item| item == class_name))
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Same tag and attributes with a different set of children.
    pub fn clone_with_children(&self, children: Vec<Node>) -> Self {
        Self {
            tag: self.tag.clone(),
            attrs: self.attrs.clone(),
            children,
        }
    }

    /// Consume the element, keeping only its children.
    #[inline]
    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        let raw_text = RAW_TEXT_ELEMENTS.contains(&self.tag.as_str());
        for child in &self.children {
            match child {
                Node::Text(text) if raw_text => out.push_str(&escape_raw_text(text)),
                _ => child.write_html(out),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl Node {
    /// Create a text node.
    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Borrow the element, if this node is one.
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Serialize this node and its subtree.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(element) => element.children.iter().map(Self::text_content).collect(),
        }
    }

    /// Deterministic JSON snapshot of the subtree, attributes sorted by name.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(text) => json!({ "type": "text", "text": text }),
            Self::Element(element) => {
                let mut attrs_obj = Map::new();
                for (name, value) in &element.attrs {
                    attrs_obj.insert(name.clone(), Value::String(value.clone()));
                }
                let children: Vec<Value> = element.children.iter().map(Self::to_json).collect();
                json!({
                    "type": "element",
                    "tag": element.tag,
                    "attrs": Value::Object(attrs_obj),
                    "children": children,
                })
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape_text(text)),
            Self::Element(element) => element.write_html(out),
        }
    }
}

impl From<Element> for Node {
    #[inline]
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_html())
    }
}

/// Serialize a node list back to back.
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out);
    }
    out
}

/// JSON snapshot of a node list.
pub fn to_json(nodes: &[Node]) -> Value {
    Value::Array(nodes.iter().map(Node::to_json).collect())
}

/// Escape special HTML characters in text content.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for char_val in text.chars() {
        match char_val {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(char_val),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for char_val in value.chars() {
        match char_val {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(char_val),
        }
    }
    out
}

/// Raw text cannot be entity-escaped, so only the closing-tag opener is broken
/// up. `<\/` is still `</` to a CSS tokenizer.
fn escape_raw_text(text: &str) -> String {
    text.replace("</", "<\\/")
}
