//! Owned, read-only markup tree.
//!
//! The transpiler never walks `scraper` nodes directly. The body container is
//! converted once into a [`MarkupNode`] tree, which keeps dispatch a plain
//! `match` over [`NodeKind`] and lets tests build fixtures from HTML strings.

use std::collections::{BTreeMap, BTreeSet};

use scraper::{ElementRef, Node};

/// Recognized node kinds. Anything else lands in [`NodeKind::Other`] with its
/// lower-cased tag name, so the dispatcher can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    // Ignored outright
    Sup,
    Sub,
    Iframe,
    Script,
    Noscript,
    Aside,
    Details,
    Hr,
    Br,
    Label,
    Input,
    // Inline
    Code,
    Em,
    Strong,
    I,
    B,
    S,
    Del,
    Cite,
    Time,
    A,
    Span,
    Img,
    // Blocks
    Heading(u8),
    Footer,
    Ul,
    Ol,
    Dl,
    Li,
    P,
    Section,
    Div,
    Blockquote,
    Pre,
    Figure,
    // Tables
    Table,
    Caption,
    Thead,
    Tbody,
    Tfoot,
    Tr,
    Th,
    Td,
    Other(String),
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "text" => NodeKind::Text,
            "sup" => NodeKind::Sup,
            "sub" => NodeKind::Sub,
            "iframe" => NodeKind::Iframe,
            "script" => NodeKind::Script,
            "noscript" => NodeKind::Noscript,
            "aside" => NodeKind::Aside,
            "details" => NodeKind::Details,
            "hr" => NodeKind::Hr,
            "br" => NodeKind::Br,
            "label" => NodeKind::Label,
            "input" => NodeKind::Input,
            "code" => NodeKind::Code,
            "em" => NodeKind::Em,
            "strong" => NodeKind::Strong,
            "i" => NodeKind::I,
            "b" => NodeKind::B,
            "s" => NodeKind::S,
            "del" => NodeKind::Del,
            "cite" => NodeKind::Cite,
            "time" => NodeKind::Time,
            "a" => NodeKind::A,
            "span" => NodeKind::Span,
            "img" => NodeKind::Img,
            "h1" => NodeKind::Heading(1),
            "h2" => NodeKind::Heading(2),
            "h3" => NodeKind::Heading(3),
            "h4" => NodeKind::Heading(4),
            "footer" => NodeKind::Footer,
            "ul" => NodeKind::Ul,
            "ol" => NodeKind::Ol,
            "dl" => NodeKind::Dl,
            "li" => NodeKind::Li,
            "p" => NodeKind::P,
            "section" => NodeKind::Section,
            "div" => NodeKind::Div,
            "blockquote" => NodeKind::Blockquote,
            "pre" => NodeKind::Pre,
            "figure" => NodeKind::Figure,
            "table" => NodeKind::Table,
            "caption" => NodeKind::Caption,
            "thead" => NodeKind::Thead,
            "tbody" => NodeKind::Tbody,
            "tfoot" => NodeKind::Tfoot,
            "tr" => NodeKind::Tr,
            "th" => NodeKind::Th,
            "td" => NodeKind::Td,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    pub kind: NodeKind,
    /// Lower-cased tag name, `"text"` for text leaves.
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub children: Vec<MarkupNode>,
    content: String,
}

impl MarkupNode {
    pub fn text_leaf(content: impl Into<String>) -> Self {
        MarkupNode {
            kind: NodeKind::Text,
            tag: "text".to_string(),
            attributes: BTreeMap::new(),
            classes: BTreeSet::new(),
            children: Vec::new(),
            content: content.into(),
        }
    }

    /// Convert a parsed element and its whole subtree.
    pub fn from_element(element: ElementRef<'_>) -> Self {
        let value = element.value();
        let tag = value.name().to_ascii_lowercase();

        let attributes = value
            .attrs()
            .map(|(name, val)| (name.to_string(), val.to_string()))
            .collect();
        let classes = value.classes().map(str::to_string).collect();

        let mut children = Vec::new();
        for child in element.children() {
            match child.value() {
                Node::Text(text) => children.push(MarkupNode::text_leaf(&**text)),
                Node::Element(_) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        children.push(MarkupNode::from_element(child_element));
                    }
                }
                Node::Comment(comment) => {
                    let mut node = MarkupNode::text_leaf(&**comment);
                    node.kind = NodeKind::Other("comment".to_string());
                    node.tag = "comment".to_string();
                    children.push(node);
                }
                _ => {}
            }
        }

        MarkupNode {
            kind: NodeKind::from_tag(&tag),
            tag,
            attributes,
            classes,
            children,
            content: String::new(),
        }
    }

    /// Concatenated text of every descendant text leaf, in document order.
    pub fn text(&self) -> String {
        match self.kind {
            NodeKind::Text => self.content.clone(),
            _ => {
                let mut out = String::new();
                self.collect_text(&mut out);
                out
            }
        }
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child.kind {
                NodeKind::Text => out.push_str(&child.content),
                NodeKind::Other(ref name) if name == "comment" => {}
                _ => child.collect_text(out),
            }
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// First descendant of `kind`, depth-first in document order.
    pub fn find_first(&self, kind: &NodeKind) -> Option<&MarkupNode> {
        for child in &self.children {
            if &child.kind == kind {
                return Some(child);
            }
            if let Some(found) = child.find_first(kind) {
                return Some(found);
            }
        }
        None
    }

    /// Every descendant of `kind`, depth-first in document order. Does not
    /// descend into matches.
    pub fn find_all<'a>(&'a self, kind: &NodeKind, found: &mut Vec<&'a MarkupNode>) {
        for child in &self.children {
            if &child.kind == kind {
                found.push(child);
            } else {
                child.find_all(kind, found);
            }
        }
    }
}
