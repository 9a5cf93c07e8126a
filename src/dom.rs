//! DOM Operations Adapter
//!
//! Thin layer over `dom_query` giving the tree walk a small, stable set of
//! node operations: kind checks, tag names, ordered attribute access,
//! attribute rewriting, detachment and serialization.

pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

/// Kind of a node, as far as the extractor cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Comment,
    /// Document root, doctype and anything else without its own semantics.
    Other,
}

/// Classify a node.
#[must_use]
pub fn kind(node: &NodeRef) -> NodeKind {
    if node.is_element() {
        NodeKind::Element
    } else if node.is_text() {
        NodeKind::Text
    } else if node.is_comment() {
        NodeKind::Comment
    } else {
        NodeKind::Other
    }
}

// === Tag/Node Information ===

/// Get tag name (lowercase) of an element node.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_string())
}

/// Check an element's tag name without allocating.
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

// === Attribute Operations ===

/// Get all attributes as key-value pairs, in document order.
#[must_use]
pub fn get_all_attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

/// Clear all attributes from an element.
pub fn clear_all_attributes(node: &NodeRef) {
    let sel = Selection::from(*node);
    for (key, _) in get_all_attributes(node) {
        sel.remove_attr(&key);
    }
}

/// Replace an element's attributes with `attrs`, preserving the given order.
pub fn replace_attributes(node: &NodeRef, attrs: &[(String, String)]) {
    clear_all_attributes(node);
    let sel = Selection::from(*node);
    for (key, value) in attrs {
        sel.set_attr(key, value);
    }
}

// === Text Content ===

/// Literal text of a text node, or the concatenated text of an element.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

// === Tree Manipulation ===

/// Detach a node (and its subtree) from its parent.
#[inline]
pub fn remove(node: &NodeRef) {
    node.remove_from_parent();
}

/// Whether a node has no child nodes at all.
#[inline]
#[must_use]
pub fn is_empty(node: &NodeRef) -> bool {
    node.first_child().is_none()
}

// === Serialization ===

/// Render a node and its descendants back to markup.
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    node.html()
}

// === Parsing ===

/// Parse HTML text into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
