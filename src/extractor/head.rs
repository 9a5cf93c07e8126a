//! `<head>` scanning for the declared charset and the page title.
//!
//! Only the direct children of `<head>` are examined.

use dom_query::NodeRef;

use super::state::HeadInfo;
use crate::dom;

const CHARSET_MARKER: &str = "charset=";

/// Charset declared by a `<meta>` element.
///
/// A `charset` attribute wins; otherwise everything after `charset=` in a
/// `content` attribute is returned as-is, quotes and all.
#[must_use]
pub fn meta_charset(node: &NodeRef) -> Option<String> {
    if !dom::is_tag(node, "meta") {
        return None;
    }

    let attrs = dom::get_all_attributes(node);
    if let Some((_, value)) = attrs.iter().find(|(key, _)| key == "charset") {
        return Some(value.clone());
    }

    attrs
        .iter()
        .filter(|(key, _)| key == "content")
        .find_map(|(_, value)| {
            value
                .find(CHARSET_MARKER)
                .map(|i| value[i + CHARSET_MARKER.len()..].to_string())
        })
}

/// Scan the direct children of `head` into `info`.
///
/// Every `<meta>` declaring a non-empty charset overwrites the previous one.
/// The first `<title>` with a child node supplies the title and ends the
/// scan.
pub fn scan_head(head: &NodeRef, info: &mut HeadInfo) {
    let mut child = head.first_child();
    while let Some(node) = child {
        if let Some(charset) = meta_charset(&node).filter(|c| !c.is_empty()) {
            info.charset = Some(charset);
        }

        if dom::is_tag(&node, "title") {
            if let Some(text) = node.first_child() {
                info.title = Some(dom::text_content(&text).to_string());
                break;
            }
        }

        child = node.next_sibling();
    }
}
