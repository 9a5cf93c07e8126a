//! Content root selection.
//!
//! A single candidate text node selects its parent element. Several
//! candidates select the lowest common ancestor of their parents, folded
//! left to right.

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};

/// Nearest node that is an ancestor-or-self of both `a` and `b`.
///
/// When several nodes qualify, the one closest to `a` wins.
#[must_use]
pub fn common_ancestor<'a>(a: &NodeRef<'a>, b: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut b_chain: HashSet<NodeId> = HashSet::new();
    let mut current = Some(*b);
    while let Some(node) = current {
        b_chain.insert(node.id);
        current = node.parent();
    }

    let mut current = Some(*a);
    while let Some(node) = current {
        if b_chain.contains(&node.id) {
            return Some(node);
        }
        current = node.parent();
    }
    None
}

/// Pick the subtree holding the collected text nodes.
///
/// Returns `None` for an empty candidate list.
#[must_use]
pub fn select_content_root<'a>(candidates: &[NodeRef<'a>]) -> Option<NodeRef<'a>> {
    let (first, rest) = candidates.split_first()?;
    let mut root = first.parent()?;
    for node in rest {
        let parent = node.parent()?;
        root = common_ancestor(&root, &parent)?;
    }
    Some(root)
}
