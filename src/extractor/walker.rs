//! The tree walk.
//!
//! One depth-first pass over the document that, in place:
//! - records the charset and title declared in `<head>`;
//! - detaches comments, ignored tags and negatively scored elements
//!   together with their subtrees;
//! - raises the confidence level below positively scored elements;
//! - strips attributes down to the per-tag allow-list;
//! - collects the text nodes found at the deepest confidence level;
//! - drops `<div>` wrappers left empty by the pruning above.
//!
//! The confidence level is passed down by value, so every sibling starts
//! from its parent's level.

use dom_query::NodeRef;
use tracing::{trace, warn};

use super::head::scan_head;
use super::sanitize::{sanitize_attributes, SanitizeContext};
use super::state::ExtractionState;
use crate::dom::{self, NodeKind};
use crate::options::DEFAULT_MAX_DEPTH;
use crate::patterns::{is_ignored_self_tag, is_ignored_tag};
use crate::scoring::{class_id_weight, Weight};

/// Per-document walk configuration.
#[derive(Debug, Clone)]
pub struct WalkContext {
    pub sanitize: SanitizeContext,
    /// Deepest node nesting visited; deeper elements are dropped.
    pub max_depth: usize,
}

impl Default for WalkContext {
    fn default() -> Self {
        Self {
            sanitize: SanitizeContext::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Walk the tree below (and including) `root`, mutating it in place.
#[must_use]
pub fn walk<'a>(root: NodeRef<'a>, ctx: &WalkContext) -> ExtractionState<'a> {
    let mut walker = Walker {
        ctx,
        state: ExtractionState::new(),
    };
    walker.visit(root, 0, 0);
    walker.state
}

struct Walker<'a, 'c> {
    ctx: &'c WalkContext,
    state: ExtractionState<'a>,
}

impl<'a> Walker<'a, '_> {
    fn visit(&mut self, node: NodeRef<'a>, level: usize, depth: usize) {
        let mut level = level;

        match dom::kind(&node) {
            NodeKind::Comment => {
                dom::remove(&node);
                return;
            }
            NodeKind::Element => {
                let tag = dom::tag_name(&node).unwrap_or_default();

                if tag == "head" {
                    scan_head(&node, &mut self.state.head);
                }

                if is_ignored_tag(&tag) {
                    trace!(tag = %tag, "dropping ignored element");
                    dom::remove(&node);
                    return;
                }

                if depth > self.ctx.max_depth {
                    warn!(tag = %tag, depth, "dropping subtree nested beyond the depth limit");
                    self.state.truncated_subtrees += 1;
                    dom::remove(&node);
                    return;
                }

                if !is_ignored_self_tag(&tag) {
                    let attrs = dom::get_all_attributes(&node);
                    let score = class_id_weight(attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

                    match Weight::from_score(score) {
                        Weight::Prune => {
                            trace!(tag = %tag, score, "pruning negatively scored element");
                            dom::remove(&node);
                            return;
                        }
                        Weight::Promote => level += 1,
                        Weight::Neutral => {}
                    }

                    if let Some(src) = sanitize_attributes(&node, &tag, &attrs, &self.ctx.sanitize) {
                        warn!(src = %src, "image source could not be resolved");
                        self.state.unresolved_srcs.push(src);
                    }
                }
            }
            NodeKind::Text => self.state.candidates.offer(node, level),
            NodeKind::Other => {}
        }

        // Children may detach themselves, so the next sibling is read first.
        let mut child = node.first_child();
        while let Some(current) = child {
            child = current.next_sibling();
            self.visit(current, level, depth + 1);
        }

        if dom::is_tag(&node, "div") && dom::is_empty(&node) {
            dom::remove(&node);
        }
    }
}
