//! Extraction state tracking.
//!
//! [`CandidateSet`] holds the text nodes found at the deepest confidence
//! level seen so far. [`ExtractionState`] bundles it with the head
//! information and diagnostics gathered during one tree walk.

use dom_query::NodeRef;

/// Text nodes at the deepest confidence level reached so far.
///
/// Reaching a strictly deeper level discards everything collected before;
/// nodes at the current deepest level are appended in document order;
/// shallower nodes are ignored.
#[derive(Default)]
pub struct CandidateSet<'a> {
    level: Option<usize>,
    nodes: Vec<NodeRef<'a>>,
}

impl<'a> CandidateSet<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: None,
            nodes: Vec::new(),
        }
    }

    /// Offer a text node found at `level`.
    pub fn offer(&mut self, node: NodeRef<'a>, level: usize) {
        match self.level {
            Some(max) if level < max => {}
            Some(max) if level == max => self.nodes.push(node),
            _ => {
                self.level = Some(level);
                self.nodes.clear();
                self.nodes.push(node);
            }
        }
    }

    /// Deepest level a text node was found at.
    #[must_use]
    pub fn level(&self) -> Option<usize> {
        self.level
    }

    #[must_use]
    pub fn nodes(&self) -> &[NodeRef<'a>] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Title and charset declared in `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadInfo {
    /// Charset from the last `<meta>` that declares one.
    pub charset: Option<String>,
    /// Text of the first non-empty `<title>`.
    pub title: Option<String>,
}

/// Everything one tree walk produces.
#[derive(Default)]
pub struct ExtractionState<'a> {
    pub head: HeadInfo,
    pub candidates: CandidateSet<'a>,
    /// Element subtrees dropped for exceeding the nesting limit.
    pub truncated_subtrees: usize,
    /// Image sources that could not be resolved against the base URL.
    pub unresolved_srcs: Vec<String>,
}

impl ExtractionState<'_> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn texts(doc: &dom::Document) -> Vec<NodeRef<'_>> {
        doc.select("p")
            .nodes()
            .iter()
            .filter_map(NodeRef::first_child)
            .collect()
    }

    #[test]
    fn test_candidate_set_starts_empty() {
        let set = CandidateSet::new();
        assert!(set.is_empty());
        assert_eq!(set.level(), None);
    }

    #[test]
    fn test_candidate_set_resets_on_deeper_level() {
        let doc = dom::parse("<p>a</p><p>b</p><p>c</p>");
        let nodes = texts(&doc);

        let mut set = CandidateSet::new();
        set.offer(nodes[0], 0);
        set.offer(nodes[1], 0);
        assert_eq!(set.len(), 2);

        set.offer(nodes[2], 1);
        assert_eq!(set.len(), 1);
        assert_eq!(set.level(), Some(1));
        assert_eq!(set.nodes()[0].id, nodes[2].id);
    }

    #[test]
    fn test_candidate_set_ignores_shallower_and_appends_equal() {
        let doc = dom::parse("<p>a</p><p>b</p><p>c</p>");
        let nodes = texts(&doc);

        let mut set = CandidateSet::new();
        set.offer(nodes[0], 2);
        set.offer(nodes[1], 1);
        set.offer(nodes[2], 2);

        let ids: Vec<_> = set.nodes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![nodes[0].id, nodes[2].id]);
    }

    #[test]
    fn test_extraction_state_default() {
        let state = ExtractionState::new();
        assert_eq!(state.head, HeadInfo::default());
        assert!(state.candidates.is_empty());
        assert_eq!(state.truncated_subtrees, 0);
    }
}
