//! Class/ID keyword scoring.
//!
//! An element's weight is the number of positive keywords minus the number of
//! negative keywords found as whole words in its `class` and `id` values.
//! The weight decides whether the element is pruned, kept, or raises the
//! confidence level of its subtree.

use std::cmp::Ordering;

use crate::patterns::{NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS, SCORED_ATTRIBUTES};

/// Find `word` in `haystack` as a whole word.
///
/// Only the leftmost occurrence is considered. An occurrence at the start of
/// the haystack is rejected when an ASCII letter follows it; an occurrence
/// anywhere else is rejected when an ASCII letter precedes it. The trailing
/// character of a non-leading occurrence is not checked.
///
/// Returns the byte offset of the accepted occurrence.
///
/// # Examples
///
/// ```
/// use rs_extract::scoring::index_word;
///
/// assert_eq!(index_word("new-pager", "pager"), Some(4));
/// assert_eq!(index_word("pager", "page"), None);
/// ```
#[must_use]
pub fn index_word(haystack: &str, word: &str) -> Option<usize> {
    let start = haystack.find(word)?;
    let end = start + word.len();
    let bytes = haystack.as_bytes();

    if start == 0 && end == bytes.len() {
        return Some(start);
    }

    let rejected = if start == 0 {
        bytes.get(end).is_some_and(u8::is_ascii_alphabetic)
    } else {
        bytes[start - 1].is_ascii_alphabetic()
    };

    (!rejected).then_some(start)
}

/// Signed keyword score for one attribute value.
#[must_use]
pub fn keyword_score(value: &str) -> i32 {
    let positive = POSITIVE_KEYWORDS
        .iter()
        .filter(|kw| index_word(value, kw).is_some())
        .count();
    let negative = NEGATIVE_KEYWORDS
        .iter()
        .filter(|kw| index_word(value, kw).is_some())
        .count();

    // Both tables are tiny, the casts cannot truncate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let score = positive as i32 - negative as i32;
    score
}

/// Sum of [`keyword_score`] over every `class` and `id` attribute.
///
/// Accepts the element's attributes as `(key, value)` pairs in document order.
#[must_use]
pub fn class_id_weight<'a, I>(attrs: I) -> i32
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    attrs
        .into_iter()
        .filter(|(key, _)| SCORED_ATTRIBUTES.contains(key))
        .map(|(_, value)| keyword_score(value))
        .sum()
}

/// What the tree walk does with a scored element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    /// Negative score: drop the element and its subtree.
    Prune,
    /// Zero score: keep the element at the current level.
    Neutral,
    /// Positive score: keep the element one level deeper.
    Promote,
}

impl Weight {
    #[must_use]
    pub fn from_score(score: i32) -> Self {
        match score.cmp(&0) {
            Ordering::Less => Self::Prune,
            Ordering::Equal => Self::Neutral,
            Ordering::Greater => Self::Promote,
        }
    }
}
