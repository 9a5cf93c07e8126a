//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// Result of content extraction from an HTML document.
///
/// `content` is the markup of the selected subtree, `title` the text of the
/// document's `<title>`. Either may be empty: a page with no recognisable
/// content is a successful extraction with empty `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Page title, converted to UTF-8.
    pub title: String,

    /// Main content as HTML, converted to UTF-8.
    pub content: String,

    /// Charset declared in `<head>`, verbatim.
    pub charset: Option<String>,

    /// Non-fatal issues encountered during extraction, such as:
    /// - malformed bytes in the declared charset, replaced with U+FFFD
    /// - subtrees dropped for exceeding the nesting limit
    /// - image sources that could not be resolved
    pub warnings: Vec<String>,
}

impl ExtractResult {
    /// Whether any content was found.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}
