//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `state`: Candidate set and per-walk state
//! - `head`: `<head>` charset and title scanning
//! - `sanitize`: Per-tag attribute allow-lists
//! - `walker`: The single pruning/scoring tree walk
//! - `select`: Content root selection (lowest common ancestor)
//!
//! # Usage
//!
//! ```rust
//! use rs_extract::dom;
//! use rs_extract::extractor::{select_content_root, walk, WalkContext};
//!
//! let doc = dom::parse(r#"<body><div class="post"><p>Hello</p></div></body>"#);
//! let state = walk(doc.root(), &WalkContext::default());
//! let root = select_content_root(state.candidates.nodes()).map(|n| dom::outer_html(&n).to_string());
//! assert_eq!(root.as_deref(), Some("<p>Hello</p>"));
//! ```

pub mod head;
pub mod sanitize;
pub mod select;
pub mod state;
pub mod walker;

pub use head::scan_head;
pub use sanitize::{sanitize_attributes, SanitizeContext};
pub use select::{common_ancestor, select_content_root};
pub use state::{CandidateSet, ExtractionState, HeadInfo};
pub use walker::{walk, WalkContext};
