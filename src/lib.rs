//! # rs-extract
//!
//! Heuristic extraction of the title and main article body from an HTML
//! document, for feed readers and crawlers that need readable content
//! without per-site scrapers.
//!
//! Navigation, ads, forms, scripts and other page chrome are discarded by a
//! single walk over the parsed tree that scores elements by keywords in
//! their `class`/`id` attributes. The text found below the most
//! content-like nesting is kept and rendered back to markup.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_extract::extract;
//!
//! let html = br#"<html><head><title>My Article</title></head>
//! <body><div class="sidebar"><p>Links</p></div>
//! <div class="post"><p>Main content here.</p></div></body></html>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.title, "My Article");
//! assert_eq!(result.content, "<p>Main content here.</p>");
//! # Ok::<(), rs_extract::Error>(())
//! ```
//!
//! ## Character Encoding
//!
//! Documents declaring EUC-JP or Shift_JIS in `<head>` are transcoded to
//! UTF-8. Any other declaration is passed through as UTF-8.

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Keyword tables and tag sets.
pub mod patterns;

/// Class/ID keyword scoring and whole-word matching.
pub mod scoring;

/// Tree walk, attribute sanitization and content root selection.
pub mod extractor;

/// Input decoding and charset conversion.
pub mod encoding;

/// Base URL parsing and image source resolution.
pub mod url_utils;

use std::io::Read;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::ExtractResult;

/// Extracts title and main content from HTML bytes.
///
/// Image sources are left as written.
///
/// # Example
///
/// ```rust
/// use rs_extract::extract;
///
/// let result = extract(b"<html><body><div class=\"article\">Content</div></body></html>")?;
/// assert_eq!(result.content, "<div>Content</div>");
/// # Ok::<(), rs_extract::Error>(())
/// ```
pub fn extract(html: &[u8]) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts title and main content, resolving image sources against `base_url`.
///
/// Returns [`Error::InvalidBaseUrl`] without parsing the document when
/// `base_url` is not an absolute URL.
///
/// # Example
///
/// ```rust
/// use rs_extract::extract_with_base;
///
/// let html = br#"<body><div class="entry"><p>Photo:</p><img src="a.png" data-x="y" width="10"><p>Caption</p></div></body>"#;
/// let result = extract_with_base(html, "http://h/")?;
/// assert!(result.content.contains(r#"<img src="http://h/a.png" width="10">"#));
/// # Ok::<(), rs_extract::Error>(())
/// ```
pub fn extract_with_base(html: &[u8], base_url: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::with_base_url(base_url))
}

/// Extracts title and main content with custom options.
pub fn extract_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}

/// Extracts title and main content from a byte stream.
///
/// The stream is read to the end first; a read failure is
/// [`Error::MalformedInput`].
pub fn extract_reader<R: Read>(mut reader: R, options: &Options) -> Result<ExtractResult> {
    let mut html = Vec::new();
    reader.read_to_end(&mut html)?;
    extract_with_options(&html, options)
}
