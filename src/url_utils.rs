//! URL Utility Functions
//!
//! Base URL validation and resolution of image sources. Link targets
//! (`href`) are never rewritten.

use url::Url;

use crate::error::{Error, Result};

/// Parse the caller-supplied base URL.
///
/// The base must be absolute; anything else is [`Error::InvalidBaseUrl`].
///
/// # Examples
///
/// ```
/// use rs_extract::url_utils::parse_base_url;
///
/// assert!(parse_base_url("http://h/").is_ok());
/// assert!(parse_base_url("not a url").is_err());
/// ```
pub fn parse_base_url(base: &str) -> Result<Url> {
    Url::parse(base).map_err(|source| Error::InvalidBaseUrl {
        url: base.to_string(),
        source,
    })
}

/// Resolve `reference` against `base`, as a browser would for `<img src>`.
///
/// Absolute references are returned in normalized form. Returns `None` when
/// the reference cannot be parsed.
#[must_use]
pub fn resolve_reference(reference: &str, base: &Url) -> Option<String> {
    base.join(reference).ok().map(String::from)
}
