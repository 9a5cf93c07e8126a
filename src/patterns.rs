//! Fixed keyword tables and tag sets used by the tree walk.
//!
//! All tables are immutable, ordered slices. Tag names are compared against
//! the lowercase names produced by the HTML parser.

// =============================================================================
// Class/ID Keyword Tables
// =============================================================================

/// Keywords in `class`/`id` values that indicate article content.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "article", "body", "content", "entry", "hentry", "page", "post", "text",
];

/// Keywords in `class`/`id` values that indicate page chrome or boilerplate.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "breadcrumb",
    "combx",
    "comment",
    "contact",
    "disqus",
    "foot",
    "footer",
    "footnote",
    "header",
    "hidden",
    "link",
    "media",
    "meta",
    "mod-conversations",
    "pager",
    "pagination",
    "promo",
    "reaction",
    "related",
    "scroll",
    "share",
    "shoutbox",
    "sidebar",
    "social",
    "sponsor",
    "tags",
    "toolbox",
    "widget",
];

/// Attribute keys whose values are scored.
pub const SCORED_ATTRIBUTES: &[&str] = &["class", "id"];

// =============================================================================
// Tag Sets
// =============================================================================

/// Tags removed together with their subtree without being visited.
pub const IGNORED_TAGS: &[&str] = &[
    "embed", "form", "iframe", "link", "meta", "noscript", "object", "option", "script",
    "style", "aside", "head",
];

/// Tags kept and descended into, but never scored or sanitized themselves.
pub const IGNORED_SELF_TAGS: &[&str] = &["html", "body"];

/// Attributes an `img` element may keep.
pub const IMG_ALLOWED_ATTRIBUTES: &[&str] = &["src", "alt", "width", "height"];

#[inline]
#[must_use]
pub fn is_ignored_tag(tag: &str) -> bool {
    IGNORED_TAGS.contains(&tag)
}

#[inline]
#[must_use]
pub fn is_ignored_self_tag(tag: &str) -> bool {
    IGNORED_SELF_TAGS.contains(&tag)
}
