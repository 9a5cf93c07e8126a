//! Configuration options for content extraction.
//!
//! The `Options` struct controls the few tunable parts of the extraction:
//! where image sources are resolved against, how deep the tree walk may go,
//! and how an unresolvable image source is treated.

/// Default nesting limit for the tree walk.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_extract::Options;
///
/// let options = Options {
///     base_url: Some("https://example.com/articles/".to_string()),
///     ..Options::default()
/// };
/// assert_eq!(options.max_depth, 256);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Base URL that relative `<img src>` values are resolved against.
    ///
    /// Must be an absolute URL; extraction fails fast otherwise. When `None`
    /// image sources are kept verbatim.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Maximum element nesting depth the tree walk descends into.
    ///
    /// Subtrees below this depth are dropped and a warning is recorded,
    /// bounding recursion on adversarial input.
    ///
    /// Default: `256`
    pub max_depth: usize,

    /// Keep an `<img>` element's attributes untouched when its `src` cannot
    /// be resolved.
    ///
    /// When `false` the unresolvable `src` is dropped and the other allowed
    /// attributes (`alt`, `width`, `height`) are kept.
    ///
    /// Default: `false`
    pub preserve_attrs_on_invalid_src: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: None,
            max_depth: DEFAULT_MAX_DEPTH,
            preserve_attrs_on_invalid_src: false,
        }
    }
}

impl Options {
    /// Options with `base_url` set and everything else defaulted.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }
}
