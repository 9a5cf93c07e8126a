//! Per-tag attribute allow-lists.
//!
//! - `a` keeps its first `href` and nothing else.
//! - `img` keeps `src`, `alt`, `width` and `height`; `src` is resolved
//!   against the base URL when one is configured.
//! - Every other element loses all attributes.

use dom_query::NodeRef;
use url::Url;

use crate::dom;
use crate::patterns::IMG_ALLOWED_ATTRIBUTES;
use crate::url_utils::resolve_reference;

/// Inputs to attribute sanitization that stay fixed for a whole document.
#[derive(Debug, Clone, Default)]
pub struct SanitizeContext {
    pub base_url: Option<Url>,
    pub preserve_attrs_on_invalid_src: bool,
}

/// Attribute rewrite decided for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rewrite {
    /// New attribute list; `None` leaves the element untouched.
    pub(crate) attrs: Option<Vec<(String, String)>>,
    /// An `img` source that failed to resolve.
    pub(crate) unresolved_src: Option<String>,
}

impl Rewrite {
    fn replace(attrs: Vec<(String, String)>) -> Self {
        Self {
            attrs: Some(attrs),
            unresolved_src: None,
        }
    }
}

/// Decide the surviving attributes of a `tag` element.
#[must_use]
pub(crate) fn rewrite_attributes(tag: &str, attrs: &[(String, String)], ctx: &SanitizeContext) -> Rewrite {
    match tag {
        "a" => Rewrite::replace(
            attrs
                .iter()
                .find(|(key, _)| key == "href")
                .cloned()
                .into_iter()
                .collect(),
        ),
        "img" => rewrite_img(attrs, ctx),
        _ => Rewrite::replace(Vec::new()),
    }
}

fn rewrite_img(attrs: &[(String, String)], ctx: &SanitizeContext) -> Rewrite {
    let mut kept = Vec::with_capacity(IMG_ALLOWED_ATTRIBUTES.len());
    let mut unresolved_src = None;

    for (key, value) in attrs {
        if !IMG_ALLOWED_ATTRIBUTES.contains(&key.as_str()) {
            continue;
        }

        if key == "src" {
            if let Some(base) = &ctx.base_url {
                if let Some(resolved) = resolve_reference(value, base) {
                    kept.push((key.clone(), resolved));
                } else {
                    unresolved_src = Some(value.clone());
                    if ctx.preserve_attrs_on_invalid_src {
                        return Rewrite {
                            attrs: None,
                            unresolved_src,
                        };
                    }
                }
                continue;
            }
        }

        kept.push((key.clone(), value.clone()));
    }

    Rewrite {
        attrs: Some(kept),
        unresolved_src,
    }
}

/// Apply the allow-list for `tag` to `node`.
///
/// `attrs` must be the node's current attributes. Returns the image source
/// that could not be resolved, if any.
pub fn sanitize_attributes(
    node: &NodeRef,
    tag: &str,
    attrs: &[(String, String)],
    ctx: &SanitizeContext,
) -> Option<String> {
    let rewrite = rewrite_attributes(tag, attrs, ctx);
    if let Some(new_attrs) = rewrite.attrs {
        if new_attrs.as_slice() != attrs {
            dom::replace_attributes(node, &new_attrs);
        }
    }
    rewrite.unresolved_src
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_utils::parse_base_url;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn with_base(base: &str) -> SanitizeContext {
        SanitizeContext {
            base_url: Some(parse_base_url(base).unwrap()),
            preserve_attrs_on_invalid_src: false,
        }
    }

    #[test]
    fn test_anchor_keeps_first_href_only() {
        let attrs = pairs(&[("onclick", "go()"), ("href", "/x"), ("class", "btn"), ("href", "/y")]);
        let rewrite = rewrite_attributes("a", &attrs, &SanitizeContext::default());
        assert_eq!(rewrite.attrs, Some(pairs(&[("href", "/x")])));
    }

    #[test]
    fn test_anchor_without_href_loses_everything() {
        let attrs = pairs(&[("name", "top")]);
        let rewrite = rewrite_attributes("a", &attrs, &SanitizeContext::default());
        assert_eq!(rewrite.attrs, Some(Vec::new()));
    }

    #[test]
    fn test_anchor_href_is_not_resolved() {
        let attrs = pairs(&[("href", "/x")]);
        let rewrite = rewrite_attributes("a", &attrs, &with_base("http://h/"));
        assert_eq!(rewrite.attrs, Some(pairs(&[("href", "/x")])));
    }

    #[test]
    fn test_img_allow_list_and_resolution() {
        let attrs = pairs(&[("src", "a.png"), ("data-x", "y"), ("width", "10")]);
        let rewrite = rewrite_attributes("img", &attrs, &with_base("http://h/"));
        assert_eq!(
            rewrite.attrs,
            Some(pairs(&[("src", "http://h/a.png"), ("width", "10")]))
        );
        assert_eq!(rewrite.unresolved_src, None);
    }

    #[test]
    fn test_img_without_base_keeps_src_verbatim() {
        let attrs = pairs(&[("alt", "cat"), ("src", "a.png"), ("loading", "lazy")]);
        let rewrite = rewrite_attributes("img", &attrs, &SanitizeContext::default());
        assert_eq!(rewrite.attrs, Some(pairs(&[("alt", "cat"), ("src", "a.png")])));
    }

    #[test]
    fn test_img_unresolvable_src_is_dropped() {
        let attrs = pairs(&[("src", "http://[::1"), ("alt", "x"), ("class", "hero")]);
        let rewrite = rewrite_attributes("img", &attrs, &with_base("http://h/"));
        assert_eq!(rewrite.attrs, Some(pairs(&[("alt", "x")])));
        assert_eq!(rewrite.unresolved_src.as_deref(), Some("http://[::1"));
    }

    #[test]
    fn test_img_unresolvable_src_preserves_when_asked() {
        let attrs = pairs(&[("src", "http://[::1"), ("class", "hero")]);
        let ctx = SanitizeContext {
            preserve_attrs_on_invalid_src: true,
            ..with_base("http://h/")
        };
        let rewrite = rewrite_attributes("img", &attrs, &ctx);
        assert_eq!(rewrite.attrs, None);
        assert_eq!(rewrite.unresolved_src.as_deref(), Some("http://[::1"));
    }

    #[test]
    fn test_other_tags_lose_all_attributes() {
        let attrs = pairs(&[("class", "lead"), ("style", "color:red")]);
        let rewrite = rewrite_attributes("p", &attrs, &SanitizeContext::default());
        assert_eq!(rewrite.attrs, Some(Vec::new()));
    }

    #[test]
    fn test_sanitize_attributes_mutates_node() {
        let doc = dom::parse(r#"<p><a href="/x" onclick="evil()">go</a></p>"#);
        let a = *doc.select("a").nodes().first().unwrap();
        let attrs = dom::get_all_attributes(&a);

        let unresolved = sanitize_attributes(&a, "a", &attrs, &SanitizeContext::default());
        assert_eq!(unresolved, None);
        assert_eq!(dom::outer_html(&a).to_string(), r#"<a href="/x">go</a>"#);
    }
}
