//! Extraction pipeline.
//!
//! decode input → parse → walk → select root → serialize → convert charset.

use tracing::{debug, warn};

use crate::dom;
use crate::encoding::{convert_charset, decode_input, InputEncoding};
use crate::error::Result;
use crate::extractor::{select_content_root, walk, SanitizeContext, WalkContext};
use crate::options::Options;
use crate::result::ExtractResult;
use crate::url_utils::parse_base_url;

/// Run the full extraction over raw HTML bytes.
pub(crate) fn extract_content(html: &[u8], options: &Options) -> Result<ExtractResult> {
    // Fail on a bad base before touching the document.
    let base_url = options.base_url.as_deref().map(parse_base_url).transpose()?;

    let (text, input) = decode_input(html);
    debug!(
        bytes = html.len(),
        byte_preserving = input == InputEncoding::BytePreserving,
        "parsing document"
    );

    let doc = dom::parse(&text);
    let ctx = WalkContext {
        sanitize: SanitizeContext {
            base_url,
            preserve_attrs_on_invalid_src: options.preserve_attrs_on_invalid_src,
        },
        max_depth: options.max_depth,
    };
    let state = walk(doc.root(), &ctx);

    debug!(
        candidates = state.candidates.len(),
        level = ?state.candidates.level(),
        charset = ?state.head.charset,
        "tree walk finished"
    );

    let markup = match select_content_root(state.candidates.nodes()) {
        Some(root) => {
            debug!(root = ?dom::tag_name(&root), "selected content root");
            dom::outer_html(&root).to_string()
        }
        None => {
            debug!("no content candidates");
            String::new()
        }
    };

    let mut warnings = Vec::new();
    if state.truncated_subtrees > 0 {
        warnings.push(format!(
            "dropped {} subtree(s) nested deeper than {}",
            state.truncated_subtrees, options.max_depth
        ));
    }
    for src in &state.unresolved_srcs {
        warnings.push(format!("could not resolve image source {src:?}"));
    }

    let charset = state.head.charset;
    let title = state.head.title.unwrap_or_default();
    let content = convert_field("content", &markup, input, charset.as_deref(), &mut warnings);
    let title = convert_field("title", &title, input, charset.as_deref(), &mut warnings);

    Ok(ExtractResult {
        title,
        content,
        charset,
        warnings,
    })
}

/// Convert one output field, recording replaced sequences as a warning.
fn convert_field(
    field: &str,
    text: &str,
    input: InputEncoding,
    charset: Option<&str>,
    warnings: &mut Vec<String>,
) -> String {
    let converted = convert_charset(text, input, charset);
    if let Some(err) = converted.error {
        warn!(field, error = %err, "malformed bytes in declared charset");
        warnings.push(format!("{field}: {err}"));
    }
    converted.text
}
