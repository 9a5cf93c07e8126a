use rs_extract::{extract, extract_with_options, Options};

#[test]
fn extract_does_not_panic_on_unterminated_title() {
    let result = extract(b"<title>").expect("expected Ok(_)");
    assert!(result.title.is_empty());
    assert!(result.content.is_empty());
}

#[test]
fn extract_does_not_panic_on_malformed_html_unclosed_tags() {
    let result = extract(b"<p>text<div>more").expect("expected Ok(_)");
    assert!(result.content.contains("text"));
    assert!(result.content.contains("more"));
}

#[test]
fn extract_does_not_panic_on_malformed_html_invalid_nesting() {
    let result = extract(b"<p><div></p></div>");
    assert!(result.is_ok());
}

#[test]
fn extract_does_not_panic_on_broken_attributes() {
    let result = extract(b"<div class=\"test id=broken>");
    assert!(result.is_ok());
}

#[test]
fn extract_handles_incomplete_entities() {
    let result = extract(b"&amp text &lt;").expect("expected Ok(_)");
    assert!(result.content.contains("text"));
}

#[test]
fn extract_handles_empty_and_binary_input() {
    let result = extract(b"").expect("expected Ok(_)");
    assert!(!result.has_content());

    let noise: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let result = extract(&noise);
    assert!(result.is_ok());
}

#[test]
fn extract_survives_pathological_nesting() {
    let depth = 5_000;
    let mut html = String::from("<html><body><p>SURFACE</p>");
    html.push_str(&"<div>".repeat(depth));
    html.push_str("ABYSS");
    html.push_str(&"</div>".repeat(depth));
    html.push_str("</body></html>");

    let result = extract(html.as_bytes()).expect("expected Ok(_)");
    assert!(result.content.contains("SURFACE"));
    assert!(!result.content.contains("ABYSS"));
    assert!(!result.warnings.is_empty());
}

#[test]
fn raised_depth_limit_keeps_moderately_deep_content() {
    let depth = 300;
    let mut html = String::from("<html><body>");
    html.push_str(&"<div>".repeat(depth));
    html.push_str("DEEP_TEXT");
    html.push_str(&"</div>".repeat(depth));
    html.push_str("</body></html>");

    let default_result = extract(html.as_bytes()).expect("expected Ok(_)");
    assert!(!default_result.content.contains("DEEP_TEXT"));

    let options = Options {
        max_depth: 1_000,
        ..Options::default()
    };
    let result = extract_with_options(html.as_bytes(), &options).expect("expected Ok(_)");
    assert_eq!(result.content, "<div>DEEP_TEXT</div>");
    assert!(result.warnings.is_empty());
}

#[test]
fn extract_is_deterministic() {
    let html = br#"<html><head><title>Same</title></head><body>
        <div class="post"><p>one</p><p>two</p></div><div class="sidebar">x</div>
    </body></html>"#;

    let first = extract(html).expect("expected Ok(_)");
    let second = extract(html).expect("expected Ok(_)");
    assert_eq!(first, second);
}
