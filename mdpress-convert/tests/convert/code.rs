//! Code handling through the full pipeline.

use mdpress_convert::convert;

#[test]
fn script_tag_in_fence_is_escaped_exactly_once_and_not_wrapped() {
    let html = convert("```\n<script>\n```\n");
    assert_eq!(html, "<pre><code>&lt;script&gt;</code></pre>");
    assert_eq!(html.matches("&lt;script&gt;").count(), 1);
    assert!(!html.contains("<p>"));
}

#[test]
fn fence_language_becomes_a_class_suffix() {
    let html = convert("```python\nprint(1)\n```");
    assert_eq!(
        html,
        "<pre><code class=\"language-python\">print(1)</code></pre>"
    );
}

#[test]
fn fence_content_is_protected_from_every_structural_pass() {
    let html = convert("```\n# not a heading\n- not a list\n| not | a | table |\n```");
    assert!(html.contains("# not a heading"));
    assert!(html.contains("- not a list"));
    assert!(!html.contains("<h1>"));
    assert!(!html.contains("<li>"));
    assert!(!html.contains("<table"));
}

#[test]
fn inline_span_is_escaped_and_stays_inside_its_paragraph() {
    let html = convert("compare `a < b` carefully");
    assert_eq!(
        html,
        "<p>compare <code>a &lt; b</code> carefully</p>"
    );
}

#[test]
fn unterminated_fence_renders_as_literal_text() {
    let html = convert("```rust\nfn main() {}");
    assert!(html.contains("```rust"));
    assert!(!html.contains("<pre>"));
}

#[test]
fn two_fences_keep_their_order() {
    let html = convert("```\nalpha\n```\n\n```\nbeta\n```");
    let alpha = html.find("alpha").unwrap();
    let beta = html.find("beta").unwrap();
    assert!(alpha < beta);
    assert_eq!(html.matches("<pre>").count(), 2);
}

#[test]
fn bold_marker_inside_code_span_is_not_substituted() {
    let html = convert("the `**raw**` marker");
    assert!(html.contains("<code>**raw**</code>"));
    assert!(!html.contains("<strong>"));
}
