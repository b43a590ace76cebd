//! Whole-document conversion tests.

use mdpress_convert::convert;

#[test]
fn kitchensink_document() {
    let source = r#"# Release notes

Ship summary with **bold** text and a [link](https://example.com/notes).

![diagram](https://example.com/diagram.png)

## Details

- core
  - faster parse
- cli

| Name | Status |
| --- | --- |
| parser | **done** |

---

Inline `code span` here.

```rust
fn main() { println!("<hi>"); }
```
"#;

    let expected = r#"<h1>Release notes</h1>
<p>Ship summary with <strong>bold</strong> text and a <a href="https://example.com/notes">link</a>.</p>
<p><img src="https://example.com/diagram.png" alt="diagram"></p>
<h2>Details</h2>
<ul>
<li>core</li>
<ul>
<li>faster parse</li>
</ul>
<li>cli</li>
</ul>
<table><thead><tr><th>Name</th><th>Status</th></tr></thead><tbody><tr><td>parser</td><td>done</td></tr></tbody></table>
<hr>
<p>Inline <code>code span</code> here.</p>
<pre><code class="language-rust">fn main() { println!("&lt;hi&gt;"); }</code></pre>"#;

    assert_eq!(convert(source), expected);
}

#[test]
fn nested_list_tags_balance_and_close_in_order() {
    let html = convert("- a\n  - b\n- c");
    assert_eq!(
        html,
        "<ul>\n<li>a</li>\n<ul>\n<li>b</li>\n</ul>\n<li>c</li>\n</ul>"
    );
    assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
}

#[test]
fn two_line_pipe_run_is_not_a_table() {
    let html = convert("| A | B |\n| --- | --- |");
    assert!(!html.contains("<table"));
    assert!(html.contains("| A | B |"));
}

#[test]
fn three_line_pipe_run_is_a_table_with_one_head_and_one_body_row() {
    let html = convert("| A | B |\n| --- | --- |\n| 1 | 2 |");
    assert_eq!(
        html,
        "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn paragraphs_split_on_blank_lines() {
    assert_eq!(
        convert("first paragraph\n\nsecond paragraph"),
        "<p>first paragraph</p>\n<p>second paragraph</p>"
    );
}

#[test]
fn heading_is_never_wrapped_in_a_paragraph() {
    let html = convert("# Title\n\nbody");
    assert_eq!(html, "<h1>Title</h1>\n<p>body</p>");
}

#[test]
fn rule_between_paragraphs() {
    assert_eq!(convert("a\n\n---\n\nb"), "<p>a</p>\n<hr>\n<p>b</p>");
}

#[test]
fn bold_inside_list_items_still_renders() {
    let html = convert("- **hot** take");
    assert_eq!(html, "<ul>\n<li><strong>hot</strong> take</li>\n</ul>");
}

#[test]
fn bold_inside_table_cells_is_stripped_to_plain_text() {
    let html = convert("| **A** |\n| - |\n| **x** |");
    assert!(html.contains("<th>A</th>"));
    assert!(html.contains("<td>x</td>"));
    assert!(!html.contains("<strong>"));
}
