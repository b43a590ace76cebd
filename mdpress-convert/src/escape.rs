//! HTML escaping of literal code content.

/// Escape angle brackets in code content so it renders literally.
///
/// Only `<` and `>` need escaping here: code content is emitted inside
/// `<pre>`/`<code>` elements where attribute contexts never occur.
pub(crate) fn escape_code(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}
