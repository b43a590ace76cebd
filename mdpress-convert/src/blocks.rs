//! Code extraction and reinsertion.
//!
//! Fenced code blocks and inline code spans are pulled out of the text before
//! any structural stage runs, and put back after the last one. In between,
//! each extracted unit is represented by a placeholder token that no other
//! stage matches, so literal code can never be rewritten as a heading, a table
//! row or anything else.
//!
//! Tokens embed U+FFFC (the object replacement character), which is stripped
//! from the input up front; a token therefore cannot collide with any substring
//! of the authored text. Tokens are numbered per kind in first-seen order and
//! reinsertion walks the same order, so the mapping is 1:1.

use crate::escape::escape_code;
use crate::options::ConvertOptions;
use crate::pipeline::Draft;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const TOKEN_MARK: char = '\u{FFFC}';

const BLOCK_TOKEN_PREFIX: &str = "\u{FFFC}blk";

/// Escaped HTML for extracted code, indexed by token number.
#[derive(Debug, Default)]
pub(crate) struct Stash {
    blocks: Vec<String>,
    spans: Vec<String>,
}

fn block_token(index: usize) -> String {
    format!("{TOKEN_MARK}blk{index}{TOKEN_MARK}")
}

fn span_token(index: usize) -> String {
    format!("{TOKEN_MARK}spn{index}{TOKEN_MARK}")
}

/// True if the chunk holds a code-block placeholder, which is block-level
/// content for paragraph wrapping purposes. Inline span tokens do not count.
pub(crate) fn has_block_token(chunk: &str) -> bool {
    chunk.contains(BLOCK_TOKEN_PREFIX)
}

// Opening fence line with an optional language tag, body up to the next fence
// line. An opening fence with no close never matches and passes through as
// literal text.
static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^```([^\n`]*)$\n(.*?)^```[ \t]*$").unwrap());

// Single-backtick span on one line.
static SPAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

/// Stage: replace fenced blocks, then inline spans, with placeholder tokens.
pub(crate) fn extract(draft: Draft, _options: &ConvertOptions) -> Draft {
    let Draft { mut text, mut stash } = draft;
    text.retain(|c| c != TOKEN_MARK);

    let text = FENCE_RE
        .replace_all(&text, |caps: &Captures<'_>| {
            let language = caps[1].trim();
            let body = caps[2].strip_suffix('\n').unwrap_or(&caps[2]);
            let escaped = escape_code(body);
            let html = if language.is_empty() {
                format!("<pre><code>{escaped}</code></pre>")
            } else {
                format!("<pre><code class=\"language-{language}\">{escaped}</code></pre>")
            };
            let token = block_token(stash.blocks.len());
            stash.blocks.push(html);
            token
        })
        .into_owned();

    let text = SPAN_RE
        .replace_all(&text, |caps: &Captures<'_>| {
            let html = format!("<code>{}</code>", escape_code(&caps[1]));
            let token = span_token(stash.spans.len());
            stash.spans.push(html);
            token
        })
        .into_owned();

    Draft { text, stash }
}

/// Stage: put the stashed HTML back, blocks first, then spans.
///
/// Runs strictly last so reinserted content is never rescanned by an earlier
/// stage. Each token occurs exactly once, so each replacement fires once.
pub(crate) fn reinsert(mut draft: Draft, _options: &ConvertOptions) -> Draft {
    for (index, html) in draft.stash.blocks.iter().enumerate() {
        draft.text = draft.text.replace(&block_token(index), html);
    }
    for (index, html) in draft.stash.spans.iter().enumerate() {
        draft.text = draft.text.replace(&span_token(index), html);
    }
    draft
}
