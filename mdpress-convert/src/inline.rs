//! Line and inline regex passes, plus paragraph wrapping.
//!
//! The passes are ordered substitutions over the placeholder-bearing text.
//! Later patterns must not re-match what earlier ones produced: images run
//! before links because `![alt](url)` would otherwise half-match as a link
//! with a stray `!`, and bold runs last so it cannot interfere with table or
//! list content that is already final.

use crate::blocks;
use crate::options::ConvertOptions;
use crate::pipeline::Draft;
use once_cell::sync::Lazy;
use regex::Regex;

static RULE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^---$").unwrap());
static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
static H2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static H3_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());
static H4_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#### (.+)$").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// Stage: ordered substitutions for rules, images, headings, links and bold.
pub(crate) fn transform(mut draft: Draft, _options: &ConvertOptions) -> Draft {
    let text = RULE_RE.replace_all(&draft.text, "<hr>").into_owned();
    let text = IMAGE_RE
        .replace_all(&text, "<img src=\"$2\" alt=\"$1\">")
        .into_owned();
    let text = H1_RE.replace_all(&text, "<h1>$1</h1>").into_owned();
    let text = H2_RE.replace_all(&text, "<h2>$1</h2>").into_owned();
    let text = H3_RE.replace_all(&text, "<h3>$1</h3>").into_owned();
    let text = H4_RE.replace_all(&text, "<h4>$1</h4>").into_owned();
    let text = LINK_RE
        .replace_all(&text, "<a href=\"$2\">$1</a>")
        .into_owned();
    let text = BOLD_RE
        .replace_all(&text, "<strong>$1</strong>")
        .into_owned();
    draft.text = text;
    draft
}

/// Stage: wrap blank-line separated prose chunks in paragraph elements.
///
/// A chunk that carries block content (a code-block placeholder, a table, a
/// list, a heading or a rule) is left unwrapped; everything else non-empty
/// becomes one paragraph.
pub(crate) fn wrap_paragraphs(mut draft: Draft, _options: &ConvertOptions) -> Draft {
    let mut rendered: Vec<String> = Vec::new();
    for chunk in draft.text.split("\n\n") {
        let trimmed = chunk.trim();
        if trimmed.is_empty() {
            continue;
        }
        if has_block_content(trimmed) {
            rendered.push(trimmed.to_string());
        } else {
            rendered.push(format!("<p>{trimmed}</p>"));
        }
    }
    draft.text = rendered.join("\n");
    draft
}

fn has_block_content(chunk: &str) -> bool {
    const BLOCK_STARTS: [&str; 8] = [
        "<table", "<ul>", "<li>", "<h1>", "<h2>", "<h3>", "<h4>", "<hr>",
    ];
    blocks::has_block_token(chunk) || BLOCK_STARTS.iter().any(|tag| chunk.contains(tag))
}
