//! Stage order and the convert entry points.
//!
//! Every stage has the same shape: it takes the draft and gives it back. The
//! list below is the whole conversion; reordering it changes the output, so
//! the order lives here, in one place, with the reasons:
//!
//! - code is extracted first so no structural stage can touch it, and
//!   reinserted last so nothing rescans it;
//! - tables run before lists so pipe rows are consumed before the list scan
//!   sees them;
//! - within the inline stage, images run before links (the image pattern is
//!   the more specific of the two) and bold runs last so it cannot interfere
//!   with table and list content that is already final;
//! - paragraph wrapping runs after every structural stage so it can tell
//!   block content apart from prose.

use crate::blocks::{self, Stash};
use crate::inline;
use crate::list;
use crate::options::ConvertOptions;
use crate::table;

/// The document being converted: text plus the stash of extracted code.
///
/// Owned by a single conversion call. Two conversions never share state.
pub(crate) struct Draft {
    pub(crate) text: String,
    pub(crate) stash: Stash,
}

impl Draft {
    pub(crate) fn new(text: &str) -> Self {
        Draft {
            text: text.to_string(),
            stash: Stash::default(),
        }
    }
}

type Stage = fn(Draft, &ConvertOptions) -> Draft;

/// Ordered conversion stages. Names are for humans reading test failures.
const STAGES: &[(&str, Stage)] = &[
    ("extract-code", blocks::extract),
    ("tables", table::transform),
    ("lists", list::transform),
    ("inline", inline::transform),
    ("paragraphs", inline::wrap_paragraphs),
    ("reinsert-code", blocks::reinsert),
];

/// Convert markdown to an HTML fragment with default options.
///
/// Pure and deterministic: the same input always yields byte-identical
/// output. Never fails; malformed constructs render as literal text.
pub fn convert(markdown: &str) -> String {
    convert_with_options(markdown, &ConvertOptions::default())
}

/// Convert markdown to an HTML fragment.
pub fn convert_with_options(markdown: &str, options: &ConvertOptions) -> String {
    let mut draft = Draft::new(markdown);
    for (_name, stage) in STAGES {
        draft = stage(draft, options);
    }
    draft.text
}
