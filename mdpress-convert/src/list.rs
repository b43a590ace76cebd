//! Bulleted list transducer.
//!
//! Lists are recognized line by line: `<indent><dash><space><content>`. Open
//! nesting levels are tracked as a stack of frames, one per `<ul>`, each
//! carrying the indent width at which it was opened. Frames are strictly
//! increasing in indent from bottom to top.
//!
//! Articles indent two spaces per level; the width is a conversion option,
//! not a per-document inference. An indent that grows by any amount opens one
//! level. An indent that shrinks closes `(old - new) / width` levels, floor
//! division, so a ragged shrink (say 3 spaces at width 2) closes a single
//! level and the surviving frame is rebased to the new indent. The first
//! non-list line, and end of input, close every open frame.

use crate::options::ConvertOptions;
use crate::pipeline::Draft;
use once_cell::sync::Lazy;
use regex::Regex;

static ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([ \t]*)- (.+)$").unwrap());

/// Stage: emit `<ul>`/`<li>` structure for dash-item runs.
pub(crate) fn transform(mut draft: Draft, options: &ConvertOptions) -> Draft {
    let width = options.indent_width.max(1);
    let mut frames: Vec<usize> = Vec::new();
    let mut out: Vec<String> = Vec::new();

    for line in draft.text.lines() {
        let Some(caps) = ITEM_RE.captures(line) else {
            while frames.pop().is_some() {
                out.push("</ul>".to_string());
            }
            out.push(line.to_string());
            continue;
        };

        let indent = caps[1].chars().count();
        let content = &caps[2];

        match frames.last().copied() {
            None => {
                out.push("<ul>".to_string());
                frames.push(indent);
            }
            Some(top) if indent > top => {
                out.push("<ul>".to_string());
                frames.push(indent);
            }
            Some(top) if indent < top => {
                for _ in 0..(top - indent) / width {
                    if frames.len() > 1 {
                        out.push("</ul>".to_string());
                        frames.pop();
                    }
                }
                if let Some(frame) = frames.last_mut() {
                    *frame = indent;
                }
            }
            Some(_) => {}
        }
        out.push(format!("<li>{content}</li>"));
    }

    while frames.pop().is_some() {
        out.push("</ul>".to_string());
    }

    draft.text = out.join("\n");
    draft
}
