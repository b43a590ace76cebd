//! Pipe table transducer.
//!
//! A table is a maximal run of consecutive lines that start and end with a
//! pipe: header row, separator row, then body rows. The separator row is
//! discarded without validation (its cell count is not checked against the
//! header). Runs of fewer than three lines are not tables and pass through
//! unchanged, original line breaks included.

use crate::options::ConvertOptions;
use crate::pipeline::Draft;

/// Stage: collapse qualifying pipe-line runs into table markup.
pub(crate) fn transform(mut draft: Draft, _options: &ConvertOptions) -> Draft {
    let mut out: Vec<String> = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for line in draft.text.lines() {
        if is_row(line) {
            run.push(line);
        } else {
            flush(&mut out, &mut run);
            out.push(line.to_string());
        }
    }
    flush(&mut out, &mut run);

    draft.text = out.join("\n");
    draft
}

fn is_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

fn flush(out: &mut Vec<String>, run: &mut Vec<&str>) {
    if run.len() < 3 {
        out.extend(run.drain(..).map(str::to_string));
        return;
    }

    let mut html = String::from("<table><thead><tr>");
    for cell in split_row(run[0]) {
        html.push_str("<th>");
        html.push_str(&cell);
        html.push_str("</th>");
    }
    html.push_str("</tr></thead><tbody>");
    // run[1] is the separator row
    for row in &run[2..] {
        html.push_str("<tr>");
        for cell in split_row(row) {
            html.push_str("<td>");
            html.push_str(&cell);
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");

    out.push(html);
    run.clear();
}

/// Split a row into trimmed cells. One leading and one trailing pipe are
/// stripped before splitting. Bold markers are stripped to plain text: table
/// headers are already visually distinct and cell content stays flat.
fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner
        .split('|')
        .map(|cell| cell.trim().replace("**", ""))
        .collect()
}
