//! Markdown to HTML conversion for article publishing
//!
//!     This crate converts the supported markdown subset into the HTML fragment
//!     that gets posted to the remote site. It is deliberately not a CommonMark
//!     implementation: the article pipeline only needs headings, paragraphs,
//!     bold, links, images, bulleted lists, pipe tables, horizontal rules and
//!     code (fenced blocks and inline spans), and those are what it supports.
//!
//! Architecture
//!
//!     The conversion is an ordered pipeline of independent stages, each taking
//!     and returning the same draft type (text plus the code stash). Stage order
//!     is load bearing and is kept in one place (see ./pipeline.rs) so it can be
//!     read and tested rather than reverse engineered from a single large
//!     function with interleaved string mutation.
//!
//!     1. extract-code    pull fenced blocks and inline spans out of the text,
//!                        leaving unique placeholder tokens behind so no later
//!                        stage can corrupt literal code (./blocks.rs)
//!     2. tables          pipe-delimited line runs to table markup (./table.rs)
//!     3. lists           indented dash runs to nested list markup (./list.rs)
//!     4. inline          rules, images, headings, links, bold (./inline.rs)
//!     5. paragraphs      blank-line chunks without block content get wrapped
//!     6. reinsert-code   placeholder tokens back to their escaped HTML
//!
//!     This is a pure lib: no I/O, no logging, no shell assumptions. Conversion
//!     never fails. Malformed constructs (an unterminated fence, a two-line pipe
//!     run, a ragged list indent) degrade to literal passthrough instead of
//!     erroring, so any input produces some output and the same input always
//!     produces the same output.
//!
//!     The file structure :
//!     .
//!     ├── blocks.rs       # code extraction, placeholder stash, reinsertion
//!     ├── escape.rs       # HTML escaping of literal code content
//!     ├── inline.rs       # line/inline regex passes and paragraph wrapping
//!     ├── list.rs         # indent-tracked bulleted list transducer
//!     ├── options.rs      # conversion knobs (indent width)
//!     ├── pipeline.rs     # stage order and the convert entry points
//!     └── table.rs        # pipe table transducer

mod blocks;
mod escape;
mod inline;
mod list;
mod options;
mod pipeline;
mod table;

pub use options::ConvertOptions;
pub use pipeline::{convert, convert_with_options};
