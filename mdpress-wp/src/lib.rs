//! WordPress publishing support for the mdpress toolchain
//!
//!     This crate owns everything that talks to the site: the REST client
//!     (posts, media, taxonomy endpoints), taxonomy name resolution, article
//!     source parsing and the high-level publish pipeline. Markdown conversion
//!     lives in mdpress-convert and is pulled in here only by the publish
//!     pipeline.
//!
//!     The file structure :
//!     .
//!     ├── article.rs      # metadata header + body parsing, post_id write-back
//!     ├── client.rs       # REST client, one method per endpoint
//!     ├── error.rs        # crate error type
//!     ├── media.rs        # media upload, local image reference rewriting
//!     ├── publish.rs      # high-level publish pipeline
//!     ├── taxonomy.rs     # name → ID resolution with create-race recovery
//!     └── types.rs        # wire types
//!
//!     Taxonomy resolution is the interesting part: the directory of terms is
//!     shared, remotely mutable and unlocked, so get-or-create can race with
//!     other publishers. See ./taxonomy.rs for how that is handled and what
//!     is deliberately left unsolved.

pub mod article;
pub mod client;
pub mod error;
pub mod media;
pub mod publish;
pub mod taxonomy;
pub mod types;

pub use article::{parse_article, read_article, update_metadata, Article, ArticleMetadata};
pub use client::WpClient;
pub use error::{Error, Result};
pub use publish::{publish, PublishOutcome, PublishSpec};
pub use taxonomy::{resolve_terms, TaxonomyKind, TermDirectory};
pub use types::{MediaResponse, PostRequest, PostResponse, Term};
