//! Article sources.
//!
//! An article file is a JSON metadata header and a markdown body separated by
//! the first `---` line:
//!
//! ```text
//! {
//!     "Title": "My article",
//!     "Permalink": "my-article",
//!     "Category": ["News"],
//!     "Tag": ["release"]
//! }
//!
//! ---
//! # My article
//! body...
//! ```
//!
//! The capitalized keys are the established on-disk format; existing article
//! files keep working. After the first successful publish the assigned
//! `post_id` is written back into the header so later runs update the post
//! instead of creating a duplicate.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Divider between the metadata header and the markdown body.
const DIVIDER: &str = "\n---\n";

/// Metadata header of an article file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Image", default)]
    pub image: String,
    #[serde(rename = "Permalink")]
    pub permalink: String,
    #[serde(rename = "Tag", default)]
    pub tags: Vec<String>,
    #[serde(rename = "Category", default)]
    pub categories: Vec<String>,
    #[serde(rename = "post_id", default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,
}

/// A parsed article: metadata plus the raw markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub metadata: ArticleMetadata,
    pub body: String,
}

/// Parse an article source into metadata and body.
pub fn parse_article(source: &str) -> Result<Article> {
    let (header, body) = source.split_once(DIVIDER).ok_or_else(|| {
        Error::ArticleFormat(
            "expected a JSON metadata header separated from the body by a '---' line".to_string(),
        )
    })?;
    let metadata: ArticleMetadata = serde_json::from_str(header)?;
    Ok(Article {
        metadata,
        body: body.to_string(),
    })
}

/// Read and parse an article file.
pub fn read_article(path: impl AsRef<Path>) -> Result<Article> {
    let source = fs::read_to_string(path)?;
    parse_article(&source)
}

/// Rewrite the metadata header of an article file, keeping the body as is.
///
/// Used to record the assigned `post_id` after a first publish.
pub fn update_metadata(path: impl AsRef<Path>, metadata: &ArticleMetadata) -> Result<()> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    let (_, body) = source.split_once(DIVIDER).ok_or_else(|| {
        Error::ArticleFormat(format!(
            "{} has no metadata divider to update",
            path.display()
        ))
    })?;
    let header = serde_json::to_string_pretty(metadata)?;
    fs::write(path, format!("{header}\n{DIVIDER}{body}"))?;
    Ok(())
}
