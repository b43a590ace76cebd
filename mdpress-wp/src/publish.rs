//! Article publishing pipeline.
//!
//! Provides a high-level API over the client: resolve taxonomy names, upload
//! the featured image, rewrite local image references, convert the body and
//! create or update the post. Use this when one call per article is what you
//! want; use the client and resolver directly for finer control.

use crate::article::Article;
use crate::client::WpClient;
use crate::error::Result;
use crate::media;
use crate::taxonomy::{resolve_terms, TaxonomyKind};
use crate::types::PostRequest;
use mdpress_convert::ConvertOptions;
use std::path::{Path, PathBuf};
use tracing::info;

/// Specifies how to publish an article.
///
/// Built with the builder pattern:
///
/// ```ignore
/// let spec = PublishSpec::new(&article)
///     .with_status("draft")
///     .with_images_dir("articles/images");
/// ```
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The parsed article to publish.
    pub article: &'a Article,
    /// Post status to request ("publish", "draft", ...).
    pub status: String,
    /// Directory local image references resolve against. When unset, local
    /// references are left as written and no uploads happen.
    pub images_dir: Option<PathBuf>,
    /// Markdown conversion options.
    pub convert_options: ConvertOptions,
}

impl<'a> PublishSpec<'a> {
    /// A spec that publishes the article immediately with default conversion.
    pub fn new(article: &'a Article) -> Self {
        PublishSpec {
            article,
            status: "publish".to_string(),
            images_dir: None,
            convert_options: ConvertOptions::default(),
        }
    }

    /// Request a different post status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Resolve and upload local image references against this directory.
    pub fn with_images_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.images_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Convert with non-default options.
    pub fn with_convert_options(mut self, options: ConvertOptions) -> Self {
        self.convert_options = options;
        self
    }
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// ID of the created or updated post.
    pub id: u64,
    /// Public link reported by the platform.
    pub link: String,
    /// True when a new post was created, false when an existing one was
    /// updated (the article metadata carried a `post_id`).
    pub created: bool,
}

/// Publish an article according to the specification.
///
/// Steps, in order: resolve category names, resolve tag names, upload the
/// featured image if the metadata names one, rewrite local image references
/// in the body, convert the body to HTML, then create the post or update the
/// one the metadata points at.
///
/// Taxonomy resolution is all-or-nothing; a failure there aborts the publish
/// before any post is written.
pub async fn publish(client: &WpClient, spec: PublishSpec<'_>) -> Result<PublishOutcome> {
    let metadata = &spec.article.metadata;

    let categories =
        resolve_terms(client, TaxonomyKind::Category, &metadata.categories).await?;
    let tags = resolve_terms(client, TaxonomyKind::Tag, &metadata.tags).await?;

    let featured_media = match (&spec.images_dir, metadata.image.is_empty()) {
        (Some(dir), false) => Some(media::upload_file(client, &dir.join(&metadata.image)).await?.id),
        _ => None,
    };

    let body = match &spec.images_dir {
        Some(dir) => media::rewrite_local_images(client, &spec.article.body, dir).await?,
        None => spec.article.body.clone(),
    };

    let post = PostRequest {
        title: metadata.title.clone(),
        content: mdpress_convert::convert_with_options(&body, &spec.convert_options),
        status: spec.status.clone(),
        slug: metadata.permalink.clone(),
        categories,
        tags,
        featured_media,
    };

    let response = match metadata.post_id {
        Some(post_id) => client.update_post(post_id, &post).await?,
        None => client.create_post(&post).await?,
    };

    info!(
        id = response.id,
        link = %response.link,
        created = metadata.post_id.is_none(),
        "article published"
    );

    Ok(PublishOutcome {
        id: response.id,
        link: response.link,
        created: metadata.post_id.is_none(),
    })
}
