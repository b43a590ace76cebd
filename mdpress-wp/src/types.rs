//! Wire types for the platform's REST API.

use serde::{Deserialize, Serialize};

/// One taxonomy term as listed by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Term {
    pub id: u64,
    pub name: String,
}

/// Payload for creating or updating a post.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    pub status: String,
    pub slug: String,
    pub categories: Vec<u64>,
    pub tags: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<u64>,
}

/// What the platform reports back for a created or updated post.
#[derive(Debug, Clone, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub status: String,
}

/// What the platform reports back for an uploaded media item.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaResponse {
    pub id: u64,
    #[serde(rename = "source_url", default)]
    pub url: String,
}
