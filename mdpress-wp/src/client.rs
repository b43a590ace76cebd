//! REST client for the publishing platform.
//!
//! Thin HTTP layer: every method is one endpoint. Authentication is HTTP
//! Basic with an application password. Error bodies are decoded into
//! [`Error::Api`](crate::error::Error::Api) so callers see the platform's
//! own code and message instead of a bare status.

use crate::error::{Error, Result};
use crate::taxonomy::{TaxonomyKind, TermDirectory};
use crate::types::{MediaResponse, PostRequest, PostResponse, Term};
use async_trait::async_trait;
use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

const API_ROOT: &str = "wp-json/wp/v2";

/// Error body the platform returns alongside non-success statuses.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Client for one site.
#[derive(Debug, Clone)]
pub struct WpClient {
    base_url: Url,
    username: String,
    password: String,
    http: reqwest::Client,
}

impl WpClient {
    /// Build a client for the site at `base_url`.
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(WpClient {
            base_url,
            username: username.into(),
            password: password.into(),
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{API_ROOT}/{path}",
            self.base_url.as_str().trim_end_matches('/')
        )
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let url = response.url().to_string();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|source| Error::Transport { url, source })
        } else {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                code: body.code,
                message: body.message,
            })
        }
    }

    /// Create a new post.
    pub async fn create_post(&self, post: &PostRequest) -> Result<PostResponse> {
        let url = self.endpoint("posts");
        debug!(%url, title = %post.title, "creating post");
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(post)
            .send()
            .await
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;
        let created: PostResponse = Self::decode(response).await?;
        info!(id = created.id, link = %created.link, "post created");
        Ok(created)
    }

    /// Update an existing post in place.
    pub async fn update_post(&self, post_id: u64, post: &PostRequest) -> Result<PostResponse> {
        let url = self.endpoint(&format!("posts/{post_id}"));
        debug!(%url, title = %post.title, "updating post");
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header("X-HTTP-Method-Override", "PUT")
            .json(post)
            .send()
            .await
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;
        let updated: PostResponse = Self::decode(response).await?;
        info!(id = updated.id, link = %updated.link, "post updated");
        Ok(updated)
    }

    /// Upload a media file and return its ID and hosted URL.
    pub async fn upload_media(&self, filename: &str, bytes: Vec<u8>) -> Result<MediaResponse> {
        let url = self.endpoint("media");
        debug!(%url, filename, size = bytes.len(), "uploading media");
        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .multipart(form)
            .send()
            .await
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;
        let media: MediaResponse = Self::decode(response).await?;
        info!(id = media.id, url = %media.url, "media uploaded");
        Ok(media)
    }
}

#[async_trait]
impl TermDirectory for WpClient {
    async fn list_terms(&self, kind: TaxonomyKind) -> Result<Vec<Term>> {
        // One page of 100 covers the directories this tool manages.
        let url = format!("{}?per_page=100", self.endpoint(kind.rest_base()));
        debug!(%url, "listing terms");
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;
        Self::decode(response).await
    }

    async fn create_term(&self, kind: TaxonomyKind, name: &str) -> Result<Term> {
        let url = self.endpoint(kind.rest_base());
        debug!(%url, name, "creating term");
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;
        Self::decode(response).await
    }
}
