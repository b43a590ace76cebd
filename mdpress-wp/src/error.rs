//! Error types for mdpress-wp

use crate::taxonomy::TaxonomyKind;
use thiserror::Error;

/// Result type alias for mdpress-wp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the publishing platform
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The HTTP request itself failed (connection, TLS, decoding)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The platform answered with an error body
    #[error("API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Fetching the term directory failed; nothing was resolved
    #[error("failed to fetch the {kind} directory")]
    TermLookup {
        kind: TaxonomyKind,
        #[source]
        source: Box<Error>,
    },

    /// Creating a term failed and the directory snapshot had no match either
    #[error("failed to create {kind} term '{name}'")]
    TermCreate {
        kind: TaxonomyKind,
        name: String,
        #[source]
        source: Box<Error>,
    },

    /// The article file does not follow the metadata + body layout
    #[error("invalid article source: {0}")]
    ArticleFormat(String),

    /// The article metadata header is not valid JSON
    #[error("invalid article metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    /// Reading or writing a local file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The configured base URL is not a valid URL
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}
