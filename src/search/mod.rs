//! Web-search adapters

use async_trait::async_trait;
use thiserror::Error;

mod tavily;

pub use tavily::TavilyClient;

/// One entry from a search response, in service order
///
/// Only the URL is carried; the pipeline feeds URLs to the extraction
/// stage and the surfaces display them as-is.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub url: String,
}

/// Errors from the web-search service
#[derive(Debug, Error)]
pub enum SearchError {
    /// The service rejected or failed the request (non-2xx status)
    #[error("search API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Connection, TLS or timeout failure before a response arrived
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Trait for web-search providers
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Run one search and return results in service order
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError>;
}
