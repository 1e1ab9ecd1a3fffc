//! Tavily search provider implementation
//!
//! SECURITY: the API key is ONLY sent to the official Tavily endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{SearchError, SearchProvider, SearchResult};

/// Official Tavily search endpoint
const TAVILY_API_URL: &str = "https://api.tavily.com/search";

pub struct TavilyClient {
    client: reqwest::Client,
    api_key: String,
}

impl TavilyClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    async fn send_request(&self, request: TavilyRequest<'_>) -> Result<TavilyResponse, SearchError> {
        let response = self
            .client
            .post(TAVILY_API_URL)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Api { status, body });
        }

        response
            .json::<TavilyResponse>()
            .await
            .map_err(|e| SearchError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    fn name(&self) -> &str {
        "tavily"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let request = TavilyRequest {
            query,
            topic: "general",
            max_results,
        };

        let response = self.send_request(request).await?;
        tracing::debug!(
            results = response.results.len(),
            "tavily search completed"
        );

        Ok(response
            .results
            .into_iter()
            .map(|r| SearchResult { url: r.url })
            .collect())
    }
}

// Tavily API types

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    query: &'a str,
    topic: &'a str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    results: Vec<TavilyResultEntry>,
}

#[derive(Debug, Deserialize)]
struct TavilyResultEntry {
    url: String,
}
