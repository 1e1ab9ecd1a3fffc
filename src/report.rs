//! Report generation service
//!
//! Orchestrates one generation: validate the query, search for sources,
//! run the pipeline over the top URLs, return report plus sources. Errors
//! from either adapter propagate unchanged.

use crate::config::Config;
use crate::error::ReportError;
use crate::llm::{GeminiClient, TextGenerator};
use crate::pipeline::ReportPipeline;
use crate::search::{SearchProvider, TavilyClient};

/// Number of sources a report is built from
pub const SOURCE_COUNT: usize = 5;

/// A finished generation: the report text and the URLs it drew from
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub report: String,
    pub sources: Vec<String>,
}

pub struct ReportService {
    search: Box<dyn SearchProvider>,
    pipeline: ReportPipeline,
}

impl ReportService {
    pub fn new(search: Box<dyn SearchProvider>, generator: Box<dyn TextGenerator>) -> Self {
        Self {
            search,
            pipeline: ReportPipeline::new(generator),
        }
    }

    /// Build the service from configuration and environment credentials
    ///
    /// Both keys are required up front; nothing is sent anywhere when one
    /// is missing.
    pub fn from_config(config: &Config) -> Result<Self, ReportError> {
        let tavily_key = require_env("TAVILY_API_KEY")?;
        let gemini_key = require_env("GEMINI_API_KEY")?;

        let search = TavilyClient::new(tavily_key);
        let generator = GeminiClient::new(gemini_key)
            .with_model(&config.llm.model)
            .with_temperature(config.llm.temperature);

        Ok(Self::new(Box::new(search), Box::new(generator)))
    }

    /// Generate a report for a research question
    pub async fn generate_report(&self, query: &str) -> Result<GeneratedReport, ReportError> {
        if query.trim().is_empty() {
            return Err(ReportError::EmptyQuery);
        }

        tracing::info!(provider = self.search.name(), "searching for sources");
        let results = self.search.search(query, SOURCE_COUNT).await?;

        if results.len() < SOURCE_COUNT {
            return Err(ReportError::InsufficientResults {
                expected: SOURCE_COUNT,
                got: results.len(),
            });
        }

        let sources: Vec<String> = results
            .into_iter()
            .take(SOURCE_COUNT)
            .map(|r| r.url)
            .collect();

        let report = self.pipeline.run(&sources).await?;
        Ok(GeneratedReport { report, sources })
    }
}

fn require_env(name: &'static str) -> Result<String, ReportError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ReportError::MissingCredential(name))
}
