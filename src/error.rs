//! Top-level error taxonomy for report generation
//!
//! Every failure aborts the current generation attempt entirely; nothing is
//! retried or recovered locally, and no partial report is ever produced.

use thiserror::Error;

use crate::llm::ModelError;
use crate::prompts::MissingPlaceholder;
use crate::search::SearchError;

/// Errors a report generation can end with
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required API key is absent; checked before any service call
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),

    /// Query was empty or whitespace-only; checked before any service call
    #[error("query must not be empty")]
    EmptyQuery,

    /// The search service returned fewer results than the pipeline needs
    #[error("search returned {got} results, expected {expected}")]
    InsufficientResults { expected: usize, got: usize },

    /// The web-search call failed
    #[error("search service error: {0}")]
    Search(#[from] SearchError),

    /// A generation call failed at some pipeline stage
    #[error("model service error: {0}")]
    Model(#[from] ModelError),

    /// A template was rendered without a required value
    ///
    /// Cannot occur through the fixed pipeline wiring; defensive only.
    #[error(transparent)]
    Template(#[from] MissingPlaceholder),
}
