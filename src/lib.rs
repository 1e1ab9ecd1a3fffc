//! scout: research assistant that turns a question into a sourced report
//!
//! This library provides:
//! - A web-search adapter (Tavily) that finds live sources for a question
//! - A language-model adapter (Gemini) behind a narrow `TextGenerator` trait
//! - A fixed three-stage prompt pipeline: extraction, summarization, report
//! - A report service that ties search and pipeline together
//! - CLI and HTTP surfaces for running a generation

pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod report;
pub mod search;
pub mod transport;

pub use config::Config;
pub use error::ReportError;
pub use report::{GeneratedReport, ReportService, SOURCE_COUNT};
