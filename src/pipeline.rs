//! Fixed three-stage prompt pipeline
//!
//! extraction -> summarization -> report synthesis. Each stage renders a
//! template and sends it to the generator; the raw output string becomes
//! the next stage's template value, verbatim. No branching, no retries,
//! no validation between stages. The first failure aborts the run.

use crate::error::ReportError;
use crate::llm::TextGenerator;
use crate::prompts::{format_url_list, EXTRACT_PROMPT, REPORT_PROMPT, SUMMARY_PROMPT};

pub struct ReportPipeline {
    generator: Box<dyn TextGenerator>,
}

impl ReportPipeline {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Run the three stages over an ordered URL list and return the report
    pub async fn run(&self, urls: &[String]) -> Result<String, ReportError> {
        let url_list = format_url_list(urls);

        tracing::info!(urls = urls.len(), "pipeline stage 1: extraction");
        let prompt = EXTRACT_PROMPT.render(&[("urls", url_list.as_str())])?;
        let extracted = self.generator.generate(&prompt).await?;

        tracing::info!("pipeline stage 2: summarization");
        let prompt = SUMMARY_PROMPT.render(&[("documents", extracted.as_str())])?;
        let summaries = self.generator.generate(&prompt).await?;

        tracing::info!("pipeline stage 3: report synthesis");
        let prompt = REPORT_PROMPT.render(&[("summaries", summaries.as_str())])?;
        let report = self.generator.generate(&prompt).await?;

        Ok(report)
    }
}
