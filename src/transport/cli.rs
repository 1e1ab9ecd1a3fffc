//! One-shot report generation from the command line

use crate::config::Config;
use crate::report::ReportService;
use anyhow::Result;

/// Generate a report for a question and print sources plus report to stdout
pub async fn run_report(query: &str, model: Option<&str>, mut config: Config) -> Result<()> {
    if let Some(model) = model {
        config.llm.model = model.to_string();
    }

    let service = ReportService::from_config(&config)?;
    let generated = service.generate_report(query).await?;

    println!("Sources:");
    for url in &generated.sources {
        println!("  {url}");
    }
    println!();
    println!("{}", generated.report);

    Ok(())
}
