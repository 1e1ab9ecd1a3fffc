//! Prompt templates for the three pipeline stages
//!
//! Rendering is plain textual substitution of `{name}` placeholders. The
//! extraction and summary prompts instruct the model to answer with a
//! list-shaped text; nothing downstream parses that shape, it is a
//! convention enforced by instruction only.

use thiserror::Error;

/// Raised when a template is rendered without a value for a declared
/// placeholder
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing value for template placeholder `{0}`")]
pub struct MissingPlaceholder(pub String);

/// A prompt template with named `{placeholder}` slots
pub struct PromptTemplate {
    template: &'static str,
    input_variables: &'static [&'static str],
}

impl PromptTemplate {
    pub const fn new(template: &'static str, input_variables: &'static [&'static str]) -> Self {
        Self {
            template,
            input_variables,
        }
    }

    /// Substitute every declared placeholder with its value
    ///
    /// Values for names the template does not declare are ignored. A
    /// declared name with no value is a `MissingPlaceholder` error.
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, MissingPlaceholder> {
        let mut out = self.template.to_string();
        for name in self.input_variables {
            let value = values
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| *v)
                .ok_or_else(|| MissingPlaceholder(name.to_string()))?;
            out = out.replace(&format!("{{{name}}}"), value);
        }
        Ok(out)
    }
}

/// Stage 1: extract readable text from each URL
pub const EXTRACT_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"You are a precise web content extraction assistant.

Extract the main text from each URL.

Rules:
- Ignore ads, navigation and footers
- Keep headings
- No summaries
- Separate each URL
- If a URL cannot be processed, use "Content not accessible"

Return a list:
["doc1","doc2"]

URLs:
{urls}
"#,
    &["urls"],
);

/// Stage 2: summarize each extracted document separately
pub const SUMMARY_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"Summarize each document separately.

Rules:
- Bullet points
- Keep facts
- No merging

Return a list:
["summary1","summary2"]

Documents:
{documents}
"#,
    &["documents"],
);

/// Stage 3: synthesize the final six-section report
pub const REPORT_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"Write a professional research report from the summaries.

Structure:
Title
Executive Summary
Key Findings
Comparative Insights
Important Facts
Conclusion

Summaries:
{summaries}
"#,
    &["summaries"],
);

/// Render an ordered URL list as a single bracketed, quoted value for the
/// extraction prompt
pub fn format_url_list(urls: &[String]) -> String {
    let quoted: Vec<String> = urls.iter().map(|u| format!("\"{u}\"")).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: PromptTemplate =
        PromptTemplate::new("Hello {name}, welcome to {place}.", &["name", "place"]);

    #[test]
    fn test_render_substitutes_all_placeholders() {
        let out = GREETING
            .render(&[("name", "Ada"), ("place", "the lab")])
            .unwrap();
        assert_eq!(out, "Hello Ada, welcome to the lab.");
    }

    #[test]
    fn test_render_missing_value_is_an_error() {
        let err = GREETING.render(&[("name", "Ada")]).unwrap_err();
        assert_eq!(err, MissingPlaceholder("place".to_string()));
    }

    #[test]
    fn test_render_ignores_undeclared_values() {
        let out = GREETING
            .render(&[("name", "Ada"), ("place", "the lab"), ("extra", "x")])
            .unwrap();
        assert!(!out.contains('x'));
    }

    #[test]
    fn test_render_is_deterministic() {
        let values = [("name", "Ada"), ("place", "the lab")];
        assert_eq!(
            GREETING.render(&values).unwrap(),
            GREETING.render(&values).unwrap()
        );
    }

    #[test]
    fn test_stage_templates_declare_their_placeholder() {
        assert!(EXTRACT_PROMPT.render(&[("urls", "[]")]).is_ok());
        assert!(SUMMARY_PROMPT.render(&[("documents", "[]")]).is_ok());
        assert!(REPORT_PROMPT.render(&[("summaries", "[]")]).is_ok());
    }

    #[test]
    fn test_report_template_instructs_section_structure() {
        let rendered = REPORT_PROMPT.render(&[("summaries", "facts")]).unwrap();
        for section in [
            "Title",
            "Executive Summary",
            "Key Findings",
            "Comparative Insights",
            "Important Facts",
            "Conclusion",
        ] {
            assert!(rendered.contains(section), "missing section {section}");
        }
    }

    #[test]
    fn test_format_url_list() {
        let urls = vec!["https://a.example".to_string(), "https://b.example".to_string()];
        assert_eq!(
            format_url_list(&urls),
            "[\"https://a.example\", \"https://b.example\"]"
        );
    }
}
