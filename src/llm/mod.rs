//! Language-model adapters

use async_trait::async_trait;

mod error;
mod gemini;

pub use error::ModelError;
pub use gemini::GeminiClient;

/// Trait for text-generation providers
///
/// One fully-rendered prompt in, one generated string out. Stateless,
/// single request/response, no streaming.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Generate a completion for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
