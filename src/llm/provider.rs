use async_trait::async_trait;

use super::types::ChatRequest;
use crate::core::errors::RagError;

/// Maps text to fixed-dimensionality vectors.
///
/// The same provider instance (and therefore the same model) must be used at
/// index-build time and at query time; the index rejects vectors of any other
/// dimensionality.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// identifier of the embedding model behind this instance
    fn model_id(&self) -> &str;

    /// embed each input text, preserving order
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, RagError>;
}

/// Produces free text from a prompt. Stateless per call.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// identifier of the generation model behind this instance
    fn model_id(&self) -> &str;

    /// single-shot completion (no streaming)
    async fn generate(&self, request: ChatRequest) -> Result<String, RagError>;
}
