//! Query-side retrieval: embed the question, search the index.

use super::chunker::Chunk;
use super::index::VectorIndex;
use crate::core::errors::RagError;
use crate::llm::EmbeddingProvider;

/// Retrieve the top-`k` chunks for a question.
///
/// The question is embedded with the same provider the index was built
/// against; a dimensionality divergence surfaces as `EmbeddingMismatch`
/// from the search rather than silently corrupting the ranking.
pub async fn retrieve(
    index: &VectorIndex,
    question: &str,
    k: usize,
    embedder: &dyn EmbeddingProvider,
) -> Result<Vec<Chunk>, RagError> {
    let query = question.trim().to_string();
    let embeddings = embedder.embed(std::slice::from_ref(&query)).await?;

    let query_vector = embeddings
        .first()
        .ok_or_else(|| RagError::Embedding("provider returned no query vector".into()))?;

    index.search(query_vector, k)
}
