//! In-memory vector index over article chunks.
//!
//! Brute-force cosine scan; the corpus is a few dozen articles, so exact
//! search over a flat `Vec` beats carrying an ANN dependency. The index is
//! immutable once built and `search` takes `&self`, so concurrent queries
//! against one built index are safe.

use std::cmp::Ordering;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chunker::Chunk;
use crate::core::errors::RagError;
use crate::llm::EmbeddingProvider;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndexEntry {
    vector: Vec<f32>,
    chunk: Chunk,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VectorIndex {
    embedding_model: String,
    dimension: usize,
    built_at: DateTime<Utc>,
    entries: Vec<IndexEntry>,
}

impl VectorIndex {
    /// Embed every chunk and build the index.
    ///
    /// Fails with `EmptyCorpus` when there is nothing to index, and with
    /// `Embedding` when the provider returns a ragged or short batch.
    pub async fn build(
        chunks: Vec<Chunk>,
        embedder: &dyn EmbeddingProvider,
    ) -> Result<Self, RagError> {
        if chunks.is_empty() {
            return Err(RagError::EmptyCorpus);
        }

        let texts: Vec<String> = chunks.iter().map(|chunk| chunk.text.clone()).collect();
        let vectors = embedder.embed(&texts).await?;

        if vectors.len() != chunks.len() {
            return Err(RagError::Embedding(format!(
                "expected {} vectors, provider returned {}",
                chunks.len(),
                vectors.len()
            )));
        }

        let dimension = vectors[0].len();
        if dimension == 0 {
            return Err(RagError::Embedding("provider returned empty vectors".into()));
        }
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimension) {
            return Err(RagError::Embedding(format!(
                "ragged embedding batch: {} vs {}",
                bad.len(),
                dimension
            )));
        }

        let entries = vectors
            .into_iter()
            .zip(chunks)
            .map(|(vector, chunk)| IndexEntry { vector, chunk })
            .collect();

        Ok(Self {
            embedding_model: embedder.model_id().to_string(),
            dimension,
            built_at: Utc::now(),
            entries,
        })
    }

    /// Top-`k` chunks by cosine similarity, best first.
    ///
    /// Returns `min(k, len)` results; equal scores keep insertion order.
    pub fn search(&self, query_vector: &[f32], k: usize) -> Result<Vec<Chunk>, RagError> {
        if query_vector.len() != self.dimension {
            return Err(RagError::EmbeddingMismatch {
                expected: self.dimension,
                actual: query_vector.len(),
            });
        }

        let mut scored: Vec<(f32, &Chunk)> = self
            .entries
            .iter()
            .map(|entry| (cosine_similarity(query_vector, &entry.vector), &entry.chunk))
            .collect();

        // stable sort keeps original insertion order for ties
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(_, chunk)| chunk.clone())
            .collect())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn embedding_model(&self) -> &str {
        &self.embedding_model
    }

    /// Write the index as a JSON snapshot.
    pub fn save(&self, path: &Path) -> Result<(), RagError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let payload =
            serde_json::to_vec(self).map_err(|err| RagError::Snapshot(err.to_string()))?;
        std::fs::write(path, payload)?;

        tracing::info!("Saved index snapshot ({} chunks) to {}", self.len(), path.display());
        Ok(())
    }

    /// Reload a snapshot written by `save`.
    ///
    /// The snapshot is only valid under the embedding model that produced
    /// it; a different configured model is rejected rather than silently
    /// corrupting rankings.
    pub fn load(path: &Path, expected_model: &str) -> Result<Self, RagError> {
        let payload = std::fs::read(path)?;
        let index: VectorIndex =
            serde_json::from_slice(&payload).map_err(|err| RagError::Snapshot(err.to_string()))?;

        if index.embedding_model != expected_model {
            return Err(RagError::Snapshot(format!(
                "snapshot was built with embedding model '{}', configured model is '{}'",
                index.embedding_model, expected_model
            )));
        }
        if index.entries.is_empty() {
            return Err(RagError::EmptyCorpus);
        }

        tracing::info!("Loaded index snapshot ({} chunks) from {}", index.len(), path.display());
        Ok(index)
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    let denom = norm_a * norm_b;

    if denom <= f32::EPSILON {
        0.0
    } else {
        dot / denom
    }
}
