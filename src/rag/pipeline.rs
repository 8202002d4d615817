//! Query pipeline orchestration.
//!
//! `ArticlePipeline` is the lifecycle object callers hold: it owns the
//! document loader, both provider handles, and the index slot. Build the
//! index once with `initialize` (or from a snapshot), then serve any number
//! of `query` calls against it.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use super::chunker::split_documents;
use super::dedupe::dedupe_by_source;
use super::index::VectorIndex;
use super::retriever::retrieve;
use super::summarizer::summarize;
use super::synthesizer::synthesize;
use crate::core::config::{AppConfig, ChunkingConfig, RetrievalConfig};
use crate::core::errors::RagError;
use crate::ingest::DocumentLoader;
use crate::llm::{call_with_retry, EmbeddingProvider, GenerationProvider, RetryPolicy};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSummary {
    pub url: String,
    pub summary: String,
}

/// What a query returns: the summarized answer plus one summarized excerpt
/// per distinct source article, in rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub sources: Vec<SourceSummary>,
}

pub struct ArticlePipeline {
    urls: Vec<String>,
    chunking: ChunkingConfig,
    retrieval: RetrievalConfig,
    summary_max_words: usize,
    retry: RetryPolicy,
    loader: Arc<dyn DocumentLoader>,
    embedder: Arc<dyn EmbeddingProvider>,
    generator: Arc<dyn GenerationProvider>,
    index: OnceCell<VectorIndex>,
}

impl ArticlePipeline {
    pub fn new(
        config: &AppConfig,
        loader: Arc<dyn DocumentLoader>,
        embedder: Arc<dyn EmbeddingProvider>,
        generator: Arc<dyn GenerationProvider>,
    ) -> Self {
        Self {
            urls: config.articles.urls.clone(),
            chunking: config.chunking.clone(),
            retrieval: config.retrieval.clone(),
            summary_max_words: config.summary.max_words,
            retry: RetryPolicy::from_config(&config.retry),
            loader,
            embedder,
            generator,
            index: OnceCell::new(),
        }
    }

    /// Fetch, chunk, embed and index the configured articles.
    ///
    /// Idempotent: the index is built at most once, a second call is a
    /// no-op. Fails with `EmptyCorpus` when no article yields any text.
    pub async fn initialize(&self) -> Result<(), RagError> {
        self.index
            .get_or_try_init(|| self.build_index())
            .await
            .map(|_| ())
    }

    /// Populate the index slot from a snapshot instead of refetching.
    pub async fn initialize_from_snapshot(&self, path: &Path) -> Result<(), RagError> {
        self.index
            .get_or_try_init(|| async { VectorIndex::load(path, self.embedder.model_id()) })
            .await
            .map(|_| ())
    }

    /// Persist the built index for later `initialize_from_snapshot`.
    pub fn save_index(&self, path: &Path) -> Result<(), RagError> {
        self.index
            .get()
            .ok_or(RagError::NotInitialized)?
            .save(path)
    }

    pub fn is_initialized(&self) -> bool {
        self.index.initialized()
    }

    async fn build_index(&self) -> Result<VectorIndex, RagError> {
        tracing::info!("Fetching {} configured articles", self.urls.len());
        let documents = self.loader.load(&self.urls).await?;
        if documents.is_empty() {
            return Err(RagError::EmptyCorpus);
        }

        let chunks = split_documents(&documents, &self.chunking);
        tracing::info!(
            "Chunked {} documents into {} chunks",
            documents.len(),
            chunks.len()
        );

        VectorIndex::build(chunks, self.embedder.as_ref()).await
    }

    /// Answer a question from the indexed articles.
    ///
    /// Stages run sequentially: retrieve → synthesize → summarize the
    /// answer → dedupe sources → summarize each source. Every provider call
    /// goes through the retry policy; any stage failing fails the whole
    /// call, so a response never carries missing summaries.
    pub async fn query(&self, question: &str) -> Result<QueryResponse, RagError> {
        let index = self.index.get().ok_or(RagError::NotInitialized)?;

        tracing::info!("Processing question: {}", question);

        let ranked = call_with_retry(&self.retry, "retrieve", || {
            retrieve(
                index,
                question,
                self.retrieval.top_k,
                self.embedder.as_ref(),
            )
        })
        .await?;

        let raw_answer = call_with_retry(&self.retry, "synthesize", || {
            synthesize(question, &ranked, self.generator.as_ref())
        })
        .await?;

        let answer = call_with_retry(&self.retry, "summarize answer", || {
            summarize(&raw_answer, self.summary_max_words, self.generator.as_ref())
        })
        .await?;

        let unique = dedupe_by_source(&ranked, self.retrieval.max_sources);

        let mut sources = Vec::with_capacity(unique.len());
        for chunk in &unique {
            let summary = call_with_retry(&self.retry, "summarize source", || {
                summarize(&chunk.text, self.summary_max_words, self.generator.as_ref())
            })
            .await?;

            sources.push(SourceSummary {
                url: chunk.source_url.clone(),
                summary,
            });
        }

        tracing::info!(
            "Answered with {} source(s) from {} retrieved chunk(s)",
            sources.len(),
            ranked.len()
        );

        Ok(QueryResponse { answer, sources })
    }
}
