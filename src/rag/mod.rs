//! Retrieval-augmented QA over the article corpus.
//!
//! Index-build path: documents → `chunker` → `index` (one embedding pass).
//! Query path: `retriever` → `synthesizer` → `summarizer`, with
//! `dedupe` collapsing the retrieved chunks to distinct sources.
//! `pipeline` wires the stages together behind `initialize`/`query`.

pub mod chunker;
pub mod dedupe;
pub mod index;
pub mod pipeline;
pub mod retriever;
pub mod summarizer;
pub mod synthesizer;


pub use chunker::Chunk;
pub use index::VectorIndex;
pub use pipeline::{ArticlePipeline, QueryResponse, SourceSummary};
