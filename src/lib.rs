//! materna — retrieval-augmented QA over curated pregnancy-health articles.
//!
//! Build the index once from the configured article URLs, then answer
//! questions with a grounded, summarized answer plus per-source summaries.

pub mod core;
pub mod ingest;
pub mod llm;
pub mod rag;

pub use crate::core::config::{AppConfig, AppPaths};
pub use crate::core::errors::RagError;
pub use crate::rag::{ArticlePipeline, QueryResponse, SourceSummary};
