//! Document ingestion.
//!
//! A `DocumentLoader` turns a list of article URLs into raw text documents.
//! The pipeline treats the loader as a collaborator; the bundled `WebLoader`
//! fetches over HTTP and strips markup, but tests inject static loaders.

mod web;

pub use web::WebLoader;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::RagError;

/// A fetched article. Held only while the index is being built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub url: String,
    pub text: String,
}

#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Fetch each URL, returning one document per successful fetch.
    ///
    /// The result may be shorter than the input list; failed URLs are the
    /// loader's business to report (log and skip, or abort).
    async fn load(&self, urls: &[String]) -> Result<Vec<Document>, RagError>;
}
