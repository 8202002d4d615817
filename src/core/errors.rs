use thiserror::Error;

#[derive(Debug, Error)]
pub enum RagError {
    #[error("no documents produced any chunks to index")]
    EmptyCorpus,
    #[error("pipeline not initialized")]
    NotInitialized,
    #[error("embedding dimension mismatch: index holds {expected}, query has {actual}")]
    EmbeddingMismatch { expected: usize, actual: usize },
    #[error("generation failed: {0}")]
    Generation(String),
    #[error("embedding failed: {0}")]
    Embedding(String),
    #[error("document load failed: {0}")]
    Document(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("index snapshot error: {0}")]
    Snapshot(String),
    #[error("{op} timed out after {secs}s")]
    Timeout { op: String, secs: u64 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RagError {
    pub fn generation<E: std::fmt::Display>(err: E) -> Self {
        RagError::Generation(err.to_string())
    }

    pub fn embedding<E: std::fmt::Display>(err: E) -> Self {
        RagError::Embedding(err.to_string())
    }

    pub fn document<E: std::fmt::Display>(err: E) -> Self {
        RagError::Document(err.to_string())
    }

    /// Whether a call that failed this way is worth re-issuing.
    ///
    /// Provider and network failures are transient; everything else is a
    /// configuration or state problem that a retry cannot fix.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RagError::Generation(_)
                | RagError::Embedding(_)
                | RagError::Document(_)
                | RagError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors_are_retryable() {
        assert!(RagError::Generation("quota".into()).is_retryable());
        assert!(RagError::Timeout {
            op: "embed".into(),
            secs: 30
        }
        .is_retryable());

        assert!(!RagError::NotInitialized.is_retryable());
        assert!(!RagError::EmbeddingMismatch {
            expected: 768,
            actual: 384
        }
        .is_retryable());
        assert!(!RagError::EmptyCorpus.is_retryable());
    }
}
