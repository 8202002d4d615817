//! Bounded-length summarization.

use crate::core::config::defaults::GENERATION_TEMPERATURE;
use crate::core::errors::RagError;
use crate::llm::{ChatMessage, ChatRequest, GenerationProvider};

/// Compress `text` to a summary under `max_words` words.
///
/// The word limit is a prompt-level contract only; an overrun is logged,
/// never truncated, so the summary is always the model's complete output.
pub async fn summarize(
    text: &str,
    max_words: usize,
    generator: &dyn GenerationProvider,
) -> Result<String, RagError> {
    let prompt = format!(
        "Summarize the following text in less than {} words while maintaining \
the key information:\n\n{}\n\nSummary:",
        max_words, text
    );

    let request = ChatRequest::new(vec![ChatMessage::user(prompt)])
        .with_temperature(GENERATION_TEMPERATURE);

    let summary = generator.generate(request).await?;
    let summary = summary.trim().to_string();

    let words = summary.split_whitespace().count();
    if words > max_words {
        tracing::warn!(
            "Summary ran to {} words (limit {}), keeping it whole",
            words,
            max_words
        );
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct EchoGenerator;

    #[async_trait]
    impl GenerationProvider for EchoGenerator {
        fn model_id(&self) -> &str {
            "echo-test"
        }

        async fn generate(&self, request: ChatRequest) -> Result<String, RagError> {
            Ok(format!("  echoed: {}  ", request.messages[0].content.len()))
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl GenerationProvider for FailingGenerator {
        fn model_id(&self) -> &str {
            "failing-test"
        }

        async fn generate(&self, _request: ChatRequest) -> Result<String, RagError> {
            Err(RagError::Generation("backend down".into()))
        }
    }

    #[tokio::test]
    async fn output_is_trimmed() {
        let summary = summarize("some text", 100, &EchoGenerator).await.unwrap();
        assert!(summary.starts_with("echoed:"));
        assert_eq!(summary, summary.trim());
    }

    #[tokio::test]
    async fn failure_propagates() {
        let err = summarize("some text", 100, &FailingGenerator)
            .await
            .unwrap_err();
        assert!(matches!(err, RagError::Generation(_)));
    }
}
