//! Grounded answer synthesis.
//!
//! Stuffs the retrieved chunks into the prompt in rank order and instructs
//! the model to answer only from that context. The generated text is
//! returned verbatim; compressing it is a separate stage so grounding and
//! summarization stay independently testable.

use super::chunker::Chunk;
use crate::core::config::defaults::GENERATION_TEMPERATURE;
use crate::core::errors::RagError;
use crate::llm::{ChatMessage, ChatRequest, GenerationProvider};

const ANSWER_INSTRUCTION: &str = "You answer questions about pregnancy health. \
Use only the numbered context excerpts below; if they do not contain the \
answer, say you do not know. Do not invent information beyond the excerpts.";

pub async fn synthesize(
    question: &str,
    chunks: &[Chunk],
    generator: &dyn GenerationProvider,
) -> Result<String, RagError> {
    let context = chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| format!("[{}] (Source: {})\n{}", i + 1, chunk.source_url, chunk.text))
        .collect::<Vec<_>>()
        .join("\n\n");

    let request = ChatRequest::new(vec![
        ChatMessage::system(ANSWER_INSTRUCTION),
        ChatMessage::user(format!(
            "Context:\n{}\n\nQuestion: {}",
            context, question
        )),
    ])
    .with_temperature(GENERATION_TEMPERATURE);

    generator.generate(request).await
}
