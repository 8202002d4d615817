pub mod openai;
pub mod provider;
pub mod retry;
pub mod types;

pub use openai::OpenAiProvider;
pub use provider::{EmbeddingProvider, GenerationProvider};
pub use retry::{call_with_retry, RetryPolicy};
pub use types::{ChatMessage, ChatRequest};
