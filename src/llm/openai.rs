//! OpenAI-compatible HTTP backend.
//!
//! Speaks the `/v1/chat/completions` and `/v1/embeddings` wire format, which
//! also covers self-hosted servers (LM Studio, llama.cpp server, vLLM) that
//! expose the same surface.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::provider::{EmbeddingProvider, GenerationProvider};
use super::types::ChatRequest;
use crate::core::config::ProviderConfig;
use crate::core::errors::RagError;

#[derive(Clone)]
pub struct OpenAiProvider {
    base_url: String,
    chat_model: String,
    embedding_model: String,
    api_key: Option<String>,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(config: &ProviderConfig, api_key: Option<String>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            chat_model: config.chat_model.clone(),
            embedding_model: config.embedding_model.clone(),
            api_key,
            client: Client::new(),
        }
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.post(&url);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        builder
    }
}

#[async_trait]
impl GenerationProvider for OpenAiProvider {
    fn model_id(&self) -> &str {
        &self.chat_model
    }

    async fn generate(&self, request: ChatRequest) -> Result<String, RagError> {
        let mut body = json!({
            "model": self.chat_model,
            "messages": request.messages,
            "stream": false,
        });

        if let Some(obj) = body.as_object_mut() {
            if let Some(t) = request.temperature {
                obj.insert("temperature".to_string(), json!(t));
            }
            if let Some(t) = request.max_tokens {
                obj.insert("max_tokens".to_string(), json!(t));
            }
        }

        let res = self
            .post("/v1/chat/completions")
            .json(&body)
            .send()
            .await
            .map_err(RagError::generation)?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(RagError::Generation(format!(
                "chat completion failed ({}): {}",
                status, text
            )));
        }

        let payload: Value = res.json().await.map_err(RagError::generation)?;

        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| RagError::Generation("malformed completion response".to_string()))?
            .to_string();

        Ok(content)
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiProvider {
    fn model_id(&self) -> &str {
        &self.embedding_model
    }

    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, RagError> {
        let body = json!({
            "model": self.embedding_model,
            "input": inputs,
        });

        let res = self
            .post("/v1/embeddings")
            .json(&body)
            .send()
            .await
            .map_err(RagError::embedding)?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(RagError::Embedding(format!(
                "embedding request failed ({}): {}",
                status, text
            )));
        }

        let payload: Value = res.json().await.map_err(RagError::embedding)?;

        let mut embeddings = Vec::with_capacity(inputs.len());
        if let Some(data) = payload["data"].as_array() {
            for item in data {
                if let Some(vals) = item["embedding"].as_array() {
                    let vec: Vec<f32> = vals
                        .iter()
                        .filter_map(|v| v.as_f64().map(|f| f as f32))
                        .collect();
                    embeddings.push(vec);
                }
            }
        }

        if embeddings.len() != inputs.len() {
            return Err(RagError::Embedding(format!(
                "expected {} embeddings, got {}",
                inputs.len(),
                embeddings.len()
            )));
        }

        Ok(embeddings)
    }
}
