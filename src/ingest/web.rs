//! HTTP article loader.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{Document, DocumentLoader};
use crate::core::errors::RagError;

pub struct WebLoader {
    client: Client,
}

impl WebLoader {
    pub fn new(fetch_timeout: Duration) -> Result<Self, RagError> {
        let client = Client::builder()
            .timeout(fetch_timeout)
            .build()
            .map_err(RagError::document)?;

        Ok(Self { client })
    }

    async fn fetch_one(&self, url: &str) -> Result<Document, RagError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(RagError::document)?;

        if !response.status().is_success() {
            return Err(RagError::Document(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        let html = response.text().await.map_err(RagError::document)?;
        let text = strip_html(&html);

        Ok(Document {
            url: url.to_string(),
            text,
        })
    }
}

#[async_trait]
impl DocumentLoader for WebLoader {
    async fn load(&self, urls: &[String]) -> Result<Vec<Document>, RagError> {
        let mut documents = Vec::with_capacity(urls.len());

        for url in urls {
            match self.fetch_one(url).await {
                Ok(doc) if doc.text.is_empty() => {
                    tracing::warn!("No text content at {}", url);
                }
                Ok(doc) => {
                    tracing::debug!("Fetched {} ({} chars)", url, doc.text.chars().count());
                    documents.push(doc);
                }
                Err(err) => {
                    tracing::warn!("Failed to fetch {}: {}", url, err);
                }
            }
        }

        tracing::info!("Fetched {}/{} articles", documents.len(), urls.len());
        Ok(documents)
    }
}

/// Reduce an HTML page to its visible text.
///
/// Drops `<script>` and `<style>` blocks wholesale, strips the remaining
/// tags, and collapses blank lines. Good enough for article prose; this is
/// not a general HTML parser.
fn strip_html(html: &str) -> String {
    let without_scripts = drop_element(html, "script");
    let without_styles = drop_element(&without_scripts, "style");

    let mut text = String::with_capacity(without_styles.len());
    let mut in_tag = false;

    for c in without_styles.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                // tag boundaries separate words in rendered output
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let lines: Vec<String> = text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

/// Remove every `<name ...>...</name>` block, case-insensitively.
fn drop_element(html: &str, name: &str) -> String {
    let open = format!("<{}", name);
    let close = format!("</{}>", name);
    // ASCII lowering keeps byte offsets aligned with the original
    let lower = html.to_ascii_lowercase();

    let mut result = String::with_capacity(html.len());
    let mut pos = 0;

    while let Some(start) = lower[pos..].find(&open) {
        let start = pos + start;
        result.push_str(&html[pos..start]);

        match lower[start..].find(&close) {
            Some(end) => pos = start + end + close.len(),
            None => {
                // unterminated block, discard the rest
                return result;
            }
        }
    }

    result.push_str(&html[pos..]);
    result
}
