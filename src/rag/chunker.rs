//! Document chunking.
//!
//! Splits article text into overlapping character windows, preferring to cut
//! at a sentence boundary near the end of each window. Window starts advance
//! by `chunk_size - chunk_overlap` regardless of where the cut landed, so
//! offsets stay regular and consecutive chunks overlap by the configured
//! amount.

use serde::{Deserialize, Serialize};

use crate::core::config::ChunkingConfig;
use crate::ingest::Document;

/// A bounded excerpt of one source article; the unit stored in the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub text: String,
    pub source_url: String,
    pub chunk_index: usize,
    pub start_offset: usize,
}

/// Split every document into chunks, tagging each with its source URL.
///
/// Empty documents contribute nothing; a document shorter than the chunk
/// size yields exactly one chunk holding the full text.
pub fn split_documents(documents: &[Document], config: &ChunkingConfig) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    for document in documents {
        split_text(&document.text, &document.url, config, &mut chunks);
    }
    chunks
}

fn split_text(text: &str, source_url: &str, config: &ChunkingConfig, out: &mut Vec<Chunk>) {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();
    if total == 0 {
        return;
    }

    let step = config.chunk_size.saturating_sub(config.chunk_overlap).max(1);
    let mut start = 0;
    let mut chunk_index = 0;

    while start < total {
        let end = (start + config.chunk_size).min(total);
        let window: String = chars[start..end].iter().collect();

        // only trim to a sentence boundary mid-document; the final window
        // must keep the tail text intact
        let chunk_text = if end < total {
            cut_at_sentence_boundary(window)
        } else {
            window
        };

        out.push(Chunk {
            id: uuid::Uuid::new_v4().to_string(),
            text: chunk_text,
            source_url: source_url.to_string(),
            chunk_index,
            start_offset: start,
        });

        if end >= total {
            break;
        }
        start += step;
        chunk_index += 1;
    }
}

/// Cut the window at the last sentence ending in its final 20%, if any.
fn cut_at_sentence_boundary(window: String) -> String {
    const ENDINGS: [&str; 6] = [". ", "! ", "? ", ".\n", "!\n", "?\n"];

    let search_start = (window.len() * 80) / 100;
    let search_start = ceil_char_boundary(&window, search_start);
    let tail = &window[search_start..];

    let cut = ENDINGS
        .iter()
        .filter_map(|ending| tail.rfind(ending).map(|pos| pos + ending.len()))
        .max();

    match cut {
        Some(pos) => window[..search_start + pos].to_string(),
        None => window,
    }
}

fn ceil_char_boundary(s: &str, mut idx: usize) -> usize {
    while idx < s.len() && !s.is_char_boundary(idx) {
        idx += 1;
    }
    idx.min(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(chunk_size: usize, chunk_overlap: usize) -> ChunkingConfig {
        ChunkingConfig {
            chunk_size,
            chunk_overlap,
        }
    }

    fn doc(url: &str, text: &str) -> Document {
        Document {
            url: url.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn short_document_yields_one_full_chunk() {
        let docs = [doc("https://a.example", "Folic acid is important in early pregnancy.")];
        let chunks = split_documents(&docs, &config(1000, 200));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, docs[0].text);
        assert_eq!(chunks[0].source_url, "https://a.example");
        assert_eq!(chunks[0].start_offset, 0);
    }

    #[test]
    fn empty_document_yields_no_chunks() {
        let docs = [doc("https://a.example", "")];
        assert!(split_documents(&docs, &config(1000, 200)).is_empty());
    }

    #[test]
    fn windows_advance_by_size_minus_overlap() {
        // 2500 chars with no sentence endings, size 1000 / overlap 200
        let docs = [doc("https://a.example", &"x".repeat(2500))];
        let chunks = split_documents(&docs, &config(1000, 200));

        assert_eq!(chunks.len(), 3);
        let offsets: Vec<usize> = chunks.iter().map(|c| c.start_offset).collect();
        assert_eq!(offsets, vec![0, 800, 1600]);
        assert_eq!(chunks[0].text.chars().count(), 1000);
        assert_eq!(chunks[2].text.chars().count(), 900);
        assert!(chunks.iter().all(|c| c.source_url == "https://a.example"));
    }

    #[test]
    fn chunk_indexes_are_per_document() {
        let docs = [
            doc("https://a.example", &"x".repeat(1500)),
            doc("https://b.example", "short"),
        ];
        let chunks = split_documents(&docs, &config(1000, 200));

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chunk_index, 0);
        assert_eq!(chunks[1].chunk_index, 1);
        assert_eq!(chunks[2].chunk_index, 0);
        assert_eq!(chunks[2].source_url, "https://b.example");
    }

    #[test]
    fn source_urls_never_invented() {
        let docs = [
            doc("https://a.example", &"alpha ".repeat(400)),
            doc("https://b.example", &"beta ".repeat(400)),
        ];
        let chunks = split_documents(&docs, &config(500, 100));

        assert!(chunks
            .iter()
            .all(|c| c.source_url == "https://a.example" || c.source_url == "https://b.example"));
    }

    #[test]
    fn prefers_sentence_boundary_near_window_end() {
        // one sentence ending lands inside the last 20% of the first window
        let head = "w".repeat(920);
        let text = format!("{}. {}", head, "y".repeat(600));
        let docs = [doc("https://a.example", &text)];

        let chunks = split_documents(&docs, &config(1000, 200));
        assert!(chunks.len() >= 2);
        assert!(chunks[0].text.ends_with(". "));
        assert_eq!(chunks[0].text.chars().count(), 922);
        // the next window still starts at the regular step
        assert_eq!(chunks[1].start_offset, 800);
    }

    #[test]
    fn no_chunk_exceeds_configured_size() {
        let docs = [doc("https://a.example", &"sentence one. ".repeat(300))];
        let chunks = split_documents(&docs, &config(1000, 200));

        assert!(chunks.iter().all(|c| c.text.chars().count() <= 1000));
    }
}
