//! Source deduplication.

use std::collections::HashSet;

use super::chunker::Chunk;

/// Reduce a ranked chunk list to at most `max_sources` chunks with distinct
/// source URLs, keeping the first (best-ranked) chunk per URL.
///
/// The output is a rank-preserving subsequence of the input. Showing several
/// distinct articles is deliberately favored over showing several excerpts
/// of the single best article.
pub fn dedupe_by_source(chunks: &[Chunk], max_sources: usize) -> Vec<Chunk> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for chunk in chunks {
        if kept.len() >= max_sources {
            break;
        }
        if seen.insert(chunk.source_url.as_str()) {
            kept.push(chunk.clone());
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str, url: &str) -> Chunk {
        Chunk {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.to_string(),
            source_url: url.to_string(),
            chunk_index: 0,
            start_offset: 0,
        }
    }

    #[test]
    fn keeps_first_chunk_per_url_in_rank_order() {
        let ranked = vec![
            chunk("best from a", "https://a.example"),
            chunk("best from b", "https://b.example"),
            chunk("second from a", "https://a.example"),
            chunk("best from c", "https://c.example"),
        ];

        let unique = dedupe_by_source(&ranked, 3);

        let texts: Vec<&str> = unique.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["best from a", "best from b", "best from c"]);
    }

    #[test]
    fn caps_at_max_sources() {
        let ranked = vec![
            chunk("a", "https://a.example"),
            chunk("b", "https://b.example"),
            chunk("c", "https://c.example"),
        ];

        let unique = dedupe_by_source(&ranked, 2);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].source_url, "https://a.example");
        assert_eq!(unique[1].source_url, "https://b.example");
    }

    #[test]
    fn same_source_collapses_to_top_ranked_chunk() {
        // three chunks of one long article
        let ranked = vec![
            chunk("offset 1600", "https://a.example"),
            chunk("offset 0", "https://a.example"),
            chunk("offset 800", "https://a.example"),
        ];

        let unique = dedupe_by_source(&ranked, 3);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].text, "offset 1600");
    }

    #[test]
    fn fewer_sources_than_cap_pass_through() {
        let ranked = vec![
            chunk("a", "https://a.example"),
            chunk("b", "https://b.example"),
        ];

        let unique = dedupe_by_source(&ranked, 3);
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(dedupe_by_source(&[], 3).is_empty());
    }
}
