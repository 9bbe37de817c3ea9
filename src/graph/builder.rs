//! Two-phase co-occurrence graph construction.
//!
//! Phase 1 links the seed keyword to every other distinct token of each
//! title that mentions it, counting one mention per qualifying article.
//! Phase 2 expands each first-hop token by linking it to the other tokens
//! of every title that mentions *it*, skipping the seed. The expansion is
//! deliberately bounded: no third hop, and no counts for second-hop links.

use super::KeywordGraph;
use crate::corpus::Article;
use crate::text::{KeywordExtractor, TextResult, Token};
use indexmap::IndexSet;

/// Build the co-occurrence graph for `seed` over the article set.
///
/// Title token sequences are extracted once upfront and reused by both
/// phases; a tokenizer failure aborts the build with no partial graph.
/// A seed absent from every title yields an empty graph, which is a valid
/// terminal state rather than an error.
pub fn build(
    articles: &[Article],
    seed: &str,
    extractor: &KeywordExtractor<'_>,
) -> TextResult<KeywordGraph> {
    let batches = extractor.extract_all(articles.iter().map(|a| a.title.as_str()))?;

    // First occurrences only: repeated tokens within one title must not
    // inflate mention counts, and edge insertion is idempotent anyway.
    let titles: Vec<IndexSet<Token>> = batches
        .into_iter()
        .map(|tokens| tokens.into_iter().collect())
        .collect();

    let mut graph = KeywordGraph::new();

    // Phase 1: first hop. One mention per qualifying article per token.
    for title in &titles {
        if !title.contains(seed) {
            continue;
        }
        for other in title {
            if other != seed {
                graph.add_edge(seed, other);
                graph.record_mention(other);
            }
        }
    }

    // Phase 2: second hop, in first-hop discovery order. Every first-hop
    // token participates regardless of its count. No new counts here.
    let first_hop: Vec<Token> = graph.mention_counts().keys().cloned().collect();
    for hop in &first_hop {
        for title in &titles {
            if !title.contains(hop) {
                continue;
            }
            for sub in title {
                if sub != hop && sub != seed {
                    graph.add_edge(hop, sub);
                }
            }
        }
    }

    tracing::debug!(
        seed,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        first_hop = first_hop.len(),
        "co-occurrence graph built"
    );
    Ok(graph)
}
