//! Relevance ranking and node size mapping.
//!
//! The rank is a size-modifier lookup over first-hop mention counts, not a
//! graph-structural centrality measure: only the top slots get enlarged,
//! everything else (the seed and second-hop tokens included) renders at
//! the flat baseline.

use super::KeywordGraph;
use crate::text::Token;
use indexmap::IndexMap;

/// How many top-mentioned tokens receive an enlarged size.
pub const RANKED_NODE_COUNT: usize = 10;

/// Flat size for unranked nodes.
pub const BASE_NODE_SIZE: u32 = 100;

/// Size offset and per-mention increment for ranked nodes.
const RANKED_SIZE_OFFSET: u32 = 300;
const RANKED_SIZE_PER_MENTION: u32 = 100;

/// The top `k` tokens by mention count.
///
/// Stable sort: ties keep discovery order, so rebuilding from the same
/// input always ranks the same tokens.
pub fn ranked_nodes(graph: &KeywordGraph, k: usize) -> IndexMap<Token, usize> {
    let mut entries: Vec<(Token, usize)> = graph
        .mention_counts()
        .iter()
        .map(|(token, &count)| (token.clone(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.into_iter().take(k).collect()
}

/// Per-node visual size, in graph node order.
///
/// Ranked nodes grow linearly with their mention count; all others sit at
/// [`BASE_NODE_SIZE`].
pub fn node_sizes(graph: &KeywordGraph) -> IndexMap<Token, u32> {
    let ranked = ranked_nodes(graph, RANKED_NODE_COUNT);
    graph
        .nodes()
        .map(|node| {
            let size = match ranked.get(node) {
                Some(&count) => RANKED_SIZE_OFFSET + RANKED_SIZE_PER_MENTION * count as u32,
                None => BASE_NODE_SIZE,
            };
            (node.clone(), size)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_counts(counts: &[(&str, usize)]) -> KeywordGraph {
        let mut graph = KeywordGraph::new();
        for (token, count) in counts {
            graph.add_edge("씨앗", token);
            for _ in 0..*count {
                graph.record_mention(token);
            }
        }
        graph
    }

    #[test]
    fn test_ranked_nodes_ordered_by_count() {
        let graph = graph_with_counts(&[("하나", 1), ("셋", 3), ("둘", 2)]);
        let ranked = ranked_nodes(&graph, 10);
        let order: Vec<&str> = ranked.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["셋", "둘", "하나"]);
    }

    #[test]
    fn test_ranked_nodes_tie_keeps_discovery_order() {
        let graph = graph_with_counts(&[("하나", 2), ("둘", 2), ("셋", 2)]);
        let ranked = ranked_nodes(&graph, 2);
        let order: Vec<&str> = ranked.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["하나", "둘"]);
    }

    #[test]
    fn test_ranked_nodes_caps_at_k() {
        let counts: Vec<(String, usize)> = (0..15).map(|i| (format!("토큰{i}"), i + 1)).collect();
        let borrowed: Vec<(&str, usize)> =
            counts.iter().map(|(t, c)| (t.as_str(), *c)).collect();
        let graph = graph_with_counts(&borrowed);
        assert_eq!(ranked_nodes(&graph, RANKED_NODE_COUNT).len(), 10);
    }

    #[test]
    fn test_node_sizes_mapping() {
        let graph = graph_with_counts(&[("많이", 4), ("조금", 1)]);
        let sizes = node_sizes(&graph);
        assert_eq!(sizes.get("많이"), Some(&700));
        assert_eq!(sizes.get("조금"), Some(&400));
        // The seed is never in mention_counts, so it stays at baseline.
        assert_eq!(sizes.get("씨앗"), Some(&BASE_NODE_SIZE));
    }

    #[test]
    fn test_unranked_nodes_get_baseline() {
        let counts: Vec<(String, usize)> = (0..12).map(|i| (format!("토큰{i}"), 12 - i)).collect();
        let borrowed: Vec<(&str, usize)> =
            counts.iter().map(|(t, c)| (t.as_str(), *c)).collect();
        let graph = graph_with_counts(&borrowed);
        let sizes = node_sizes(&graph);
        // 토큰10 and 토큰11 fall outside the top ten.
        assert_eq!(sizes.get("토큰10"), Some(&BASE_NODE_SIZE));
        assert_eq!(sizes.get("토큰11"), Some(&BASE_NODE_SIZE));
        assert_eq!(sizes.get("토큰0"), Some(&(300 + 100 * 12)));
    }
}
