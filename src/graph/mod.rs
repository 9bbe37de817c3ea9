//! Keyword co-occurrence graph.
//!
//! An undirected graph over normalized keyword tokens. Edge presence is
//! boolean (no parallel edges, no self-loops); node and edge iteration
//! order is first-insertion order, which keeps rebuilds of the same input
//! byte-for-byte reproducible.

pub mod builder;
pub mod rank;

pub use builder::build;
pub use rank::{node_sizes, ranked_nodes, BASE_NODE_SIZE, RANKED_NODE_COUNT};

use crate::text::Token;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Co-occurrence graph anchored on a seed keyword.
///
/// `mention_counts` covers first-hop tokens only: the number of articles
/// whose title contains both the seed and that token. Second-hop tokens
/// appear as nodes but never in the counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordGraph {
    nodes: IndexSet<Token>,
    edges: IndexSet<(Token, Token)>,
    mention_counts: IndexMap<Token, usize>,
}

impl KeywordGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an undirected edge, creating both endpoint nodes.
    ///
    /// Self-loops are rejected; re-inserting an existing edge in either
    /// orientation is a no-op.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        self.nodes.insert(a.to_owned());
        self.nodes.insert(b.to_owned());
        // Canonical orientation so (a, b) and (b, a) collapse.
        let pair = if a <= b {
            (a.to_owned(), b.to_owned())
        } else {
            (b.to_owned(), a.to_owned())
        };
        self.edges.insert(pair);
    }

    pub(crate) fn record_mention(&mut self, token: &str) {
        if let Some(count) = self.mention_counts.get_mut(token) {
            *count += 1;
        } else {
            self.mention_counts.insert(token.to_owned(), 1);
        }
    }

    pub fn contains_node(&self, token: &str) -> bool {
        self.nodes.contains(token)
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        if a <= b {
            self.edges.contains(&(a.to_owned(), b.to_owned()))
        } else {
            self.edges.contains(&(b.to_owned(), a.to_owned()))
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in first-insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Token> {
        self.nodes.iter()
    }

    /// Position of a node in insertion order, if present.
    pub fn node_index(&self, token: &str) -> Option<usize> {
        self.nodes.get_index_of(token)
    }

    /// Undirected edges in first-insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&Token, &Token)> {
        self.edges.iter().map(|(a, b)| (a, b))
    }

    /// First-hop article counts in discovery order.
    pub fn mention_counts(&self) -> &IndexMap<Token, usize> {
        &self.mention_counts
    }

    /// Number of edges incident to a node.
    pub fn degree(&self, token: &str) -> usize {
        self.edges
            .iter()
            .filter(|(a, b)| a == token || b == token)
            .count()
    }

    /// Adjacency-list interchange form:
    /// `{"nodes": [...], "edges": [[a, b], ...], "mention_counts": {...}}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "nodes": self.nodes,
            "edges": self.edges.iter().map(|(a, b)| [a, b]).collect::<Vec<_>>(),
            "mention_counts": self.mention_counts,
        })
    }
}

impl Serialize for KeywordGraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
