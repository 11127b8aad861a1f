//! Adjacency-map graph representation and query interface.

use crate::collections::{ChainedHashMap, ChainedHashSet};
use crate::types::Corpus;

/// A directed, unweighted link graph in adjacency form.
///
/// Every corpus document appears as a node; a document with no surviving
/// outbound links (a dangling node) maps to an empty target set. Every
/// target set element is itself a corpus member, no edge points from a node
/// to itself, and duplicate links are collapsed to a single edge.
#[derive(Debug, Clone)]
pub struct DocumentGraph {
    adjacency: ChainedHashMap<String, ChainedHashSet<String>>,
}

impl DocumentGraph {
    /// Build the graph for a corpus. See [`super::builder::build`].
    pub fn from_corpus(corpus: &Corpus) -> Self {
        super::builder::build(corpus)
    }

    pub(crate) fn from_adjacency(
        adjacency: ChainedHashMap<String, ChainedHashSet<String>>,
    ) -> Self {
        Self { adjacency }
    }

    /// Number of nodes (one per corpus document).
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Check whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Check whether `id` is a node of this graph.
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// The outbound edge set for `id`, if it is a node.
    pub fn out_links(&self, id: &str) -> Option<&ChainedHashSet<String>> {
        self.adjacency.get(id)
    }

    /// Iterate over every node and its outbound edge set.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ChainedHashSet<String>)> {
        self.adjacency.iter()
    }
}
