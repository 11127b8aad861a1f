//! Graph construction from a corpus.
//!
//! Builds the closed-world adjacency map: links to identifiers outside the
//! corpus are silently dropped, self-links are discarded, and repeated
//! links collapse to a single edge.

use crate::collections::{ChainedHashMap, ChainedHashSet};
use crate::types::Corpus;

use super::adjacency::DocumentGraph;

/// Convert a corpus into a self-contained [`DocumentGraph`].
pub fn build(corpus: &Corpus) -> DocumentGraph {
    let mut all_ids = ChainedHashSet::with_capacity(corpus.len());
    for doc in corpus.iter() {
        all_ids.insert(doc.id.clone());
    }

    let mut adjacency = ChainedHashMap::with_capacity(corpus.len());
    for doc in corpus.iter() {
        let mut targets = ChainedHashSet::new();
        for link in &doc.links {
            if all_ids.contains(link.as_str()) && *link != doc.id {
                targets.insert(link.clone());
            }
        }
        adjacency.insert(doc.id.clone(), targets);
    }

    DocumentGraph::from_adjacency(adjacency)
}
