//! Core input types: documents, the corpus, and solver configuration.
//!
//! A [`Document`] is the unit handed over by the acquisition layer: an
//! opaque identifier, its tokenized text, and the identifiers it links to.
//! A [`Corpus`] is a finite, immutable collection of documents unique by
//! identifier. [`RankConfig`] carries the PageRank solver parameters.

use serde::{Deserialize, Serialize};

use crate::collections::ChainedHashSet;
use crate::error::RankError;

/// A parsed document: identifier, ordered terms, ordered outbound links.
///
/// Documents are immutable once handed to the engine. The identifier is
/// opaque to the core — in practice a URI — and must be unique per corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier within the corpus.
    pub id: String,
    /// The document's text as an ordered sequence of terms.
    pub terms: Vec<String>,
    /// Identifiers of documents this one links to, in occurrence order.
    pub links: Vec<String>,
}

impl Document {
    /// Create a document from its identifier, terms, and outbound links.
    pub fn new(
        id: impl Into<String>,
        terms: Vec<String>,
        links: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            terms,
            links,
        }
    }
}

/// A finite, read-only collection of documents, unique by identifier.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Build a corpus, rejecting duplicate document identifiers.
    pub fn new(documents: Vec<Document>) -> Result<Self, RankError> {
        let mut seen = ChainedHashSet::with_capacity(documents.len());
        for doc in &documents {
            if !seen.insert(doc.id.clone()) {
                return Err(RankError::InvalidArgument(format!(
                    "duplicate document id: {}",
                    doc.id
                )));
            }
        }
        Ok(Self { documents })
    }

    /// Number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check whether the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over the documents.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }
}

/// PageRank solver parameters.
///
/// `decay` is the probability the random surfer follows an outbound link
/// rather than teleporting; `epsilon` is the absolute per-document
/// convergence tolerance; `limit` caps the number of power iterations as a
/// safety valve against non-convergence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankConfig {
    /// Damping factor, must lie strictly inside (0, 1).
    pub decay: f64,
    /// Absolute convergence tolerance per document score, must be positive.
    pub epsilon: f64,
    /// Maximum number of iterations, must be at least 1.
    pub limit: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            decay: 0.85,
            epsilon: 1e-6,
            limit: 100,
        }
    }
}

impl RankConfig {
    /// Check every parameter against its accepted range.
    pub fn validate(&self) -> Result<(), RankError> {
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(RankError::InvalidArgument(format!(
                "decay must lie in (0, 1), got {}",
                self.decay
            )));
        }
        if !(self.epsilon > 0.0) {
            return Err(RankError::InvalidArgument(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if self.limit == 0 {
            return Err(RankError::InvalidArgument(
                "limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
