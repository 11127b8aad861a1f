//! TF-IDF vector-space model over the corpus.
//!
//! [`TfIdfEngine`] builds the global inverse-document-frequency table and
//! one sparse weight vector per document, each with a precomputed squared
//! norm. [`RelevanceScorer`] computes cosine similarity between a query and
//! any known document using that precomputed state, in time linear in the
//! number of distinct query terms. Everything is immutable after
//! construction, so concurrent scoring against one engine is safe.

pub mod engine;
pub mod relevance;
pub mod vector;

pub use engine::TfIdfEngine;
pub use relevance::RelevanceScorer;
pub use vector::DocumentVector;
