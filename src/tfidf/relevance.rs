//! Cosine similarity between a query and an indexed document.

use crate::error::RankError;

use super::engine::TfIdfEngine;

/// Scores query relevance against one immutable [`TfIdfEngine`].
///
/// The query is treated as a document for term-frequency purposes but never
/// enters the corpus statistics: its term weights are built from the
/// engine's precomputed IDF table, with terms unknown to the corpus
/// contributing a weight of 0 (they still belong to the query's own norm,
/// as zeroes).
#[derive(Debug, Clone, Copy)]
pub struct RelevanceScorer<'a> {
    engine: &'a TfIdfEngine,
}

impl<'a> RelevanceScorer<'a> {
    /// Borrow an engine for scoring.
    pub fn new(engine: &'a TfIdfEngine) -> Self {
        Self { engine }
    }

    /// Cosine similarity in [0, 1] between `query` and document `id`.
    ///
    /// One pass over the distinct query terms accumulates the dot product
    /// and the query's squared norm; the document's squared norm was
    /// precomputed at indexing time. Returns exactly `0.0` when either
    /// vector is entirely zero-weight.
    pub fn relevance(&self, query: &[String], id: &str) -> Result<f64, RankError> {
        let vector = self.engine.document_vector(id)?;
        let query_tf = TfIdfEngine::term_frequencies(query);

        let mut numerator = 0.0;
        let mut query_norm_squared = 0.0;
        for (term, tf) in query_tf.iter() {
            let query_weight = match self.engine.idf(term.as_str()) {
                Some(idf) => tf * idf,
                None => 0.0,
            };
            numerator += query_weight * vector.weight(term.as_str());
            query_norm_squared += query_weight * query_weight;
        }

        let denominator = vector.norm_squared().sqrt() * query_norm_squared.sqrt();
        if denominator == 0.0 {
            Ok(0.0)
        } else {
            Ok(numerator / denominator)
        }
    }
}
