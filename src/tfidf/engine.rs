//! Two-phase TF-IDF index construction.
//!
//! Phase one scans the corpus once to count, per term, how many documents
//! contain it (repeat occurrences in one document count once), then derives
//! `idf = ln(N / df)`. Phase two builds each document's weight vector from
//! its term frequencies and the global IDF table.

use crate::collections::{ChainedHashMap, ChainedHashSet};
use crate::error::RankError;
use crate::types::Corpus;

use super::vector::DocumentVector;

/// Immutable TF-IDF state for one corpus: the global IDF table plus one
/// weight vector per document.
#[derive(Debug, Clone)]
pub struct TfIdfEngine {
    idf: ChainedHashMap<String, f64>,
    vectors: ChainedHashMap<String, DocumentVector>,
}

impl TfIdfEngine {
    /// Build the IDF table and every document vector for `corpus`.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let idf = Self::compute_idf(corpus);

        let mut vectors = ChainedHashMap::with_capacity(corpus.len());
        for doc in corpus.iter() {
            let tf = Self::term_frequencies(&doc.terms);
            let mut weights = ChainedHashMap::with_capacity(tf.len());
            for (term, tf_value) in tf.iter() {
                let idf_value = idf.get(term.as_str()).copied().unwrap_or(0.0);
                weights.insert(term.clone(), tf_value * idf_value);
            }
            vectors.insert(doc.id.clone(), DocumentVector::new(weights));
        }

        Self { idf, vectors }
    }

    /// Map every term in the corpus to `ln(N / df)`.
    fn compute_idf(corpus: &Corpus) -> ChainedHashMap<String, f64> {
        let mut document_frequency: ChainedHashMap<String, usize> =
            ChainedHashMap::new();
        for doc in corpus.iter() {
            let mut counted = ChainedHashSet::with_capacity(doc.terms.len());
            for term in &doc.terms {
                // Each document bumps a term's count at most once.
                if counted.insert(term.clone()) {
                    if let Some(count) = document_frequency.get_mut(term.as_str()) {
                        *count += 1;
                    } else {
                        document_frequency.insert(term.clone(), 1);
                    }
                }
            }
        }

        let n = corpus.len() as f64;
        let mut idf = ChainedHashMap::with_capacity(document_frequency.len());
        for (term, df) in document_frequency.iter() {
            idf.insert(term.clone(), (n / *df as f64).ln());
        }
        idf
    }

    /// Map each distinct term in `terms` to `count / |terms|`, counting all
    /// occurrences. Shared by document vectors and query-side scoring.
    pub(crate) fn term_frequencies(terms: &[String]) -> ChainedHashMap<String, f64> {
        let mut counts: ChainedHashMap<String, usize> = ChainedHashMap::new();
        for term in terms {
            if let Some(count) = counts.get_mut(term.as_str()) {
                *count += 1;
            } else {
                counts.insert(term.clone(), 1);
            }
        }

        let total = terms.len() as f64;
        let mut tf = ChainedHashMap::with_capacity(counts.len());
        for (term, count) in counts.iter() {
            tf.insert(term.clone(), *count as f64 / total);
        }
        tf
    }

    /// The weight vector for document `id`.
    pub fn document_vector(&self, id: &str) -> Result<&DocumentVector, RankError> {
        self.vectors
            .get(id)
            .ok_or_else(|| RankError::KeyNotFound(id.to_string()))
    }

    /// The inverse document frequency of `term`, if the corpus contains it.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// Check whether `id` was in the constructing corpus.
    pub fn contains_document(&self, id: &str) -> bool {
        self.vectors.contains_key(id)
    }

    /// Iterate over the indexed document identifiers.
    pub fn document_ids(&self) -> impl Iterator<Item = &String> {
        self.vectors.keys()
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.vectors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Document;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn doc(id: &str, words: &[&str]) -> Document {
        Document::new(id, terms(words), vec![])
    }

    #[test]
    fn test_idf_zero_for_ubiquitous_term() {
        let corpus = Corpus::new(vec![
            doc("a", &["shared", "alpha"]),
            doc("b", &["shared", "beta"]),
        ])
        .unwrap();
        let engine = TfIdfEngine::from_corpus(&corpus);

        // A term in every document carries no signal.
        assert!(engine.idf("shared").unwrap().abs() < 1e-12);
        assert!(engine.idf("alpha").unwrap() > 0.0);

        // Hence zero weight in every vector.
        assert_eq!(engine.document_vector("a").unwrap().weight("shared"), 0.0);
        assert_eq!(engine.document_vector("b").unwrap().weight("shared"), 0.0);
    }

    #[test]
    fn test_repeat_occurrences_count_once_for_df() {
        let corpus = Corpus::new(vec![
            doc("a", &["echo", "echo", "echo"]),
            doc("b", &["other"]),
        ])
        .unwrap();
        let engine = TfIdfEngine::from_corpus(&corpus);

        // df("echo") is 1, not 3: idf = ln(2 / 1).
        assert!((engine.idf("echo").unwrap() - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_term_frequencies_use_all_occurrences() {
        let tf = TfIdfEngine::term_frequencies(&terms(&["x", "x", "y", "z"]));
        assert!((tf.get("x").unwrap() - 0.5).abs() < 1e-12);
        assert!((tf.get("y").unwrap() - 0.25).abs() < 1e-12);
        assert!((tf.get("z").unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_vector_weights_and_norm() {
        let corpus = Corpus::new(vec![
            doc("a", &["rare", "common"]),
            doc("b", &["common"]),
        ])
        .unwrap();
        let engine = TfIdfEngine::from_corpus(&corpus);

        let vector = engine.document_vector("a").unwrap();
        let expected = 0.5 * 2.0_f64.ln();
        assert!((vector.weight("rare") - expected).abs() < 1e-12);
        assert!((vector.norm_squared() - expected * expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document_gets_empty_vector() {
        let corpus =
            Corpus::new(vec![doc("a", &[]), doc("b", &["word"])]).unwrap();
        let engine = TfIdfEngine::from_corpus(&corpus);

        let vector = engine.document_vector("a").unwrap();
        assert!(vector.is_empty());
        assert_eq!(vector.norm_squared(), 0.0);
    }

    #[test]
    fn test_unknown_document_is_key_not_found() {
        let corpus = Corpus::new(vec![doc("a", &["x"])]).unwrap();
        let engine = TfIdfEngine::from_corpus(&corpus);

        assert_eq!(
            engine.document_vector("nope").unwrap_err(),
            RankError::KeyNotFound("nope".to_string())
        );
        assert!(!engine.contains_document("nope"));
        assert!(engine.contains_document("a"));
    }

    #[test]
    fn test_unknown_term_has_no_idf() {
        let corpus = Corpus::new(vec![doc("a", &["x"])]).unwrap();
        let engine = TfIdfEngine::from_corpus(&corpus);
        assert!(engine.idf("never-seen").is_none());
    }
}
