//! Search engine facade: build once, query many times.
//!
//! [`SearchEngine::new`] validates the configuration, builds the link
//! graph, solves PageRank (the graph is dropped as soon as the scores
//! exist), and indexes the corpus for TF-IDF. Afterwards the engine is
//! read-only: lookups and searches never mutate it, which is what makes
//! the parallel scoring path sound.

use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

use crate::error::RankError;
use crate::graph::DocumentGraph;
use crate::pagerank::{PageRankSolver, RankScores};
use crate::selection::top_k_sort;
use crate::tfidf::{RelevanceScorer, TfIdfEngine};
use crate::types::{Corpus, RankConfig};

/// Corpora below this size are scored sequentially; the rayon fan-out only
/// pays for itself on larger ones.
const PARALLEL_THRESHOLD: usize = 512;

/// A document with its combined query score, orderable by score with a
/// deterministic identifier tie-break.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDocument {
    /// The document identifier.
    pub id: String,
    /// Combined relevance-and-importance score.
    pub score: f64,
}

impl PartialEq for ScoredDocument {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredDocument {}

impl PartialOrd for ScoredDocument {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredDocument {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Both ranking signals over one fixed corpus.
#[derive(Debug)]
pub struct SearchEngine {
    ranks: RankScores,
    tfidf: TfIdfEngine,
}

impl SearchEngine {
    /// Build the engine for `corpus` with the given solver configuration.
    pub fn new(corpus: &Corpus, config: &RankConfig) -> Result<Self, RankError> {
        config.validate()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(documents = corpus.len(), "building search engine");

        let graph = DocumentGraph::from_corpus(corpus);
        let ranks = PageRankSolver::from_config(config).solve(&graph);
        // The graph has served its purpose; only the scores survive.
        drop(graph);

        let tfidf = TfIdfEngine::from_corpus(corpus);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            iterations = ranks.iterations,
            converged = ranks.converged,
            "link analysis finished"
        );

        Ok(Self { ranks, tfidf })
    }

    /// Link-graph importance of document `id`.
    pub fn page_rank(&self, id: &str) -> Result<f64, RankError> {
        self.ranks.score(id)
    }

    /// Cosine relevance of document `id` to `query`, in [0, 1].
    pub fn relevance(&self, query: &[String], id: &str) -> Result<f64, RankError> {
        RelevanceScorer::new(&self.tfidf).relevance(query, id)
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.tfidf.document_count()
    }

    /// The PageRank solve metadata (iterations performed, convergence).
    pub fn rank_scores(&self) -> &RankScores {
        &self.ranks
    }

    /// Score every document against `query` and return the best `k`,
    /// highest first.
    ///
    /// Each document's score is its cosine relevance multiplied by its
    /// PageRank importance. Scoring reads only immutable state, so large
    /// corpora are scored in parallel.
    pub fn search(&self, query: &[String], k: usize) -> Vec<ScoredDocument> {
        let scorer = RelevanceScorer::new(&self.tfidf);
        let ids: Vec<&String> = self.tfidf.document_ids().collect();

        let score_one = |id: &&String| -> ScoredDocument {
            // Both lookups are for ids the engine itself produced.
            let relevance = scorer.relevance(query, id).unwrap_or(0.0);
            let importance = self.ranks.score(id).unwrap_or(0.0);
            ScoredDocument {
                id: (*id).clone(),
                score: relevance * importance,
            }
        };

        let scored: Vec<ScoredDocument> = if ids.len() < PARALLEL_THRESHOLD {
            ids.iter().map(score_one).collect()
        } else {
            ids.par_iter().map(score_one).collect()
        };

        let mut top = top_k_sort(k, scored);
        top.reverse();
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Document;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn doc(id: &str, words: &[&str], links: &[&str]) -> Document {
        Document::new(id, terms(words), terms(links))
    }

    fn two_page_corpus() -> Corpus {
        Corpus::new(vec![
            doc("a", &["alpha", "shared"], &["b"]),
            doc("b", &["beta", "shared"], &["a"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_two_page_end_to_end() {
        let engine =
            SearchEngine::new(&two_page_corpus(), &RankConfig::default()).unwrap();

        assert!((engine.page_rank("a").unwrap() - 0.5).abs() < 1e-4);
        assert!((engine.page_rank("b").unwrap() - 0.5).abs() < 1e-4);
        assert_eq!(engine.document_count(), 2);
        assert!(engine.rank_scores().converged);
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let cfg = RankConfig {
            decay: 1.5,
            ..RankConfig::default()
        };
        let err = SearchEngine::new(&two_page_corpus(), &cfg).unwrap_err();
        assert!(matches!(err, RankError::InvalidArgument(_)));
    }

    #[test]
    fn test_unknown_id_queries_fail() {
        let engine =
            SearchEngine::new(&two_page_corpus(), &RankConfig::default()).unwrap();

        assert!(matches!(
            engine.page_rank("zzz"),
            Err(RankError::KeyNotFound(_))
        ));
        assert!(matches!(
            engine.relevance(&terms(&["alpha"]), "zzz"),
            Err(RankError::KeyNotFound(_))
        ));
    }

    #[test]
    fn test_search_prefers_matching_document() {
        let engine =
            SearchEngine::new(&two_page_corpus(), &RankConfig::default()).unwrap();

        let results = engine.search(&terms(&["alpha"]), 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "a");
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_search_k_zero_and_k_overlarge() {
        let engine =
            SearchEngine::new(&two_page_corpus(), &RankConfig::default()).unwrap();

        assert!(engine.search(&terms(&["alpha"]), 0).is_empty());
        assert_eq!(engine.search(&terms(&["alpha"]), 10).len(), 2);
    }

    #[test]
    fn test_search_results_are_descending() {
        let corpus = Corpus::new(vec![
            doc("a", &["rust", "graph"], &["b", "c"]),
            doc("b", &["rust"], &["c"]),
            doc("c", &["graph", "rust", "rank"], &["a"]),
            doc("d", &["unrelated"], &[]),
        ])
        .unwrap();
        let engine = SearchEngine::new(&corpus, &RankConfig::default()).unwrap();

        let results = engine.search(&terms(&["rust", "graph"]), 4);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // The document sharing no query terms scores zero.
        let last = results.last().unwrap();
        assert_eq!(last.id, "d");
        assert_eq!(last.score, 0.0);
    }

    #[test]
    fn test_empty_corpus_engine() {
        let corpus = Corpus::new(vec![]).unwrap();
        let engine = SearchEngine::new(&corpus, &RankConfig::default()).unwrap();

        assert_eq!(engine.document_count(), 0);
        assert!(engine.search(&terms(&["anything"]), 5).is_empty());
    }

    #[test]
    fn test_scored_document_ordering() {
        let low = ScoredDocument {
            id: "x".into(),
            score: 0.1,
        };
        let high = ScoredDocument {
            id: "y".into(),
            score: 0.9,
        };
        assert!(high > low);

        // Equal scores break ties by identifier for determinism.
        let a = ScoredDocument {
            id: "a".into(),
            score: 0.5,
        };
        let b = ScoredDocument {
            id: "b".into(),
            score: 0.5,
        };
        assert!(b > a);
    }

    #[test]
    fn test_scored_document_serializes() {
        let result = ScoredDocument {
            id: "a".into(),
            score: 0.25,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["id"], "a");
        assert_eq!(json["score"], 0.25);
    }
}
