//! PageRank over the document link graph.
//!
//! Power iteration with damping, uniform teleportation, and dangling-mass
//! redistribution. The solver lives in [`solver`]; [`RankScores`] is the
//! converged (or best-effort) importance vector it produces.

pub mod solver;

pub use solver::PageRankSolver;

use crate::collections::ChainedHashMap;
use crate::error::RankError;

/// Result of a PageRank computation: one non-negative score per corpus
/// document. Scores form a probability distribution (they sum to ≈ 1).
#[derive(Debug, Clone)]
pub struct RankScores {
    scores: ChainedHashMap<String, f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the per-document tolerance was met before the limit.
    pub converged: bool,
}

impl RankScores {
    pub(crate) fn new(
        scores: ChainedHashMap<String, f64>,
        iterations: usize,
        converged: bool,
    ) -> Self {
        Self {
            scores,
            iterations,
            converged,
        }
    }

    /// The importance score for `id`.
    pub fn score(&self, id: &str) -> Result<f64, RankError> {
        self.scores
            .get(id)
            .copied()
            .ok_or_else(|| RankError::KeyNotFound(id.to_string()))
    }

    /// Number of scored documents.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check whether any document was scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over `(id, score)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, f64)> {
        self.scores.iter().map(|(id, score)| (id, *score))
    }
}
