//! Power-iteration PageRank solver.
//!
//! Each iteration redistributes the current scores along outbound edges,
//! spreads dangling-node mass uniformly over the whole corpus, and adds the
//! uniform teleportation term. Iteration stops when no document's score
//! moved by more than the tolerance, or at the iteration limit.
//!
//! A dangling node's redistributed mass includes the node itself as a
//! target, so it can receive a fraction of its own mass back within the
//! same iteration. This is a deliberate modeling choice — the random surfer
//! teleports uniformly over the corpus, self included — and changing it
//! would change the converged values.

use super::RankScores;
use crate::collections::ChainedHashMap;
use crate::graph::DocumentGraph;
use crate::types::RankConfig;

/// Iterative fixed-point PageRank solver.
#[derive(Debug, Clone)]
pub struct PageRankSolver {
    /// Damping factor (probability of following a link vs. teleporting).
    pub decay: f64,
    /// Absolute per-document convergence tolerance.
    pub epsilon: f64,
    /// Maximum number of iterations.
    pub limit: usize,
}

impl Default for PageRankSolver {
    fn default() -> Self {
        let cfg = RankConfig::default();
        Self {
            decay: cfg.decay,
            epsilon: cfg.epsilon,
            limit: cfg.limit,
        }
    }
}

impl PageRankSolver {
    /// Create a solver with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver from a (validated) configuration.
    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            decay: config.decay,
            epsilon: config.epsilon,
            limit: config.limit,
        }
    }

    /// Set the damping factor.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the iteration limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Run power iteration on `graph`.
    ///
    /// On convergence the *previous* vector is returned — the last one
    /// validated as stable within tolerance. If the limit is reached first,
    /// the last computed vector is returned with `converged = false`.
    pub fn solve(&self, graph: &DocumentGraph) -> RankScores {
        let n = graph.node_count();
        if n == 0 {
            return RankScores::new(ChainedHashMap::new(), 0, true);
        }

        let n_f = n as f64;
        let teleport = (1.0 - self.decay) / n_f;

        let mut current = ChainedHashMap::with_capacity(n);
        for (id, _) in graph.iter() {
            current.insert(id.clone(), 1.0 / n_f);
        }

        for iteration in 1..=self.limit {
            let mut next = ChainedHashMap::with_capacity(n);
            for (id, _) in graph.iter() {
                next.insert(id.clone(), 0.0);
            }

            // Redistribute each source's mass along its outbound edges, or
            // uniformly over the whole corpus when it has none.
            for (source, targets) in graph.iter() {
                let rank = current.get(source.as_str()).copied().unwrap_or(0.0);
                if targets.is_empty() {
                    let share = self.decay * rank / n_f;
                    for (id, _) in graph.iter() {
                        if let Some(score) = next.get_mut(id.as_str()) {
                            *score += share;
                        }
                    }
                } else {
                    let share = self.decay * rank / targets.len() as f64;
                    for target in targets.iter() {
                        if let Some(score) = next.get_mut(target.as_str()) {
                            *score += share;
                        }
                    }
                }
            }

            // Teleportation term, then the per-document convergence check
            // against the vector we started the iteration from.
            let mut converged = true;
            for (id, _) in graph.iter() {
                if let Some(score) = next.get_mut(id.as_str()) {
                    *score += teleport;
                    let old = current.get(id.as_str()).copied().unwrap_or(0.0);
                    if (*score - old).abs() > self.epsilon {
                        converged = false;
                    }
                }
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(iteration, converged, "power iteration step");

            if converged {
                // `current` is the vector the new one matched within
                // tolerance; it is the stable answer.
                return RankScores::new(current, iteration, true);
            }
            current = next;
        }

        RankScores::new(current, self.limit, false)
    }
}
