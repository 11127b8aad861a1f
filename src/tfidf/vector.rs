//! Sparse TF-IDF weight vector for a single document.

use crate::collections::ChainedHashMap;

/// A document's term-weight vector with its precomputed squared Euclidean
/// norm. The norm is stored at construction so cosine similarity never
/// recomputes it per query.
#[derive(Debug, Clone)]
pub struct DocumentVector {
    weights: ChainedHashMap<String, f64>,
    norm_squared: f64,
}

impl DocumentVector {
    pub(crate) fn new(weights: ChainedHashMap<String, f64>) -> Self {
        let norm_squared = weights.values().map(|w| w * w).sum();
        Self {
            weights,
            norm_squared,
        }
    }

    /// The TF-IDF weight of `term` in this document, 0 if absent.
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Sum of squared weights over all terms in the vector.
    pub fn norm_squared(&self) -> f64 {
        self.norm_squared
    }

    /// Number of distinct terms with a weight.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check whether the vector has no weighted terms.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over `(term, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, f64)> {
        self.weights.iter().map(|(t, w)| (t, *w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(entries: &[(&str, f64)]) -> DocumentVector {
        let mut weights = ChainedHashMap::new();
        for (term, w) in entries {
            weights.insert(term.to_string(), *w);
        }
        DocumentVector::new(weights)
    }

    #[test]
    fn test_norm_squared_is_sum_of_squares() {
        let v = vector(&[("a", 3.0), ("b", 4.0)]);
        assert!((v.norm_squared() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_term_has_zero_weight() {
        let v = vector(&[("a", 1.0)]);
        assert_eq!(v.weight("b"), 0.0);
        assert!((v.weight("a") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_vector() {
        let v = vector(&[]);
        assert!(v.is_empty());
        assert_eq!(v.norm_squared(), 0.0);
    }
}
