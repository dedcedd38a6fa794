//! Similarity ranker
//!
//! Scores a query signature against a corpus snapshot with cosine similarity,
//! sorts descending and truncates to the top `k`. Pure and stateless.

use crate::{Signature, Taxonomy};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// An item with its similarity to the query, in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem<T> {
    pub item: T,
    pub similarity: f32,
}

impl<T> ScoredItem<T> {
    /// Similarity as a 0-100 percentage
    #[inline]
    pub fn percentage(&self) -> f32 {
        self.similarity * 100.0
    }
}

/// Ranks catalog signatures against a query signature
#[derive(Debug, Clone)]
pub struct Ranker {
    taxonomy: Arc<Taxonomy>,
}

impl Ranker {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Expected signature length
    #[inline]
    pub fn dim(&self) -> usize {
        self.taxonomy.len()
    }

    /// Score every `(item, signature)` pair and keep the best `k`.
    ///
    /// Zero-magnitude signatures and length mismatches (signatures stored
    /// under an older taxonomy) score exactly 0 instead of failing the pass.
    /// Ties keep corpus order. `k == 0` returns nothing.
    pub fn rank<T, S, I>(&self, query: &Signature, corpus: I, k: usize) -> Vec<ScoredItem<T>>
    where
        I: IntoIterator<Item = (T, S)>,
        S: AsRef<Signature>,
    {
        let mut stale = 0usize;
        let mut scored: Vec<ScoredItem<T>> = corpus
            .into_iter()
            .map(|(item, signature)| {
                let signature = signature.as_ref();
                if signature.dim() != self.dim() {
                    stale += 1;
                }
                ScoredItem {
                    item,
                    similarity: query.cosine_similarity(signature),
                }
            })
            .collect();

        if stale > 0 {
            warn!(
                "{} of {} signatures do not match the taxonomy dimension {}; they score 0 until re-encoded",
                stale,
                scored.len(),
                self.dim()
            );
        }

        // sort_by is stable, so equal scores keep corpus order
        scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        scored.truncate(k);
        scored
    }
}
