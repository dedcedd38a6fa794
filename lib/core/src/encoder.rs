//! Text-to-signature encoder
//!
//! Turns one free-text description into a [`Signature`]: for every category,
//! in taxonomy order, the number of whole-word keyword hits times the
//! category weight.

use crate::{Signature, Taxonomy};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

/// Encodes descriptions against a shared, read-only taxonomy
#[derive(Debug, Clone)]
pub struct Encoder {
    taxonomy: Arc<Taxonomy>,
}

/// Contribution of one category to a signature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryHit {
    pub category: String,
    pub count: usize,
    pub weight: f32,
    pub score: f32,
}

impl Encoder {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    #[inline]
    pub fn taxonomy(&self) -> &Arc<Taxonomy> {
        &self.taxonomy
    }

    /// Signature length produced by this encoder
    #[inline]
    pub fn dim(&self) -> usize {
        self.taxonomy.len()
    }

    /// Encode a description.
    ///
    /// Never fails: empty or unmatched text gives the all-zero signature and
    /// the caller decides whether that is a usable query.
    pub fn encode(&self, text: &str) -> Signature {
        if text.trim().is_empty() {
            return Signature::zeros(self.dim());
        }

        let text = text.to_lowercase();
        let data = self
            .taxonomy
            .categories_with_matchers()
            .map(|(category, matcher)| matcher.count(&text) as f32 * category.weight())
            .collect();

        Signature::new(data)
    }

    /// Encode many descriptions in parallel, preserving input order
    pub fn encode_batch<S>(&self, texts: &[S]) -> Vec<Signature>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.encode(t.as_ref())).collect()
    }

    /// Per-category breakdown of the non-zero dimensions of `encode(text)`
    pub fn explain(&self, text: &str) -> Vec<CategoryHit> {
        let text = text.to_lowercase();
        self.taxonomy
            .categories_with_matchers()
            .filter_map(|(category, matcher)| {
                let count = matcher.count(&text);
                (count > 0).then(|| CategoryHit {
                    category: category.name().to_string(),
                    count,
                    weight: category.weight(),
                    score: count as f32 * category.weight(),
                })
            })
            .collect()
    }
}
