//! # Lookalike Core
//!
//! Core library for the lookalike visual product matcher.
//!
//! This crate provides the scoring pipeline:
//!
//! - [`Taxonomy`] - Ordered keyword categories with weight tiers
//! - [`Encoder`] - Turns a free-text image description into a [`Signature`]
//! - [`Ranker`] - Cosine-ranks a catalog snapshot against a query signature
//!
//! ## Example
//!
//! ```rust
//! use lookalike_core::{Category, Encoder, Ranker, Signature, Taxonomy, WeightTier};
//! use std::sync::Arc;
//!
//! let taxonomy = Arc::new(Taxonomy::new(vec![
//!     Category::new("shoes", WeightTier::ProductType, ["shoes", "sneakers"]),
//!     Category::new("jacket", WeightTier::ProductType, ["jacket"]),
//!     Category::new("color", WeightTier::Color, ["red", "white"]),
//! ]).unwrap());
//!
//! let encoder = Encoder::new(taxonomy.clone());
//! let query = encoder.encode("red sneakers, leather jacket");
//! assert_eq!(query.as_slice(), &[3.0, 3.0, 1.5]);
//!
//! let corpus = vec![
//!     ("White Sneakers", encoder.encode("white sneakers, canvas")),
//!     ("Denim Jacket", encoder.encode("blue denim jacket")),
//! ];
//! let ranker = Ranker::new(taxonomy);
//! let results = ranker.rank(&query, corpus, 10);
//! assert_eq!(results.len(), 2);
//! ```

pub mod error;
pub mod taxonomy;
pub mod matcher;
pub mod encoder;
pub mod signature;
pub mod ranker;
mod reference;

/// Dot product, magnitude and cosine over plain slices
pub mod numeric;

pub use error::{Error, Result};
pub use taxonomy::{Category, Taxonomy, TaxonomyDefinition, WeightTier};
pub use matcher::KeywordMatcher;
pub use encoder::{CategoryHit, Encoder};
pub use signature::Signature;
pub use ranker::{Ranker, ScoredItem};
