//! # lookalike
//!
//! Visual product matching: find catalog items that look like a query image.
//!
//! An image is captioned into comma-separated text, the text is encoded into a
//! taxonomy signature (one weighted keyword count per category), and the
//! catalog is ranked by cosine similarity to that signature. Every dimension
//! is a named category, so a match can always be explained.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! GOOGLE_API_KEY=... lookalike --http-port 5000 --seed-file data/seed_products.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use lookalike::prelude::*;
//! use std::sync::Arc;
//!
//! let taxonomy = Arc::new(Taxonomy::reference().unwrap());
//! let catalog = Catalog::in_memory(Encoder::new(taxonomy.clone()));
//! catalog
//!     .add(NewItem::new("White Sneakers", "Footwear", "https://img/1.jpg", "white sneakers, canvas"))
//!     .unwrap();
//!
//! let query = catalog.encoder().encode("white canvas shoes");
//! let results = Ranker::new(taxonomy).rank(&query, catalog.snapshot(), 5);
//! assert_eq!(results[0].item.name, "White Sneakers");
//! ```
//!
//! ## Crate Structure
//!
//! - `lookalike-core` - taxonomy registry, encoder, ranker
//! - `lookalike-catalog` - catalog store with signature persistence
//! - `lookalike-caption` - image captioning clients
//! - `lookalike-api` - search service and REST API

// Re-export core types
pub use lookalike_core::{
    Category, CategoryHit, Encoder, Error, Ranker, Result, ScoredItem, Signature, Taxonomy,
    TaxonomyDefinition, WeightTier,
};

// Re-export catalog
pub use lookalike_catalog::{Catalog, CatalogItem, NewItem};

// Re-export captioning
pub use lookalike_caption::{
    CaptionError, Captioner, FixedCaptioner, GeminiCaptioner, GeminiConfig, ImageSource,
    UnavailableCaptioner,
};

// Re-export API
pub use lookalike_api::{NewProduct, RestApi, SearchEngine, SearchOutcome};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, CatalogItem, Category, Captioner, Encoder, Error, ImageSource, NewItem, Ranker,
        Result, ScoredItem, SearchEngine, Signature, Taxonomy, WeightTier,
    };
}
