//! Catalog store for lookalike
//!
//! Holds catalog items with the signature computed from each item's caption
//! at ingestion time, and persists them as a JSON snapshot.

pub mod item;
pub mod persistence;
pub mod store;

pub use item::{CatalogItem, NewItem};
pub use persistence::{CatalogFile, CatalogSnapshot};
pub use store::Catalog;
