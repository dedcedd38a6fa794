//! Search service and REST surface for lookalike

pub mod rest;
pub mod search;

pub use rest::RestApi;
pub use search::{NewProduct, SearchEngine, SearchOutcome, DEFAULT_TOP_K};
