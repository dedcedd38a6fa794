use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Taxonomy has no categories")]
    EmptyTaxonomy,

    #[error("Category name cannot be blank")]
    BlankCategoryName,

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Category '{0}' has no keywords")]
    NoKeywords(String),

    #[error("Category '{category}' contains a blank keyword")]
    BlankKeyword { category: String },

    #[error("Unsupported weight tier: {0} (expected one of 1, 1.5, 2, 3, 4)")]
    InvalidWeight(f32),

    #[error("Failed to compile matcher for category '{category}': {reason}")]
    Matcher { category: String, reason: String },

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Invalid result limit: {0}")]
    InvalidLimit(usize),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
