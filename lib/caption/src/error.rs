use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptionError {
    #[error("Invalid image reference: {0}")]
    InvalidImage(String),

    #[error("Captioning unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to fetch image {url}: HTTP {status}")]
    Fetch { url: String, status: u16 },

    #[error("Captioning provider error {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Captioning provider returned no text")]
    EmptyResponse,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CaptionError>;
