use crate::{CaptionError, ImageSource, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// Turns an image into a comma-separated description
#[async_trait]
pub trait Captioner: Send + Sync {
    async fn describe(&self, image: &ImageSource) -> Result<String>;

    /// Provider name for logs and health output
    fn name(&self) -> &str;
}

/// Returns canned captions, keyed by remote URL with a fallback
#[derive(Debug, Clone, Default)]
pub struct FixedCaptioner {
    fallback: String,
    by_url: HashMap<String, String>,
}

impl FixedCaptioner {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            by_url: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_caption(mut self, url: impl Into<String>, caption: impl Into<String>) -> Self {
        self.by_url.insert(url.into(), caption.into());
        self
    }
}

#[async_trait]
impl Captioner for FixedCaptioner {
    async fn describe(&self, image: &ImageSource) -> Result<String> {
        let caption = match image {
            ImageSource::Remote(url) => self.by_url.get(url).unwrap_or(&self.fallback),
            ImageSource::Inline { .. } => &self.fallback,
        };
        Ok(caption.clone())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Used when no captioning service is configured
#[derive(Debug, Clone, Default)]
pub struct UnavailableCaptioner;

#[async_trait]
impl Captioner for UnavailableCaptioner {
    async fn describe(&self, _image: &ImageSource) -> Result<String> {
        Err(CaptionError::Unavailable(
            "no captioning service configured".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}
