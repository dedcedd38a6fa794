//! Gemini `generateContent` captioning client

use crate::{CaptionError, Captioner, ImageSource, Result};
use async_trait::async_trait;
use base64::Engine as _;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

pub const DEFAULT_PROMPT: &str = "Please describe this product image in great detail, including \
category of object, type of object, colors, shapes, textures, and objects, in a comma-separated \
format. Do not use sentences.";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub prompt: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

pub struct GeminiCaptioner {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiCaptioner {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(CaptionError::Unavailable("Gemini API key is empty".to_string()));
        }
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Download a remote image and inline it as base64
    async fn fetch(&self, url: &str) -> Result<(String, String)> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CaptionError::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_string())
            .filter(|v| v.starts_with("image/"))
            .unwrap_or_else(|| "image/jpeg".to_string());

        let bytes = response.bytes().await?;
        debug!("Fetched {} bytes of {} from {}", bytes.len(), mime_type, url);
        Ok((mime_type, base64::engine::general_purpose::STANDARD.encode(&bytes)))
    }
}

#[async_trait]
impl Captioner for GeminiCaptioner {
    async fn describe(&self, image: &ImageSource) -> Result<String> {
        let (mime_type, data) = match image {
            ImageSource::Inline { mime_type, data } => (mime_type.clone(), data.clone()),
            ImageSource::Remote(url) => self.fetch(url).await?,
        };

        let body = request_body(&self.config.prompt, &mime_type, &data);
        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CaptionError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response.json().await?;
        let text = extract_text(&value).ok_or(CaptionError::EmptyResponse)?;
        debug!("Gemini described {}: {}", image.describe_for_log(), text);
        Ok(text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

fn request_body(prompt: &str, mime_type: &str, data: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [
                {"text": prompt},
                {"inline_data": {"mime_type": mime_type, "data": data}}
            ]
        }]
    })
}

/// Concatenate `candidates[0].content.parts[].text`, `None` if blank
pub fn extract_text(response: &Value) -> Option<String> {
    let parts = response
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_joins_parts() {
        let response = json!({
            "candidates": [{
                "content": {"parts": [{"text": "shoes, sneakers, "}, {"text": "white, canvas\n"}]}
            }]
        });
        assert_eq!(extract_text(&response).as_deref(), Some("shoes, sneakers, white, canvas"));
    }

    #[test]
    fn test_extract_text_missing_or_blank() {
        assert_eq!(extract_text(&json!({})), None);
        assert_eq!(extract_text(&json!({"candidates": []})), None);
        let blank = json!({"candidates": [{"content": {"parts": [{"text": "  "}]}}]});
        assert_eq!(extract_text(&blank), None);
    }

    #[test]
    fn test_endpoint() {
        let mut config = GeminiConfig::new("key").with_model("gemini-pro-vision");
        config.base_url = "http://localhost:8080/v1beta/".to_string();
        assert_eq!(
            config.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-pro-vision:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body("describe", "image/png", "aGVsbG8=");
        assert_eq!(body.pointer("/contents/0/parts/0/text"), Some(&json!("describe")));
        assert_eq!(
            body.pointer("/contents/0/parts/1/inline_data/mime_type"),
            Some(&json!("image/png"))
        );
    }

    #[test]
    fn test_rejects_blank_key() {
        assert!(matches!(
            GeminiCaptioner::new(GeminiConfig::new(" ")),
            Err(CaptionError::Unavailable(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.prompt.contains("comma-separated"));
    }
}
