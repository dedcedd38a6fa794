use crate::{CaptionError, Result};
use base64::Engine as _;

const DEFAULT_MIME: &str = "image/jpeg";

/// Where a query or catalog image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Image bytes carried inline, base64-encoded
    Inline { mime_type: String, data: String },
    /// Image reachable over http(s)
    Remote(String),
}

impl ImageSource {
    /// Parse a `data:` URL or an `http(s)://` URL
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CaptionError::InvalidImage("image is required".to_string()));
        }

        const DATA_SCHEME: &str = "data:";
        if let Some(rest) = input
            .get(..DATA_SCHEME.len())
            .filter(|scheme| scheme.eq_ignore_ascii_case(DATA_SCHEME))
            .and_then(|_| input.get(DATA_SCHEME.len()..))
        {
            return Self::parse_data_url(rest);
        }

        let lower = input.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Remote(input.to_string()));
        }

        Err(CaptionError::InvalidImage(
            "expected a data: URL or an http(s) URL".to_string(),
        ))
    }

    /// Inline source from raw bytes
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::Inline {
            mime_type: mime_type.into(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    // data:[<mime>][;params];base64,<payload>
    fn parse_data_url(rest: &str) -> Result<Self> {
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| CaptionError::InvalidImage("data URL has no payload".to_string()))?;

        let mut params = header.split(';');
        let mime_type = params.next().map(str::trim).unwrap_or_default();
        if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
            return Err(CaptionError::InvalidImage(
                "data URL must be base64-encoded".to_string(),
            ));
        }

        let data: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        if data.is_empty() {
            return Err(CaptionError::InvalidImage("data URL payload is empty".to_string()));
        }
        base64::engine::general_purpose::STANDARD
            .decode(&data)
            .map_err(|e| CaptionError::InvalidImage(format!("bad base64 payload: {}", e)))?;

        let mime_type = if mime_type.is_empty() {
            DEFAULT_MIME.to_string()
        } else {
            mime_type.to_ascii_lowercase()
        };

        Ok(Self::Inline { mime_type, data })
    }

    /// Short form for logs; never includes inline payloads
    pub fn describe_for_log(&self) -> String {
        match self {
            Self::Inline { mime_type, data } => format!("inline {} ({} base64 chars)", mime_type, data.len()),
            Self::Remote(url) => url.clone(),
        }
    }
}
