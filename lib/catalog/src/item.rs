use chrono::{DateTime, Utc};
use lookalike_core::{Error, Result, Signature};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product with the signature computed from its caption at
/// ingestion time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
    /// Description text produced by the captioning service for `image_url`
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub signature: Signature,
    pub created_at: DateTime<Utc>,
}

/// Input for catalog ingestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub caption: String,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        image_url: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: None,
            image_url: image_url.into(),
            caption: caption.into(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Trim fields and reject blank required ones
    pub(crate) fn validate(mut self) -> Result<Self> {
        self.name = self.name.trim().to_string();
        self.category = self.category.trim().to_string();
        self.image_url = self.image_url.trim().to_string();
        self.description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        if self.name.is_empty() {
            return Err(Error::InvalidItem("name is required".to_string()));
        }
        if self.category.is_empty() {
            return Err(Error::InvalidItem("category is required".to_string()));
        }
        if self.image_url.is_empty() {
            return Err(Error::InvalidItem("image_url is required".to_string()));
        }
        Ok(self)
    }

    pub(crate) fn into_item(self, signature: Signature) -> CatalogItem {
        CatalogItem {
            id: Uuid::new_v4(),
            name: self.name,
            category: self.category,
            description: self.description,
            image_url: self.image_url,
            caption: self.caption,
            signature,
            created_at: Utc::now(),
        }
    }
}
