//! Taxonomy registry
//!
//! An ordered table of keyword categories. The order of the categories is the
//! positional meaning of every [`Signature`](crate::Signature) dimension, so a
//! taxonomy must stay identical between catalog ingestion and query time.
//! Any change (add, remove, reorder, edit keywords) changes the
//! [`Taxonomy::fingerprint`] and invalidates stored signatures.

use crate::matcher::KeywordMatcher;
use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Priority tier of a category
///
/// Product identity dominates a signature over cosmetic attributes: an
/// identity mismatch suppresses similarity more than an attribute mismatch.
/// Color sits slightly above the other attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub enum WeightTier {
    /// Generic attributes: material, pattern, style, fit, shape, features, finish
    Attribute,
    /// Color terms
    Color,
    /// Broad product families
    Family,
    /// Primary product-type nouns
    ProductType,
    /// Cross-cutting high-value terms spanning many product types
    CrossCutting,
}

impl WeightTier {
    #[inline]
    pub fn weight(self) -> f32 {
        match self {
            WeightTier::Attribute => 1.0,
            WeightTier::Color => 1.5,
            WeightTier::Family => 2.0,
            WeightTier::ProductType => 3.0,
            WeightTier::CrossCutting => 4.0,
        }
    }
}

impl TryFrom<f32> for WeightTier {
    type Error = Error;

    fn try_from(weight: f32) -> Result<Self> {
        [
            WeightTier::Attribute,
            WeightTier::Color,
            WeightTier::Family,
            WeightTier::ProductType,
            WeightTier::CrossCutting,
        ]
        .into_iter()
        .find(|tier| tier.weight() == weight)
        .ok_or(Error::InvalidWeight(weight))
    }
}

impl From<WeightTier> for f32 {
    fn from(tier: WeightTier) -> Self {
        tier.weight()
    }
}

/// A named set of synonym keywords with one weight tier
///
/// Keywords may overlap across categories. A word listed in two categories
/// credits both of them independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    #[serde(rename = "weight")]
    tier: WeightTier,
    keywords: Vec<String>,
}

impl Category {
    pub fn new<I, S>(name: impl Into<String>, tier: WeightTier, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tier,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn tier(&self) -> WeightTier {
        self.tier
    }

    #[inline]
    pub fn weight(&self) -> f32 {
        self.tier.weight()
    }

    #[inline]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Trim, lower-case and de-duplicate keywords, keeping first occurrences
    fn normalize(mut self) -> Result<Self> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(Error::BlankCategoryName);
        }

        let mut seen = ahash::AHashSet::new();
        let mut keywords = Vec::with_capacity(self.keywords.len());
        for keyword in &self.keywords {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(Error::BlankKeyword {
                    category: self.name.clone(),
                });
            }
            if seen.insert(keyword.clone()) {
                keywords.push(keyword);
            }
        }

        if keywords.is_empty() {
            return Err(Error::NoKeywords(self.name));
        }

        self.keywords = keywords;
        Ok(self)
    }
}

/// On-disk taxonomy definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyDefinition {
    pub categories: Vec<Category>,
}

/// Immutable, validated taxonomy with one compiled matcher per category
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
    matchers: Vec<KeywordMatcher>,
    index: AHashMap<String, usize>,
    fingerprint: String,
}

impl Taxonomy {
    /// Validate the categories and compile their matchers.
    ///
    /// Every structural problem is reported here, at load time, so encoding
    /// never has an error path.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::EmptyTaxonomy);
        }

        let mut normalized = Vec::with_capacity(categories.len());
        let mut index = AHashMap::with_capacity(categories.len());
        for category in categories {
            let category = category.normalize()?;
            if index.contains_key(category.name()) {
                return Err(Error::DuplicateCategory(category.name));
            }
            index.insert(category.name.clone(), normalized.len());
            normalized.push(category);
        }

        let matchers = normalized
            .iter()
            .map(|c| KeywordMatcher::new(c.name(), c.keywords()))
            .collect::<Result<Vec<_>>>()?;

        let fingerprint = compute_fingerprint(&normalized);

        Ok(Self {
            categories: normalized,
            matchers,
            index,
            fingerprint,
        })
    }

    pub fn from_definition(def: TaxonomyDefinition) -> Result<Self> {
        Self::new(def.categories)
    }

    /// Parse a JSON definition: `{"categories": [{"name", "weight", "keywords"}]}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let def: TaxonomyDefinition = serde_json::from_str(json)?;
        Self::from_definition(def)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The built-in product taxonomy
    pub fn reference() -> Result<Self> {
        Self::new(crate::reference::reference_categories())
    }

    pub fn to_definition(&self) -> TaxonomyDefinition {
        TaxonomyDefinition {
            categories: self.categories.clone(),
        }
    }

    /// Categories in signature order
    #[inline]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories, which is also the signature length
    #[inline]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Weight of a category by name
    pub fn weight_of(&self, name: &str) -> Option<f32> {
        self.position(name).map(|i| self.categories[i].weight())
    }

    /// Signature dimension of a category by name
    #[inline]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.position(name).map(|i| &self.categories[i])
    }

    /// Hex SHA-256 over names, tiers and keywords in order.
    /// Two taxonomies produce compatible signatures iff fingerprints match.
    #[inline]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Total keyword count across all categories
    pub fn keyword_count(&self) -> usize {
        self.matchers.iter().map(KeywordMatcher::len).sum()
    }

    pub(crate) fn categories_with_matchers(
        &self,
    ) -> impl Iterator<Item = (&Category, &KeywordMatcher)> {
        self.categories.iter().zip(self.matchers.iter())
    }
}

fn compute_fingerprint(categories: &[Category]) -> String {
    let mut hasher = Sha256::new();
    for category in categories {
        hasher.update(category.name.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(category.weight().to_le_bytes());
        for keyword in &category.keywords {
            hasher.update(b"\x1f");
            hasher.update(keyword.as_bytes());
        }
        hasher.update(b"\x1e");
    }
    format!("{:x}", hasher.finalize())
}
