use lookalike_caption::{Captioner, ImageSource};
use lookalike_catalog::{Catalog, CatalogItem, NewItem};
use lookalike_core::{CategoryHit, Error, Ranker, Result, ScoredItem};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

pub const DEFAULT_TOP_K: usize = 12;

/// Result of one search pass
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// Text the query signature was encoded from
    pub description: String,
    /// False when the description matched no taxonomy keyword
    pub usable_query: bool,
    /// Categories the description matched, in taxonomy order
    pub query_categories: Vec<CategoryHit>,
    pub matches: Vec<ScoredItem<CatalogItem>>,
}

/// Product to ingest; the caption is produced from the image when absent
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Caption, encode and rank against the catalog
pub struct SearchEngine {
    captioner: Arc<dyn Captioner>,
    catalog: Arc<Catalog>,
    ranker: Ranker,
    top_k: usize,
}

impl SearchEngine {
    pub fn new(captioner: Arc<dyn Captioner>, catalog: Arc<Catalog>) -> Self {
        let ranker = Ranker::new(catalog.encoder().taxonomy().clone());
        Self {
            captioner,
            catalog,
            ranker,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Default result count; zero is rejected
    pub fn with_top_k(mut self, top_k: usize) -> Result<Self> {
        if top_k == 0 {
            return Err(Error::InvalidLimit(top_k));
        }
        self.top_k = top_k;
        Ok(self)
    }

    #[inline]
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    #[inline]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[inline]
    pub fn captioner(&self) -> &Arc<dyn Captioner> {
        &self.captioner
    }

    /// Describe the image, then rank the catalog against the description.
    ///
    /// A captioning failure is logged and searched as empty text, which
    /// reports an unusable query instead of an error.
    pub async fn search(&self, image: &ImageSource, limit: Option<usize>) -> Result<SearchOutcome> {
        let k = self.resolve_limit(limit)?;
        let description = self.caption_or_empty(image).await;
        Ok(self.rank_description(description, k))
    }

    /// Rank the catalog against a description, skipping the captioner
    pub fn search_text(&self, description: &str, limit: Option<usize>) -> Result<SearchOutcome> {
        let k = self.resolve_limit(limit)?;
        Ok(self.rank_description(description.to_string(), k))
    }

    /// Add a product, captioning its image when no caption is given.
    ///
    /// The item is stored even if captioning fails; it then carries a zero
    /// signature until a caption is supplied.
    pub async fn ingest(&self, product: NewProduct) -> Result<CatalogItem> {
        let caption = match product.caption.as_deref().map(str::trim) {
            Some(caption) if !caption.is_empty() => caption.to_string(),
            _ => match ImageSource::parse(&product.image_url) {
                Ok(image) => self.caption_or_empty(&image).await,
                Err(e) => {
                    warn!("Cannot caption {:?}: {}", product.name, e);
                    String::new()
                }
            },
        };

        self.catalog.add(NewItem {
            name: product.name,
            category: product.category,
            description: product.description,
            image_url: product.image_url,
            caption,
        })
    }

    fn resolve_limit(&self, limit: Option<usize>) -> Result<usize> {
        match limit {
            Some(0) => Err(Error::InvalidLimit(0)),
            Some(k) => Ok(k),
            None => Ok(self.top_k),
        }
    }

    async fn caption_or_empty(&self, image: &ImageSource) -> String {
        let start = Instant::now();
        match self.captioner.describe(image).await {
            Ok(text) => {
                debug!(
                    "{} captioned {} in {:?}",
                    self.captioner.name(),
                    image.describe_for_log(),
                    start.elapsed()
                );
                text
            }
            Err(e) => {
                warn!("Captioning {} failed: {}", image.describe_for_log(), e);
                String::new()
            }
        }
    }

    fn rank_description(&self, description: String, k: usize) -> SearchOutcome {
        let start = Instant::now();
        let encoder = self.catalog.encoder();
        let query = encoder.encode(&description);

        if query.is_zero() {
            debug!("No taxonomy keyword in description {:?}", description);
            return SearchOutcome {
                description,
                usable_query: false,
                query_categories: Vec::new(),
                matches: Vec::new(),
            };
        }
        let query_categories = encoder.explain(&description);

        let corpus = self.catalog.snapshot();
        let corpus_len = corpus.len();
        let matches = self.ranker.rank(&query, corpus, k);
        debug!(
            "Ranked {} catalog items, kept {} in {:?}",
            corpus_len,
            matches.len(),
            start.elapsed()
        );

        SearchOutcome {
            description,
            usable_query: true,
            query_categories,
            matches,
        }
    }
}
