use crate::CatalogItem;
use anyhow::Result;
use atomicwrites::{AllowOverwrite, AtomicFile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CATALOG_FILENAME: &str = "catalog.json";

/// On-disk catalog image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Fingerprint of the taxonomy the signatures were computed with
    pub taxonomy_fingerprint: String,
    pub dimension: usize,
    pub saved_at: DateTime<Utc>,
    pub items: Vec<CatalogItem>,
}

/// JSON snapshot file, replaced atomically on every save
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(CATALOG_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, `None` when nothing was saved yet
    pub fn load(&self) -> Result<Option<CatalogSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = std::fs::read(&self.path)?;
        let snapshot: CatalogSnapshot = serde_json::from_slice(&data)
            .map_err(|e| anyhow::anyhow!("Deserialization error in {:?}: {}", self.path, e))?;
        Ok(Some(snapshot))
    }

    /// Write to a temporary file then rename over the old snapshot
    pub fn save(&self, snapshot: &CatalogSnapshot) -> Result<()> {
        let data = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;

        AtomicFile::new(&self.path, AllowOverwrite)
            .write(|f| std::io::Write::write_all(f, &data))
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", self.path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookalike_core::Signature;
    use tempfile::tempdir;
    use uuid::Uuid;

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot {
            taxonomy_fingerprint: "abc".to_string(),
            dimension: 2,
            saved_at: Utc::now(),
            items: vec![CatalogItem {
                id: Uuid::new_v4(),
                name: "Leather Boots".to_string(),
                category: "Footwear".to_string(),
                description: None,
                image_url: "https://img/boots.jpg".to_string(),
                caption: "brown leather boots".to_string(),
                signature: Signature::new(vec![3.0, 1.0]),
                created_at: Utc::now(),
            }],
        }
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempdir().unwrap();
        let file = CatalogFile::new(dir.path());
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let file = CatalogFile::new(dir.path());
        let saved = snapshot();
        file.save(&saved).unwrap();
        // overwrite must succeed too
        file.save(&saved).unwrap();

        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded.taxonomy_fingerprint, "abc");
        assert_eq!(loaded.items, saved.items);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let file = CatalogFile::new(dir.path());
        std::fs::write(file.path(), b"{not json").unwrap();
        assert!(file.load().is_err());
    }
}
