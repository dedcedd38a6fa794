use crate::persistence::{CatalogFile, CatalogSnapshot};
use crate::{CatalogItem, NewItem};
use chrono::Utc;
use lookalike_core::{Encoder, Error, Result, Signature};
use parking_lot::{Mutex, RwLock};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Product catalog with precomputed signatures.
///
/// Items keep insertion order, which is also the tie-break order when ranking.
/// A persistent catalog rewrites its snapshot after every mutation.
pub struct Catalog {
    items: Arc<RwLock<Vec<CatalogItem>>>,
    encoder: Encoder,
    file: Option<CatalogFile>,
    /// Serializes snapshot writes so the newest state always lands last
    save_lock: Mutex<()>,
}

impl Catalog {
    /// Catalog that lives only in memory
    pub fn in_memory(encoder: Encoder) -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            encoder,
            file: None,
            save_lock: Mutex::new(()),
        }
    }

    /// Open (or create) the catalog stored under `data_dir`.
    ///
    /// A snapshot written under a different taxonomy is re-encoded from the
    /// stored captions and saved back before the catalog is returned.
    pub fn open<P: AsRef<Path>>(data_dir: P, encoder: Encoder) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;

        let file = CatalogFile::new(data_dir);
        let mut items = Vec::new();
        let mut stale = false;

        if let Some(snapshot) = file.load().map_err(|e| Error::Persistence(e.to_string()))? {
            info!("Loading catalog snapshot from {:?}", file.path());
            stale = snapshot.taxonomy_fingerprint != encoder.taxonomy().fingerprint()
                || snapshot.dimension != encoder.dim();
            items = snapshot.items;
            info!("Catalog loaded: {} items", items.len());
        }

        let catalog = Self {
            items: Arc::new(RwLock::new(items)),
            encoder,
            file: Some(file),
            save_lock: Mutex::new(()),
        };

        if stale {
            warn!("Taxonomy changed since the catalog was saved, re-encoding signatures");
            let changed = catalog.reindex()?;
            info!("Re-encoded catalog: {} of {} signatures changed", changed, catalog.len());
        }

        Ok(catalog)
    }

    #[inline]
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    #[inline]
    pub fn is_persistent(&self) -> bool {
        self.file.is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Ingest one item, encoding its caption into a signature
    pub fn add(&self, item: NewItem) -> Result<CatalogItem> {
        let item = item.validate()?;
        let signature = self.encoder.encode(&item.caption);
        if signature.is_zero() {
            debug!("Caption for {:?} matched no taxonomy keyword", item.name);
        }

        let item = item.into_item(signature);

        let _guard = self.save_lock.lock();
        self.items.write().push(item.clone());

        if let Err(e) = self.write_snapshot() {
            self.items.write().retain(|existing| existing.id != item.id);
            return Err(e);
        }

        debug!("Added catalog item {} ({})", item.id, item.name);
        Ok(item)
    }

    /// Ingest a batch; nothing is added if any item is invalid
    pub fn add_all(&self, items: Vec<NewItem>) -> Result<Vec<CatalogItem>> {
        let items = items
            .into_iter()
            .map(NewItem::validate)
            .collect::<Result<Vec<_>>>()?;

        let captions: Vec<&str> = items.iter().map(|i| i.caption.as_str()).collect();
        let signatures = self.encoder.encode_batch(&captions);

        let added: Vec<CatalogItem> = items
            .into_iter()
            .zip(signatures)
            .map(|(item, signature)| item.into_item(signature))
            .collect();

        let _guard = self.save_lock.lock();
        self.items.write().extend(added.iter().cloned());

        if let Err(e) = self.write_snapshot() {
            self.items
                .write()
                .retain(|existing| !added.iter().any(|a| a.id == existing.id));
            return Err(e);
        }

        Ok(added)
    }

    /// Load a JSON array of items (a seed file) into the catalog
    pub fn import_seed<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let items: Vec<NewItem> = serde_json::from_str(&content)?;
        let added = self.add_all(items)?;
        info!("Imported {} seed items from {:?}", added.len(), path);
        Ok(added.len())
    }

    #[inline]
    pub fn get(&self, id: &Uuid) -> Option<CatalogItem> {
        self.items.read().iter().find(|item| item.id == *id).cloned()
    }

    pub fn remove(&self, id: &Uuid) -> Result<bool> {
        let _guard = self.save_lock.lock();
        let removed = {
            let mut items = self.items.write();
            let position = items.iter().position(|item| item.id == *id);
            position.map(|i| (i, items.remove(i)))
        };

        let Some((position, item)) = removed else {
            return Ok(false);
        };

        if let Err(e) = self.write_snapshot() {
            self.items.write().insert(position, item);
            return Err(e);
        }
        Ok(true)
    }

    /// All items in insertion order
    pub fn list(&self) -> Vec<CatalogItem> {
        self.items.read().clone()
    }

    /// Point-in-time `(item, signature)` pairs for ranking.
    ///
    /// Later mutations do not affect a snapshot already taken.
    pub fn snapshot(&self) -> Vec<(CatalogItem, Signature)> {
        self.items
            .read()
            .iter()
            .map(|item| (item.clone(), item.signature.clone()))
            .collect()
    }

    /// Re-encode every stored caption with the current taxonomy and write
    /// the snapshot under the current fingerprint.
    ///
    /// Returns how many signatures changed. A failed write restores the
    /// previous signatures.
    pub fn reindex(&self) -> Result<usize> {
        let _guard = self.save_lock.lock();
        let previous: Vec<Signature> = {
            let mut items = self.items.write();
            let signatures = {
                let captions: Vec<&str> = items.iter().map(|i| i.caption.as_str()).collect();
                self.encoder.encode_batch(&captions)
            };
            items
                .iter_mut()
                .zip(signatures)
                .map(|(item, signature)| std::mem::replace(&mut item.signature, signature))
                .collect()
        };

        if let Err(e) = self.write_snapshot() {
            let mut items = self.items.write();
            for (item, signature) in items.iter_mut().zip(previous) {
                item.signature = signature;
            }
            return Err(e);
        }

        let items = self.items.read();
        Ok(items
            .iter()
            .zip(&previous)
            .filter(|(item, old)| item.signature != **old)
            .count())
    }

    /// Write the snapshot; a no-op for in-memory catalogs
    pub fn save(&self) -> Result<()> {
        let _guard = self.save_lock.lock();
        self.write_snapshot()
    }

    // Callers hold `save_lock`
    fn write_snapshot(&self) -> Result<()> {
        let Some(file) = &self.file else {
            return Ok(());
        };

        let snapshot = CatalogSnapshot {
            taxonomy_fingerprint: self.encoder.taxonomy().fingerprint().to_string(),
            dimension: self.encoder.dim(),
            saved_at: Utc::now(),
            items: self.items.read().clone(),
        };

        file.save(&snapshot)
            .map_err(|e| Error::Persistence(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookalike_core::{Category, Taxonomy, WeightTier};
    use tempfile::tempdir;

    fn taxonomy() -> Taxonomy {
        Taxonomy::new(vec![
            Category::new("shoes", WeightTier::ProductType, ["shoes", "sneakers", "boots"]),
            Category::new("jacket", WeightTier::ProductType, ["jacket", "coat"]),
            Category::new("color", WeightTier::Color, ["red", "white", "brown"]),
        ])
        .unwrap()
    }

    fn encoder() -> Encoder {
        Encoder::new(Arc::new(taxonomy()))
    }

    fn sneakers() -> NewItem {
        NewItem::new("White Sneakers", "Footwear", "https://img/sneakers.jpg", "white sneakers, canvas")
    }

    fn boots() -> NewItem {
        NewItem::new("Leather Boots", "Footwear", "https://img/boots.jpg", "brown leather boots")
    }

    #[test]
    fn test_add_encodes_caption() {
        let catalog = Catalog::in_memory(encoder());
        let item = catalog.add(sneakers()).unwrap();
        assert_eq!(item.signature.as_slice(), &[3.0, 0.0, 1.5]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&item.id), Some(item));
    }

    #[test]
    fn test_add_rejects_invalid() {
        let catalog = Catalog::in_memory(encoder());
        let result = catalog.add(NewItem::new("", "Footwear", "https://img/x.jpg", "shoes"));
        assert!(matches!(result, Err(Error::InvalidItem(_))));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let catalog = Catalog::in_memory(encoder());
        catalog.add(boots()).unwrap();
        catalog.add(sneakers()).unwrap();
        let names: Vec<String> = catalog.list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Leather Boots", "White Sneakers"]);
    }

    #[test]
    fn test_add_all_is_all_or_nothing() {
        let catalog = Catalog::in_memory(encoder());
        let bad = NewItem::new("Broken", "Misc", " ", "");
        assert!(catalog.add_all(vec![sneakers(), bad]).is_err());
        assert!(catalog.is_empty());

        let added = catalog.add_all(vec![sneakers(), boots()]).unwrap();
        assert_eq!(added.len(), 2);
        assert_eq!(added[1].signature.as_slice(), &[3.0, 0.0, 1.5]);
    }

    #[test]
    fn test_remove() {
        let catalog = Catalog::in_memory(encoder());
        let item = catalog.add(boots()).unwrap();
        assert!(catalog.remove(&item.id).unwrap());
        assert!(!catalog.remove(&item.id).unwrap());
        assert!(catalog.get(&item.id).is_none());
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let catalog = Catalog::in_memory(encoder());
        catalog.add(boots()).unwrap();
        let snapshot = catalog.snapshot();
        catalog.add(sneakers()).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].0.signature, snapshot[0].1);
    }

    #[test]
    fn test_persistence_roundtrip() {
        let dir = tempdir().unwrap();
        let id = {
            let catalog = Catalog::open(dir.path(), encoder()).unwrap();
            assert!(catalog.is_persistent());
            catalog.add(sneakers()).unwrap().id
        };

        let reopened = Catalog::open(dir.path(), encoder()).unwrap();
        assert_eq!(reopened.len(), 1);
        let item = reopened.get(&id).unwrap();
        assert_eq!(item.name, "White Sneakers");
        assert_eq!(item.signature.as_slice(), &[3.0, 0.0, 1.5]);
    }

    #[test]
    fn test_taxonomy_change_reencodes() {
        let dir = tempdir().unwrap();
        {
            let catalog = Catalog::open(dir.path(), encoder()).unwrap();
            catalog.add(boots()).unwrap();
        }

        let wider = Taxonomy::new(vec![
            Category::new("shoes", WeightTier::ProductType, ["shoes", "sneakers", "boots"]),
            Category::new("jacket", WeightTier::ProductType, ["jacket", "coat"]),
            Category::new("color", WeightTier::Color, ["red", "white", "brown"]),
            Category::new("material", WeightTier::Attribute, ["leather"]),
        ])
        .unwrap();
        let catalog = Catalog::open(dir.path(), Encoder::new(Arc::new(wider))).unwrap();
        let items = catalog.list();
        assert_eq!(items[0].signature.as_slice(), &[3.0, 0.0, 1.5, 1.0]);

        // the re-encoded snapshot was written back
        let file = CatalogFile::new(dir.path());
        assert_eq!(file.load().unwrap().unwrap().dimension, 4);
    }

    // Replace the snapshot file with a non-empty directory so every write fails
    fn block_snapshot_writes(dir: &Path) {
        let path = dir.join(crate::persistence::CATALOG_FILENAME);
        if path.is_file() {
            std::fs::remove_file(&path).unwrap();
        }
        std::fs::create_dir_all(path.join("blocker")).unwrap();
    }

    #[test]
    fn test_failed_write_rolls_back_add() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::open(dir.path(), encoder()).unwrap();
        let kept = catalog.add(boots()).unwrap();
        block_snapshot_writes(dir.path());

        assert!(matches!(catalog.add(sneakers()), Err(Error::Persistence(_))));
        assert_eq!(catalog.len(), 1);

        assert!(matches!(
            catalog.add_all(vec![sneakers(), boots()]),
            Err(Error::Persistence(_))
        ));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list()[0].id, kept.id);
    }

    #[test]
    fn test_failed_write_rolls_back_remove() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::open(dir.path(), encoder()).unwrap();
        let first = catalog.add(boots()).unwrap();
        let second = catalog.add(sneakers()).unwrap();
        block_snapshot_writes(dir.path());

        assert!(matches!(catalog.remove(&first.id), Err(Error::Persistence(_))));
        let ids: Vec<Uuid> = catalog.list().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_failed_write_rolls_back_reindex() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::open(dir.path(), encoder()).unwrap();
        let item = catalog.add(boots()).unwrap();
        block_snapshot_writes(dir.path());

        assert!(matches!(catalog.reindex(), Err(Error::Persistence(_))));
        assert_eq!(catalog.get(&item.id).unwrap().signature, item.signature);
    }

    #[test]
    fn test_reindex_writes_snapshot() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::open(dir.path(), encoder()).unwrap();
        let file = CatalogFile::new(dir.path());
        assert!(file.load().unwrap().is_none());

        assert_eq!(catalog.reindex().unwrap(), 0);
        let saved = file.load().unwrap().unwrap();
        assert_eq!(saved.taxonomy_fingerprint, catalog.encoder().taxonomy().fingerprint());
    }

    #[test]
    fn test_concurrent_adds_all_persisted() {
        let dir = tempdir().unwrap();
        {
            let catalog = Catalog::open(dir.path(), encoder()).unwrap();
            std::thread::scope(|s| {
                for i in 0..8 {
                    let catalog = &catalog;
                    s.spawn(move || {
                        catalog
                            .add(NewItem::new(
                                format!("Boots {}", i),
                                "Footwear",
                                "https://img/boots.jpg",
                                "brown boots",
                            ))
                            .unwrap();
                    });
                }
            });
            assert_eq!(catalog.len(), 8);
        }

        let reopened = Catalog::open(dir.path(), encoder()).unwrap();
        assert_eq!(reopened.len(), 8);
    }

    #[test]
    fn test_reindex_counts_changes() {
        let catalog = Catalog::in_memory(encoder());
        catalog.add(boots()).unwrap();
        assert_eq!(catalog.reindex().unwrap(), 0);
    }

    #[test]
    fn test_import_seed() {
        let dir = tempdir().unwrap();
        let seed = dir.path().join("seed.json");
        std::fs::write(
            &seed,
            r#"[
                {"name": "Denim Jacket", "category": "Apparel", "image_url": "https://img/j.jpg", "caption": "blue denim jacket"},
                {"name": "Red Sneakers", "category": "Footwear", "image_url": "https://img/s.jpg", "caption": "red sneakers"}
            ]"#,
        )
        .unwrap();

        let catalog = Catalog::in_memory(encoder());
        assert_eq!(catalog.import_seed(&seed).unwrap(), 2);
        assert_eq!(catalog.list()[0].signature.as_slice(), &[0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_import_seed_bad_json() {
        let dir = tempdir().unwrap();
        let seed = dir.path().join("seed.json");
        std::fs::write(&seed, "{}").unwrap();
        let catalog = Catalog::in_memory(encoder());
        assert!(matches!(catalog.import_seed(&seed), Err(Error::Serialization(_))));
    }
}
