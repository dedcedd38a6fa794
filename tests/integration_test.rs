// Integration tests for lookalike
use lookalike_api::SearchEngine;
use lookalike_caption::{FixedCaptioner, ImageSource, UnavailableCaptioner};
use lookalike_catalog::{Catalog, NewItem};
use lookalike_core::{Encoder, Ranker, Signature, Taxonomy};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::tempdir;

fn seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/seed_products.json")
}

fn reference_encoder() -> Encoder {
    Encoder::new(Arc::new(Taxonomy::reference().unwrap()))
}

const SMALL_TAXONOMY: &str = r#"{
    "categories": [
        {"name": "shoes", "weight": 3, "keywords": ["shoes", "sneakers", "boots"]},
        {"name": "jacket", "weight": 3, "keywords": ["jacket", "coat"]},
        {"name": "color", "weight": 1.5, "keywords": ["red", "white", "brown", "blue"]}
    ]
}"#;

#[test]
fn test_reference_taxonomy_scenario() {
    let encoder = reference_encoder();
    let taxonomy = encoder.taxonomy().clone();
    let signature = encoder.encode("red sneakers leather jacket");

    assert_eq!(signature.dim(), taxonomy.len());
    let at = |name: &str| signature.as_slice()[taxonomy.position(name).unwrap()];
    assert_eq!(at("shoes"), 3.0);
    assert_eq!(at("jacket"), 3.0);
    assert_eq!(at("color"), 1.5);
    assert!(encoder.encode("").is_zero());
}

#[test]
fn test_seed_catalog_search() {
    let catalog = Catalog::in_memory(reference_encoder());
    assert_eq!(catalog.import_seed(seed_path()).unwrap(), 20);

    let first = catalog.list().remove(0);
    let query = catalog.encoder().encode(&first.caption);
    let ranker = Ranker::new(catalog.encoder().taxonomy().clone());
    let results = ranker.rank(&query, catalog.snapshot(), 5);

    assert_eq!(results.len(), 5);
    assert_eq!(results[0].item.id, first.id);
    assert_eq!(results[0].similarity, 1.0);
    assert!(results.windows(2).all(|w| w[0].similarity >= w[1].similarity));
}

#[test]
fn test_every_seed_item_has_a_signature() {
    let catalog = Catalog::in_memory(reference_encoder());
    catalog.import_seed(seed_path()).unwrap();
    for item in catalog.list() {
        assert!(!item.signature.is_zero(), "{} has an empty signature", item.name);
    }
}

#[test]
fn test_catalog_survives_restart_and_taxonomy_change() {
    let dir = tempdir().unwrap();
    let taxonomy_path = dir.path().join("taxonomy.json");
    std::fs::write(&taxonomy_path, SMALL_TAXONOMY).unwrap();
    let data_dir = dir.path().join("data");

    let small = Encoder::new(Arc::new(Taxonomy::from_path(&taxonomy_path).unwrap()));
    {
        let catalog = Catalog::open(&data_dir, small).unwrap();
        catalog
            .add(NewItem::new("Red Boots", "Shoes", "https://img/boots.jpg", "red leather boots"))
            .unwrap();
    }

    let catalog = Catalog::open(&data_dir, reference_encoder()).unwrap();
    let item = catalog.list().remove(0);
    assert_eq!(item.signature.dim(), catalog.encoder().dim());
    assert_eq!(item.signature, catalog.encoder().encode("red leather boots"));
}

#[tokio::test]
async fn test_image_search_end_to_end() {
    let taxonomy = Arc::new(Taxonomy::from_json_str(SMALL_TAXONOMY).unwrap());
    let catalog = Catalog::in_memory(Encoder::new(taxonomy));
    catalog
        .add(NewItem::new("Blue Coat", "Apparel", "https://img/coat.jpg", "blue coat"))
        .unwrap();
    catalog
        .add(NewItem::new("White Sneakers", "Shoes", "https://img/sneakers.jpg", "white sneakers"))
        .unwrap();
    catalog
        .add(NewItem::new("Brown Boots", "Shoes", "https://img/boots.jpg", "brown boots"))
        .unwrap();

    let captioner = FixedCaptioner::new("white shoes, laces, rubber sole");
    let engine = SearchEngine::new(Arc::new(captioner), Arc::new(catalog));
    let image = ImageSource::parse("data:image/jpeg;base64,aGVsbG8=").unwrap();

    let outcome = engine.search(&image, Some(2)).await.unwrap();
    assert!(outcome.usable_query);
    let names: Vec<&str> = outcome.matches.iter().map(|m| m.item.name.as_str()).collect();
    assert_eq!(names, vec!["White Sneakers", "Brown Boots"]);
    assert_eq!(outcome.matches[0].percentage(), 100.0);
}

#[tokio::test]
async fn test_image_search_without_captioner() {
    let catalog = Catalog::in_memory(reference_encoder());
    catalog.import_seed(seed_path()).unwrap();
    let engine = SearchEngine::new(Arc::new(UnavailableCaptioner), Arc::new(catalog));

    let image = ImageSource::parse("https://img/query.jpg").unwrap();
    let outcome = engine.search(&image, None).await.unwrap();
    assert!(!outcome.usable_query);
    assert!(outcome.matches.is_empty());
}

#[test]
fn test_concurrent_encoding() {
    let encoder = reference_encoder();
    let expected = encoder.encode("black leather handbag, gold zipper");

    let results: Vec<Signature> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| encoder.encode("black leather handbag, gold zipper")))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.iter().all(|r| *r == expected));
}
