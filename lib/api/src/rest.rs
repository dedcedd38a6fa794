use crate::search::{NewProduct, SearchEngine, SearchOutcome};
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use lookalike_caption::ImageSource;
use lookalike_catalog::CatalogItem;
use lookalike_core::{CategoryHit, Error};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Deserialize)]
struct SearchRequest {
    image: String,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct TextSearchRequest {
    description: String,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct SearchResponse {
    message: &'static str,
    usable_query: bool,
    description: String,
    query_categories: Vec<CategoryHit>,
    similar_products: Vec<SimilarProduct>,
}

#[derive(Serialize)]
struct SimilarProduct {
    product: CatalogItem,
    /// Cosine similarity as a percentage
    similarity: f32,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        let message = if outcome.usable_query {
            "Search successful. Here are the results."
        } else {
            "No usable description could be derived from the image."
        };

        Self {
            message,
            usable_query: outcome.usable_query,
            description: outcome.description,
            query_categories: outcome.query_categories,
            similar_products: outcome
                .matches
                .into_iter()
                .map(|scored| SimilarProduct {
                    similarity: scored.percentage(),
                    product: scored.item,
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct CategoryInfo<'a> {
    name: &'a str,
    weight: f32,
    keywords: usize,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(engine: Arc<SearchEngine>, port: u16) -> std::io::Result<()> {
        info!("REST API listening on 0.0.0.0:{}", port);
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .configure(configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Register every route; expects `web::Data<Arc<SearchEngine>>` app data
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/api/taxonomy", web::get().to(get_taxonomy))
        .route("/api/products", web::get().to(list_products))
        .route("/api/products", web::post().to(create_product))
        .route("/api/products/{id}", web::get().to(get_product))
        .route("/api/products/{id}", web::delete().to(delete_product))
        .route("/api/search", web::post().to(search_image))
        .route("/api/search/text", web::post().to(search_text));
}

fn error_response(e: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        Error::InvalidItem(_) | Error::InvalidLimit(_) => HttpResponse::BadRequest().json(body),
        Error::ItemNotFound(_) => HttpResponse::NotFound().json(body),
        _ => {
            error!("Request failed: {}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw).map_err(|_| {
        HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Invalid product id: {}", raw)
        }))
    })
}

async fn health(engine: web::Data<Arc<SearchEngine>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "products": engine.catalog().len(),
        "captioner": engine.captioner().name(),
    })))
}

async fn get_taxonomy(engine: web::Data<Arc<SearchEngine>>) -> ActixResult<HttpResponse> {
    let taxonomy = engine.catalog().encoder().taxonomy();
    let categories: Vec<CategoryInfo> = taxonomy
        .categories()
        .iter()
        .map(|c| CategoryInfo {
            name: c.name(),
            weight: c.weight(),
            keywords: c.keywords().len(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "fingerprint": taxonomy.fingerprint(),
        "dimension": taxonomy.len(),
        "categories": categories,
    })))
}

async fn list_products(engine: web::Data<Arc<SearchEngine>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(engine.catalog().list()))
}

async fn get_product(
    engine: web::Data<Arc<SearchEngine>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = match parse_id(&path.into_inner()) {
        Ok(id) => id,
        Err(response) => return Ok(response),
    };

    match engine.catalog().get(&id) {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Ok(error_response(&Error::ItemNotFound(id.to_string()))),
    }
}

async fn create_product(
    engine: web::Data<Arc<SearchEngine>>,
    req: web::Json<NewProduct>,
) -> ActixResult<HttpResponse> {
    match engine.ingest(req.into_inner()).await {
        Ok(item) => {
            info!("Created product {} ({})", item.id, item.name);
            Ok(HttpResponse::Created().json(item))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

async fn delete_product(
    engine: web::Data<Arc<SearchEngine>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = match parse_id(&path.into_inner()) {
        Ok(id) => id,
        Err(response) => return Ok(response),
    };

    match engine.catalog().remove(&id) {
        Ok(true) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": true
        }))),
        Ok(false) => Ok(error_response(&Error::ItemNotFound(id.to_string()))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn search_image(
    engine: web::Data<Arc<SearchEngine>>,
    req: web::Json<SearchRequest>,
) -> ActixResult<HttpResponse> {
    let image = match ImageSource::parse(&req.image) {
        Ok(image) => image,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    match engine.search(&image, req.limit).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(SearchResponse::from(outcome))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn search_text(
    engine: web::Data<Arc<SearchEngine>>,
    req: web::Json<TextSearchRequest>,
) -> ActixResult<HttpResponse> {
    match engine.search_text(&req.description, req.limit) {
        Ok(outcome) => Ok(HttpResponse::Ok().json(SearchResponse::from(outcome))),
        Err(e) => Ok(error_response(&e)),
    }
}
