use clap::Parser;
use lookalike_api::{RestApi, SearchEngine, DEFAULT_TOP_K};
use lookalike_caption::{Captioner, GeminiCaptioner, GeminiConfig, UnavailableCaptioner};
use lookalike_catalog::Catalog;
use lookalike_core::{Encoder, Taxonomy};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Find catalog products that look like a query image
#[derive(Parser, Debug)]
#[command(name = "lookalike")]
#[command(about = "Visual product matching with taxonomy signatures", long_about = None)]
struct Args {
    /// Path to the data directory
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// JSON taxonomy file (defaults to the built-in reference taxonomy)
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Results returned when a search does not pass a limit
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// JSON array of products imported when the catalog is empty
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// Gemini API key; captioning is disabled without one
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// Gemini model used for captioning
    #[arg(long, default_value = "gemini-1.5-flash")]
    gemini_model: String,

    /// Captioning request timeout in seconds
    #[arg(long, default_value_t = 30)]
    caption_timeout_secs: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_taxonomy(path: Option<&PathBuf>) -> anyhow::Result<Taxonomy> {
    let taxonomy = match path {
        Some(path) => {
            info!("Loading taxonomy from {:?}", path);
            Taxonomy::from_path(path)?
        }
        None => Taxonomy::reference()?,
    };
    info!(
        "Taxonomy: {} categories, {} keywords, fingerprint {}",
        taxonomy.len(),
        taxonomy.keyword_count(),
        taxonomy.fingerprint()
    );
    Ok(taxonomy)
}

fn build_captioner(args: &Args) -> anyhow::Result<Arc<dyn Captioner>> {
    match args.gemini_api_key.as_deref().filter(|k| !k.trim().is_empty()) {
        Some(key) => {
            let config = GeminiConfig::new(key)
                .with_model(args.gemini_model.clone())
                .with_timeout(Duration::from_secs(args.caption_timeout_secs));
            info!("Captioning with Gemini model {}", config.model);
            Ok(Arc::new(GeminiCaptioner::new(config)?))
        }
        None => {
            warn!("No Gemini API key configured; image search will report unusable queries");
            Ok(Arc::new(UnavailableCaptioner))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting lookalike v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);
    info!("HTTP API port: {}", args.http_port);

    let taxonomy = Arc::new(load_taxonomy(args.taxonomy.as_ref())?);
    let encoder = Encoder::new(taxonomy);

    let catalog = Arc::new(Catalog::open(&args.data_dir, encoder)?);
    info!("Catalog initialized with {} products", catalog.len());

    if let Some(seed) = &args.seed_file {
        if catalog.is_empty() {
            catalog.import_seed(seed)?;
        } else {
            info!("Catalog not empty, skipping seed file {:?}", seed);
        }
    }

    let captioner = build_captioner(&args)?;
    let engine = Arc::new(SearchEngine::new(captioner, catalog.clone()).with_top_k(args.top_k)?);

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("lookalike started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    catalog.save()?;
    info!("Catalog saved");
    Ok(())
}
