//! wellmap-server - HTTP API for the well depth map chunk directory

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wellmap::directory::ChunkDirectory;
use wellmap::places::{GooglePlacesClient, PlacesProvider};
use wellmap::store::RedisStore;
use wellmap_server::api::{create_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "wellmap-server")]
#[command(about = "HTTP API for the well depth map chunk directory")]
struct Args {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Redis connection URL for the chunk store
    #[arg(long, env = "REDIS_URL", default_value = "redis://localhost:6379")]
    redis_url: String,

    /// Google API key for the place search proxy (proxy disabled if unset)
    #[arg(long, env = "GOOGLE_API_KEY")]
    google_api_key: Option<String>,

    /// Comma-separated origin prefixes allowed to use the place search proxy
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        default_value = "http://localhost:3000",
        value_delimiter = ','
    )]
    allowed_origins: Vec<String>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI args
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&args.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting wellmap-server v{}", env!("CARGO_PKG_VERSION"));

    // Connect to the chunk store up front so a bad REDIS_URL fails the
    // process instead of every request.
    let store = RedisStore::connect(&args.redis_url)
        .await
        .context("failed to connect to chunk store")?;
    tracing::info!("Connected to chunk store");

    let places: Option<Arc<dyn PlacesProvider>> = match args.google_api_key {
        Some(api_key) => {
            tracing::info!("Place search proxy enabled");
            Some(Arc::new(GooglePlacesClient::new(api_key)?))
        }
        None => {
            tracing::warn!("GOOGLE_API_KEY not set, place search proxy disabled");
            None
        }
    };

    let state = Arc::new(AppState {
        directory: ChunkDirectory::new(Arc::new(store)),
        places,
        allowed_origins: args.allowed_origins,
    });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", args.host, args.port))?;
    let addr = listener
        .local_addr()
        .context("failed to read local address")?;
    tracing::info!(%addr, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
