//! Waymark HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use application::{AnnotationService, PoiService};
use application::ports::{CommentStorePort, GeodataPort, ImageStorePort, TagStorePort};
use axum::extract::DefaultBodyLimit;
use infrastructure::{AppConfig, Database, FsImageStore, OverpassAdapter, SqliteCommentStore, SqliteTagStore};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waymark_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🗺️ Waymark v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        database = %config.database.path,
        overpass = %config.overpass.base_url,
        "Configuration loaded"
    );

    // Open the database and run migrations
    let database = Database::from_config(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open database: {e}"))?;

    // Initialize adapters
    let geodata: Arc<dyn GeodataPort> =
        Arc::new(OverpassAdapter::new(config.overpass.to_client_config())
            .map_err(|e| anyhow::anyhow!("Failed to initialize Overpass client: {e}"))?);
    let tag_store: Arc<dyn TagStorePort> = Arc::new(SqliteTagStore::new(database.clone()));
    let comment_store: Arc<dyn CommentStorePort> = Arc::new(SqliteCommentStore::new(database));
    let image_store: Arc<dyn ImageStorePort> =
        Arc::new(FsImageStore::new(config.media.directory.clone()));

    let bbox = config
        .overpass
        .bbox()
        .map_err(|e| anyhow::anyhow!("Invalid bounding box in config: {e}"))?;

    // Initialize services
    let poi_service = PoiService::new(Arc::clone(&geodata), Arc::clone(&tag_store), bbox);
    let annotation_service = AnnotationService::new(tag_store, comment_store, image_store);

    // Create app state
    let state = AppState {
        poi_service: Arc::new(poi_service),
        annotation_service: Arc::new(annotation_service),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    // Add middleware (order matters: first added = outermost)
    let app = app.layer(TraceLayer::new_for_http());
    let app = if config.server.cors_enabled {
        app.layer(cors_layer)
    } else {
        app
    };
    let app = app.layer(DefaultBodyLimit::max(config.server.max_body_size_bytes));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📚 API docs: http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
