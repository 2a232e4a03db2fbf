mod api;
mod config;
mod storage;

use crate::api::{health_handler, AppState};
use crate::config::AppConfig;
use crate::storage::{RestaurantRegistry, ReviewAggregator};
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use mongodb::Client;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Restaurant Registry API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Database: {}", config.database.name);
    info!("   - Server: {}:{}", config.server.host, config.server.port);
    info!("   - CORS origin: {}", config.cors.allowed_origin);

    // Connect to the document store
    info!("💾 Connecting to document store...");
    let client = Client::with_uri_str(&config.database.uri).await?;
    let database = client.database(&config.database.name);

    let registry = Arc::new(RestaurantRegistry::new(&database));
    let aggregator = Arc::new(ReviewAggregator::new(&database));

    // Unique index on address backs the registration invariant
    registry.ensure_indexes().await?;
    info!("✅ Document store ready");

    // Create application state
    let state = AppState {
        registry,
        aggregator,
    };

    // CORS for the configured origin, credentials allowed
    let cors = CorsLayer::new()
        .allow_origin(config.cors.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    // Build router with modular routes
    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(api::restaurant::routes())
        .merge(api::review::routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET    /health                           - Health check");
    info!("   POST   /register/restaurant              - Register restaurant");
    info!("   GET    /register/restaurants             - List restaurants");
    info!("   GET    /reviews                          - List reviews by rating");
    info!("   GET    /reviews/average/:restaurantId    - Review statistics");
    info!("   PUT    /restaurant/:id                   - Update restaurant");
    info!("   DELETE /restaurant/:id                   - Delete restaurant");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
