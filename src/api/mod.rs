pub mod models;
pub mod restaurant;
pub mod review;

// Re-exports
pub use models::*;

// Health handler (simple, keep here)
use axum::Json;

pub async fn health_handler() -> impl axum::response::IntoResponse {
    Json(models::HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
