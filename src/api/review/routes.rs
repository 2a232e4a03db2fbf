use crate::api::models::AppState;
use crate::api::review::handlers::{average_rating_handler, list_reviews_handler};
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", get(list_reviews_handler))
        .route("/reviews/average/{restaurantId}", get(average_rating_handler))
}
