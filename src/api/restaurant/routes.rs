use crate::api::models::AppState;
use crate::api::restaurant::handlers::{
    delete_restaurant_handler, list_restaurants_handler, register_restaurant_handler,
    update_restaurant_handler,
};
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register/restaurant", post(register_restaurant_handler))
        .route("/register/restaurants", get(list_restaurants_handler))
        .route(
            "/restaurant/{id}",
            put(update_restaurant_handler).delete(delete_restaurant_handler),
        )
}
