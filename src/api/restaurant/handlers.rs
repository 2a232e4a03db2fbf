use crate::api::models::*;
use crate::storage::{Restaurant, RestaurantPatch};
use axum::{extract::Path, extract::State, Json};
use tracing::info;

pub async fn register_restaurant_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRestaurantRequest>,
) -> Result<Json<Restaurant>, AppError> {
    // Validate
    request.validate().map_err(AppError::BadRequest)?;

    info!(address = %request.address, "Registering restaurant");

    let stored = state.registry.register(request.into_candidate()).await?;
    Ok(Json(stored))
}

pub async fn list_restaurants_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Restaurant>>, AppError> {
    let restaurants = state.registry.list_all().await?;

    info!(count = restaurants.len(), "Listed restaurants");
    Ok(Json(restaurants))
}

pub async fn update_restaurant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<RestaurantPatch>,
) -> Result<Json<Restaurant>, AppError> {
    info!(%id, "Updating restaurant");

    let updated = state.registry.update(&id, &patch).await?;
    Ok(Json(updated))
}

pub async fn delete_restaurant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Restaurant>, AppError> {
    info!(%id, "Deleting restaurant");

    let deleted = state.registry.delete(&id).await?;
    Ok(Json(deleted))
}
