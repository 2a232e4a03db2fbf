use crate::storage::{
    OperationHours, Restaurant, RestaurantRegistry, ReviewAggregator, StoreError,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RestaurantRegistry>,
    pub aggregator: Arc<ReviewAggregator>,
}

/// Request to register a new restaurant
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRestaurantRequest {
    pub name: String,
    pub address: String,
    pub distance: Option<f64>,
    pub estimated_pickup_time: Option<f64>,
    #[serde(default)]
    pub operation_hours: Vec<OperationHours>,
    pub dashpass_enabled: Option<bool>,
}

impl RegisterRestaurantRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Restaurant name cannot be empty".to_string());
        }
        if self.address.trim().is_empty() {
            return Err("Restaurant address cannot be empty".to_string());
        }
        Ok(())
    }

    pub fn into_candidate(self) -> Restaurant {
        Restaurant {
            id: None,
            name: self.name,
            distance: self.distance,
            estimated_pickup_time: self.estimated_pickup_time,
            address: self.address,
            operation_hours: self.operation_hours,
            dashpass_enabled: self.dashpass_enabled,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateAddress(_) | StoreError::InvalidIdentifier(_) => {
                AppError::BadRequest(err.to_string())
            }
            StoreError::NotFound(_) => AppError::NotFound(err.to_string()),
            StoreError::Store(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, address: &str) -> RegisterRestaurantRequest {
        RegisterRestaurantRequest {
            name: name.to_string(),
            address: address.to_string(),
            distance: None,
            estimated_pickup_time: None,
            operation_hours: Vec::new(),
            dashpass_enabled: None,
        }
    }

    #[test]
    fn register_request_requires_name_and_address() {
        assert!(request("Taqueria", "1 Mission St").validate().is_ok());
        assert!(request("", "1 Mission St").validate().is_err());
        assert!(request("Taqueria", "   ").validate().is_err());
    }

    #[test]
    fn register_request_carries_all_fields_into_candidate() {
        let mut req = request("Taqueria", "1 Mission St");
        req.distance = Some(2.0);
        req.dashpass_enabled = Some(false);

        let candidate = req.into_candidate();
        assert!(candidate.id.is_none());
        assert_eq!(candidate.name, "Taqueria");
        assert_eq!(candidate.address, "1 Mission St");
        assert_eq!(candidate.distance, Some(2.0));
        assert_eq!(candidate.dashpass_enabled, Some(false));
    }

    #[test]
    fn store_errors_map_to_the_documented_status_classes() {
        let duplicate = AppError::from(StoreError::DuplicateAddress("1 Mission St".to_string()));
        assert_eq!(duplicate.into_response().status(), StatusCode::BAD_REQUEST);

        let malformed = AppError::from(StoreError::InvalidIdentifier("nope".to_string()));
        assert_eq!(malformed.into_response().status(), StatusCode::BAD_REQUEST);

        let missing = AppError::from(StoreError::NotFound("507f1f77bcf86cd799439011".to_string()));
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }
}
