use crate::api::models::*;
use crate::storage::{AggregateResult, Review};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

pub async fn list_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = state.aggregator.list_all_sorted_by_rating_desc().await?;

    info!(count = reviews.len(), "Listed reviews by rating");
    Ok(Json(reviews))
}

/// Review statistics for one restaurant. A restaurant no review references
/// still gets a well-formed all-zero body, served under 404 to flag the
/// absence at the boundary.
pub async fn average_rating_handler(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let result = state.aggregator.average_for(&restaurant_id).await?;

    info!(
        %restaurant_id,
        total_reviews = result.total_reviews,
        "Computed review average"
    );

    Ok((aggregate_status(&result), Json(result)))
}

fn aggregate_status(result: &AggregateResult) -> StatusCode {
    if result.is_absent() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_review_aggregate_is_served_as_not_found() {
        let absent = AggregateResult::absent("ghost".to_string());
        assert_eq!(aggregate_status(&absent), StatusCode::NOT_FOUND);
    }

    #[test]
    fn populated_aggregate_is_served_as_ok() {
        let result = AggregateResult {
            restaurant_id: "abc".to_string(),
            total_reviews: 3,
            sum_rating: 12.0,
            average_rating: 4.0,
        };
        assert_eq!(aggregate_status(&result), StatusCode::OK);
    }
}
