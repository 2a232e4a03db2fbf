use crate::storage::documents::Review;
use crate::storage::StoreError;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

/// Per-restaurant review statistics.
///
/// A restaurant with no matching reviews yields the all-zero structure; that
/// is a defined value, not an error, and the HTTP boundary is what flags it
/// as absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub restaurant_id: String,
    pub total_reviews: i64,
    pub sum_rating: f64,
    pub average_rating: f64,
}

impl AggregateResult {
    /// The zero-state for a restaurant id no review references.
    pub fn absent(restaurant_id: String) -> Self {
        Self {
            restaurant_id,
            total_reviews: 0,
            sum_rating: 0.0,
            average_rating: 0.0,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.total_reviews == 0
    }
}

/// Shape of the single `$group` row produced by the average pipeline.
#[derive(Debug, Deserialize)]
struct GroupRow {
    #[serde(rename = "_id")]
    restaurant_id: String,
    #[serde(rename = "totalReviews")]
    total_reviews: i64,
    #[serde(rename = "sumRating")]
    sum_rating: f64,
    #[serde(rename = "averageRating")]
    average_rating: f64,
}

/// Read-side review statistics over the `reviews` collection.
pub struct ReviewAggregator {
    collection: Collection<Review>,
}

impl ReviewAggregator {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("reviews"),
        }
    }

    /// Every stored review, ordered by `rating` descending. The tie-break
    /// among equal ratings is store-native order and not specified.
    pub async fn list_all_sorted_by_rating_desc(&self) -> Result<Vec<Review>, StoreError> {
        let cursor = self.collection.find(doc! {}).sort(rating_sort()).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Count, sum, and rounded mean rating over all reviews whose
    /// `restaurantId` equals the input, matched literally (no identifier
    /// validation, dangling references included).
    pub async fn average_for(&self, restaurant_id: &str) -> Result<AggregateResult, StoreError> {
        let pipeline = vec![
            doc! { "$match": { "restaurantId": restaurant_id } },
            doc! { "$group": {
                "_id": "$restaurantId",
                "totalReviews": { "$sum": 1 },
                "sumRating": { "$sum": "$rating" },
                "averageRating": { "$avg": "$rating" },
            }},
        ];

        let mut cursor = self.collection.aggregate(pipeline).await?;
        let Some(row) = cursor.try_next().await? else {
            return Ok(AggregateResult::absent(restaurant_id.to_string()));
        };

        let row: GroupRow =
            mongodb::bson::from_document(row).map_err(mongodb::error::Error::from)?;
        Ok(AggregateResult {
            restaurant_id: row.restaurant_id,
            total_reviews: row.total_reviews,
            sum_rating: row.sum_rating,
            // Rounded here rather than with $round, which rounds half to even.
            average_rating: round_to_tenths(row.average_rating),
        })
    }
}

/// Round to one decimal place, halves away from zero (4.25 -> 4.3).
fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Sort key for review listings: `rating` descending.
fn rating_sort() -> mongodb::bson::Document {
    doc! { "rating": -1 }
}
