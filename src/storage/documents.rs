use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A single entry in a restaurant's weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationHours {
    pub day: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
}

/// Restaurant document. `address` is unique across the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_pickup_time: Option<f64>,
    pub address: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operation_hours: Vec<OperationHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashpass_enabled: Option<bool>,
}

/// Partial restaurant used for `$set` updates. A `None` field is left
/// untouched on the stored document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_pickup_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_hours: Option<Vec<OperationHours>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashpass_enabled: Option<bool>,
}

/// Review document. `restaurant_id` is a plain string reference; a dangling
/// reference is tolerated and there is no uniqueness constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub restaurant_id: String,
    pub name: String,
    pub text: String,
    pub rating: f64,
    pub helpful_count: i64,
    pub date: String,
    pub likes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn restaurant_uses_camel_case_wire_names() {
        let restaurant = Restaurant {
            id: None,
            name: "Taqueria".to_string(),
            distance: Some(1.2),
            estimated_pickup_time: Some(15.0),
            address: "1 Mission St".to_string(),
            operation_hours: vec![OperationHours {
                day: "Monday".to_string(),
                open: Some("09:00".to_string()),
                close: Some("21:00".to_string()),
            }],
            dashpass_enabled: Some(true),
        };

        let doc = bson::to_document(&restaurant).unwrap();
        assert!(doc.contains_key("estimatedPickupTime"));
        assert!(doc.contains_key("operationHours"));
        assert!(doc.contains_key("dashpassEnabled"));
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn patch_document_contains_only_populated_fields() {
        let patch = RestaurantPatch {
            name: Some("Renamed".to_string()),
            distance: Some(3.5),
            ..Default::default()
        };

        let doc = bson::to_document(&patch).unwrap();
        assert_eq!(doc.len(), 2);
        assert!(doc.contains_key("name"));
        assert!(doc.contains_key("distance"));
        assert!(!doc.contains_key("address"));
    }

    #[test]
    fn review_round_trips_through_bson() {
        let review = Review {
            id: None,
            restaurant_id: "abc123".to_string(),
            name: "Sam".to_string(),
            text: "Great fries".to_string(),
            rating: 4.5,
            helpful_count: 3,
            date: "2024-01-15".to_string(),
            likes: 7,
        };

        let doc = bson::to_document(&review).unwrap();
        assert!(doc.contains_key("restaurantId"));
        assert!(doc.contains_key("helpfulCount"));

        let back: Review = bson::from_document(doc).unwrap();
        assert_eq!(back.rating, 4.5);
        assert_eq!(back.restaurant_id, "abc123");
    }
}
