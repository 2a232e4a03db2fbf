use crate::storage::documents::{Restaurant, RestaurantPatch};
use crate::storage::{is_duplicate_key, StoreError};
use futures::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};
use tracing::{info, warn};

/// Restaurant lifecycle operations over the `restaurants` collection,
/// enforcing the address-uniqueness invariant.
pub struct RestaurantRegistry {
    collection: Collection<Restaurant>,
}

impl RestaurantRegistry {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("restaurants"),
        }
    }

    /// Create the unique index on `address`. The registration pre-check is
    /// read-then-write and therefore racy; the index closes that window by
    /// turning the losing insert into a duplicate-key error.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let index = IndexModel::builder()
            .keys(doc! { "address": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Register a new restaurant, failing with `DuplicateAddress` if one
    /// already exists at the candidate's address. Returns the stored record
    /// including its generated id.
    pub async fn register(&self, mut candidate: Restaurant) -> Result<Restaurant, StoreError> {
        let existing = self
            .collection
            .find_one(doc! { "address": &candidate.address })
            .await?;
        if existing.is_some() {
            return Err(StoreError::DuplicateAddress(candidate.address));
        }

        candidate.id = None;
        let result = match self.collection.insert_one(&candidate).await {
            Ok(result) => result,
            // Two registrations can race past the pre-check; the unique
            // index decides the loser.
            Err(err) if is_duplicate_key(&err) => {
                warn!(address = %candidate.address, "concurrent registration lost the unique-index race");
                return Err(StoreError::DuplicateAddress(candidate.address));
            }
            Err(err) => return Err(err.into()),
        };

        candidate.id = result.inserted_id.as_object_id();
        info!(address = %candidate.address, "restaurant registered");
        Ok(candidate)
    }

    /// Every stored restaurant, in store-native order.
    pub async fn list_all(&self) -> Result<Vec<Restaurant>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Apply the patch's populated fields onto the restaurant identified by
    /// `id` and return the post-update record. Unpatched fields are left
    /// unchanged.
    pub async fn update(&self, id: &str, patch: &RestaurantPatch) -> Result<Restaurant, StoreError> {
        let object_id = parse_object_id(id)?;

        let set = bson::to_document(patch).map_err(mongodb::error::Error::from)?;
        if set.is_empty() {
            // Nothing to apply; an empty $set is rejected by the server.
            return self
                .collection
                .find_one(doc! { "_id": object_id })
                .await?
                .ok_or_else(|| StoreError::NotFound(id.to_string()));
        }

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Remove and return the restaurant identified by `id`. Reviews keep any
    /// reference to the deleted id; there is no cascade.
    pub async fn delete(&self, id: &str) -> Result<Restaurant, StoreError> {
        let object_id = parse_object_id(id)?;

        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": object_id })
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        info!(%id, "restaurant deleted");
        Ok(deleted)
    }
}

/// Identifier syntax is checked before any query is issued.
fn parse_object_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidIdentifier(id.to_string()))
}
