pub mod aggregator;
pub mod documents;
pub mod registry;

pub use aggregator::{AggregateResult, ReviewAggregator};
pub use documents::{OperationHours, Restaurant, RestaurantPatch, Review};
pub use registry::RestaurantRegistry;

use thiserror::Error;

/// Failures surfaced by the registry and aggregator. Each maps to exactly
/// one HTTP status class at the boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a restaurant is already registered at address {0:?}")]
    DuplicateAddress(String),

    #[error("no restaurant exists with id {0}")]
    NotFound(String),

    #[error("malformed restaurant id {0:?}")]
    InvalidIdentifier(String),

    #[error("document store error: {0}")]
    Store(#[from] mongodb::error::Error),
}

/// True for a unique-index violation (server code 11000), the signal that a
/// concurrent registration slipped past the address pre-check.
pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}
