use thiserror::Error;

/// Outcome of a point lookup that did not yield an item.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The key has no item. Not a failure from the caller's point of view.
    #[error("Item not found")]
    ItemNotFound,

    /// Throttling, missing table, access denied and anything else the store reports.
    #[error("{0}")]
    Service(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Error querying DynamoDB: {0}")]
    Store(String),

    #[error("Error processing item data: {0}")]
    DataShape(String),
}

impl From<StoreError> for FetchError {
    fn from(error: StoreError) -> Self {
        FetchError::Store(error.to_string())
    }
}
