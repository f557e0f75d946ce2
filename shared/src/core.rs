use crate::error::{FetchError, StoreError};
use crate::normalize::normalize_item;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::Debug;

#[cfg(any(test, feature = "mocks"))]
use mockall::{automock, predicate::*};

pub const STORE_ERROR_MESSAGE: &str = "Error querying DynamoDB";
pub const DATA_ERROR_MESSAGE: &str = "Error processing item data";

pub type Item = HashMap<String, AttributeValue>;

/// Primary key of the single record this function serves.
///
/// Fixed at build time. Nothing in an invocation request feeds into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupKey {
    attributes: Vec<(String, String)>,
}

impl LookupKey {
    pub fn new(partition_name: &str, partition_value: &str) -> Self {
        Self {
            attributes: vec![(partition_name.to_string(), partition_value.to_string())],
        }
    }

    pub fn with_sort(mut self, sort_name: &str, sort_value: &str) -> Self {
        self.attributes
            .push((sort_name.to_string(), sort_value.to_string()));
        self
    }

    /// `{"data_class": "sets", "id": "all_users_set"}`
    pub fn all_users_set() -> Self {
        Self::new("data_class", "sets").with_sort("id", "all_users_set")
    }

    /// `{"sets": "all_users_set"}`, for tables keyed on a single attribute.
    pub fn all_users_set_single_attribute() -> Self {
        Self::new("sets", "all_users_set")
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait ItemStore: Debug {
    async fn get_item(&self, key: &LookupKey) -> Result<Item, StoreError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub const OK: u16 = 200;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;

    pub fn ok<T: Serialize>(payload: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code: Self::OK,
            body: serde_json::to_string(payload)?,
        })
    }

    /// A 500 whose body is `message` encoded as a JSON string.
    pub fn error(message: &str) -> Self {
        Self {
            status_code: Self::INTERNAL_SERVER_ERROR,
            body: Value::String(message.to_string()).to_string(),
        }
    }
}

#[derive(Debug)]
pub struct ItemFetcher<S: ItemStore> {
    store: S,
    key: LookupKey,
}

impl<S: ItemStore> ItemFetcher<S> {
    pub fn new(store: S, key: LookupKey) -> Self {
        Self { store, key }
    }

    /// Looks up the configured key and returns the item as a JSON object.
    ///
    /// A missing item is an empty object, not an error.
    pub async fn fetch(&self) -> Result<Map<String, Value>, FetchError> {
        let item = match self.store.get_item(&self.key).await {
            Ok(item) => item,
            Err(StoreError::ItemNotFound) => Item::new(),
            Err(e) => return Err(e.into()),
        };

        normalize_item(item)
    }

    pub async fn handle(&self) -> Result<InvocationResponse, serde_json::Error> {
        match self.fetch().await {
            Ok(item) => {
                let response = InvocationResponse::ok(&item)?;
                tracing::info!("Queried item: {}", response.body);
                Ok(response)
            }
            Err(e @ FetchError::Store(_)) => {
                tracing::error!("{}", e);
                Ok(InvocationResponse::error(STORE_ERROR_MESSAGE))
            }
            Err(e @ FetchError::DataShape(_)) => {
                tracing::error!("{}", e);
                Ok(InvocationResponse::error(DATA_ERROR_MESSAGE))
            }
        }
    }
}
