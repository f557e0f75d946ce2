use crate::{
    core::{Item, ItemStore, LookupKey},
    error::StoreError,
};
use async_trait::async_trait;
use aws_sdk_dynamodb::{
    error::{DisplayErrorContext, ProvideErrorMetadata},
    types::AttributeValue,
    Client,
};

#[derive(Debug)]
pub struct DynamoDbItemStore {
    table_name: String,
    dynamodb_client: Client,
}

impl DynamoDbItemStore {
    pub fn new(table_name: String, dynamodb_client: Client) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }
}

#[async_trait]
impl ItemStore for DynamoDbItemStore {
    async fn get_item(&self, key: &LookupKey) -> Result<Item, StoreError> {
        let mut get_item = self.dynamodb_client.get_item().table_name(&self.table_name);
        for (name, value) in key.attributes() {
            get_item = get_item.key(name, AttributeValue::S(value.to_string()));
        }

        let result = get_item.send().await.map_err(|e| {
            // prefer the service's own message, e.g. "Requested resource not found"
            let message = e
                .as_service_error()
                .and_then(|service_error| service_error.message())
                .map(|m| m.to_string())
                .unwrap_or_else(|| DisplayErrorContext(&e).to_string());
            StoreError::Service(message)
        })?;

        result.item.ok_or(StoreError::ItemNotFound)
    }
}
