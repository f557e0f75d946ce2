use crate::event_handler::{function_handler, HandlerDeps};
use lambda_runtime::{run, service_fn, tracing, Error};
use shared::adapters::DynamoDbItemStore;
use shared::core::{ItemFetcher, LookupKey};

mod config;
mod event_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let config = config::Config::load()?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);

    let item_store = DynamoDbItemStore::new(config.admin_table_name, dynamodb_client);
    let fetcher = ItemFetcher::new(item_store, lookup_key());
    let deps = HandlerDeps { fetcher };

    run(service_fn(|event| function_handler(&deps, event))).await
}

#[cfg(not(feature = "single-attribute-key"))]
fn lookup_key() -> LookupKey {
    LookupKey::all_users_set()
}

#[cfg(feature = "single-attribute-key")]
fn lookup_key() -> LookupKey {
    LookupKey::all_users_set_single_attribute()
}
