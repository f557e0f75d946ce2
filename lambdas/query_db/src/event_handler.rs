use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use shared::core::{InvocationResponse, ItemFetcher, ItemStore};

pub(crate) struct HandlerDeps<S: ItemStore> {
    pub fetcher: ItemFetcher<S>,
}

/// The request is logged and otherwise ignored: every invocation reads the same key.
#[tracing::instrument(skip(deps, event), fields(request_id = %event.context.request_id))]
pub(crate) async fn function_handler<S: ItemStore>(
    deps: &HandlerDeps<S>,
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, Error> {
    tracing::info!("Received event: {}", event.payload);

    let response = deps.fetcher.handle().await?;
    Ok(response)
}
