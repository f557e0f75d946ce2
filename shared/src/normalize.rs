//! Conversion of DynamoDB items into plain JSON.
//!
//! Sets become arrays in the order the store returned their members. Numbers
//! keep their digits unrounded. Binary attributes and numbers JSON cannot hold
//! are rejected with
//! [`FetchError::DataShape`], naming the attribute path that failed.

use crate::core::Item;
use crate::error::FetchError;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

pub fn normalize_item(item: Item) -> Result<Map<String, Value>, FetchError> {
    item.into_iter()
        .map(|(name, value)| -> Result<(String, Value), FetchError> {
            let value = normalize_value(&name, value)?;
            Ok((name, value))
        })
        .collect()
}

fn normalize_value(path: &str, value: AttributeValue) -> Result<Value, FetchError> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s)),
        AttributeValue::N(n) => parse_number(path, &n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .into_iter()
            .enumerate()
            .map(|(i, v)| normalize_value(&format!("{}[{}]", path, i), v))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(attributes) => attributes
            .into_iter()
            .map(|(name, v)| -> Result<(String, Value), FetchError> {
                let v = normalize_value(&format!("{}.{}", path, name), v)?;
                Ok((name, v))
            })
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.into_iter().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .enumerate()
            .map(|(i, n)| parse_number(&format!("{}[{}]", path, i), n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(FetchError::DataShape(format!(
            "Attribute '{}' holds binary data, which cannot be encoded as JSON",
            path
        ))),
        _ => Err(FetchError::DataShape(format!(
            "Attribute '{}' has an unsupported type",
            path
        ))),
    }
}

/// Keeps the store's exact digits; DynamoDB numbers carry up to 38 of them.
fn parse_number(path: &str, raw: &str) -> Result<Number, FetchError> {
    raw.parse::<Number>().map_err(|_| {
        FetchError::DataShape(format!(
            "Attribute '{}' holds '{}', which is not a JSON number",
            path, raw
        ))
    })
}
