//! Response assertion helpers

use anyhow::Context as _;
use axum::http::StatusCode;
use serde_json::Value;

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(actual, expected, "{context}: unexpected status");
}

pub fn items(payload: &Value) -> anyhow::Result<&Vec<Value>> {
    payload
        .get("Items")
        .and_then(Value::as_array)
        .context("payload has no Items array")
}

pub fn total_item_count(payload: &Value) -> anyhow::Result<u64> {
    payload
        .get("TotalItemCount")
        .and_then(Value::as_u64)
        .context("payload has no TotalItemCount")
}

pub fn record_str<'a>(record: &'a Value, key: &str) -> anyhow::Result<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .with_context(|| format!("record has no string field {key:?}"))
}

/// Collect one string field across all items, in response order.
pub fn item_values(payload: &Value, key: &str) -> anyhow::Result<Vec<String>> {
    items(payload)?
        .iter()
        .map(|record| record_str(record, key).map(str::to_string))
        .collect()
}

pub fn error_code(payload: &Value) -> anyhow::Result<&str> {
    payload
        .pointer("/error/code")
        .and_then(Value::as_str)
        .context("payload has no error.code")
}
