//! Search request handler
//!
//! Accepts GET (query string) and POST (`application/x-www-form-urlencoded`
//! body) with the flat form fields the search UI sends:
//!
//! - `itemType` — entity kind (`customer` / `order`)
//! - `searchTerm` — free-text term, may carry `*` wildcards
//! - `Sorting` — direction + field as one string; the first character encodes
//!   the direction (`a` ascending, `d` descending), the remainder the field
//! - `PageIndex` / `PageSize` — malformed values default to 0
//! - `fields` — pipe-delimited requested output fields
//! - `Headers` — pipe-delimited `key:value` pairs; the `Environment` value is
//!   the store scope
//! - `Language` / `Currency` — carried through for logging

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method},
    response::{IntoResponse, Json, Response},
};
use std::collections::HashMap;

use crate::{services::RawSearchInput, state::AppState, Result};

pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
) -> Result<Response> {
    let raw_query = request.uri().query().map(|s| s.to_string());
    let method = request.method().clone();
    let body_bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| crate::Error::InvalidArgument(format!("failed to read request body: {e}")))?;

    let items = extract_search_items(&method, raw_query.as_deref(), &headers, &body_bytes)?;
    let params = items_to_single_map_last(&items);

    let input = input_from_params(&params);
    let payload = state.search_service.search(input).await?;

    Ok(Json(payload).into_response())
}

fn input_from_params(params: &HashMap<String, String>) -> RawSearchInput {
    let sorting = form_value(params, "Sorting");
    RawSearchInput {
        item_type: form_value(params, "itemType").to_string(),
        search_term: params.get("searchTerm").cloned(),
        parent_id: params.get("parentId").cloned(),
        sort_direction: sort_direction_of(sorting),
        sort_field: sort_field_of(sorting),
        page_index: parse_page_number(form_value(params, "PageIndex")),
        page_size: parse_page_number(form_value(params, "PageSize")),
        scope_key: scope_from_headers(form_value(params, "Headers")),
        requested_fields: split_requested_fields(form_value(params, "fields")),
        language: non_blank_or_empty(form_value(params, "Language")),
        currency: non_blank_or_empty(form_value(params, "Currency")),
    }
}

/// Merge parameters from the query string and, for POST, the form body.
fn extract_search_items(
    method: &Method,
    raw_query: Option<&str>,
    headers: &HeaderMap,
    body_bytes: &[u8],
) -> Result<Vec<(String, String)>> {
    let mut items = Vec::new();

    if let Some(q) = raw_query {
        items.extend(parse_form_urlencoded(q));
    }

    if method == Method::POST && !body_bytes.is_empty() {
        let content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if content_type.contains("application/x-www-form-urlencoded") || content_type.is_empty() {
            let body_str = std::str::from_utf8(body_bytes).map_err(|_| {
                crate::Error::InvalidArgument("invalid UTF-8 in request body".to_string())
            })?;
            items.extend(parse_form_urlencoded(body_str));
        } else {
            return Err(crate::Error::InvalidArgument(format!(
                "POST search requires Content-Type: application/x-www-form-urlencoded, got: {content_type}"
            )));
        }
    }

    Ok(items)
}

fn parse_form_urlencoded(s: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(s.as_bytes())
        .into_owned()
        .collect()
}

fn items_to_single_map_last(items: &[(String, String)]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (k, v) in items {
        map.insert(k.clone(), v.clone());
    }
    map
}

fn form_value<'a>(params: &'a HashMap<String, String>, name: &str) -> &'a str {
    params.get(name).map(String::as_str).unwrap_or("")
}

/// The sort direction is the first character of the Sorting value: `a` means
/// ascending, `d` descending, anything else no direction.
fn sort_direction_of(sorting: &str) -> String {
    if sorting.trim().is_empty() {
        return String::new();
    }
    match sorting.chars().next() {
        Some('a') => "Asc".to_string(),
        Some('d') => "Desc".to_string(),
        _ => String::new(),
    }
}

/// The sort field is everything after the direction character.
fn sort_field_of(sorting: &str) -> String {
    if sorting.trim().is_empty() {
        return String::new();
    }
    let mut chars = sorting.chars();
    match chars.next() {
        Some(_) => chars.as_str().to_string(),
        None => String::new(),
    }
}

/// Malformed or absent page numbers default to 0, never fail.
fn parse_page_number(raw: &str) -> i64 {
    if raw.trim().is_empty() {
        return 0;
    }
    raw.trim().parse().unwrap_or(0)
}

fn split_requested_fields(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split('|')
        .filter(|field| !field.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the `Environment` value from pipe-delimited `key:value` pairs.
fn scope_from_headers(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    for item in raw.split('|') {
        let mut parts = item.splitn(2, ':');
        if parts.next() == Some("Environment") {
            if let Some(value) = parts.next() {
                return value.to_string();
            }
        }
    }
    String::new()
}

fn non_blank_or_empty(raw: &str) -> String {
    if raw.trim().is_empty() {
        String::new()
    } else {
        raw.to_string()
    }
}
