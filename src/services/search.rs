//! Search service
//!
//! Accepts transport-shaped inputs (flat strings, already extracted from the
//! form by the handler), validates the entity kind before any index access,
//! runs the engine, and assembles the `{Items, TotalItemCount}` payload.

use serde_json::{json, Value};
use std::sync::Arc;

use crate::search::{EntityKind, SearchEngine, SearchRequest};
use crate::Result;

/// Raw request parameters as the transport hands them over. Numeric fields
/// were already defaulted to 0 by the handler when malformed.
#[derive(Debug, Clone, Default)]
pub struct RawSearchInput {
    pub item_type: String,
    pub search_term: Option<String>,
    /// Accepted for interface compatibility; no entity kind uses it.
    pub parent_id: Option<String>,
    pub sort_direction: String,
    pub sort_field: String,
    pub page_index: i64,
    pub page_size: i64,
    /// Store/tenant scope extracted from the request headers field.
    pub scope_key: String,
    pub requested_fields: Vec<String>,
    /// Extracted alongside the scope; logged, not used in query semantics.
    pub language: String,
    pub currency: String,
}

pub struct SearchService {
    engine: Arc<SearchEngine>,
}

impl SearchService {
    pub fn new(engine: Arc<SearchEngine>) -> Self {
        Self { engine }
    }

    /// Run one search and shape the response payload.
    pub async fn search(&self, input: RawSearchInput) -> Result<Value> {
        // Kind validation happens before anything touches the index; a blank
        // or unknown kind aborts the whole request with no partial results.
        let entity_kind = EntityKind::parse(&input.item_type)?;

        tracing::debug!(
            item_type = %input.item_type,
            term = input.search_term.as_deref().unwrap_or(""),
            scope = %input.scope_key,
            language = %input.language,
            currency = %input.currency,
            "search request"
        );

        let request = SearchRequest {
            entity_kind,
            raw_term: input.search_term,
            scope_key: input.scope_key,
            sort_field: input.sort_field,
            sort_direction: input.sort_direction,
            page_index: input.page_index,
            page_size: input.page_size,
            requested_fields: input.requested_fields,
            parent_id: input.parent_id,
        };

        let outcome = self.engine.search(&request).await?;

        Ok(json!({
            "Items": outcome.records,
            "TotalItemCount": outcome.total_item_count,
        }))
    }
}
