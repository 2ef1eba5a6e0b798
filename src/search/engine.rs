//! Search engine orchestration
//!
//! One pass per request: acquire a search context, build the query, capture
//! the pre-pagination total, execute, project. The context is scoped to this
//! call and dropped on return; nothing is cached or shared across requests.

use std::sync::Arc;

use super::params::{EntityKind, SearchRequest};
use super::projection::{ResultProjector, ResultRecord};
use super::query_builder;
use crate::config::{IndexConfig, LinkConfig};
use crate::index::IndexProvider;
use crate::Result;

/// The engine's answer: projected records plus the total match count before
/// pagination was applied.
#[derive(Debug)]
pub struct SearchOutcome {
    pub records: Vec<ResultRecord>,
    pub total_item_count: u64,
}

pub struct SearchEngine {
    provider: Arc<dyn IndexProvider>,
    index_config: IndexConfig,
    projector: ResultProjector,
}

impl SearchEngine {
    pub fn new(provider: Arc<dyn IndexProvider>, index_config: IndexConfig, links: LinkConfig) -> Self {
        Self {
            provider,
            index_config,
            projector: ResultProjector::new(links),
        }
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        let collection = match request.entity_kind {
            EntityKind::Order => &self.index_config.orders_collection,
            EntityKind::Customer => &self.index_config.customers_collection,
        };

        let index = self.provider.get_index(collection).await?;
        let context = index.create_search_context().await?;

        let query = query_builder::build(request);

        // Total is captured from the predicate alone, before sort and page.
        let total_item_count = context.count(&query.predicate).await?;
        let hits = context.execute(&query).await?;

        let mut records = Vec::with_capacity(hits.len());
        for hit in &hits {
            records.push(self.projector.project(
                request.entity_kind,
                &hit.document,
                &request.requested_fields,
            )?);
        }

        tracing::debug!(
            entity_kind = request.entity_kind.as_str(),
            collection = collection.as_str(),
            total = total_item_count,
            returned = records.len(),
            "search executed"
        );

        Ok(SearchOutcome {
            records,
            total_item_count,
        })
    }
}
