//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::index::{memory::InMemoryIndexProvider, IndexProvider};
use crate::search::SearchEngine;
use crate::services::SearchService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search_service: Arc<SearchService>,
}

impl AppState {
    /// State backed by an empty in-memory index with the configured
    /// collections registered.
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(InMemoryIndexProvider::with_collections([
            config.index.orders_collection.clone(),
            config.index.customers_collection.clone(),
        ]));
        Self::with_provider(config, provider)
    }

    /// State over a caller-supplied index provider (tests seed their own).
    pub fn with_provider(config: Config, provider: Arc<dyn IndexProvider>) -> Self {
        let engine = SearchEngine::new(provider, config.index.clone(), config.links.clone());
        let search_service = Arc::new(SearchService::new(Arc::new(engine)));
        Self {
            config: Arc::new(config),
            search_service,
        }
    }
}
