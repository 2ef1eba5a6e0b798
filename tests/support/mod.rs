pub mod assertions;
pub mod builders;

use anyhow::Context as _;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use merx::{api::create_router, index::memory::InMemoryIndexProvider, index::Document, AppState, Config};
use std::sync::Arc;
use tower::ServiceExt as _;

// Re-export commonly used items
#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use builders::*;

pub struct TestApp {
    pub router: Router,
    pub provider: Arc<InMemoryIndexProvider>,
    orders_collection: String,
    customers_collection: String,
}

impl TestApp {
    pub fn new() -> Self {
        Self::new_with_config(|_| {})
    }

    pub fn new_with_config(configure: impl FnOnce(&mut Config)) -> Self {
        let mut config = Config::default();
        configure(&mut config);

        let orders_collection = config.index.orders_collection.clone();
        let customers_collection = config.index.customers_collection.clone();

        let provider = Arc::new(InMemoryIndexProvider::with_collections([
            orders_collection.clone(),
            customers_collection.clone(),
        ]));
        let state = AppState::with_provider(config, provider.clone());

        Self {
            router: create_router(state),
            provider,
            orders_collection,
            customers_collection,
        }
    }

    pub fn seed_orders<I: IntoIterator<Item = Document>>(&self, documents: I) {
        self.provider.insert_all(&self.orders_collection, documents);
    }

    pub fn seed_customers<I: IntoIterator<Item = Document>>(&self, documents: I) {
        self.provider.insert_all(&self.customers_collection, documents);
    }

    /// GET /api/search with the given form parameters in the query string.
    pub async fn search(
        &self,
        params: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let query = encode_params(params);
        self.request(Method::GET, &format!("/api/search?{query}"), None)
            .await
    }

    /// POST /api/search with the given form parameters in the body.
    pub async fn search_post(
        &self,
        params: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let body = encode_params(params);
        self.request(Method::POST, "/api/search", Some(body)).await
    }

    pub async fn request(
        &self,
        method: Method,
        path_and_query: &str,
        form_body: Option<String>,
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let mut builder = Request::builder()
            .method(method)
            .uri(path_and_query)
            .header("host", "example.org");

        let body = match form_body {
            Some(body) => {
                builder = builder.header("content-type", "application/x-www-form-urlencoded");
                Body::from(body)
            }
            None => Body::empty(),
        };

        let request = builder.body(body).context("build request")?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;
        let payload: serde_json::Value =
            serde_json::from_slice(&bytes).context("parse response JSON")?;

        Ok((status, payload))
    }
}

pub fn encode_params(params: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
