//! Boundary contract with the index collaborator
//!
//! The engine assumes an index that can evaluate a [`MatchPredicate`] over its
//! documents, count matches, order them, and slice a page. The contract is
//! deliberately narrow: one provider hands out index handles by collection
//! name, each handle opens a request-scoped search context, and the context
//! answers exactly two questions (how many match, which documents for this
//! query). Contexts are acquired and dropped once per call, never cached.

pub mod document;
pub mod memory;

use async_trait::async_trait;
use std::sync::Arc;

use crate::search::predicate::MatchPredicate;
use crate::Result;

pub use document::{Document, FieldValue};

/// Hands out index handles by collection name.
#[async_trait]
pub trait IndexProvider: Send + Sync {
    async fn get_index(&self, name: &str) -> Result<Arc<dyn SearchIndex>>;
}

/// A single index collection.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Open a search context scoped to the current request. The context is
    /// dropped when the request finishes; it is never reused across calls.
    async fn create_search_context(&self) -> Result<Box<dyn SearchContext>>;
}

/// Request-scoped query execution against one collection.
#[async_trait]
pub trait SearchContext: Send + Sync {
    /// Number of documents satisfying the predicate, before sort or paging.
    async fn count(&self, predicate: &MatchPredicate) -> Result<u64>;

    /// Matched documents, ordered and sliced per the query.
    async fn execute(&self, query: &IndexQuery) -> Result<Vec<Hit>>;
}

/// A fully specified, executable query: filter, optional order, optional page.
#[derive(Debug, Clone)]
pub struct IndexQuery {
    pub predicate: MatchPredicate,
    pub sort: Option<SortSpec>,
    pub page: Option<PageSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub key: SortKey,
    pub ascending: bool,
}

/// What a sort compares.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Typed date comparison on the named field.
    Date(String),
    /// Dynamic field lookup; compares whatever value the field holds.
    Dynamic(String),
}

/// A page slice, applied after sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub skip: u64,
    pub take: u64,
}

/// One matched document with its relevance score.
#[derive(Debug, Clone)]
pub struct Hit {
    pub document: Document,
    pub score: f32,
}
