//! In-memory index implementation
//!
//! The reference backing for the index contract: predicate evaluation over a
//! plain document list, stable sorting, and skip/take paging. The server
//! binary uses it as its default store and the integration tests seed it
//! directly.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{Document, FieldValue, Hit, IndexQuery, SearchContext, SearchIndex, SortKey};
use crate::search::predicate::MatchPredicate;
use crate::{Error, Result};

#[derive(Default)]
pub struct InMemoryIndexProvider {
    indexes: RwLock<HashMap<String, Arc<InMemoryIndex>>>,
}

impl InMemoryIndexProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with the given collections pre-registered (empty).
    pub fn with_collections<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = Self::new();
        {
            let mut indexes = provider.indexes.write().expect("index registry poisoned");
            for name in names {
                indexes.insert(name.into(), Arc::new(InMemoryIndex::default()));
            }
        }
        provider
    }

    /// Add a document to a collection, creating the collection if needed.
    pub fn insert(&self, collection: &str, document: Document) {
        let index = {
            let mut indexes = self.indexes.write().expect("index registry poisoned");
            indexes
                .entry(collection.to_string())
                .or_insert_with(|| Arc::new(InMemoryIndex::default()))
                .clone()
        };
        index
            .documents
            .write()
            .expect("document list poisoned")
            .push(document);
    }

    pub fn insert_all<I>(&self, collection: &str, documents: I)
    where
        I: IntoIterator<Item = Document>,
    {
        for document in documents {
            self.insert(collection, document);
        }
    }
}

#[async_trait]
impl super::IndexProvider for InMemoryIndexProvider {
    async fn get_index(&self, name: &str) -> Result<Arc<dyn SearchIndex>> {
        let indexes = self.indexes.read().expect("index registry poisoned");
        indexes
            .get(name)
            .cloned()
            .map(|index| index as Arc<dyn SearchIndex>)
            .ok_or_else(|| Error::Index(format!("unknown index collection: {name}")))
    }
}

#[derive(Default)]
pub struct InMemoryIndex {
    documents: RwLock<Vec<Document>>,
}

#[async_trait]
impl SearchIndex for InMemoryIndex {
    async fn create_search_context(&self) -> Result<Box<dyn SearchContext>> {
        // Snapshot at acquisition time; the context stays consistent for the
        // duration of the request.
        let documents = self.documents.read().expect("document list poisoned").clone();
        Ok(Box::new(InMemoryContext { documents }))
    }
}

struct InMemoryContext {
    documents: Vec<Document>,
}

#[async_trait]
impl SearchContext for InMemoryContext {
    async fn count(&self, predicate: &MatchPredicate) -> Result<u64> {
        let count = self
            .documents
            .iter()
            .filter(|doc| matches(doc, predicate))
            .count();
        Ok(count as u64)
    }

    async fn execute(&self, query: &IndexQuery) -> Result<Vec<Hit>> {
        let mut matched: Vec<&Document> = self
            .documents
            .iter()
            .filter(|doc| matches(doc, &query.predicate))
            .collect();

        if let Some(sort) = &query.sort {
            matched.sort_by(|a, b| compare_documents(a, b, &sort.key, sort.ascending));
        }

        let matched = match &query.page {
            Some(page) => matched
                .into_iter()
                .skip(page.skip as usize)
                .take(page.take as usize)
                .collect(),
            None => matched,
        };

        Ok(matched
            .into_iter()
            .map(|doc| Hit {
                document: doc.clone(),
                score: 1.0,
            })
            .collect())
    }
}

fn matches(doc: &Document, predicate: &MatchPredicate) -> bool {
    match predicate {
        MatchPredicate::All => true,
        MatchPredicate::Equals {
            field,
            value,
            case_insensitive,
        } => text_field(doc, field).is_some_and(|text| {
            if *case_insensitive {
                text.to_lowercase() == value.to_lowercase()
            } else {
                text == value.as_str()
            }
        }),
        MatchPredicate::StartsWith { field, value } => text_field(doc, field)
            .is_some_and(|text| text.to_lowercase().starts_with(&value.to_lowercase())),
        MatchPredicate::EndsWith { field, value } => text_field(doc, field)
            .is_some_and(|text| text.to_lowercase().ends_with(&value.to_lowercase())),
        MatchPredicate::Contains { field, value } => {
            text_field(doc, field).is_some_and(|text| text.contains(value.as_str()))
        }
        MatchPredicate::And(parts) => parts.iter().all(|p| matches(doc, p)),
        MatchPredicate::Or(parts) => parts.iter().any(|p| matches(doc, p)),
    }
}

fn text_field<'a>(doc: &'a Document, field: &str) -> Option<&'a str> {
    doc.field(field).and_then(FieldValue::as_text)
}

/// Documents without the sort field always order last, in both directions.
fn compare_documents(a: &Document, b: &Document, key: &SortKey, ascending: bool) -> Ordering {
    let ordering = match key {
        SortKey::Date(field) => {
            let a_date = doc_date(a, field);
            let b_date = doc_date(b, field);
            match (a_date, b_date) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Greater,
                (Some(_), None) => return Ordering::Less,
                (Some(x), Some(y)) => x.cmp(&y),
            }
        }
        SortKey::Dynamic(field) => match (a.field(field), b.field(field)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(x), Some(y)) => compare_values(x, y),
        },
    };

    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

fn doc_date(doc: &Document, field: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    doc.field(field).and_then(FieldValue::as_date)
}

fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Text(x), FieldValue::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(y),
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
        // Mixed-type fields fall back to their JSON text form.
        (x, y) => x.to_json().to_string().cmp(&y.to_json().to_string()),
    }
}
