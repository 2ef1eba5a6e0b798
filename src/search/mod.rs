//! Query-construction and result-projection engine
//!
//! The core of the service: [`query_builder`] turns a parsed request into an
//! executable index query with well-defined precedence and fallback rules,
//! and [`projection`] reshapes matched documents into flat ordered records.
//! [`engine`] composes the two through the index boundary contract.

pub mod engine;
pub mod fields;
pub mod params;
pub mod predicate;
pub mod projection;
pub mod query_builder;

pub use engine::{SearchEngine, SearchOutcome};
pub use params::{EntityKind, SearchRequest};
