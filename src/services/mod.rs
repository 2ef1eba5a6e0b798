//! Service layer - coordinates the engine behind the HTTP handlers

pub mod search;

pub use search::{RawSearchInput, SearchService};
