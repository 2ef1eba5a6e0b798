//! merx - customer & order search service
//!
//! Translates flat, paginated, filterable search requests for two commerce
//! entity kinds (customers, orders) into queries against a full-text index,
//! and reshapes matched documents into flat, client-ready records:
//! - Query construction with well-defined precedence and fallback rules
//!   (term wildcards, scoping, sorting, pagination)
//! - Result projection merging mandatory and requested output fields
//! - Narrow, trait-based contract to the index collaborator with an
//!   in-memory reference implementation

pub mod api;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod search;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
