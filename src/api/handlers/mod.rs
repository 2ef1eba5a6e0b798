//! HTTP handlers

pub mod search;
