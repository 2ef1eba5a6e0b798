//! Error types for the search service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A required input was blank (e.g. the entity kind).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unrecognized entity kind: {0}")]
    UnrecognizedEntityKind(String),

    /// A requested output field is absent from a matched document.
    #[error("Field not found on document: {field}")]
    FieldNotFound { field: String },

    /// Failure surfaced from the index collaborator, passed through unchanged.
    #[error("Index error: {0}")]
    Index(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Error::InvalidArgument(_)
            | Error::UnrecognizedEntityKind(_)
            | Error::FieldNotFound { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::Index(_) | Error::Internal(_) | Error::Other(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code(&self),
                "message": error_message,
            }
        }));

        (status, body).into_response()
    }
}

fn error_code(error: &Error) -> &'static str {
    match error {
        Error::InvalidArgument(_) => "invalid-argument",
        Error::UnrecognizedEntityKind(_) => "unrecognized-entity-kind",
        Error::FieldNotFound { .. } => "field-not-found",
        Error::Index(_) => "index-error",
        Error::Internal(_) | Error::Other(_) => "internal",
    }
}
