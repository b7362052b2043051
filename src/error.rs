//! Error types for the catalog server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Catalog Error Enum ==
/// Unified error type for the catalog server.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Requested item id is absent from the collection
    #[error("Item not found")]
    NotFound,

    /// Request payload failed validation
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Read or write failure on the backing file
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing file holds content that is not a valid item collection
    #[error("Malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog server.
pub type Result<T> = std::result::Result<T, CatalogError>;
