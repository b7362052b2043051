//! Response DTOs for the catalog server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::Item;

/// Response body for the listing endpoint (GET /api/items)
///
/// A bounded slice of the filtered collection plus pagination metadata.
/// Invariants: `total_pages == ceil(total / limit)` and
/// `items.len() == min(limit, max(0, total - (page - 1) * limit))`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// At most `limit` items from the filtered collection
    pub items: Vec<Item>,
    /// Size of the filtered collection before slicing
    pub total: usize,
    /// 1-based page number the slice was taken from
    pub page: u32,
    /// Requested page size
    pub limit: u32,
    /// Number of pages needed to cover `total` items
    pub total_pages: usize,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Message describing what went wrong
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
