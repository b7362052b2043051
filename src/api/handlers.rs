//! API Handlers
//!
//! HTTP request handlers for each catalog server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::error::{CatalogError, Result};
use crate::models::{CreateItemRequest, HealthResponse, Item, ListQuery, PageResult};
use crate::store::{ItemStore, StatsCache, StatsSnapshot};

/// Application state shared across all handlers.
///
/// The store is stateless between calls, so it is shared plainly behind an
/// Arc. The stats cache is the only mutable cross-request state and takes a
/// single RwLock so invalidation and reads never race.
#[derive(Clone)]
pub struct AppState {
    /// Flat-file item store
    pub store: Arc<ItemStore>,
    /// Mtime-keyed stats cache
    pub stats: Arc<RwLock<StatsCache>>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: ItemStore) -> Self {
        Self {
            store: Arc::new(store),
            stats: Arc::new(RwLock::new(StatsCache::new())),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(ItemStore::from_config(config))
    }
}

/// Handler for GET /api/items
///
/// Returns one page of the collection, optionally filtered by a
/// case-insensitive name substring.
pub async fn list_items_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PageResult>> {
    let result = state.store.list(&query).await?;
    Ok(Json(result))
}

/// Handler for GET /api/items/:id
///
/// Returns the matching item, or 404 when the id is absent.
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Item>> {
    let item = state.store.get(id).await?;
    Ok(Json(item))
}

/// Handler for POST /api/items
///
/// Validates the payload, persists the new item, and returns it with its
/// server-assigned id and a 201 status.
pub async fn create_item_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>)> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CatalogError::Validation(error_msg));
    }

    let item = state.store.create(&req).await?;
    info!(id = item.id, name = %item.name, "item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Handler for GET /api/stats
///
/// Returns the cached snapshot when the backing file is unchanged, and
/// recomputes it otherwise.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsSnapshot>> {
    // Single-writer lock: the mtime check and any recompute happen as one
    // critical section.
    let mut stats = state.stats.write().await;
    let snapshot = stats.get(&state.store).await?;

    Ok(Json(snapshot))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
