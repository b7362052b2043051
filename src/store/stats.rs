//! Stats Aggregator Module
//!
//! Computes count and average price over the full collection, cached until
//! the backing file's modification time changes. Invalidation is an explicit
//! mtime check on every read; there is no background watcher.

use std::time::SystemTime;

use serde::Serialize;

use crate::error::Result;
use crate::models::Item;
use crate::store::ItemStore;

// == Stats Snapshot ==
/// Aggregate view of the full collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Number of items in the collection
    pub total: usize,
    /// Mean price across the collection, 0 when empty
    pub average_price: f64,
}

impl StatsSnapshot {
    /// Computes a snapshot from a full collection read.
    pub fn compute(items: &[Item]) -> Self {
        let total = items.len();
        let average_price = if total > 0 {
            items.iter().map(|item| item.price).sum::<f64>() / total as f64
        } else {
            0.0
        };
        Self {
            total,
            average_price,
        }
    }
}

// == Stats Cache ==
/// Snapshot cache keyed on the backing file's modification time.
///
/// Two states: Fresh (cached mtime matches a new stat call, snapshot
/// returned with no collection read) and Stale (no snapshot yet, or the
/// mtime moved, so the collection is re-read and the snapshot recomputed).
/// Callers guard an instance with a single lock; the cache itself holds no
/// shared state.
#[derive(Debug, Default)]
pub struct StatsCache {
    /// Snapshot from the last recompute, None until first use
    snapshot: Option<StatsSnapshot>,
    /// Backing-file mtime the snapshot was computed against
    last_modified: Option<SystemTime>,
}

impl StatsCache {
    // == Constructor ==
    /// Creates an empty cache; the first read always recomputes.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns the current stats, recomputing only when stale.
    ///
    /// The mtime stat call happens on every invocation; its failure
    /// propagates with no stale fallback.
    pub async fn get(&mut self, store: &ItemStore) -> Result<StatsSnapshot> {
        let modified = store.last_modified().await?;

        if self.last_modified == Some(modified) {
            if let Some(snapshot) = &self.snapshot {
                return Ok(snapshot.clone());
            }
        }

        let items = store.load_all().await?;
        let snapshot = StatsSnapshot::compute(&items);
        self.snapshot = Some(snapshot.clone());
        self.last_modified = Some(modified);

        Ok(snapshot)
    }
}
