//! Item Store Module
//!
//! Read and mutate the item collection held in a flat JSON file. The file is
//! the single source of truth: every call reads it in full, and mutation
//! rewrites it in full. There is no in-memory copy across calls.

use std::path::PathBuf;
use std::time::SystemTime;

use chrono::Utc;
use tokio::fs;

use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::models::{CreateItemRequest, Item, ListQuery, PageResult};

// == Item Store ==
/// Accessor for the flat-file item collection.
///
/// Holds no collection state of its own, only the path to the backing file
/// and the page size used when a listing request omits `limit`.
#[derive(Debug, Clone)]
pub struct ItemStore {
    /// Path to the JSON file holding the item array
    data_path: PathBuf,
    /// Page size when the query omits `limit`
    default_page_size: u32,
}

impl ItemStore {
    // == Constructor ==
    /// Creates a new ItemStore over the given backing file.
    pub fn new(data_path: impl Into<PathBuf>, default_page_size: u32) -> Self {
        Self {
            data_path: data_path.into(),
            default_page_size,
        }
    }

    /// Creates a new ItemStore from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_path.clone(), config.default_page_size)
    }

    // == Full Read / Full Write ==
    /// Reads and parses the entire collection from the backing file.
    ///
    /// A missing or unreadable file surfaces as an I/O error; readable but
    /// invalid JSON surfaces as a parse error. Neither is recovered here.
    pub async fn load_all(&self) -> Result<Vec<Item>> {
        let raw = fs::read(&self.data_path).await?;
        let items = serde_json::from_slice(&raw)?;
        Ok(items)
    }

    /// Rewrites the backing file with the given collection.
    async fn store_all(&self, items: &[Item]) -> Result<()> {
        let raw = serde_json::to_vec_pretty(items)?;
        fs::write(&self.data_path, raw).await?;
        Ok(())
    }

    /// Returns the backing file's last-modified timestamp.
    ///
    /// A metadata stat call only; no file content is read.
    pub async fn last_modified(&self) -> Result<SystemTime> {
        let meta = fs::metadata(&self.data_path).await?;
        Ok(meta.modified()?)
    }

    // == List ==
    /// Lists a page of items, optionally filtered by name substring.
    ///
    /// Filtering is case-insensitive and preserves insertion order. An
    /// out-of-range page yields an empty items list, never an error.
    pub async fn list(&self, query: &ListQuery) -> Result<PageResult> {
        let items = self.load_all().await?;

        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(self.default_page_size).max(1);

        let results = match query.q.as_deref() {
            Some(q) if !q.is_empty() => filter_by_name(items, q),
            _ => items,
        };

        Ok(paginate(results, page, limit))
    }

    // == Get ==
    /// Retrieves a single item by id via linear scan.
    ///
    /// Absence is a not-found condition, distinct from any storage failure.
    pub async fn get(&self, id: i64) -> Result<Item> {
        let items = self.load_all().await?;
        items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(CatalogError::NotFound)
    }

    // == Create ==
    /// Appends a new item and rewrites the backing file.
    ///
    /// The id is the current time in milliseconds, so two creates in the
    /// same millisecond share an id. The read-append-write sequence is not
    /// serialized across requests; near-simultaneous creates can each read
    /// the pre-append collection and the last write wins. Both are accepted
    /// limitations of the flat-file contract.
    pub async fn create(&self, req: &CreateItemRequest) -> Result<Item> {
        let mut items = self.load_all().await?;

        let item = Item {
            id: Utc::now().timestamp_millis(),
            name: req.name.clone(),
            category: req.category.clone(),
            price: req.price,
        };

        items.push(item.clone());
        self.store_all(&items).await?;

        Ok(item)
    }
}

// == Filter ==
/// Retains items whose lowercased name contains the lowercased query.
///
/// Plain substring match, not tokenized; insertion order is preserved.
pub(crate) fn filter_by_name(items: Vec<Item>, q: &str) -> Vec<Item> {
    let needle = q.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

// == Pagination ==
/// Slices one page out of a collection and derives the page metadata.
///
/// `start = (page - 1) * limit`, clamped to the collection length.
pub(crate) fn paginate(items: Vec<Item>, page: u32, limit: u32) -> PageResult {
    let total = items.len();
    let start = (page as usize - 1).saturating_mul(limit as usize);

    let page_items: Vec<Item> = items
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .collect();

    PageResult {
        items: page_items,
        total,
        page,
        limit,
        total_pages: total.div_ceil(limit as usize),
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FRUIT_JSON: &str = r#"[
        {"id": 1, "name": "Apple", "category": "Fruit", "price": 1.5},
        {"id": 2, "name": "Banana", "category": "Fruit", "price": 0.5}
    ]"#;

    fn seed_store(contents: &str) -> (NamedTempFile, ItemStore) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let store = ItemStore::new(file.path(), 10);
        (file, store)
    }

    #[tokio::test]
    async fn test_list_first_page_of_one() {
        let (_file, store) = seed_store(FRUIT_JSON);
        let query = ListQuery {
            page: Some(1),
            limit: Some(1),
            q: None,
        };

        let result = store.list(&query).await.unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "Apple");
        assert_eq!(result.total, 2);
        assert_eq!(result.page, 1);
        assert_eq!(result.limit, 1);
        assert_eq!(result.total_pages, 2);
    }

    #[tokio::test]
    async fn test_list_filter_case_insensitive() {
        let (_file, store) = seed_store(FRUIT_JSON);
        for q in ["ban", "BAN", "aNa"] {
            let query = ListQuery {
                page: None,
                limit: None,
                q: Some(q.to_string()),
            };
            let result = store.list(&query).await.unwrap();
            assert_eq!(result.total, 1, "query {:?}", q);
            assert_eq!(result.items[0].name, "Banana");
        }
    }

    #[tokio::test]
    async fn test_list_empty_query_matches_all() {
        let (_file, store) = seed_store(FRUIT_JSON);
        let query = ListQuery {
            page: None,
            limit: None,
            q: Some(String::new()),
        };
        let result = store.list(&query).await.unwrap();
        assert_eq!(result.total, 2);
    }

    #[tokio::test]
    async fn test_list_out_of_range_page_is_empty() {
        let (_file, store) = seed_store(FRUIT_JSON);
        let query = ListQuery {
            page: Some(9),
            limit: Some(10),
            q: None,
        };
        let result = store.list(&query).await.unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.total, 2);
        assert_eq!(result.total_pages, 1);
    }

    #[tokio::test]
    async fn test_list_is_idempotent_for_unchanged_storage() {
        let (_file, store) = seed_store(FRUIT_JSON);
        let query = ListQuery {
            page: Some(1),
            limit: Some(1),
            q: Some("a".to_string()),
        };
        let first = store.list(&query).await.unwrap();
        let second = store.list(&query).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_existing_item() {
        let (_file, store) = seed_store(FRUIT_JSON);
        let item = store.get(2).await.unwrap();
        assert_eq!(item.name, "Banana");
    }

    #[tokio::test]
    async fn test_get_missing_item_is_not_found() {
        let (_file, store) = seed_store(FRUIT_JSON);
        let err = store.get(99).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn test_create_appends_and_persists() {
        let (_file, store) = seed_store(FRUIT_JSON);
        let req = CreateItemRequest {
            name: "Cherry".to_string(),
            category: "Fruit".to_string(),
            price: 3.0,
        };

        let created = store.create(&req).await.unwrap();
        assert_eq!(created.name, "Cherry");

        let items = store.load_all().await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], created);
    }

    #[tokio::test]
    async fn test_create_assigns_monotonic_ids() {
        let (_file, store) = seed_store("[]");
        let req = CreateItemRequest {
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: 1.0,
        };

        let first = store.create(&req).await.unwrap();
        let second = store.create(&req).await.unwrap();
        // Same-millisecond creates share an id; ids never decrease.
        assert!(second.id >= first.id);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let store = ItemStore::new("/nonexistent/items.json", 10);
        let err = store.list(&ListQuery::default()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_content_is_parse_error() {
        let (_file, store) = seed_store("{ not an array");
        let err = store.list(&ListQuery::default()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_paginate_empty_collection() {
        let result = paginate(Vec::new(), 1, 10);
        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }
}
