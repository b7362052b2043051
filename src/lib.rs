//! Catalog API - A small catalog browsing server
//!
//! Serves paginated, searchable items persisted in a flat JSON file, plus
//! aggregate stats cached on the file's modification time.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
