//! Store Module
//!
//! Flat-file persistence for the item collection: paginated, searchable
//! listing plus aggregate stats with modification-time cache invalidation.

mod items;
mod stats;


// Re-export public types
pub use items::ItemStore;
pub use stats::{StatsCache, StatsSnapshot};
