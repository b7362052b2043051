//! Request and Response models for the catalog server API
//!
//! This module defines the catalog record itself plus the DTOs
//! (Data Transfer Objects) used for serializing/deserializing HTTP
//! request and response bodies.

pub mod item;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::Item;
pub use requests::{CreateItemRequest, ListQuery};
pub use responses::{ErrorResponse, HealthResponse, PageResult};
