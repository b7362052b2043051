//! API Module
//!
//! HTTP handlers and routing for the catalog server REST API.
//!
//! # Endpoints
//! - `GET /api/items` - List items with pagination and search
//! - `GET /api/items/:id` - Retrieve a single item
//! - `POST /api/items` - Create an item
//! - `GET /api/stats` - Collection stats (count, average price)
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
