//! API Module
//!
//! HTTP handlers, authentication check and routing for the product REST API.
//!
//! # Endpoints
//! - `GET /` - Plain-text landing route
//! - `GET /api/products` - List products with filtering and pagination
//! - `POST /api/products` - Create a product (API key required)
//! - `GET /api/products/stats` - Catalog statistics
//! - `GET /api/products/:id` - Get a product by id
//! - `PUT /api/products/:id` - Replace a product (API key required)
//! - `DELETE /api/products/:id` - Delete a product (API key required)

pub mod auth;
pub mod handlers;
pub mod routes;

pub use auth::require_api_key;
pub use handlers::*;
pub use routes::create_router;
