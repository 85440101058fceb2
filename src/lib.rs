//! Product API - A minimal in-memory product catalog REST service
//!
//! Provides CRUD operations over a single product collection with
//! filtering, pagination, search and API-key protected mutations.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::{ApiError, Result};
pub use store::ProductStore;
