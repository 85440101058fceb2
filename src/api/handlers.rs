//! API Handlers
//!
//! HTTP request handlers for each product API endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::Value;

use crate::api::auth::require_api_key;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{ListParams, ProductListResponse, ProductPayload, StatsResponse};
use crate::store::{ListQuery, Product, ProductStore};

/// Application state shared across all handlers.
///
/// Contains the product store wrapped in Arc<RwLock<>> for thread-safe
/// access, plus the loaded configuration for the API-key check.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe product store
    pub store: Arc<RwLock<ProductStore>>,
    /// Server configuration (holds the expected API key)
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: ProductStore, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration, seeding the sample data.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ProductStore::seeded(), config.clone())
    }
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        Self {
            category: params.category,
            search: params.search,
            page: params.page,
            limit: params.limit,
        }
    }
}

/// Handler for GET /
///
/// Plain-text landing route.
pub async fn root_handler() -> &'static str {
    "Hello World!"
}

/// Handler for GET /api/products
///
/// Lists products with optional category/search filters and pagination.
/// Unparseable query parameters become validation errors so the response
/// keeps the JSON error shape.
pub async fn list_products_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<ProductListResponse>> {
    let Query(params) = params.map_err(|r| ApiError::Validation(r.body_text()))?;

    let store = state.store.read().await;
    let page = store.list(&params.into());

    Ok(Json(ProductListResponse::from(page)))
}

/// Handler for GET /api/products/:id
///
/// Retrieves a single product by id.
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let store = state.store.read().await;
    let product = store.get(&id)?;

    Ok(Json(product))
}

/// Handler for GET /api/products/stats
///
/// Returns total product count and per-category counts.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.read().await;
    let stats = store.stats();

    Json(StatsResponse::from(stats))
}

/// Handler for POST /api/products
///
/// Creates a new product. Requires a valid API key and a payload that
/// passes field validation; both checks run before the store is touched.
/// A body that is not valid JSON becomes a validation error rather than
/// a framework rejection, keeping the JSON error shape.
pub async fn create_product_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    require_api_key(&headers, &state.config.api_key)?;
    let Json(body) = body.map_err(|r| ApiError::Validation(r.body_text()))?;
    let payload = ProductPayload::from_value(&body)?;

    let mut store = state.store.write().await;
    let product = store.create(payload);
    tracing::info!(id = %product.id, name = %product.name, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for PUT /api/products/:id
///
/// Replaces every field of an existing product except its id.
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Product>> {
    require_api_key(&headers, &state.config.api_key)?;
    let Json(body) = body.map_err(|r| ApiError::Validation(r.body_text()))?;
    let payload = ProductPayload::from_value(&body)?;

    let mut store = state.store.write().await;
    let product = store.update(&id, payload)?;
    tracing::info!(id = %product.id, "product updated");

    Ok(Json(product))
}

/// Handler for DELETE /api/products/:id
///
/// Removes a product; responds 204 with an empty body on success.
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode> {
    require_api_key(&headers, &state.config.api_key)?;

    let mut store = state.store.write().await;
    store.delete(&id)?;
    tracing::info!(id = %id, "product deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Fallback handler for any unmatched route.
pub async fn fallback_handler() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
