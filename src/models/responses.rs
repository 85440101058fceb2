//! Response DTOs for the product API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::HashMap;

use serde::Serialize;

use crate::store::{CatalogStats, ListPage, Product};

/// Response body for the list endpoint (GET /api/products)
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    /// The requested page of products
    pub products: Vec<Product>,
    /// Count of products matching the filters, before pagination
    pub total: usize,
    /// Echoed page number
    pub page: i64,
    /// Echoed page size
    pub limit: i64,
}

impl From<ListPage> for ProductListResponse {
    fn from(page: ListPage) -> Self {
        Self {
            products: page.products,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}

/// Response body for the stats endpoint (GET /api/products/stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Number of products in the catalog
    pub total_products: usize,
    /// Product count per category name
    pub categories: HashMap<String, usize>,
}

impl From<CatalogStats> for StatsResponse {
    fn from(stats: CatalogStats) -> Self {
        Self {
            total_products: stats.total_products,
            categories: stats.categories,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Message describing what went wrong
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
