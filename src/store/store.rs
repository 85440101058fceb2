//! Product Store Module
//!
//! In-memory catalog engine implementing list/get/create/update/delete/stats.

use std::collections::HashMap;

use crate::error::{ApiError, Result};
use crate::models::ProductPayload;
use crate::store::{new_product_id, Product};

/// Default page number when the client omits `page`.
pub const DEFAULT_PAGE: i64 = 1;
/// Default page size when the client omits `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

// == List Query ==
/// Filtering and pagination parameters for a list operation.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Case-insensitive exact category filter
    pub category: Option<String>,
    /// Case-insensitive substring filter on product name
    pub search: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
    /// Page size
    pub limit: Option<i64>,
}

// == List Page ==
/// One page of list results.
///
/// `total` counts all products that matched the filters, before pagination.
#[derive(Debug, Clone)]
pub struct ListPage {
    pub products: Vec<Product>,
    pub total: usize,
    pub page: i64,
    pub limit: i64,
}

// == Catalog Stats ==
/// Aggregate counts over the whole catalog.
#[derive(Debug, Clone)]
pub struct CatalogStats {
    /// Number of products in the catalog
    pub total_products: usize,
    /// Product count per category name
    pub categories: HashMap<String, usize>,
}

// == Product Store ==
/// In-memory product collection.
///
/// Owned by the application state behind a lock; all operations here are
/// synchronous and act on the full collection.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    // == Constructors ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Creates a store pre-populated with the sample product.
    pub fn seeded() -> Self {
        Self {
            products: vec![Product {
                id: "1".to_string(),
                name: "Sample Product".to_string(),
                description: "Sample description".to_string(),
                price: 99.99,
                category: "Electronics".to_string(),
                in_stock: true,
            }],
        }
    }

    // == List ==
    /// Returns one page of products matching the query filters.
    ///
    /// Filters by exact category match, then by substring match on name,
    /// both case-insensitive. Pagination windows the filtered list with
    /// offset `(page - 1) * limit`. Non-positive `page` or `limit` values
    /// produce an empty page.
    pub fn list(&self, query: &ListQuery) -> ListPage {
        let mut filtered: Vec<&Product> = self.products.iter().collect();

        if let Some(category) = &query.category {
            let wanted = category.to_lowercase();
            filtered.retain(|p| p.category.to_lowercase() == wanted);
        }

        if let Some(search) = &query.search {
            let needle = search.to_lowercase();
            filtered.retain(|p| p.name.to_lowercase().contains(&needle));
        }

        let total = filtered.len();
        let page = query.page.unwrap_or(DEFAULT_PAGE);
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

        // Clamp the window rather than panicking on hostile values
        let (start, count) = if page <= 0 || limit <= 0 {
            (0, 0)
        } else {
            let start = (page - 1).saturating_mul(limit);
            let start = usize::try_from(start).unwrap_or(usize::MAX);
            let count = usize::try_from(limit).unwrap_or(usize::MAX);
            (start, count)
        };

        let products = filtered
            .into_iter()
            .skip(start)
            .take(count)
            .cloned()
            .collect();

        ListPage {
            products,
            total,
            page,
            limit,
        }
    }

    // == Get ==
    /// Retrieves a product by exact id match.
    pub fn get(&self, id: &str) -> Result<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))
    }

    // == Create ==
    /// Appends a new product built from a validated payload.
    ///
    /// The id is derived from the creation timestamp. Same-millisecond
    /// creations are not deduplicated.
    pub fn create(&mut self, payload: ProductPayload) -> Product {
        let product = payload.into_product(new_product_id());
        self.products.push(product.clone());
        product
    }

    // == Update ==
    /// Replaces every field of an existing product except its id.
    pub fn update(&mut self, id: &str, payload: ProductPayload) -> Result<Product> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

        *slot = payload.into_product(id.to_string());
        Ok(slot.clone())
    }

    // == Delete ==
    /// Removes a product by id.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

        self.products.remove(index);
        Ok(())
    }

    // == Stats ==
    /// Accumulates total and per-category counts in a single pass.
    pub fn stats(&self) -> CatalogStats {
        let mut categories: HashMap<String, usize> = HashMap::new();
        for product in &self.products {
            *categories.entry(product.category.clone()).or_insert(0) += 1;
        }

        CatalogStats {
            total_products: self.products.len(),
            categories,
        }
    }

    /// Current number of products, used by tests to check the collection
    /// was left untouched.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true when the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
