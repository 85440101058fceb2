//! Product Record Module
//!
//! Defines the catalog's single domain entity and id assignment.

use serde::{Deserialize, Serialize};

/// A single product record in the catalog.
///
/// The `id` is assigned once at creation and never changes; every other
/// field is replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned at creation
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Category label used for filtering and stats
    pub category: String,
    /// Whether the product is currently in stock
    pub in_stock: bool,
}

/// Generates a new product id from the current timestamp.
///
/// Ids are milliseconds since the Unix epoch, stringified. Two creations
/// within the same millisecond produce the same id; the catalog does not
/// deduplicate them.
pub fn new_product_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
