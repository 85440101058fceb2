//! Request DTOs for the product API
//!
//! Defines the structure of incoming HTTP request bodies and the
//! field-by-field payload validator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::store::Product;

/// Request body for creating or updating a product.
///
/// All fields are required; the id is never part of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    /// Display name, must be non-empty
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Unit price, must be non-negative and finite
    pub price: f64,
    /// Category label, must be non-empty
    pub category: String,
    /// Stock flag
    pub in_stock: bool,
}

impl ProductPayload {
    /// Validates a raw JSON body and converts it into a typed payload.
    ///
    /// Checks presence and type of every required field and collects all
    /// problems into a single validation error, so a client sees the full
    /// list at once rather than one field per round trip.
    pub fn from_value(body: &Value) -> Result<Self> {
        let mut problems = Vec::new();

        let name = match body.get("name").and_then(Value::as_str) {
            Some(s) if !s.trim().is_empty() => Some(s.to_string()),
            Some(_) => {
                problems.push("name must be a non-empty string");
                None
            }
            None => {
                problems.push("name is required and must be a string");
                None
            }
        };

        let description = match body.get("description").and_then(Value::as_str) {
            Some(s) => Some(s.to_string()),
            None => {
                problems.push("description is required and must be a string");
                None
            }
        };

        let price = match body.get("price").and_then(Value::as_f64) {
            Some(p) if p >= 0.0 && p.is_finite() => Some(p),
            Some(_) => {
                problems.push("price must be a non-negative number");
                None
            }
            None => {
                problems.push("price is required and must be a number");
                None
            }
        };

        let category = match body.get("category").and_then(Value::as_str) {
            Some(s) if !s.trim().is_empty() => Some(s.to_string()),
            Some(_) => {
                problems.push("category must be a non-empty string");
                None
            }
            None => {
                problems.push("category is required and must be a string");
                None
            }
        };

        let in_stock = match body.get("inStock").and_then(Value::as_bool) {
            Some(b) => Some(b),
            None => {
                problems.push("inStock is required and must be a boolean");
                None
            }
        };

        // Every recorded problem leaves its field as None and vice versa
        match (name, description, price, category, in_stock) {
            (Some(name), Some(description), Some(price), Some(category), Some(in_stock))
                if problems.is_empty() =>
            {
                Ok(Self {
                    name,
                    description,
                    price,
                    category,
                    in_stock,
                })
            }
            _ => Err(ApiError::Validation(format!(
                "Validation failed: {}",
                problems.join(", ")
            ))),
        }
    }

    /// Builds a full product record from this payload and an id.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
        }
    }
}

// == List Query Parameters ==
/// Query string parameters accepted by the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Case-insensitive exact category filter
    pub category: Option<String>,
    /// Case-insensitive substring filter on name
    pub search: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<i64>,
    /// Page size (default 10)
    pub limit: Option<i64>,
}
