//! Store Module
//!
//! In-memory product catalog: the record type and the collection engine
//! behind every API operation.

pub mod product;
#[allow(clippy::module_inception)]
pub mod store;


pub use product::{new_product_id, Product};
pub use store::{CatalogStats, ListPage, ListQuery, ProductStore, DEFAULT_LIMIT, DEFAULT_PAGE};
