//! # catalog-entity
//!
//! Entity models for the product catalog. Every struct in this crate
//! represents a database table row. Entities derive `Debug`, `Clone`,
//! `Serialize`, `Deserialize`, decode from `sqlx` rows, and implement
//! [`catalog_core::traits::Entity`].

pub mod category;
pub mod product;

pub use category::Category;
pub use product::Product;
