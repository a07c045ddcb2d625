//! HTTP request handlers.
//!
//! Thin adapters between Axum extractors and the controllers.

pub mod categories;
pub mod health;
pub mod products;
pub mod products_api;
