//! # catalog-api
//!
//! HTTP layer for the product catalog built on Axum.
//!
//! Hosts the page-oriented products controller, the products REST
//! controller, the categories and health endpoints, middleware, and the
//! HTML views.

pub mod app;
pub mod controllers;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod views;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use state::AppState;
