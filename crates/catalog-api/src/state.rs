//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use catalog_core::config::AppConfig;
use catalog_core::traits::Repository;
use catalog_database::DataContext;
use catalog_entity::{Category, Product};

use crate::controllers::{ProductsApiController, ProductsController};

/// Shared application state.
///
/// Cloned into every handler by Axum's `State` extractor; every field is
/// cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Data context backing every repository.
    pub db: DataContext,
    /// Page-oriented product actions.
    pub products: ProductsController,
    /// REST product actions.
    pub products_api: ProductsApiController,
    /// Category repository.
    pub categories: Arc<dyn Repository<Category>>,
}

impl AppState {
    /// Wire controllers and repositories over a data context.
    ///
    /// Both product controllers share one repository instance.
    pub fn new(config: AppConfig, db: DataContext) -> Self {
        let products: Arc<dyn Repository<Product>> = Arc::new(db.repository::<Product>());
        let categories: Arc<dyn Repository<Category>> = Arc::new(db.repository::<Category>());

        Self {
            config: Arc::new(config),
            products: ProductsController::new(Arc::clone(&products)),
            products_api: ProductsApiController::new(products),
            categories,
            db,
        }
    }
}
