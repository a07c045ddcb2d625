//! REST product actions.

use std::sync::Arc;

use tracing::{info, warn};

use catalog_core::result::AppResult;
use catalog_core::traits::Repository;
use catalog_entity::Product;

use super::result::ApiReply;

/// Name of the action that reads a single product.
pub const GET_PRODUCT: &str = "get_product";

/// Location of a product resource.
pub fn product_location(id: i32) -> String {
    format!("/api/products/{id}")
}

/// REST product actions over a product repository.
#[derive(Clone)]
pub struct ProductsApiController {
    repository: Arc<dyn Repository<Product>>,
}

impl ProductsApiController {
    /// Create a controller over `repository`.
    pub fn new(repository: Arc<dyn Repository<Product>>) -> Self {
        Self { repository }
    }

    /// GET /api/products
    pub async fn get_products(&self) -> AppResult<ApiReply<Vec<Product>>> {
        let products = self.repository.get_all().await?;
        Ok(ApiReply::Ok(products))
    }

    /// GET /api/products/{id}
    pub async fn get_product(&self, id: i32) -> AppResult<ApiReply<Product>> {
        match self.repository.get_by_id(id).await? {
            Some(product) => Ok(ApiReply::Ok(product)),
            None => Ok(ApiReply::NotFound),
        }
    }

    /// PUT /api/products/{id}
    ///
    /// Does not check that the product exists before updating it.
    pub async fn put_product(&self, id: i32, product: Product) -> AppResult<ApiReply<Product>> {
        if id != product.id {
            warn!(route_id = id, product_id = product.id, "PUT id mismatch");
            return Ok(ApiReply::BadRequest);
        }
        self.repository.update(&product).await?;
        info!(product_id = id, "Product replaced");
        Ok(ApiReply::NoContent)
    }

    /// POST /api/products
    pub async fn post_product(&self, product: Product) -> AppResult<ApiReply<Product>> {
        let created = self.repository.create(&product).await?;
        info!(product_id = created.id, "Product created");
        Ok(ApiReply::Created {
            route: GET_PRODUCT,
            location: product_location(created.id),
            body: created,
        })
    }

    /// DELETE /api/products/{id}
    pub async fn delete_product(&self, id: i32) -> AppResult<ApiReply<Product>> {
        let Some(product) = self.repository.get_by_id(id).await? else {
            return Ok(ApiReply::NotFound);
        };
        self.repository.delete(&product).await?;
        info!(product_id = id, "Product deleted");
        Ok(ApiReply::NoContent)
    }
}
