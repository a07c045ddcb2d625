//! Page-oriented product actions.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use catalog_core::result::AppResult;
use catalog_core::traits::Repository;
use catalog_entity::Product;

use super::model_state::ModelState;
use super::result::ActionResult;

/// Action the create/edit/delete flows return to.
pub const INDEX: &str = "Index";

/// Product page actions over a product repository.
#[derive(Clone)]
pub struct ProductsController {
    repository: Arc<dyn Repository<Product>>,
}

impl ProductsController {
    /// Create a controller over `repository`.
    pub fn new(repository: Arc<dyn Repository<Product>>) -> Self {
        Self { repository }
    }

    /// GET /products
    pub async fn index(&self) -> AppResult<ActionResult<Vec<Product>>> {
        let products = self.repository.get_all().await?;
        Ok(ActionResult::view("Index", products))
    }

    /// GET /products/details/{id}
    pub async fn details(&self, id: Option<i32>) -> AppResult<ActionResult<Product>> {
        let Some(id) = id else {
            return Ok(ActionResult::RedirectToAction(INDEX));
        };
        self.show("Details", id).await
    }

    /// GET /products/create
    pub fn create_form(&self) -> ActionResult<Product> {
        ActionResult::empty_view("Create")
    }

    /// POST /products/create
    pub async fn create(
        &self,
        product: Product,
        model_state: ModelState,
    ) -> AppResult<ActionResult<Product>> {
        if !model_state.is_valid() {
            warn!(errors = %model_state.summary(), "Rejected product submission");
            return Ok(ActionResult::invalid_view("Create", product, model_state));
        }

        let created = self.repository.create(&product).await?;
        info!(product_id = created.id, name = %created.name, "Product created");
        Ok(ActionResult::RedirectToAction(INDEX))
    }

    /// GET /products/edit/{id}
    pub async fn edit_form(&self, id: Option<i32>) -> AppResult<ActionResult<Product>> {
        let Some(id) = id else {
            return Ok(ActionResult::RedirectToAction(INDEX));
        };
        self.show("Edit", id).await
    }

    /// POST /products/edit/{id}
    ///
    /// A route id that disagrees with the submitted product answers
    /// not-found before validity is considered.
    pub async fn edit(
        &self,
        id: i32,
        product: Product,
        model_state: ModelState,
    ) -> AppResult<ActionResult<Product>> {
        if id != product.id {
            warn!(route_id = id, product_id = product.id, "Edit id mismatch");
            return Ok(ActionResult::NotFound);
        }

        if !model_state.is_valid() {
            warn!(product_id = id, errors = %model_state.summary(), "Rejected product edit");
            return Ok(ActionResult::invalid_view("Edit", product, model_state));
        }

        self.repository.update(&product).await?;
        info!(product_id = id, "Product updated");
        Ok(ActionResult::RedirectToAction(INDEX))
    }

    /// GET /products/delete/{id}
    ///
    /// Unlike `details` and `edit_form`, a missing id answers not-found.
    pub async fn delete_form(&self, id: Option<i32>) -> AppResult<ActionResult<Product>> {
        let Some(id) = id else {
            return Ok(ActionResult::NotFound);
        };
        self.show("Delete", id).await
    }

    /// POST /products/delete/{id}
    ///
    /// Has no not-found branch: an absent product is handed to the store
    /// by id alone and the store reports the failure, while `delete_form`
    /// answers 404 for the same id.
    pub async fn delete_confirmed(&self, id: i32) -> AppResult<ActionResult<Product>> {
        let product = match self.repository.get_by_id(id).await? {
            Some(product) => product,
            None => {
                warn!(product_id = id, "Deleting a product that was not found");
                Product::new(String::new(), Decimal::ZERO, 0).with_id(id)
            }
        };

        self.repository.delete(&product).await?;
        info!(product_id = id, "Product deleted");
        Ok(ActionResult::RedirectToAction(INDEX))
    }

    async fn show(&self, view: &'static str, id: i32) -> AppResult<ActionResult<Product>> {
        match self.repository.get_by_id(id).await? {
            Some(product) => Ok(ActionResult::view(view, product)),
            None => Ok(ActionResult::NotFound),
        }
    }
}
