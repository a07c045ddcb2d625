//! Controllers: framework-independent action logic.
//!
//! Each action talks to a [`catalog_core::traits::Repository`] and returns
//! a result value describing the response. Handlers in
//! [`crate::handlers`] turn those values into HTTP responses.

pub mod model_state;
pub mod products;
pub mod products_api;
pub mod result;

pub use model_state::ModelState;
pub use products::ProductsController;
pub use products_api::ProductsApiController;
pub use result::{ActionResult, ApiReply, ViewResult};
