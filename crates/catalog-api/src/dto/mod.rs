//! Request and response DTOs.

pub mod form;
pub mod response;

pub use form::ProductForm;
pub use response::{ApiErrorResponse, HealthResponse};
