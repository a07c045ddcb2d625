//! Product REST handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use catalog_core::error::AppError;
use catalog_entity::Product;

use crate::controllers::ModelState;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/products
pub async fn get_products(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(state.products_api.get_products().await?.into_response())
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    Ok(state.products_api.get_product(id).await?.into_response())
}

/// PUT /api/products/{id}
pub async fn put_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<Product>, JsonRejection>,
) -> Result<Response, ApiError> {
    let product = validated(body)?;
    Ok(state
        .products_api
        .put_product(id, product)
        .await?
        .into_response())
}

/// POST /api/products
pub async fn post_product(
    State(state): State<AppState>,
    body: Result<Json<Product>, JsonRejection>,
) -> Result<Response, ApiError> {
    let product = validated(body)?;
    Ok(state.products_api.post_product(product).await?.into_response())
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    Ok(state.products_api.delete_product(id).await?.into_response())
}

/// Reject malformed or invalid bodies with 400 before any action runs.
fn validated(body: Result<Json<Product>, JsonRejection>) -> Result<Product, ApiError> {
    let Json(product) =
        body.map_err(|e| AppError::validation(format!("Invalid product body: {}", e.body_text())))?;

    let mut state = ModelState::new();
    state.validate(&product);
    if !state.is_valid() {
        return Err(AppError::validation(state.summary()).into());
    }
    Ok(product)
}
