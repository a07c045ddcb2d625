//! Product page handlers.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use catalog_entity::Product;

use crate::controllers::{ActionResult, products::INDEX};
use crate::dto::ProductForm;
use crate::error::ApiError;
use crate::state::AppState;
use crate::views;

/// GET /products
pub async fn index(State(state): State<AppState>) -> Result<Response, ApiError> {
    let result = state.products.index().await?;
    Ok(match result {
        ActionResult::View(view) => {
            let products = view.model.unwrap_or_default();
            Html(views::products::index(&products)).into_response()
        }
        ActionResult::RedirectToAction(action) => redirect(action),
        ActionResult::NotFound => not_found(),
    })
}

/// GET /products/details/{id}
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    Ok(respond(state.products.details(Some(id)).await?))
}

/// GET /products/details
pub async fn details_without_id(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(respond(state.products.details(None).await?))
}

/// GET /products/create
pub async fn create_form(State(state): State<AppState>) -> Response {
    respond(state.products.create_form())
}

/// POST /products/create
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Response, ApiError> {
    let (product, model_state) = form.bind();
    Ok(respond(state.products.create(product, model_state).await?))
}

/// GET /products/edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    Ok(respond(state.products.edit_form(Some(id)).await?))
}

/// GET /products/edit
pub async fn edit_form_without_id(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(respond(state.products.edit_form(None).await?))
}

/// POST /products/edit/{id}
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ProductForm>,
) -> Result<Response, ApiError> {
    let (product, model_state) = form.with_route_id(id).bind();
    Ok(respond(state.products.edit(id, product, model_state).await?))
}

/// GET /products/delete/{id}
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    Ok(respond(state.products.delete_form(Some(id)).await?))
}

/// GET /products/delete
pub async fn delete_form_without_id(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(respond(state.products.delete_form(None).await?))
}

/// POST /products/delete/{id}
pub async fn delete_confirmed(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    Ok(respond(state.products.delete_confirmed(id).await?))
}

fn respond(result: ActionResult<Product>) -> Response {
    match result {
        ActionResult::View(view) => Html(views::products::render(&view)).into_response(),
        ActionResult::RedirectToAction(action) => redirect(action),
        ActionResult::NotFound => not_found(),
    }
}

fn redirect(action: &str) -> Response {
    let target = match action {
        INDEX => "/products".to_string(),
        other => format!("/products/{}", other.to_lowercase()),
    };
    Redirect::to(&target).into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(views::not_found())).into_response()
}
