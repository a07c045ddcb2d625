//! Category handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use catalog_core::error::AppError;
use catalog_entity::Category;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.categories.get_all().await?))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>, ApiError> {
    let category = find(&state, id).await?;
    Ok(Json(category))
}

/// DELETE /api/categories/{id}
///
/// The store removes every product in the category along with it.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let category = find(&state, id).await?;
    state.categories.delete(&category).await?;
    info!(category_id = id, "Category deleted with its products");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: i32) -> Result<Category, ApiError> {
    state
        .categories
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")).into())
}
