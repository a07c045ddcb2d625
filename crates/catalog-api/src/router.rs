//! Route definitions.
//!
//! Product pages live under `/products`, JSON endpoints under `/api`.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(page_routes())
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Server-rendered product pages.
fn page_routes() -> Router<AppState> {
    use handlers::products;

    Router::new()
        .route("/products", get(products::index))
        .route("/products/details", get(products::details_without_id))
        .route("/products/details/{id}", get(products::details))
        .route(
            "/products/create",
            get(products::create_form).post(products::create),
        )
        .route("/products/edit", get(products::edit_form_without_id))
        .route(
            "/products/edit/{id}",
            get(products::edit_form).post(products::edit),
        )
        .route("/products/delete", get(products::delete_form_without_id))
        .route(
            "/products/delete/{id}",
            get(products::delete_form).post(products::delete_confirmed),
        )
}

/// JSON endpoints.
fn api_routes() -> Router<AppState> {
    use handlers::{categories, health, products_api};

    Router::new()
        .route(
            "/products",
            get(products_api::get_products).post(products_api::post_product),
        )
        .route(
            "/products/{id}",
            get(products_api::get_product)
                .put(products_api::put_product)
                .delete(products_api::delete_product),
        )
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}",
            get(categories::get_category).delete(categories::delete_category),
        )
        .route("/health", get(health::health))
}
