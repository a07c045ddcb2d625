//! Product REST endpoints.

use http::StatusCode;

use crate::helpers::{TestApp, dec};

#[tokio::test]
async fn test_list_starts_empty() {
    let app = TestApp::new().await;
    assert!(app.products().await.is_empty());
}

#[tokio::test]
async fn test_get_unknown_product_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/products/-1", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_creates_and_points_at_new_product() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(serde_json::json!({
                "name": "Blue Pencil",
                "price": "200.50",
                "stock": 100,
                "color": "Blue",
                "category_id": 1,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let created = response.product();
    assert!(created.id > 0);
    let location = format!("/api/products/{}", created.id);
    assert_eq!(response.location(), Some(location.as_str()));

    let fetched = app.request("GET", &location, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert!(fetched.body["price"].is_number(), "{}", fetched.text);
    let product = fetched.product();
    assert_eq!(product.name, "Blue Pencil");
    assert_eq!(product.price, dec("200.50"));
    assert_eq!(product.stock, 100);
    assert_eq!(product.color.as_deref(), Some("Blue"));
    assert_eq!(product.category_id, Some(1));
}

#[tokio::test]
async fn test_post_invalid_product_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(serde_json::json!({ "name": "", "price": "1.00" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(app.products().await.is_empty());
}

#[tokio::test]
async fn test_post_malformed_body_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/products", Some(serde_json::json!({ "stock": "many" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_unknown_category_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(serde_json::json!({ "name": "Stray", "price": "1.00", "category_id": 99 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_put_with_mismatched_id_is_bad_request() {
    let app = TestApp::new().await;
    let product = app.create_product("Blue Pencil", "2.00", Some(1)).await;

    let mut body = serde_json::to_value(&product).expect("json");
    body["name"] = "Renamed".into();
    let path = format!("/api/products/{}", product.id + 1);
    let response = app.request("PUT", &path, Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.products().await[0].name, "Blue Pencil");
}

#[tokio::test]
async fn test_put_replaces_product() {
    let app = TestApp::new().await;
    let product = app.create_product("Blue Pencil", "2.00", Some(1)).await;

    let path = format!("/api/products/{}", product.id);
    let response = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({
                "id": product.id,
                "name": "Spiral Notebook",
                "price": "7.25",
                "stock": 3,
                "category_id": 2,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let updated = app.request("GET", &path, None).await.product();
    assert_eq!(updated.name, "Spiral Notebook");
    assert_eq!(updated.price, dec("7.25"));
    assert_eq!(updated.color, None);
    assert_eq!(updated.category_id, Some(2));
}

#[tokio::test]
async fn test_put_unknown_product_is_no_content_and_creates_nothing() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/api/products/50",
            Some(serde_json::json!({ "id": 50, "name": "Ghost", "price": "1.00" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(app.products().await.is_empty());
}

#[tokio::test]
async fn test_delete_product() {
    let app = TestApp::new().await;
    let product = app.create_product("Blue Pencil", "2.00", Some(1)).await;
    let path = format!("/api/products/{}", product.id);

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let again = app.request("DELETE", &path, None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let fetched = app.request("GET", &path, None).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}
