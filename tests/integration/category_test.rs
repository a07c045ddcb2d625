//! Category endpoints and cascading deletes.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_seeded_categories_are_listed() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/categories", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!([
            { "id": 1, "name": "Pencil" },
            { "id": 2, "name": "Notebook" },
        ])
    );
}

#[tokio::test]
async fn test_get_category() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/categories/2", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Notebook");

    let missing = app.request("GET", "/api/categories/99", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_deleting_category_removes_its_products() {
    let app = TestApp::new().await;
    let pencil = app.create_product("Blue Pencil", "2.00", Some(1)).await;
    let notebook = app.create_product("Ruled Notebook", "4.50", Some(2)).await;
    let loose = app.create_product("Eraser", "0.75", None).await;

    let response = app.request("DELETE", "/api/categories/1", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let ids: Vec<i32> = app.products().await.iter().map(|p| p.id).collect();
    assert!(!ids.contains(&pencil.id));
    assert_eq!(ids, vec![notebook.id, loose.id]);

    let gone = app.request("GET", "/api/categories/1", None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_unknown_category_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("DELETE", "/api/categories/42", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
