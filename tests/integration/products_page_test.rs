//! Server-rendered product pages.

use http::StatusCode;

use crate::helpers::{TestApp, dec};

fn blue_pencil(id: &str) -> Vec<(&str, &str)> {
    vec![
        ("id", id),
        ("name", "Blue Pencil"),
        ("price", "200"),
        ("stock", "100"),
        ("color", "Blue"),
        ("category_id", "1"),
    ]
}

#[tokio::test]
async fn test_create_form_posts_and_redirects_to_index() {
    let app = TestApp::new().await;

    let form = app.request("GET", "/products/create", None).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.text.contains("action=\"/products/create\""));

    let response = app.submit("/products/create", &blue_pencil("0")).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/products"));

    let products = app.products().await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Blue Pencil");
    assert_eq!(products[0].price, dec("200"));
    assert_eq!(products[0].category_id, Some(1));

    let index = app.request("GET", "/products", None).await;
    assert_eq!(index.status, StatusCode::OK);
    assert!(index.text.contains("Blue Pencil"));
}

#[tokio::test]
async fn test_invalid_submission_rerenders_form_without_saving() {
    let app = TestApp::new().await;

    let response = app
        .submit(
            "/products/create",
            &[("name", ""), ("price", "abc"), ("stock", "1")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("field-error"));
    assert!(response.text.contains("The value &#39;abc&#39; is not valid for price."));
    assert!(app.products().await.is_empty());
}

#[tokio::test]
async fn test_index_escapes_product_text() {
    let app = TestApp::new().await;
    app.create_product("<script>alert(1)</script>", "1.00", None).await;

    let index = app.request("GET", "/products", None).await;

    assert!(!index.text.contains("<script>"));
    assert!(index.text.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_pages_without_id() {
    let app = TestApp::new().await;

    let details = app.request("GET", "/products/details", None).await;
    assert_eq!(details.status, StatusCode::SEE_OTHER);
    assert_eq!(details.location(), Some("/products"));

    let edit = app.request("GET", "/products/edit", None).await;
    assert_eq!(edit.status, StatusCode::SEE_OTHER);

    let delete = app.request("GET", "/products/delete", None).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pages_for_unknown_product_are_not_found() {
    let app = TestApp::new().await;

    for path in ["/products/details/9", "/products/edit/9", "/products/delete/9"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn test_details_page_shows_product() {
    let app = TestApp::new().await;
    let product = app.create_product("Blue Pencil", "2.00", Some(1)).await;

    let response = app
        .request("GET", &format!("/products/details/{}", product.id), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("<dd>Blue Pencil</dd>"));
}

#[tokio::test]
async fn test_edit_updates_product() {
    let app = TestApp::new().await;
    let product = app.create_product("Blue Pencil", "2.00", Some(1)).await;
    let id = product.id.to_string();
    let path = format!("/products/edit/{id}");

    let mut fields = blue_pencil(&id);
    fields[1] = ("name", "Red Pencil");
    let response = app.submit(&path, &fields).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(app.products().await[0].name, "Red Pencil");
}

#[tokio::test]
async fn test_edit_without_id_field_uses_route_id() {
    let app = TestApp::new().await;
    let product = app.create_product("Blue Pencil", "2.00", Some(1)).await;
    let path = format!("/products/edit/{}", product.id);

    let fields: Vec<_> = blue_pencil("")
        .into_iter()
        .filter(|(name, _)| *name != "id")
        .map(|(name, value)| if name == "name" { (name, "Red Pencil") } else { (name, value) })
        .collect();
    let response = app.submit(&path, &fields).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(app.products().await[0].name, "Red Pencil");
}

#[tokio::test]
async fn test_edit_with_mismatched_id_is_not_found() {
    let app = TestApp::new().await;
    let product = app.create_product("Blue Pencil", "2.00", Some(1)).await;

    let response = app
        .submit(&format!("/products/edit/{}", product.id), &blue_pencil("999"))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.products().await[0].name, "Blue Pencil");
}

#[tokio::test]
async fn test_delete_confirmation_removes_product() {
    let app = TestApp::new().await;
    let product = app.create_product("Blue Pencil", "2.00", Some(1)).await;
    let path = format!("/products/delete/{}", product.id);

    let confirm = app.request("GET", &path, None).await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert!(confirm.text.contains("Are you sure"));

    let id = product.id.to_string();
    let response = app.submit(&path, &[("id", id.as_str())]).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert!(app.products().await.is_empty());
}

#[tokio::test]
async fn test_delete_confirmation_of_missing_product_is_server_error() {
    let app = TestApp::new().await;

    let page = app.request("GET", "/products/delete/9", None).await;
    assert_eq!(page.status, StatusCode::NOT_FOUND);

    let response = app.submit("/products/delete/9", &[("id", "9")]).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}
